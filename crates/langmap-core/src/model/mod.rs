// crates/langmap-core/src/model/mod.rs
pub mod convert;
pub mod directory;
pub mod search;

pub use directory::{CountryDirectory, CountryRecord, MapMarker, UNKNOWN_LANGUAGE};

/// Suffix appended to a dataset path to name its snapshot cache.
pub const SNAPSHOT_SUFFIX: &str = "dir.bin";
