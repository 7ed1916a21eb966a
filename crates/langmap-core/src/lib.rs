// crates/langmap-core/src/lib.rs
//! langmap-core
//! ============
//!
//! A country directory with primary languages and map markers, plus the
//! seam to a remote text-generation service that answers language and
//! translation questions.
//!
//! ```rust
//! use langmap_core::{CountryDirectory, CountrySearch};
//!
//! let dir = CountryDirectory::build();
//! let pk = dir.find_by_name("pakistan").unwrap();
//! assert_eq!(pk.primary_language(), "Urdu");
//!
//! let marker = dir.marker_for(pk);
//! assert_eq!(marker.label, "Pakistan - Language: Urdu");
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod assistant;
pub mod common;
pub mod error;
pub mod language;
pub mod loader;
pub mod model;
#[doc(hidden)]
pub mod raw;
#[cfg(feature = "remote")]
pub mod remote;
pub mod text;
pub mod traits;

// Re-exports
pub use crate::assistant::{Agent, Assistant, TextGenerator};
pub use crate::common::DirectoryStats;
pub use crate::error::{LangMapError, Result};
pub use crate::language::LanguageTable;
pub use crate::model::{CountryDirectory, CountryRecord, MapMarker, UNKNOWN_LANGUAGE};
pub use crate::traits::{CountrySearch, NameMatch};

#[cfg(feature = "remote")]
pub use crate::remote::{ChatCompletionsClient, RemoteConfig};
