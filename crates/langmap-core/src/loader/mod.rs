// crates/langmap-core/src/loader/mod.rs

//! # Data Loader
//!
//! Handles the physical layer (embedded bytes, files, decompression) and
//! delegates to [`crate::model::convert`] for building the directory.

use crate::error::{LangMapError, Result};
use crate::language::LanguageTable;
use crate::model::{convert, CountryDirectory};
use crate::raw::CountriesRaw;
use once_cell::sync::OnceCell;
use std::io::Read;
use std::path::{Path, PathBuf};

pub mod common_io;
mod snapshot;

/// The reference table compiled into the crate.
static BUNDLED_DATASET: &str = include_str!("../../data/countries.json");

static SHARED_DIRECTORY: OnceCell<CountryDirectory> = OnceCell::new();

impl CountryDirectory {
    /// Builds a fresh directory from the bundled reference table.
    ///
    /// The bundled table is part of the crate and is checked by the test
    /// suite, so it always parses. Should it ever fail to, the defect is
    /// logged and an empty directory is returned.
    pub fn build() -> Self {
        match Self::from_json_str(BUNDLED_DATASET, &LanguageTable::iso639_1()) {
            Ok(dir) => dir,
            Err(e) => {
                tracing::error!(error = %e, "bundled reference table is malformed");
                CountryDirectory::default()
            }
        }
    }

    /// A process-wide directory, built on first use.
    ///
    /// Nothing requires this; callers can just as well [`build`](Self::build)
    /// once and pass the value around.
    pub fn shared() -> &'static CountryDirectory {
        SHARED_DIRECTORY.get_or_init(Self::build)
    }

    /// Parses a JSON reference table held in memory.
    pub fn from_json_str(json: &str, languages: &LanguageTable) -> Result<Self> {
        let raw: CountriesRaw = serde_json::from_str(json)?;
        Ok(convert::from_raw(raw, languages))
    }

    pub fn from_json_reader(reader: impl Read, languages: &LanguageTable) -> Result<Self> {
        let raw: CountriesRaw = serde_json::from_reader(reader)?;
        Ok(convert::from_raw(raw, languages))
    }

    /// **Standard Loader:** reads a JSON reference table from disk.
    ///
    /// `*.gz` files are decompressed on the fly. Languages resolve through
    /// the built-in ISO 639-1 table.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let reader = common_io::open_stream(path)?;
        let dir = Self::from_json_reader(reader, &LanguageTable::iso639_1())?;
        if dir.is_empty() {
            return Err(LangMapError::InvalidData(format!(
                "no usable country entries in {}",
                path.display()
            )));
        }
        tracing::info!(path = %path.display(), records = dir.len(), "reference table loaded");
        Ok(dir)
    }

    /// Where the bundled table lives in the source tree.
    pub fn default_data_path() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("data")
            .join("countries.json")
    }
}
