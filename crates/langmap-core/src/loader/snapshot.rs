// crates/langmap-core/src/loader/snapshot.rs
//! Binary snapshots of a built directory.
//!
//! A snapshot is the bincode encoding of [`CountryDirectory`], gzip-wrapped
//! when the file name ends in `.gz`. Loading one skips JSON parsing and
//! language resolution entirely.
use super::common_io;
use crate::error::Result;
use crate::model::{CountryDirectory, SNAPSHOT_SUFFIX};
use bincode::Options;
use flate2::write::GzEncoder;
use flate2::Compression;
use std::fs::{self, File};
use std::io::{BufWriter, Read, Write};
use std::path::Path;

/// Upper bound for decoding; the real table is a few dozen KiB.
const SNAPSHOT_LIMIT: u64 = 64 * 1024 * 1024;

impl CountryDirectory {
    /// Writes the directory as a snapshot.
    pub fn save_as(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let mut writer = BufWriter::new(File::create(path)?);

        if common_io::is_gzip(path) {
            let mut encoder = GzEncoder::new(&mut writer, Compression::default());
            snapshot_options().serialize_into(&mut encoder, self)?;
            encoder.finish()?;
        } else {
            snapshot_options().serialize_into(&mut writer, self)?;
        }
        writer.flush()?;

        tracing::debug!(path = %path.display(), records = self.len(), "snapshot written");
        Ok(())
    }

    /// Reads a snapshot written by [`CountryDirectory::save_as`].
    pub fn load_snapshot(path: impl AsRef<Path>) -> Result<Self> {
        let mut stream = common_io::open_stream(path.as_ref())?;
        let mut data = Vec::new();
        stream.read_to_end(&mut data)?;
        Self::from_snapshot_bytes(&data)
    }

    pub fn from_snapshot_bytes(data: &[u8]) -> Result<Self> {
        Ok(snapshot_options().deserialize(data)?)
    }

    /// **Smart Load:** uses the snapshot next to `source` when it is at
    /// least as new as the source, otherwise builds from `source` and
    /// refreshes the snapshot.
    ///
    /// `cache` overrides the snapshot location (default:
    /// `<source>.dir.bin`). Failing to write the snapshot is logged, not
    /// returned.
    pub fn load_cached(source: impl AsRef<Path>, cache: Option<&Path>) -> Result<Self> {
        let source = source.as_ref();
        let cache_path = cache
            .map(Path::to_path_buf)
            .unwrap_or_else(|| common_io::get_cache_path(source, SNAPSHOT_SUFFIX));

        if is_cache_fresh(source, &cache_path) {
            match Self::load_snapshot(&cache_path) {
                Ok(dir) => {
                    tracing::debug!(path = %cache_path.display(), "using snapshot");
                    return Ok(dir);
                }
                Err(e) => {
                    tracing::warn!(path = %cache_path.display(), error = %e, "unreadable snapshot, rebuilding");
                }
            }
        }

        let dir = Self::load_from_path(source)?;

        if let Err(e) = dir.save_as(&cache_path) {
            tracing::warn!(path = %cache_path.display(), error = %e, "could not write snapshot");
        }
        Ok(dir)
    }
}

fn snapshot_options() -> impl Options {
    bincode::DefaultOptions::new().with_limit(SNAPSHOT_LIMIT)
}

fn is_cache_fresh(source: &Path, cache: &Path) -> bool {
    let cache_time = match fs::metadata(cache).and_then(|m| m.modified()) {
        Ok(t) => t,
        Err(_) => return false,
    };
    match fs::metadata(source).and_then(|m| m.modified()) {
        Ok(source_time) => source_time <= cache_time,
        Err(_) => false,
    }
}
