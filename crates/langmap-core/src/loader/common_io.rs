// crates/langmap-core/src/loader/common_io.rs
use crate::error::{LangMapError, Result};
use flate2::read::GzDecoder;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

/// Whether the path names a gzip file (`*.gz`).
pub fn is_gzip(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("gz"))
}

/// Opens a file, buffers it, and wraps it in a Gzip decoder when the name
/// ends in `.gz`.
pub fn open_stream(path: &Path) -> Result<Box<dyn Read>> {
    let file = File::open(path).map_err(|e| {
        LangMapError::NotFound(format!("Dataset not found at {}: {}", path.display(), e))
    })?;

    let reader = BufReader::new(file);

    if is_gzip(path) {
        Ok(Box::new(GzDecoder::new(reader)))
    } else {
        Ok(Box::new(reader))
    }
}

/// `countries.json.gz` -> `countries.json.gz.<suffix>`
pub fn get_cache_path(source: &Path, suffix: &str) -> PathBuf {
    let filename = source
        .file_name()
        .map(|f| f.to_string_lossy().into_owned())
        .unwrap_or_else(|| "countries".to_string());
    source.with_file_name(format!("{filename}.{suffix}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gzip_detection_uses_extension() {
        assert!(is_gzip(Path::new("data/countries.json.gz")));
        assert!(is_gzip(Path::new("X.GZ")));
        assert!(!is_gzip(Path::new("data/countries.json")));
    }

    #[test]
    fn cache_path_sits_next_to_source() {
        let p = get_cache_path(Path::new("/tmp/data/countries.json"), "dir.bin");
        assert_eq!(p, PathBuf::from("/tmp/data/countries.json.dir.bin"));
    }

    #[test]
    fn missing_file_is_not_found() {
        let err = open_stream(Path::new("/definitely/not/here.json")).err().unwrap();
        assert!(matches!(err, LangMapError::NotFound(_)));
    }
}
