// crates/langmap-core/src/error.rs
use thiserror::Error;

/// Errors surfaced by `langmap-core`.
///
/// Per-entry defects in the reference dataset are not errors: they are
/// resolved to default values while the directory is built. What remains
/// here are startup failures (dataset unreadable) and failures of the
/// remote text-generation service.
#[derive(Debug, Error)]
pub enum LangMapError {
    #[error("not found: {0}")]
    NotFound(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("snapshot encoding error: {0}")]
    Bincode(#[from] bincode::Error),

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("GEMINI_API_KEY is not set. Define it in the environment or a .env file.")]
    MissingApiKey,

    #[cfg(feature = "remote")]
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("text-generation service returned {status}: {body}")]
    Remote { status: u16, body: String },
}

pub type Result<T> = std::result::Result<T, LangMapError>;
