use std::path::PathBuf;
use thiserror::Error;

/// Application-wide error type - single point of truth
#[derive(Error, Debug)]
pub enum AppError {
    /// Corpus file could not be opened
    #[error("File unavailable: {}: {source}", path.display())]
    FileUnavailable {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A full pass over the corpus produced zero valid samples
    #[error("No samples found in {}", path.display())]
    NoSamplesFound { path: PathBuf },

    /// File I/O operations
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid byte sequence under the strict decoding policy
    #[error("Invalid UTF-8 at line {line}: {reason}")]
    InvalidEncoding { line: u64, reason: String },

    /// Data validation/serialisation
    #[error("Invalid data: {0}")]
    InvalidData(String),

    /// Image rendering errors
    #[error("Plot error: {0}")]
    Plot(String),
}

/// Application-wide result type - single point of truth
pub type AppResult<T> = Result<T, AppError>;

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::InvalidData(format!("JSON error: {}", err))
    }
}
