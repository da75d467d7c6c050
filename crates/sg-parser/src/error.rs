//! Sar parsing error types.

use thiserror::Error;

/// Errors that abort parsing of a single sar file.
///
/// None of these are fatal to a batch: the batch driver records the error
/// against the file and moves on.
#[derive(Debug, Error)]
pub enum SarError {
    #[error("unsupported kernel: {0}")]
    UnsupportedKernel(String),

    #[error("malformed header: {0}")]
    MalformedHeader(String),

    #[error("malformed row on line {line}: {message}")]
    MalformedRow { line: usize, message: String },

    #[error("invalid file range: {0}")]
    InvalidRange(String),

    #[error("file not found: {0}")]
    NotFound(String),

    #[error("permission denied: {0}")]
    PermissionDenied(String),

    #[error("I/O error: {0}")]
    Io(String),
}

impl SarError {
    pub(crate) fn row(line: usize, message: impl Into<String>) -> Self {
        Self::MalformedRow {
            line,
            message: message.into(),
        }
    }
}

/// Convenience alias for sar parsing results.
pub type SarResult<T> = Result<T, SarError>;
