//! # QR Errors
//!
//! Failures while encoding or exporting a QR image.
//!
//! None of these are fatal. The session layer logs them and keeps whatever
//! it was showing before.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum QrError {
    /// The data does not fit the symbol (too long for any QR version at the
    /// chosen error-correction level).
    #[error("Cannot encode {len} bytes as QR: {reason}")]
    Encoding { len: usize, reason: String },

    /// PNG encoding failed.
    #[error("Image encoding failed: {0}")]
    Image(String),

    /// The blocking encode task panicked or was cancelled.
    #[error("Encoding task failed: {0}")]
    Task(String),

    /// Writing the exported file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The platform share sheet rejected or aborted the share.
    #[error("Share failed: {0}")]
    Share(String),

    /// No clipboard was reachable or the write failed.
    #[error("Clipboard write failed: {0}")]
    Clipboard(String),
}

impl From<image::ImageError> for QrError {
    fn from(err: image::ImageError) -> Self {
        QrError::Image(err.to_string())
    }
}

impl From<tokio::task::JoinError> for QrError {
    fn from(err: tokio::task::JoinError) -> Self {
        QrError::Task(err.to_string())
    }
}

/// Convenience type alias for Results with QrError.
pub type QrResult<T> = Result<T, QrError>;
