//! # API Error Type
//!
//! Unified error type for session commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in UPI Invoice                            │
//! │                                                                         │
//! │  generate_qr()                                                          │
//! │         │                                                               │
//! │         ├── Unpayable?  ─── CoreError::Unpayable ──────┐                │
//! │         │                                              ▼                │
//! │         ├── Too long?   ─── QrError::Encoding ──────► ApiError ───────► │
//! │         │                                              ▲                │
//! │         ├── Disk full?  ─── QrError::Io ───────────────┘                │
//! │         │                                                               │
//! │         └── Success ──────────────────────────────────────────────────► │
//! │                                                                         │
//! │  Stray keystrokes are filtered, never errors. Share problems are a     │
//! │  ShareOutcome, never errors. Nothing here ends the session.            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Serialization
//! Errors carry a machine-readable `code` and a human-readable `message`,
//! so a front end can branch on the code and show the message.

use serde::Serialize;
use upi_core::CoreError;
use upi_qr::QrError;

/// API error returned from session commands.
///
/// ```json
/// {
///   "code": "UNPAYABLE",
///   "message": "Enter at least one item with a valid amount greater than 0."
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// The subtotal cannot be requested as a payment
    Unpayable,

    /// The payment link does not fit in a QR symbol
    EncodingError,

    /// Writing the QR image failed
    ExportError,

    /// Anything else
    Internal,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Unpayable { .. } => {
                ApiError::new(ErrorCode::Unpayable, upi_core::UNPAYABLE_MESSAGE)
            }
        }
    }
}

/// Converts QR errors to API errors.
impl From<QrError> for ApiError {
    fn from(err: QrError) -> Self {
        match err {
            QrError::Encoding { .. } => ApiError::new(
                ErrorCode::EncodingError,
                "The payment details are too long to fit in a QR code",
            ),
            QrError::Io(e) => {
                tracing::error!("QR export failed: {}", e);
                ApiError::new(ErrorCode::ExportError, format!("Could not save QR image: {}", e))
            }
            other => {
                tracing::error!("QR operation failed: {}", other);
                ApiError::internal(other.to_string())
            }
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unpayable_maps_to_message() {
        let err: ApiError = CoreError::Unpayable { subtotal: 0.0 }.into();
        assert_eq!(err.code, ErrorCode::Unpayable);
        assert_eq!(err.message, upi_core::UNPAYABLE_MESSAGE);
    }

    #[test]
    fn test_serialized_shape() {
        let err: ApiError = QrError::Encoding {
            len: 9000,
            reason: "data too long".to_string(),
        }
        .into();

        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["code"], "ENCODING_ERROR");
        assert_eq!(
            json["message"],
            "The payment details are too long to fit in a QR code"
        );
    }

    #[test]
    fn test_display_includes_code() {
        let err = ApiError::internal("clipboard busy");
        assert_eq!(err.to_string(), "[Internal] clipboard busy");
    }
}
