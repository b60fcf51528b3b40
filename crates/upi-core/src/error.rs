//! # Error Types
//!
//! Domain-specific error types for upi-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  upi-core errors (this file)                                           │
//! │  ├── CoreError        - Business rule failures (unpayable invoice)     │
//! │  └── ValidationError  - Startup configuration failures                 │
//! │                                                                         │
//! │  upi-qr errors (separate crate)                                        │
//! │  └── QrError          - Encoding and export failures                   │
//! │                                                                         │
//! │  Session errors (in app)                                               │
//! │  └── ApiError         - What the presentation layer sees               │
//! │                                                                         │
//! │  Flow: CoreError → ApiError ◄── QrError                                │
//! │        ValidationError stops startup (payee id), never reaches ApiError │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## What Is NOT an Error Here
//! Stray keystrokes in quantity/price fields are filtered silently by
//! [`crate::validation::sanitize_decimal`] and never reach this module.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The invoice subtotal cannot be requested as a payment.
    ///
    /// ## When This Occurs
    /// - Every line is blank or priced at zero
    /// - The subtotal overflowed to infinity
    ///
    /// The UI normally prevents this by disabling "Generate"; callers that
    /// bypass the UI get this error instead of a QR.
    #[error("Invoice is not payable: subtotal {subtotal}")]
    Unpayable { subtotal: f64 },
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Invalid format.
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
