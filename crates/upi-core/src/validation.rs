//! # Validation Module
//!
//! Input filtering and payability rules.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Keystroke: sanitize_decimal()                                         │
//! │  ├── Quantity / price text is filtered, never rejected                 │
//! │  └── "1a2.5.0" ──► "12.50"                                             │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Payability: is_payable()                                              │
//! │  ├── Gates the "Generate" action                                       │
//! │  └── Decides whether `am=` appears in the payment link                 │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Startup: validate_payee_id()                                          │
//! │  └── Configuration must carry a usable payee identifier                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::ValidationError;
use crate::MAX_NOTE_CHARS;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Keystroke Filtering
// =============================================================================

/// Filters raw quantity/price input down to a non-negative decimal.
///
/// ## Rules
/// - ASCII digits are kept
/// - The first `.` is kept, any later `.` is dropped
/// - Everything else (signs, letters, `e`, spaces) is dropped
///
/// The result may still be empty or a lone `"."`; both parse to zero.
///
/// ## Example
/// ```rust
/// use upi_core::validation::sanitize_decimal;
///
/// assert_eq!(sanitize_decimal("12.50"), "12.50");
/// assert_eq!(sanitize_decimal("-1e3"), "13");
/// assert_eq!(sanitize_decimal("1.2.3"), "1.23");
/// assert_eq!(sanitize_decimal("abc"), "");
/// ```
pub fn sanitize_decimal(raw: &str) -> String {
    let mut seen_dot = false;
    raw.chars()
        .filter(|c| match *c {
            '0'..='9' => true,
            '.' if !seen_dot => {
                seen_dot = true;
                true
            }
            _ => false,
        })
        .collect()
}

/// Parses filtered field text, coercing anything unusable to zero.
///
/// Empty text, a lone `"."`, and values that overflow to infinity all
/// count as zero.
pub fn parse_decimal_or_zero(text: &str) -> f64 {
    match text.trim().parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 => value,
        _ => 0.0,
    }
}

// =============================================================================
// Payability
// =============================================================================

/// Whether a subtotal can be requested as a payment.
///
/// True iff the value is finite and strictly positive.
///
/// ## Example
/// ```rust
/// use upi_core::validation::is_payable;
///
/// assert!(is_payable(99.99));
/// assert!(!is_payable(0.0));
/// assert!(!is_payable(-5.0));
/// assert!(!is_payable(f64::NAN));
/// assert!(!is_payable(f64::INFINITY));
/// ```
pub fn is_payable(subtotal: f64) -> bool {
    subtotal.is_finite() && subtotal > 0.0
}

// =============================================================================
// Text Rules
// =============================================================================

/// Truncates a note to its first [`MAX_NOTE_CHARS`] characters.
///
/// Counts Unicode scalar values, so a multi-byte character is never split.
pub fn truncate_note(note: &str) -> &str {
    match note.char_indices().nth(MAX_NOTE_CHARS) {
        Some((byte_index, _)) => &note[..byte_index],
        None => note,
    }
}

/// Validates the payee identifier (VPA) supplied at startup.
///
/// ## Rules
/// - Must not be blank
/// - Must not contain whitespace
///
/// Reachability and handle format are not checked; the payer's UPI app
/// does that when the link is opened.
pub fn validate_payee_id(id: &str) -> ValidationResult<()> {
    if id.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "payee id".to_string(),
        });
    }

    if id.chars().any(char::is_whitespace) {
        return Err(ValidationError::InvalidFormat {
            field: "payee id".to_string(),
            reason: "must not contain whitespace".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
