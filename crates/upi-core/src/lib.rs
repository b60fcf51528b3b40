//! # upi-core: Pure Invoice Logic for UPI Invoice
//!
//! This crate is the **heart** of UPI Invoice. It turns a user-edited list of
//! invoice lines into a canonical UPI payment link, with zero I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        UPI Invoice Pipeline                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Presentation (form / CLI)                       │   │
//! │  │   edit item ──► add/remove ──► Generate ──► Download / Share    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ session commands                       │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ upi-core (THIS CRATE) ★                         │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌────────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │  invoice  │─►│ validation │─►│    upi    │  │   money   │  │   │
//! │  │   │ LineItem  │  │ is_payable │  │ deep link │  │  ₹ format │  │   │
//! │  │   │ subtotal  │  │ sanitize   │  │ builder   │  │           │  │   │
//! │  │   └───────────┘  └────────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO IMAGES • NO CLIPBOARD • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ upi://pay?... string                   │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 upi-qr (QR encoding & export)                   │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`invoice`] - Line-item store and derived subtotal
//! - [`validation`] - Payability check and keystroke filtering
//! - [`upi`] - UPI deep-link builder
//! - [`money`] - Rupee display formatting
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use upi_core::{InvoiceDraft, LineField, PayeeId, PaymentRequest};
//!
//! let payee = PayeeId::new("shop@upi").unwrap();
//! let mut draft = InvoiceDraft::new();
//! draft.update_item(0, LineField::Quantity, "2");
//! draft.update_item(0, LineField::UnitPrice, "74.75");
//!
//! let request = PaymentRequest::from_draft(&payee, &draft);
//! assert_eq!(
//!     request.to_uri(),
//!     "upi://pay?pa=shop%40upi&pn=Payment&cu=INR&am=149.50&tn=Invoice%20Payment"
//! );
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod invoice;
pub mod money;
pub mod upi;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ValidationError};
pub use invoice::{InvoiceDraft, LineField, LineItem};
pub use money::{format_inr, Money};
pub use upi::{build_upi_uri, PayeeId, PaymentRequest};
pub use validation::{is_payable, sanitize_decimal};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// ISO 4217 code of the only supported currency.
pub const CURRENCY_CODE: &str = "INR";

/// Maximum characters of the transaction note carried in the payment link.
///
/// Fixed for compatibility with UPI apps that reject or clip longer notes.
pub const MAX_NOTE_CHARS: usize = 80;

/// Payer name used when the form leaves it blank.
pub const DEFAULT_PAYER_NAME: &str = "Payment";

/// Transaction note used when the form leaves it blank.
pub const DEFAULT_NOTE: &str = "Invoice Payment";

/// Message shown next to the disabled "Generate" action.
pub const UNPAYABLE_MESSAGE: &str = "Enter at least one item with a valid amount greater than 0.";
