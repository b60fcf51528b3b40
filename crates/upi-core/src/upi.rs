//! # UPI Deep Link
//!
//! Serializes an invoice into the `upi://pay` link that UPI apps scan.
//!
//! ## Wire Format
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  upi://pay?pa=<payee>&pn=<name>&cu=INR&am=<amount>&tn=<note>            │
//! │                                                                         │
//! │  pa  payee VPA, fixed per process                                      │
//! │  pn  payer name, "Payment" when blank                                  │
//! │  cu  always INR                                                        │
//! │  am  two decimals, ONLY when the subtotal is payable                   │
//! │  tn  trimmed note (or "Invoice Payment"), first 80 characters          │
//! │                                                                         │
//! │  Order is fixed. Values are percent-encoded (space → %20, @ → %40).    │
//! │  Without `am`, the payer's app asks for the amount by hand.            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::invoice::InvoiceDraft;
use crate::money::Money;
use crate::validation::{is_payable, truncate_note, validate_payee_id, ValidationResult};
use crate::{CURRENCY_CODE, DEFAULT_NOTE, DEFAULT_PAYER_NAME};

/// Scheme and path of every payment link.
pub const UPI_PAY_PREFIX: &str = "upi://pay?";

// =============================================================================
// Payee
// =============================================================================

/// The payee's virtual payment address, validated once at startup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PayeeId(String);

impl PayeeId {
    /// Validates and wraps a payee identifier.
    pub fn new(id: impl Into<String>) -> ValidationResult<Self> {
        let id = id.into();
        validate_payee_id(&id)?;
        Ok(PayeeId(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PayeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// =============================================================================
// Payment Request
// =============================================================================

/// Everything that goes into one payment link, defaults already applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct PaymentRequest {
    pub payee_id: String,
    pub payer_name: String,
    pub currency: String,

    /// Present only for a payable subtotal
    pub amount: Option<f64>,

    /// At most 80 characters
    pub note: String,
}

impl PaymentRequest {
    /// Applies defaults, the payability rule and note truncation.
    pub fn new(payee: &PayeeId, payer_name: &str, note: &str, subtotal: f64) -> Self {
        // Blank means "not given"; anything else is sent as typed
        let payer_name = if payer_name.trim().is_empty() {
            DEFAULT_PAYER_NAME
        } else {
            payer_name
        };
        let note = match note.trim() {
            "" => DEFAULT_NOTE,
            trimmed => truncate_note(trimmed),
        };

        PaymentRequest {
            payee_id: payee.as_str().to_string(),
            payer_name: payer_name.to_string(),
            currency: CURRENCY_CODE.to_string(),
            amount: is_payable(subtotal).then_some(subtotal),
            note: note.to_string(),
        }
    }

    /// Builds the request for the current state of a draft.
    pub fn from_draft(payee: &PayeeId, draft: &InvoiceDraft) -> Self {
        Self::new(payee, &draft.payer_name, &draft.note, draft.subtotal())
    }

    /// The `am` value: exactly two decimals, rounded to the nearest paisa
    /// with ties going up (`10.125` → `10.13`), matching the displayed
    /// subtotal.
    pub fn formatted_amount(&self) -> Option<String> {
        self.amount.map(|amount| match Money::from_rupees(amount) {
            Some(money) => money.to_decimal_string(),
            None => format!("{:.2}", amount),
        })
    }

    /// Serializes to the `upi://pay?...` link.
    pub fn to_uri(&self) -> String {
        let mut params: Vec<(&str, String)> = vec![
            ("pa", self.payee_id.clone()),
            ("pn", self.payer_name.clone()),
            ("cu", self.currency.clone()),
        ];
        if let Some(amount) = self.formatted_amount() {
            params.push(("am", amount));
        }
        params.push(("tn", self.note.clone()));

        let query = params
            .iter()
            .map(|(key, value)| format!("{}={}", key, urlencoding::encode(value)))
            .collect::<Vec<_>>()
            .join("&");

        format!("{}{}", UPI_PAY_PREFIX, query)
    }
}

impl fmt::Display for PaymentRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_uri())
    }
}

/// Builds the payment link for the given form values.
///
/// Pure: the same inputs always produce the same string.
///
/// ## Example
/// ```rust
/// use upi_core::{build_upi_uri, PayeeId};
///
/// let payee = PayeeId::new("shop@upi").unwrap();
/// assert_eq!(
///     build_upi_uri(&payee, "Asha", "", 0.0),
///     "upi://pay?pa=shop%40upi&pn=Asha&cu=INR&tn=Invoice%20Payment"
/// );
/// ```
pub fn build_upi_uri(payee: &PayeeId, payer_name: &str, note: &str, subtotal: f64) -> String {
    PaymentRequest::new(payee, payer_name, note, subtotal).to_uri()
}
