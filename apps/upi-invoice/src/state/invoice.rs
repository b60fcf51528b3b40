//! # Invoice State
//!
//! The live, reactive side of the form: the draft plus everything derived
//! from it.
//!
//! ## Reactive vs Frozen
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  InvoiceState (this file)          QrState (qr.rs)                      │
//! │  ─────────────────────────         ─────────────────────                │
//! │  every edit changes it             changes only on "Generate"           │
//! │  subtotal / link re-derived        holds a frozen snapshot              │
//! │  on each read                      of link + image                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use upi_core::{format_inr, InvoiceDraft, LineItem, PayeeId, PaymentRequest, UNPAYABLE_MESSAGE};

/// Owns the invoice draft for one session.
///
/// Starting a new session (a fresh `InvoiceState`) is the only reset.
#[derive(Debug, Clone, Default)]
pub struct InvoiceState {
    draft: InvoiceDraft,
}

impl InvoiceState {
    /// Creates a state with a fresh one-row draft.
    pub fn new() -> Self {
        InvoiceState {
            draft: InvoiceDraft::new(),
        }
    }

    pub fn draft(&self) -> &InvoiceDraft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut InvoiceDraft {
        &mut self.draft
    }

    /// Payment request for the draft as it is right now.
    pub fn payment_request(&self, payee: &PayeeId) -> PaymentRequest {
        PaymentRequest::from_draft(payee, &self.draft)
    }

    /// The live "open in UPI app" link.
    pub fn payment_uri(&self, payee: &PayeeId) -> String {
        self.payment_request(payee).to_uri()
    }
}

/// What the presentation layer renders for the form.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceView {
    pub items: Vec<LineItem>,
    pub payer_name: String,
    pub note: String,
    pub subtotal: f64,

    /// Subtotal formatted for display, e.g. `₹1,499.00`
    pub subtotal_display: String,

    /// Whether "Generate" is enabled
    pub payable: bool,

    /// Explanation shown while "Generate" is disabled
    pub unpayable_message: Option<String>,

    pub payee_id: String,

    /// Live payment link
    pub payment_uri: String,
}

impl InvoiceView {
    pub fn new(state: &InvoiceState, payee: &PayeeId) -> Self {
        let draft = state.draft();
        let subtotal = draft.subtotal();
        let payable = draft.is_payable();

        InvoiceView {
            items: draft.items().to_vec(),
            payer_name: draft.payer_name.clone(),
            note: draft.note.clone(),
            subtotal,
            subtotal_display: format_inr(subtotal),
            payable,
            unpayable_message: (!payable).then(|| UNPAYABLE_MESSAGE.to_string()),
            payee_id: payee.to_string(),
            payment_uri: state.payment_uri(payee),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use upi_core::LineField;

    #[test]
    fn test_blank_state_view() {
        let payee = PayeeId::new("shop@upi").unwrap();
        let view = InvoiceView::new(&InvoiceState::new(), &payee);

        assert_eq!(view.items.len(), 1);
        assert_eq!(view.subtotal_display, "₹0.00");
        assert!(!view.payable);
        assert_eq!(view.unpayable_message.as_deref(), Some(UNPAYABLE_MESSAGE));
        assert_eq!(
            view.payment_uri,
            "upi://pay?pa=shop%40upi&pn=Payment&cu=INR&tn=Invoice%20Payment"
        );
    }

    #[test]
    fn test_view_tracks_edits() {
        let payee = PayeeId::new("shop@upi").unwrap();
        let mut state = InvoiceState::new();
        state.draft_mut().update_item(0, LineField::UnitPrice, "1499");

        let view = InvoiceView::new(&state, &payee);
        assert!(view.payable);
        assert_eq!(view.unpayable_message, None);
        assert_eq!(view.subtotal_display, "₹1,499.00");
        assert!(view.payment_uri.contains("&am=1499.00&"));
    }
}
