//! # Invoice Commands
//!
//! Edits to the live invoice form. Every command returns the refreshed
//! [`InvoiceView`], so the caller never re-derives totals itself.
//!
//! ## Editing Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  ┌──────────────┐  add_item / update_item / remove_item                 │
//! │  │ One blank row│ ────────────────────────────────────┐                 │
//! │  └──────────────┘                                     ▼                 │
//! │                                      ┌──────────────────────────────┐   │
//! │   set_payer_name / set_note ───────► │ Draft (subtotal, live link)  │   │
//! │                                      └──────────────┬───────────────┘   │
//! │                                                     │ generate_qr       │
//! │                                                     ▼ (qr.rs)           │
//! │                                                                         │
//! │  Keystrokes are filtered, never rejected: "12a.5.0" becomes "12.50".   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use tracing::debug;
use upi_core::LineField;

use crate::state::{AppConfig, InvoiceState, InvoiceView};

/// Gets the current form snapshot.
pub fn get_invoice(config: &AppConfig, invoice: &InvoiceState) -> InvoiceView {
    debug!("get_invoice command");
    InvoiceView::new(invoice, &config.payee_id)
}

/// Appends a blank row (quantity 1, empty name and price).
pub fn add_item(config: &AppConfig, invoice: &mut InvoiceState) -> InvoiceView {
    invoice.draft_mut().add_item();
    debug!(items = invoice.draft().len(), "add_item command");
    InvoiceView::new(invoice, &config.payee_id)
}

/// Removes the row at `index`.
///
/// An out-of-range index leaves the list unchanged; it is not an error.
pub fn remove_item(config: &AppConfig, invoice: &mut InvoiceState, index: usize) -> InvoiceView {
    if invoice.draft_mut().remove_item(index) {
        debug!(index, "remove_item command");
    } else {
        debug!(index, items = invoice.draft().len(), "remove_item ignored: no such row");
    }
    InvoiceView::new(invoice, &config.payee_id)
}

/// Sets one field of the row at `index`.
///
/// ## Behavior
/// - `Name` is stored verbatim
/// - `Quantity` and `UnitPrice` keep only digits and the first `.`
/// - Unknown rows are ignored
pub fn update_item(
    config: &AppConfig,
    invoice: &mut InvoiceState,
    index: usize,
    field: LineField,
    value: &str,
) -> InvoiceView {
    if !invoice.draft_mut().update_item(index, field, value) {
        debug!(index, ?field, "update_item ignored: no such row");
    }
    InvoiceView::new(invoice, &config.payee_id)
}

pub fn set_payer_name(config: &AppConfig, invoice: &mut InvoiceState, name: &str) -> InvoiceView {
    invoice.draft_mut().payer_name = name.to_string();
    InvoiceView::new(invoice, &config.payee_id)
}

pub fn set_note(config: &AppConfig, invoice: &mut InvoiceState, note: &str) -> InvoiceView {
    invoice.draft_mut().note = note.to_string();
    InvoiceView::new(invoice, &config.payee_id)
}
