//! # Invoice Draft
//!
//! The ordered line-item store behind the invoice form.
//!
//! ## Draft Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Draft Operations                                     │
//! │                                                                         │
//! │  Form Action              Method                  Draft Change          │
//! │  ───────────              ──────                  ────────────          │
//! │                                                                         │
//! │  Click "Add item" ──────► add_item() ───────────► items.push(blank)    │
//! │                                                                         │
//! │  Type in a field ───────► update_item(i, f, v) ─► items[i].f = v       │
//! │                                                                         │
//! │  Click trash icon ──────► remove_item(i) ───────► items.remove(i)      │
//! │                                                                         │
//! │  Read totals ───────────► subtotal() ───────────► (computed, no cache) │
//! │                                                                         │
//! │  NOTE: The draft stores no derived values. Every read of the subtotal  │
//! │        walks the current items.                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::validation::{is_payable, parse_decimal_or_zero, sanitize_decimal};

/// Editable field of a line item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub enum LineField {
    Name,
    Quantity,
    UnitPrice,
}

/// One row of the invoice.
///
/// ## Design Notes
/// - `quantity` and `unit_price` hold the filtered text the user typed,
///   not parsed numbers. The form shows back exactly what was entered and
///   an empty price stays empty rather than turning into `0`.
/// - Parsing happens on read: anything unusable counts as zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct LineItem {
    /// Free-text description, never validated
    pub name: String,

    /// Quantity as typed (digits and at most one dot)
    pub quantity: String,

    /// Unit price in rupees as typed (digits and at most one dot)
    pub unit_price: String,
}

impl LineItem {
    /// A fresh row: no name, quantity 1, price unset.
    pub fn blank() -> Self {
        LineItem {
            name: String::new(),
            quantity: "1".to_string(),
            unit_price: String::new(),
        }
    }

    /// Parsed quantity, zero when unusable.
    pub fn quantity_value(&self) -> f64 {
        parse_decimal_or_zero(&self.quantity)
    }

    /// Parsed unit price, zero when unusable.
    pub fn unit_price_value(&self) -> f64 {
        parse_decimal_or_zero(&self.unit_price)
    }

    /// Calculates the line total (quantity × unit price).
    pub fn line_total(&self) -> f64 {
        self.quantity_value() * self.unit_price_value()
    }

    fn set(&mut self, field: LineField, value: &str) {
        match field {
            LineField::Name => self.name = value.to_string(),
            LineField::Quantity => self.quantity = sanitize_decimal(value),
            LineField::UnitPrice => self.unit_price = sanitize_decimal(value),
        }
    }
}

impl Default for LineItem {
    fn default() -> Self {
        Self::blank()
    }
}

/// The invoice being edited.
///
/// ## Invariants
/// - Items keep the order they were added in
/// - A new draft starts with exactly one blank item
/// - Nothing derived (subtotal, payability) is stored
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct InvoiceDraft {
    line_items: Vec<LineItem>,

    /// Name shown to the payer's app (`pn`)
    pub payer_name: String,

    /// Message on the payment (`tn`)
    pub note: String,
}

impl InvoiceDraft {
    /// Creates a draft holding one blank item.
    pub fn new() -> Self {
        InvoiceDraft {
            line_items: vec![LineItem::blank()],
            payer_name: String::new(),
            note: String::new(),
        }
    }

    /// Appends a blank item at the end.
    pub fn add_item(&mut self) {
        self.line_items.push(LineItem::blank());
    }

    /// Removes the item at `index`, shifting later items down.
    ///
    /// Returns `false` and changes nothing when `index` is out of range.
    pub fn remove_item(&mut self, index: usize) -> bool {
        if index >= self.line_items.len() {
            return false;
        }
        self.line_items.remove(index);
        true
    }

    /// Replaces one field of the item at `index`.
    ///
    /// Quantity and price input is passed through
    /// [`sanitize_decimal`] first, so stray characters disappear instead of
    /// producing an error. Returns `false` when `index` is out of range.
    ///
    /// ## Example
    /// ```rust
    /// use upi_core::{InvoiceDraft, LineField};
    ///
    /// let mut draft = InvoiceDraft::new();
    /// draft.update_item(0, LineField::UnitPrice, "₹12.5x");
    /// assert_eq!(draft.items()[0].unit_price, "12.5");
    /// assert!(!draft.update_item(7, LineField::Name, "nope"));
    /// ```
    pub fn update_item(&mut self, index: usize, field: LineField, value: &str) -> bool {
        match self.line_items.get_mut(index) {
            Some(item) => {
                item.set(field, value);
                true
            }
            None => false,
        }
    }

    /// The items in display order.
    pub fn items(&self) -> &[LineItem] {
        &self.line_items
    }

    /// Returns the number of items.
    pub fn len(&self) -> usize {
        self.line_items.len()
    }

    /// Checks if every item has been removed.
    pub fn is_empty(&self) -> bool {
        self.line_items.is_empty()
    }

    /// Sum of `quantity × unit price` over all items.
    ///
    /// Unusable fields count as zero. The sum itself can still overflow to
    /// infinity for absurd input; [`is_payable`] rejects that.
    pub fn subtotal(&self) -> f64 {
        self.line_items.iter().map(LineItem::line_total).sum()
    }

    /// Whether the current subtotal can be requested as a payment.
    pub fn is_payable(&self) -> bool {
        is_payable(self.subtotal())
    }

    /// Returns the subtotal, or [`CoreError::Unpayable`] when it cannot be
    /// requested.
    pub fn payable_amount(&self) -> CoreResult<f64> {
        let subtotal = self.subtotal();
        if is_payable(subtotal) {
            Ok(subtotal)
        } else {
            Err(CoreError::Unpayable { subtotal })
        }
    }
}

impl Default for InvoiceDraft {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft_with(rows: &[(&str, &str)]) -> InvoiceDraft {
        let mut draft = InvoiceDraft::new();
        draft.remove_item(0);
        for (i, (qty, price)) in rows.iter().enumerate() {
            draft.add_item();
            draft.update_item(i, LineField::Quantity, qty);
            draft.update_item(i, LineField::UnitPrice, price);
        }
        draft
    }

    #[test]
    fn test_new_draft_has_one_blank_item() {
        let draft = InvoiceDraft::new();
        assert_eq!(draft.len(), 1);
        assert_eq!(draft.items()[0], LineItem::blank());
        assert_eq!(draft.items()[0].quantity, "1");
        assert_eq!(draft.items()[0].unit_price, "");
        assert_eq!(draft.subtotal(), 0.0);
        assert!(!draft.is_payable());
    }

    #[test]
    fn test_subtotal_coerces_missing_price_to_zero() {
        let draft = draft_with(&[("2", "50"), ("1", "")]);
        assert_eq!(draft.subtotal(), 100.0);
    }

    #[test]
    fn test_subtotal_handles_fractional_quantities() {
        let draft = draft_with(&[("1.5", "40"), ("3", "0.5")]);
        assert_eq!(draft.subtotal(), 61.5);
    }

    #[test]
    fn test_subtotal_is_recomputed_after_every_edit() {
        let mut draft = draft_with(&[("2", "50")]);
        assert_eq!(draft.subtotal(), 100.0);

        draft.update_item(0, LineField::Quantity, "3");
        assert_eq!(draft.subtotal(), 150.0);

        draft.remove_item(0);
        assert_eq!(draft.subtotal(), 0.0);
        assert!(draft.is_empty());
    }

    #[test]
    fn test_add_item_appends_blank_at_end() {
        let mut draft = InvoiceDraft::new();
        draft.update_item(0, LineField::Name, "Tea");
        draft.add_item();

        assert_eq!(draft.len(), 2);
        assert_eq!(draft.items()[0].name, "Tea");
        assert_eq!(draft.items()[1], LineItem::blank());
    }

    #[test]
    fn test_remove_item_shifts_later_items() {
        let mut draft = InvoiceDraft::new();
        for (i, name) in ["a", "b", "c"].iter().enumerate() {
            if i > 0 {
                draft.add_item();
            }
            draft.update_item(i, LineField::Name, name);
        }

        assert!(draft.remove_item(1));
        let names: Vec<_> = draft.items().iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["a", "c"]);
    }

    #[test]
    fn test_remove_out_of_range_is_noop() {
        let mut draft = draft_with(&[("2", "50")]);
        let before = draft.clone();

        assert!(!draft.remove_item(1));
        assert!(!draft.remove_item(usize::MAX));
        assert_eq!(draft, before);
    }

    #[test]
    fn test_update_item_touches_one_field() {
        let mut draft = draft_with(&[("2", "50")]);
        draft.update_item(0, LineField::Name, "Coffee");

        let item = &draft.items()[0];
        assert_eq!(item.name, "Coffee");
        assert_eq!(item.quantity, "2");
        assert_eq!(item.unit_price, "50");
    }

    #[test]
    fn test_update_item_filters_numeric_text() {
        let mut draft = InvoiceDraft::new();
        draft.update_item(0, LineField::Quantity, "-2x");
        draft.update_item(0, LineField::UnitPrice, "1e2");

        assert_eq!(draft.items()[0].quantity, "2");
        assert_eq!(draft.items()[0].unit_price, "12");
        assert_eq!(draft.subtotal(), 24.0);
    }

    #[test]
    fn test_name_is_not_filtered() {
        let mut draft = InvoiceDraft::new();
        draft.update_item(0, LineField::Name, "Chai (2 cups) @ ₹10");
        assert_eq!(draft.items()[0].name, "Chai (2 cups) @ ₹10");
    }

    #[test]
    fn test_payable_amount() {
        let draft = draft_with(&[("1", "149.5")]);
        assert_eq!(draft.payable_amount().unwrap(), 149.5);

        let empty = InvoiceDraft::new();
        assert!(matches!(
            empty.payable_amount(),
            Err(CoreError::Unpayable { .. })
        ));
    }

    #[test]
    fn test_overflowing_subtotal_is_unpayable() {
        let huge = format!("1{}", "0".repeat(300));
        let draft = draft_with(&[(huge.as_str(), huge.as_str())]);
        assert!(draft.subtotal().is_infinite());
        assert!(!draft.is_payable());
    }

    #[test]
    fn test_serializes_camel_case() {
        let json = serde_json::to_value(LineItem::blank()).unwrap();
        assert_eq!(json["unitPrice"], "");
        assert_eq!(json["quantity"], "1");
    }
}
