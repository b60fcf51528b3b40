//! # Command Line Front End
//!
//! Turns flags into the same command calls a GUI would make, then prints
//! the resulting snapshot.
//!
//! ```text
//! upi-invoice --item "Masala chai:2:15" --item "Samosa:3:12.5" \
//!             --payer "Asha Rao" --note "Table 4" --share
//! ```

use std::path::PathBuf;
use std::str::FromStr;

use clap::Parser;
use serde::Serialize;
use upi_core::format_inr;

use crate::commands::qr::ShareResponse;
use crate::state::{InvoiceView, QrView};

#[derive(Parser, Debug)]
#[command(name = "upi-invoice", version, about = "Build an invoice and a UPI payment QR")]
pub struct Cli {
    /// Line item as NAME:QTY:PRICE (repeatable, kept in order)
    #[arg(long = "item", value_name = "NAME:QTY:PRICE")]
    pub items: Vec<ItemArg>,

    /// Payer name shown in the payment app
    #[arg(long)]
    pub payer: Option<String>,

    /// Payment note (first 80 characters are used)
    #[arg(long)]
    pub note: Option<String>,

    /// Payee VPA, overrides UPI_INVOICE_PAYEE_ID
    #[arg(long)]
    pub payee: Option<String>,

    /// Directory for upi-invoice-qr.png, overrides UPI_INVOICE_OUTPUT_DIR
    #[arg(long, value_name = "DIR")]
    pub out: Option<PathBuf>,

    /// Offer the QR to the share sheet (falls back to the clipboard)
    #[arg(long)]
    pub share: bool,

    /// Print the snapshot as JSON instead of text
    #[arg(long)]
    pub json: bool,
}

/// One `--item` value.
///
/// Split from the right, so the name itself may contain `:`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemArg {
    pub name: String,
    pub quantity: String,
    pub unit_price: String,
}

impl FromStr for ItemArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.rsplitn(3, ':');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(price), Some(qty), Some(name)) => Ok(ItemArg {
                name: name.to_string(),
                quantity: qty.to_string(),
                unit_price: price.to_string(),
            }),
            _ => Err(format!("expected NAME:QTY:PRICE, got '{}'", s)),
        }
    }
}

/// Everything one run produced.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RunReport {
    pub invoice: InvoiceView,
    pub qr: QrView,
    pub saved_to: Option<PathBuf>,
    pub share: Option<ShareResponse>,
}

impl RunReport {
    /// Plain text rendering for a terminal.
    pub fn to_text(&self) -> String {
        let mut out = String::from("Invoice\n");

        for (i, item) in self.invoice.items.iter().enumerate() {
            let name = if item.name.trim().is_empty() { "(unnamed)" } else { item.name.as_str() };
            out.push_str(&format!(
                "  {:>2}. {:<24} {:>6} x {:<10} {:>14}\n",
                i + 1,
                name,
                item.quantity,
                item.unit_price,
                format_inr(item.line_total()),
            ));
        }

        out.push_str(&format!("Subtotal: {}\n", self.invoice.subtotal_display));
        if let Some(message) = &self.invoice.unpayable_message {
            out.push_str(message);
            out.push('\n');
        }
        out.push_str(&format!("Pay link: {}\n", self.invoice.payment_uri));

        if let Some(path) = &self.saved_to {
            out.push_str(&format!("QR saved to: {}\n", path.display()));
        }
        if let Some(notice) = self.share.as_ref().and_then(|s| s.notice.as_deref()) {
            out.push_str(notice);
            out.push('\n');
        }

        out
    }
}
