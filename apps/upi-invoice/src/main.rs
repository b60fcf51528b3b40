//! # UPI Invoice Entry Point
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          upi-invoice                                    │
//! │                                                                         │
//! │  main.rs ────► hands over to lib.rs                                     │
//! │  lib.rs ─────► logging, configuration, session run                      │
//! │  commands/ ──► add_item, update_item, generate_qr, download_qr, ...     │
//! │  state/ ─────► AppConfig, InvoiceState, QrState                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

fn main() -> anyhow::Result<()> {
    // The actual setup is in lib.rs for better testability
    upi_invoice::run()
}
