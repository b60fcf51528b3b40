//! # Commands Module
//!
//! One function per user action. The CLI calls these directly; a GUI shell
//! would register the same functions as its command handlers.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (exports)
//! ├── invoice.rs  ◄─── Line item edits, payer name, note
//! ├── qr.rs       ◄─── Generate, download, share
//! └── config.rs   ◄─── Configuration retrieval
//! ```
//!
//! ## State Injection
//! Each command declares only the state it needs:
//! ```rust,ignore
//! // Only reads config and edits the draft
//! fn update_item(config: &AppConfig, invoice: &mut InvoiceState, ...)
//!
//! // Reads the draft, replaces the panel
//! async fn generate_qr(config: &AppConfig, invoice: &InvoiceState, qr: &mut QrState)
//!
//! // Needs the share backends too
//! async fn share_qr(state: &AppState)
//! ```

pub mod config;
pub mod invoice;
pub mod qr;
