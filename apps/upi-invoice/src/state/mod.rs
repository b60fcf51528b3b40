//! # State Module
//!
//! Session state for the invoice form.
//!
//! ## Why Multiple State Types?
//! Each command takes only the state it needs: editing commands never see
//! the QR panel, and export commands never mutate the draft.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                      AppState (one per session)                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                              │                                          │
//! │     ┌───────────────┬────────┴───────┬─────────────────────┐           │
//! │     ▼               ▼                ▼                     ▼            │
//! │  ┌──────────┐ ┌──────────────┐ ┌──────────────┐ ┌──────────────────┐   │
//! │  │AppConfig │ │ InvoiceState │ │   QrState    │ │ share backends   │   │
//! │  │          │ │              │ │              │ │                  │   │
//! │  │ payee id │ │ InvoiceDraft │ │ QrPanel      │ │ ShareTarget      │   │
//! │  │ out dir  │ │              │ │              │ │ Clipboard        │   │
//! │  └──────────┘ └──────────────┘ └──────────────┘ └──────────────────┘   │
//! │                                                                         │
//! │  The session lives on a single event loop; commands borrow what they   │
//! │  need mutably. No Mutex: nothing is shared across threads.             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod invoice;
mod qr;

pub use config::{AppConfig, DEFAULT_PAYEE_ID};
pub use invoice::{InvoiceState, InvoiceView};
pub use qr::{GeneratedArtifact, QrPanel, QrState, QrView};

use upi_qr::{Clipboard, NoNativeShare, ShareTarget, SystemClipboard};

/// Everything one session owns.
pub struct AppState {
    pub config: AppConfig,
    pub invoice: InvoiceState,
    pub qr: QrState,
    pub share_target: Box<dyn ShareTarget>,
    pub clipboard: Box<dyn Clipboard>,
}

impl AppState {
    /// New session using this platform's share/clipboard backends.
    pub fn new(config: AppConfig) -> Self {
        Self::with_share_backends(config, Box::new(NoNativeShare), Box::new(SystemClipboard))
    }

    pub fn with_share_backends(
        config: AppConfig,
        share_target: Box<dyn ShareTarget>,
        clipboard: Box<dyn Clipboard>,
    ) -> Self {
        AppState {
            config,
            invoice: InvoiceState::new(),
            qr: QrState::new(),
            share_target,
            clipboard,
        }
    }
}
