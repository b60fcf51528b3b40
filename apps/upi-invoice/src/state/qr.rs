//! # QR State
//!
//! The QR preview panel: either still a draft (nothing generated) or
//! holding a frozen artifact.
//!
//! ## Panel Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  ┌──────────┐   generate_qr    ┌───────────────────────────┐            │
//! │  │  Draft   │ ───────────────► │ Generated(artifact #1)    │            │
//! │  └──────────┘                  └─────────────┬─────────────┘            │
//! │                                              │ generate_qr              │
//! │       edits never move the panel             ▼                          │
//! │       (artifact may go stale)  ┌───────────────────────────┐            │
//! │                                │ Generated(artifact #2)    │            │
//! │                                └───────────────────────────┘            │
//! │                                                                         │
//! │  A failed generation leaves the panel exactly as it was.               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use serde::Serialize;
use upi_core::PaymentRequest;
use upi_qr::EncodedQr;
use uuid::Uuid;

/// A generated QR together with the request it was generated from.
#[derive(Debug, Clone)]
pub struct GeneratedArtifact {
    pub request: PaymentRequest,
    pub qr: EncodedQr,
}

/// The two states of the preview panel.
#[derive(Debug, Clone, Default)]
pub enum QrPanel {
    /// Nothing generated yet; the preview shows a placeholder.
    #[default]
    Draft,

    /// Snapshot taken at generation time. Not updated by later edits.
    Generated(GeneratedArtifact),
}

/// Owns the preview panel for one session.
#[derive(Debug, Clone, Default)]
pub struct QrState {
    panel: QrPanel,
}

impl QrState {
    pub fn new() -> Self {
        QrState::default()
    }

    pub fn panel(&self) -> &QrPanel {
        &self.panel
    }

    /// The current image, if one has been generated.
    pub fn artifact(&self) -> Option<&EncodedQr> {
        match &self.panel {
            QrPanel::Draft => None,
            QrPanel::Generated(generated) => Some(&generated.qr),
        }
    }

    /// Shows a newly generated artifact, replacing any previous one.
    pub fn show(&mut self, generated: GeneratedArtifact) {
        self.panel = QrPanel::Generated(generated);
    }

    /// Whether the shown image encodes a different link than `live_uri`.
    ///
    /// Always `false` while nothing has been generated.
    pub fn is_stale(&self, live_uri: &str) -> bool {
        self.artifact().is_some_and(|qr| qr.uri() != live_uri)
    }
}

/// Preview panel status for the presentation layer.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase", tag = "status")]
pub enum QrView {
    /// Placeholder: "QR will appear here after generation"
    Draft,

    #[serde(rename_all = "camelCase")]
    Generated {
        artifact_id: Uuid,
        generated_at: DateTime<Utc>,
        uri: String,
        size_px: u32,

        /// Amount frozen into the image, if any
        amount: Option<f64>,

        /// The form changed since this image was generated
        stale: bool,
    },
}

impl QrView {
    pub fn new(state: &QrState, live_uri: &str) -> Self {
        match state.panel() {
            QrPanel::Draft => QrView::Draft,
            QrPanel::Generated(generated) => QrView::Generated {
                artifact_id: generated.qr.id(),
                generated_at: generated.qr.generated_at(),
                uri: generated.qr.uri().to_string(),
                size_px: generated.qr.size_px(),
                amount: generated.request.amount,
                stale: state.is_stale(live_uri),
            },
        }
    }
}
