//! # QR Commands
//!
//! Generate, download and share the payment QR.
//!
//! ## Generate Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  generate_qr                                                            │
//! │       │                                                                 │
//! │       ├── subtotal not payable ──► ApiError UNPAYABLE (panel untouched) │
//! │       │                                                                 │
//! │       ├── snapshot PaymentRequest from the live draft                   │
//! │       │                                                                 │
//! │       ├── encode_qr (off the session task)                              │
//! │       │        │                                                        │
//! │       │        ├── too long ──► log, ApiError ENCODING_ERROR            │
//! │       │        │               (previous image stays on screen)         │
//! │       │        ▼                                                        │
//! │       └── panel = Generated(request, image)                             │
//! │                                                                         │
//! │  download_qr / share_qr work on whatever the panel holds; with no      │
//! │  image they do nothing.                                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, error, info};
use upi_qr::{encode_qr, QrError, ShareOutcome};

use crate::error::ApiError;
use crate::state::{AppConfig, AppState, GeneratedArtifact, InvoiceState, QrState, QrView};

/// Share result with the notice the user should see.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShareResponse {
    pub outcome: ShareOutcome,
    pub notice: Option<String>,
}

impl From<ShareOutcome> for ShareResponse {
    fn from(outcome: ShareOutcome) -> Self {
        ShareResponse {
            outcome,
            notice: outcome.notice().map(str::to_string),
        }
    }
}

/// Gets the preview panel status relative to the live form.
pub fn get_qr(config: &AppConfig, invoice: &InvoiceState, qr: &QrState) -> QrView {
    QrView::new(qr, &invoice.payment_uri(&config.payee_id))
}

/// Freezes the current draft into a payment QR.
///
/// ## Errors
/// - `UNPAYABLE` when the subtotal is not a positive finite amount
/// - `ENCODING_ERROR` when the link does not fit in a QR symbol
///
/// On any error the panel keeps showing what it showed before.
pub async fn generate_qr(
    config: &AppConfig,
    invoice: &InvoiceState,
    qr: &mut QrState,
) -> Result<QrView, ApiError> {
    let amount = invoice.draft().payable_amount()?;
    let request = invoice.payment_request(&config.payee_id);
    let uri = request.to_uri();
    debug!(amount, uri = %uri, "generate_qr command");

    let image = match encode_qr(&uri).await {
        Ok(image) => image,
        Err(err @ QrError::Encoding { .. }) => {
            error!(error = %err, "QR generation failed, keeping previous image");
            return Err(err.into());
        }
        Err(err) => return Err(err.into()),
    };

    info!(artifact_id = %image.id(), amount, "QR generated");
    qr.show(GeneratedArtifact { request, qr: image });

    Ok(QrView::new(qr, &uri))
}

/// Saves the current image as `upi-invoice-qr.png`.
///
/// Writes into `dir` when given, else into the configured output directory.
/// Returns `Ok(None)` when nothing has been generated yet.
pub async fn download_qr(
    config: &AppConfig,
    qr: &QrState,
    dir: Option<&Path>,
) -> Result<Option<PathBuf>, ApiError> {
    let dir = dir.unwrap_or(config.output_dir.as_path());
    Ok(upi_qr::download(qr.artifact(), dir).await?)
}

/// Shares the current image, falling back to copying the live payment link.
///
/// The fallback copies the link for the form as it is now, which may differ
/// from the one frozen into a stale image. Returns `None` when nothing has
/// been generated yet.
pub async fn share_qr(state: &AppState) -> Option<ShareResponse> {
    let live_uri = state.invoice.payment_uri(&state.config.payee_id);

    let outcome = upi_qr::share(
        state.qr.artifact(),
        &live_uri,
        &state.config.share_metadata,
        state.share_target.as_ref(),
        state.clipboard.as_ref(),
    )
    .await;

    if outcome.is_none() {
        debug!("Share requested before any QR was generated");
    }
    outcome.map(ShareResponse::from)
}

/// The current image as an inline `data:` URL, for embedding in a page.
pub fn qr_image_data_url(qr: &QrState) -> Option<String> {
    qr.artifact().map(|image| image.to_data_url())
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;
    use upi_core::{LineField, PayeeId};
    use upi_qr::{Clipboard, NoNativeShare, QrResult, ShareFile, ShareMetadata, ShareTarget};

    use super::*;
    use crate::commands::invoice::{set_note, set_payer_name, update_item};
    use crate::state::QrPanel;

    #[derive(Clone, Default)]
    struct RecordingClipboard {
        text: Arc<Mutex<Option<String>>>,
    }

    #[async_trait]
    impl Clipboard for RecordingClipboard {
        async fn write_text(&self, text: &str) -> QrResult<()> {
            *self.text.lock().unwrap() = Some(text.to_string());
            Ok(())
        }
    }

    struct AcceptingShare {
        shared: Arc<Mutex<Vec<String>>>,
    }

    #[async_trait]
    impl ShareTarget for AcceptingShare {
        fn is_available(&self) -> bool {
            true
        }

        fn can_share(&self, _file: &ShareFile) -> bool {
            true
        }

        async fn share(&self, metadata: &ShareMetadata, file: ShareFile) -> QrResult<()> {
            self.shared
                .lock()
                .unwrap()
                .push(format!("{}|{}", metadata.title, file.name));
            Ok(())
        }
    }

    fn session(clipboard: RecordingClipboard) -> AppState {
        let config = AppConfig::new(PayeeId::new("shop@upi").unwrap());
        AppState::with_share_backends(config, Box::new(NoNativeShare), Box::new(clipboard))
    }

    fn priced(state: &mut AppState, price: &str) {
        update_item(&state.config, &mut state.invoice, 0, LineField::UnitPrice, price);
    }

    #[tokio::test]
    async fn test_generate_unpayable_is_rejected() {
        let mut state = session(RecordingClipboard::default());

        let err = generate_qr(&state.config, &state.invoice, &mut state.qr)
            .await
            .unwrap_err();

        assert_eq!(err.code, crate::error::ErrorCode::Unpayable);
        assert!(matches!(state.qr.panel(), QrPanel::Draft));
    }

    #[tokio::test]
    async fn test_generate_freezes_snapshot() {
        let mut state = session(RecordingClipboard::default());
        priced(&mut state, "149.5");

        let view = generate_qr(&state.config, &state.invoice, &mut state.qr)
            .await
            .unwrap();
        match view {
            QrView::Generated { uri, amount, stale, size_px, .. } => {
                assert_eq!(
                    uri,
                    "upi://pay?pa=shop%40upi&pn=Payment&cu=INR&am=149.50&tn=Invoice%20Payment"
                );
                assert_eq!(amount, Some(149.5));
                assert_eq!(size_px, 512);
                assert!(!stale);
            }
            QrView::Draft => panic!("expected generated panel"),
        }

        // Later edits mark the image stale without replacing it
        set_note(&state.config, &mut state.invoice, "Table 4");
        match get_qr(&state.config, &state.invoice, &state.qr) {
            QrView::Generated { uri, stale, .. } => {
                assert!(uri.ends_with("tn=Invoice%20Payment"));
                assert!(stale);
            }
            QrView::Draft => panic!("expected generated panel"),
        }
    }

    #[tokio::test]
    async fn test_failed_generation_keeps_previous_image() {
        let mut state = session(RecordingClipboard::default());
        priced(&mut state, "10");
        generate_qr(&state.config, &state.invoice, &mut state.qr)
            .await
            .unwrap();
        let first_id = state.qr.artifact().unwrap().id();

        // Payer names are not length-limited, so this overflows the symbol
        set_payer_name(&state.config, &mut state.invoice, &"x".repeat(5000));
        let err = generate_qr(&state.config, &state.invoice, &mut state.qr)
            .await
            .unwrap_err();

        assert_eq!(err.code, crate::error::ErrorCode::EncodingError);
        assert_eq!(state.qr.artifact().unwrap().id(), first_id);
    }

    #[tokio::test]
    async fn test_regenerate_replaces_artifact() {
        let mut state = session(RecordingClipboard::default());
        priced(&mut state, "10");
        generate_qr(&state.config, &state.invoice, &mut state.qr)
            .await
            .unwrap();
        let first_id = state.qr.artifact().unwrap().id();

        priced(&mut state, "20");
        generate_qr(&state.config, &state.invoice, &mut state.qr)
            .await
            .unwrap();

        let current = state.qr.artifact().unwrap();
        assert_ne!(current.id(), first_id);
        assert!(current.uri().contains("am=20.00"));
    }

    #[tokio::test]
    async fn test_download_before_generate_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let state = session(RecordingClipboard::default());

        let written = download_qr(&state.config, &state.qr, Some(dir.path()))
            .await
            .unwrap();

        assert_eq!(written, None);
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[tokio::test]
    async fn test_download_writes_png_to_configured_dir() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = session(RecordingClipboard::default());
        state.config.output_dir = dir.path().join("exports");
        priced(&mut state, "10");
        generate_qr(&state.config, &state.invoice, &mut state.qr)
            .await
            .unwrap();

        let path = download_qr(&state.config, &state.qr, None)
            .await
            .unwrap()
            .unwrap();

        assert_eq!(path, dir.path().join("exports").join("upi-invoice-qr.png"));
        assert_eq!(std::fs::read(path).unwrap(), state.qr.artifact().unwrap().png());
    }

    #[tokio::test]
    async fn test_share_before_generate_is_noop() {
        let clipboard = RecordingClipboard::default();
        let state = session(clipboard.clone());

        assert_eq!(share_qr(&state).await, None);
        assert_eq!(*clipboard.text.lock().unwrap(), None);
    }

    #[tokio::test]
    async fn test_unsupported_share_copies_live_link() {
        let clipboard = RecordingClipboard::default();
        let mut state = session(clipboard.clone());
        priced(&mut state, "10");
        generate_qr(&state.config, &state.invoice, &mut state.qr)
            .await
            .unwrap();
        priced(&mut state, "25");

        let response = share_qr(&state).await.unwrap();

        assert_eq!(response.outcome, ShareOutcome::ClipboardFallback);
        assert_eq!(
            response.notice.as_deref(),
            Some("Sharing is not supported. UPI URL copied to clipboard!")
        );
        let copied = clipboard.text.lock().unwrap().clone().unwrap();
        assert_eq!(copied, state.invoice.payment_uri(&state.config.payee_id));
        assert!(copied.contains("am=25.00"));
    }

    #[tokio::test]
    async fn test_native_share_sends_image() {
        let shared = Arc::new(Mutex::new(Vec::new()));
        let clipboard = RecordingClipboard::default();
        let config = AppConfig::new(PayeeId::new("shop@upi").unwrap());
        let mut state = AppState::with_share_backends(
            config,
            Box::new(AcceptingShare {
                shared: Arc::clone(&shared),
            }),
            Box::new(clipboard.clone()),
        );
        priced(&mut state, "10");
        generate_qr(&state.config, &state.invoice, &mut state.qr)
            .await
            .unwrap();

        let response = share_qr(&state).await.unwrap();

        assert_eq!(response.outcome, ShareOutcome::Shared);
        assert_eq!(response.notice, None);
        assert_eq!(*shared.lock().unwrap(), vec!["UPI Invoice QR|upi-invoice-qr.png"]);
        assert_eq!(*clipboard.text.lock().unwrap(), None);
    }

    #[tokio::test]
    async fn test_data_url_tracks_panel() {
        let mut state = session(RecordingClipboard::default());
        assert_eq!(qr_image_data_url(&state.qr), None);

        priced(&mut state, "10");
        generate_qr(&state.config, &state.invoice, &mut state.qr)
            .await
            .unwrap();

        let url = qr_image_data_url(&state.qr).unwrap();
        assert!(url.starts_with("data:image/png;base64,"));
    }
}
