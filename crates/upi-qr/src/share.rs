//! # Share
//!
//! Sends a generated QR through the platform share sheet, falling back to
//! copying the payment link to the clipboard.
//!
//! ## Outcome Tree
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  share(artifact)                                                        │
//! │     │                                                                   │
//! │     ├── share sheet available AND accepts a PNG file?                   │
//! │     │      ├── yes ──► target.share() ─┬─ Ok  ──► Shared                │
//! │     │      │                           └─ Err ──► Failed                │
//! │     │      └── no ──┐                                                   │
//! │     │               ▼                                                   │
//! │     └────────► clipboard.write_text(uri) ─┬─ Ok  ──► ClipboardFallback  │
//! │                                           └─ Err ──► Failed             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A share sheet that errors does not fall through to the clipboard; the
//! user already saw the sheet, so a silent copy would be surprising.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};

use crate::artifact::{EncodedQr, PNG_MIME};
use crate::error::QrResult;
use crate::export::QR_FILE_NAME;

/// Title and body text offered to the share sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShareMetadata {
    pub title: String,
    pub text: String,
}

impl Default for ShareMetadata {
    fn default() -> Self {
        ShareMetadata {
            title: "UPI Invoice QR".to_string(),
            text: "Scan to pay via UPI".to_string(),
        }
    }
}

/// A file handed to the share sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareFile {
    pub name: String,
    pub mime: String,
    pub bytes: Vec<u8>,
}

impl From<&EncodedQr> for ShareFile {
    fn from(artifact: &EncodedQr) -> Self {
        ShareFile {
            name: QR_FILE_NAME.to_string(),
            mime: PNG_MIME.to_string(),
            bytes: artifact.png().to_vec(),
        }
    }
}

/// Result of a share attempt, as shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ShareOutcome {
    /// The share sheet took the image.
    Shared,

    /// No usable share sheet; the link is on the clipboard instead.
    ClipboardFallback,

    /// Neither sharing nor the clipboard worked.
    Failed,
}

impl ShareOutcome {
    /// Notice for the user, if this outcome needs one.
    pub fn notice(&self) -> Option<&'static str> {
        match self {
            ShareOutcome::Shared => None,
            ShareOutcome::ClipboardFallback => {
                Some("Sharing is not supported. UPI URL copied to clipboard!")
            }
            ShareOutcome::Failed => Some("Sharing failed. Try downloading the QR instead."),
        }
    }
}

/// The platform's native share capability.
#[async_trait]
pub trait ShareTarget: Send + Sync {
    /// Whether any share sheet exists on this platform.
    fn is_available(&self) -> bool;

    /// Whether the share sheet accepts this particular file.
    fn can_share(&self, file: &ShareFile) -> bool;

    async fn share(&self, metadata: &ShareMetadata, file: ShareFile) -> QrResult<()>;
}

/// Text clipboard.
#[async_trait]
pub trait Clipboard: Send + Sync {
    async fn write_text(&self, text: &str) -> QrResult<()>;
}

/// Share target for platforms without a share sheet (desktop terminals).
#[derive(Debug, Clone, Copy, Default)]
pub struct NoNativeShare;

#[async_trait]
impl ShareTarget for NoNativeShare {
    fn is_available(&self) -> bool {
        false
    }

    fn can_share(&self, _file: &ShareFile) -> bool {
        false
    }

    async fn share(&self, _metadata: &ShareMetadata, _file: ShareFile) -> QrResult<()> {
        Err(crate::error::QrError::Share(
            "no native share sheet on this platform".to_string(),
        ))
    }
}

/// Shares the artifact, falling back to copying `payment_uri`.
///
/// Returns `None` (nothing attempted) when no artifact exists yet.
pub async fn share(
    artifact: Option<&EncodedQr>,
    payment_uri: &str,
    metadata: &ShareMetadata,
    target: &dyn ShareTarget,
    clipboard: &dyn Clipboard,
) -> Option<ShareOutcome> {
    let artifact = artifact?;

    if target.is_available() {
        let file = ShareFile::from(artifact);
        if target.can_share(&file) {
            return Some(match target.share(metadata, file).await {
                Ok(()) => {
                    info!(artifact_id = %artifact.id(), "QR shared");
                    ShareOutcome::Shared
                }
                Err(err) => {
                    error!(error = %err, "Native share failed");
                    ShareOutcome::Failed
                }
            });
        }
    }

    warn!("Native file share unavailable, copying payment link to clipboard");
    Some(match clipboard.write_text(payment_uri).await {
        Ok(()) => ShareOutcome::ClipboardFallback,
        Err(err) => {
            error!(error = %err, "Clipboard fallback failed");
            ShareOutcome::Failed
        }
    })
}
