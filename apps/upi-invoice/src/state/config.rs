//! # Configuration State
//!
//! Stores application configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Command-line flags (applied by the caller)
//! 2. Environment variables (`UPI_INVOICE_*`)
//! 3. Defaults (this file)
//!
//! ## Thread Safety
//! Configuration is read-only after initialization, so no mutex needed.

use std::path::PathBuf;

use directories::UserDirs;
use serde::Serialize;
use upi_core::{PayeeId, ValidationError};
use upi_qr::ShareMetadata;

/// Payee used when no `UPI_INVOICE_PAYEE_ID` is set.
pub const DEFAULT_PAYEE_ID: &str = "lagitsaha@fam";

/// Application configuration.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
    /// Payee VPA written into every payment link (`pa`)
    pub payee_id: PayeeId,

    /// Where "Download" writes the QR image
    pub output_dir: PathBuf,

    /// Title/text offered to the share sheet
    #[serde(skip)]
    pub share_metadata: ShareMetadata,
}

impl AppConfig {
    /// Creates a configuration for the given payee with default export
    /// settings.
    pub fn new(payee_id: PayeeId) -> Self {
        AppConfig {
            payee_id,
            output_dir: default_output_dir(),
            share_metadata: ShareMetadata::default(),
        }
    }

    /// Creates a new AppConfig from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `UPI_INVOICE_PAYEE_ID`: Override the payee VPA
    /// - `UPI_INVOICE_OUTPUT_DIR`: Override the export directory
    ///
    /// Fails only when the payee id is blank or contains whitespace.
    pub fn from_env() -> Result<Self, ValidationError> {
        let payee = std::env::var("UPI_INVOICE_PAYEE_ID")
            .unwrap_or_else(|_| DEFAULT_PAYEE_ID.to_string());
        let mut config = AppConfig::new(PayeeId::new(payee)?);

        if let Ok(dir) = std::env::var("UPI_INVOICE_OUTPUT_DIR") {
            config.output_dir = PathBuf::from(dir);
        }

        Ok(config)
    }
}

/// The user's Downloads folder, or the working directory when the platform
/// has none.
fn default_output_dir() -> PathBuf {
    UserDirs::new()
        .and_then(|dirs| dirs.download_dir().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from("."))
}
