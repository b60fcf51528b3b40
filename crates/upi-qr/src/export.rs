//! # Download
//!
//! Writes a generated QR to disk under a fixed file name.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::artifact::EncodedQr;
use crate::error::QrResult;

/// File name of every exported QR image.
pub const QR_FILE_NAME: &str = "upi-invoice-qr.png";

/// Saves the artifact as `<dir>/upi-invoice-qr.png`, creating `dir` if
/// needed and overwriting an earlier export.
///
/// Returns `Ok(None)` without touching the file system when nothing has
/// been generated yet.
pub async fn download(artifact: Option<&EncodedQr>, dir: &Path) -> QrResult<Option<PathBuf>> {
    let Some(artifact) = artifact else {
        debug!("Download requested before any QR was generated");
        return Ok(None);
    };

    tokio::fs::create_dir_all(dir).await?;
    let path = dir.join(QR_FILE_NAME);
    tokio::fs::write(&path, artifact.png()).await?;

    info!(path = %path.display(), artifact_id = %artifact.id(), "QR image saved");
    Ok(Some(path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::encode_qr;

    #[tokio::test]
    async fn test_download_without_artifact_is_noop() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("out");

        let written = download(None, &target).await.unwrap();
        assert!(written.is_none());
        assert!(!target.exists());
    }

    #[tokio::test]
    async fn test_download_writes_png_with_fixed_name() {
        let dir = tempfile::tempdir().unwrap();
        let artifact = encode_qr("upi://pay?pa=shop%40upi&pn=Payment&cu=INR&tn=Invoice%20Payment")
            .await
            .unwrap();

        let path = download(Some(&artifact), &dir.path().join("nested"))
            .await
            .unwrap()
            .unwrap();

        assert_eq!(path.file_name().unwrap(), QR_FILE_NAME);
        assert_eq!(std::fs::read(&path).unwrap(), artifact.png());
    }

    #[tokio::test]
    async fn test_download_overwrites_previous_export() {
        let dir = tempfile::tempdir().unwrap();
        let first = encode_qr("upi://pay?pa=a&tn=one").await.unwrap();
        let second = encode_qr("upi://pay?pa=a&tn=two").await.unwrap();

        download(Some(&first), dir.path()).await.unwrap();
        let path = download(Some(&second), dir.path()).await.unwrap().unwrap();

        assert_eq!(std::fs::read(path).unwrap(), second.png());
    }
}
