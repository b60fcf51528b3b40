//! # System Clipboard
//!
//! Writes text to the OS clipboard by piping it into the platform's
//! clipboard command.
//!
//! | Platform | Commands tried, in order                          |
//! |----------|---------------------------------------------------|
//! | macOS    | `pbcopy`                                          |
//! | Windows  | `clip`                                            |
//! | other    | `wl-copy`, `xclip -selection clipboard`, `xsel`   |

use std::process::Stdio;

use async_trait::async_trait;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tracing::debug;

use crate::error::{QrError, QrResult};
use crate::share::Clipboard;

#[cfg(target_os = "macos")]
const CANDIDATES: &[(&str, &[&str])] = &[("pbcopy", &[])];

#[cfg(target_os = "windows")]
const CANDIDATES: &[(&str, &[&str])] = &[("clip", &[])];

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
const CANDIDATES: &[(&str, &[&str])] = &[
    ("wl-copy", &[]),
    ("xclip", &["-selection", "clipboard"]),
    ("xsel", &["--clipboard", "--input"]),
];

/// The OS clipboard.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClipboard;

impl SystemClipboard {
    async fn pipe_into(program: &str, args: &[&str], text: &str) -> QrResult<()> {
        let mut child = Command::new(program)
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin.write_all(text.as_bytes()).await?;
        }

        let status = child.wait().await?;
        if status.success() {
            Ok(())
        } else {
            Err(QrError::Clipboard(format!("{} exited with {}", program, status)))
        }
    }
}

#[async_trait]
impl Clipboard for SystemClipboard {
    async fn write_text(&self, text: &str) -> QrResult<()> {
        let mut last_error = None;

        for (program, args) in CANDIDATES {
            match Self::pipe_into(program, args, text).await {
                Ok(()) => {
                    debug!(program, "Copied text to clipboard");
                    return Ok(());
                }
                Err(err) => {
                    debug!(program, error = %err, "Clipboard command unavailable");
                    last_error = Some(err);
                }
            }
        }

        Err(match last_error {
            Some(err) => QrError::Clipboard(err.to_string()),
            None => QrError::Clipboard("no clipboard command available".to_string()),
        })
    }
}
