//! # upi-qr: QR Encoding & Export for UPI Invoice
//!
//! Renders a payment link into a fixed-size PNG and hands it to the outside
//! world: a file on disk, the platform share sheet, or, failing that, the
//! clipboard.
//!
//! ## Module Organization
//! ```text
//! upi_qr/
//! ├── lib.rs        ◄─── You are here (exports)
//! ├── render.rs     ◄─── Fixed style, module matrix → RGB → PNG
//! ├── artifact.rs   ◄─── EncodedQr: immutable result of one generation
//! ├── export.rs     ◄─── download(): write the PNG to a directory
//! ├── share.rs      ◄─── share(): share sheet with clipboard fallback
//! ├── clipboard.rs  ◄─── System clipboard through platform commands
//! └── error.rs      ◄─── QrError
//! ```
//!
//! ## Suspension Points
//! Encoding runs on tokio's blocking pool; file writes, share and clipboard
//! calls are async. Nothing here holds locks or shared state, so callers can
//! fire a new generation while an old one is still running and simply keep
//! whichever finishes last.

pub mod artifact;
pub mod clipboard;
pub mod error;
pub mod export;
pub mod render;
pub mod share;

pub use artifact::EncodedQr;
pub use clipboard::SystemClipboard;
pub use error::{QrError, QrResult};
pub use export::{download, QR_FILE_NAME};
pub use render::{encode_qr, render_png, QrStyle};
pub use share::{share, Clipboard, NoNativeShare, ShareFile, ShareMetadata, ShareOutcome, ShareTarget};
