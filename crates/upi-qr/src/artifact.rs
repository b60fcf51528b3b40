//! # Encoded QR Artifact
//!
//! The frozen result of one "Generate" click.
//!
//! An [`EncodedQr`] is bound to the exact link it encodes. It has no
//! setters: regenerating builds a new artifact with a new id, and editing the
//! invoice afterwards does not touch an artifact that already exists.

use std::fmt;

use base64::{engine::general_purpose::STANDARD, Engine as _};
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// MIME type of the encoded image.
pub const PNG_MIME: &str = "image/png";

#[derive(Clone, PartialEq)]
pub struct EncodedQr {
    id: Uuid,
    generated_at: DateTime<Utc>,
    uri: String,
    size_px: u32,
    png: Vec<u8>,
}

impl EncodedQr {
    pub(crate) fn new(uri: String, size_px: u32, png: Vec<u8>) -> Self {
        EncodedQr {
            id: Uuid::new_v4(),
            generated_at: Utc::now(),
            uri,
            size_px,
            png,
        }
    }

    /// Unique id of this generation.
    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn generated_at(&self) -> DateTime<Utc> {
        self.generated_at
    }

    /// The payment link this image encodes.
    pub fn uri(&self) -> &str {
        &self.uri
    }

    /// Width and height in pixels.
    pub fn size_px(&self) -> u32 {
        self.size_px
    }

    /// PNG file contents.
    pub fn png(&self) -> &[u8] {
        &self.png
    }

    /// `data:image/png;base64,...` for embedding the image inline.
    pub fn to_data_url(&self) -> String {
        format!("data:{};base64,{}", PNG_MIME, STANDARD.encode(&self.png))
    }
}

/// Leaves the PNG bytes out; they are large and unreadable.
impl fmt::Debug for EncodedQr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EncodedQr")
            .field("id", &self.id)
            .field("generated_at", &self.generated_at)
            .field("uri", &self.uri)
            .field("size_px", &self.size_px)
            .field("png_bytes", &self.png.len())
            .finish()
    }
}
