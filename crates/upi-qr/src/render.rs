//! # QR Rendering
//!
//! Payment link → QR module matrix → fixed-size RGB raster → PNG.
//!
//! ## Fixed Style
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  512 × 512 px, square                                                   │
//! │  1 module of light quiet margin on every side                          │
//! │  dark  #0f172a                                                          │
//! │  light #ffffff                                                          │
//! │  error correction M (~15% recoverable)                                  │
//! │                                                                         │
//! │  Modules are scaled to fill the exact pixel size. Module edges land    │
//! │  on fractional pixels, so each pixel takes the color of the module     │
//! │  under its top-left corner.                                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::io::Cursor;

use image::{DynamicImage, ImageOutputFormat, Rgb, RgbImage};
use qrcode::{Color, EcLevel, QrCode};
use tracing::debug;

use crate::artifact::EncodedQr;
use crate::error::{QrError, QrResult};

/// Rendering parameters. Compile-time constants, never computed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QrStyle {
    pub size_px: u32,
    pub margin_modules: u32,
    pub dark: [u8; 3],
    pub light: [u8; 3],
    pub ec_level: EcLevel,
}

impl QrStyle {
    /// The one style every invoice QR is rendered with.
    pub const INVOICE: QrStyle = QrStyle {
        size_px: 512,
        margin_modules: 1,
        dark: [0x0f, 0x17, 0x2a],
        light: [0xff, 0xff, 0xff],
        ec_level: EcLevel::M,
    };
}

impl Default for QrStyle {
    fn default() -> Self {
        QrStyle::INVOICE
    }
}

/// Renders `data` as a PNG in the given style.
///
/// Fails with [`QrError::Encoding`] when `data` exceeds the capacity of the
/// largest QR version at the style's error-correction level.
pub fn render_png(data: &str, style: &QrStyle) -> QrResult<Vec<u8>> {
    let code = QrCode::with_error_correction_level(data.as_bytes(), style.ec_level).map_err(
        |err| QrError::Encoding {
            len: data.len(),
            reason: err.to_string(),
        },
    )?;

    let width = code.width() as u64;
    let colors = code.to_colors();
    let margin = u64::from(style.margin_modules);
    let total = width + 2 * margin;
    let size = u64::from(style.size_px);

    debug!(modules = width, size_px = style.size_px, "Rasterising QR symbol");

    let image = RgbImage::from_fn(style.size_px, style.size_px, |x, y| {
        let mx = u64::from(x) * total / size;
        let my = u64::from(y) * total / size;

        let in_symbol = (margin..margin + width).contains(&mx) && (margin..margin + width).contains(&my);
        let dark = in_symbol
            && colors[((my - margin) * width + (mx - margin)) as usize] == Color::Dark;

        Rgb(if dark { style.dark } else { style.light })
    });

    let mut buffer = Cursor::new(Vec::new());
    DynamicImage::ImageRgb8(image).write_to(&mut buffer, ImageOutputFormat::Png)?;
    Ok(buffer.into_inner())
}

/// Encodes a payment link into a new [`EncodedQr`] without blocking the
/// caller's task.
///
/// Each call produces a fresh artifact; nothing is cached or shared between
/// calls.
pub async fn encode_qr(uri: &str) -> QrResult<EncodedQr> {
    let style = QrStyle::INVOICE;
    let data = uri.to_string();

    let png = tokio::task::spawn_blocking(move || render_png(&data, &style)).await??;

    Ok(EncodedQr::new(uri.to_string(), style.size_px, png))
}

#[cfg(test)]
mod tests {
    use super::*;

    const URI: &str = "upi://pay?pa=lagitsaha%40fam&pn=Payment&cu=INR&am=149.50&tn=Invoice%20Payment";

    fn decode_rgb(png: &[u8]) -> RgbImage {
        image::load_from_memory(png).unwrap().to_rgb8()
    }

    /// Reads the rendered image back with an independent QR decoder.
    ///
    /// The raster is padded with extra light border so the detector gets a
    /// comfortable quiet zone.
    fn scan(png: &[u8]) -> String {
        let luma = image::load_from_memory(png).unwrap().to_luma8();
        let (w, h) = (luma.width() as usize, luma.height() as usize);
        let pad = 32;

        let mut prepared = rqrr::PreparedImage::prepare_from_greyscale(
            w + 2 * pad,
            h + 2 * pad,
            |x, y| {
                if x < pad || y < pad || x >= w + pad || y >= h + pad {
                    255
                } else {
                    luma.get_pixel((x - pad) as u32, (y - pad) as u32).0[0]
                }
            },
        );
        let grids = prepared.detect_grids();
        assert_eq!(grids.len(), 1, "expected exactly one QR symbol");
        let (_meta, content) = grids[0].decode().unwrap();
        content
    }

    #[test]
    fn test_png_has_fixed_dimensions() {
        let png = render_png(URI, &QrStyle::INVOICE).unwrap();
        let image = decode_rgb(&png);
        assert_eq!(image.dimensions(), (512, 512));
    }

    #[test]
    fn test_only_style_colors_are_used() {
        let style = QrStyle::INVOICE;
        let image = decode_rgb(&render_png(URI, &style).unwrap());

        let mut dark = 0usize;
        for pixel in image.pixels() {
            assert!(pixel.0 == style.dark || pixel.0 == style.light);
            if pixel.0 == style.dark {
                dark += 1;
            }
        }
        assert!(dark > 0);
    }

    #[test]
    fn test_quiet_margin_and_finder_pattern() {
        let style = QrStyle::INVOICE;
        let code = QrCode::with_error_correction_level(URI.as_bytes(), style.ec_level).unwrap();
        let total = code.width() as u32 + 2 * style.margin_modules;
        let image = decode_rgb(&render_png(URI, &style).unwrap());

        // Center pixel of a module in the padded grid.
        let center = |m: u32| ((2 * m + 1) * style.size_px) / (2 * total);

        assert_eq!(image.get_pixel(0, 0).0, style.light);
        assert_eq!(image.get_pixel(511, 511).0, style.light);
        // Top-left corner of the top-left finder pattern is dark.
        let m = style.margin_modules;
        assert_eq!(image.get_pixel(center(m), center(m)).0, style.dark);
        // Its separator ring (module 7 of the symbol) is light.
        assert_eq!(image.get_pixel(center(m + 7), center(m)).0, style.light);
    }

    #[test]
    fn test_rendered_image_scans_back_to_uri() {
        let png = render_png(URI, &QrStyle::INVOICE).unwrap();
        assert_eq!(scan(&png), URI);
    }

    #[test]
    fn test_long_note_uri_scans_back() {
        let uri = format!(
            "upi://pay?pa=lagitsaha%40fam&pn={}&cu=INR&am=1234567.89&tn={}",
            "Customer%20".repeat(10),
            "n".repeat(80)
        );
        let png = render_png(&uri, &QrStyle::INVOICE).unwrap();
        assert_eq!(scan(&png), uri);
    }

    #[test]
    fn test_oversized_input_is_encoding_error() {
        let uri = format!("upi://pay?pn={}", "x".repeat(4000));
        let err = render_png(&uri, &QrStyle::INVOICE).unwrap_err();
        assert!(matches!(err, QrError::Encoding { len, .. } if len == uri.len()));
    }

    #[tokio::test]
    async fn test_encode_qr_produces_fresh_artifacts() {
        let first = encode_qr(URI).await.unwrap();
        let second = encode_qr(URI).await.unwrap();

        assert_eq!(first.uri(), URI);
        assert_eq!(first.size_px(), 512);
        assert_eq!(first.png(), second.png());
        assert_ne!(first.id(), second.id());
    }

    #[tokio::test]
    async fn test_encode_qr_reports_capacity_overflow() {
        let uri = "9".repeat(8000);
        assert!(matches!(
            encode_qr(&uri).await,
            Err(QrError::Encoding { .. })
        ));
    }
}
