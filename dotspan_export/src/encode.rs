// Copyright 2025 the DotSpan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::fmt;

use dotspan_raster::CardBitmap;
use peniko::Color;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use image::codecs::jpeg::JpegEncoder;

/// JPEG encode quality, matching the quality browsers use for
/// `canvas.toDataURL("image/jpeg")` by default.
pub const JPEG_QUALITY: u8 = 92;

/// Background JPEG exports composite onto when the host does not choose one.
/// JPEG has no alpha channel, so transparent cards land on white.
pub const DEFAULT_JPG_BACKGROUND: Color = Color::WHITE;

/// Error produced by a failed export attempt.
#[derive(Clone, PartialEq, Eq)]
pub enum ExportError {
    /// PNG encoding failed.
    Png(String),
    /// JPEG encoding failed.
    Jpeg(String),
}

impl ExportError {
    fn detail(&self) -> &str {
        match self {
            Self::Png(detail) | Self::Jpeg(detail) => detail,
        }
    }
}

impl fmt::Debug for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Png(_) => "Png",
            Self::Jpeg(_) => "Jpeg",
        };
        write!(f, "ExportError::{name} {{ {} }}", self.detail())
    }
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let format = match self {
            Self::Png(_) => "PNG",
            Self::Jpeg(_) => "JPEG",
        };
        write!(f, "{format} export failed: {}", self.detail())
    }
}

impl std::error::Error for ExportError {}

/// Encodes a rendered card as a PNG file, RGBA8 with alpha preserved.
pub fn encode_png(bitmap: &CardBitmap) -> Result<Vec<u8>, ExportError> {
    let mut out = Vec::new();
    let mut encoder = png::Encoder::new(&mut out, bitmap.width(), bitmap.height());
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);
    let mut writer = encoder
        .write_header()
        .map_err(|e| ExportError::Png(e.to_string()))?;
    writer
        .write_image_data(bitmap.rgba())
        .map_err(|e| ExportError::Png(e.to_string()))?;
    writer
        .finish()
        .map_err(|e| ExportError::Png(e.to_string()))?;
    Ok(out)
}

/// Encodes a rendered card as a JPEG file at [`JPEG_QUALITY`].
///
/// JPEG carries no alpha, so pixels are composited over `background` first;
/// pass [`DEFAULT_JPG_BACKGROUND`] for the stock white export.
#[allow(
    clippy::cast_possible_truncation,
    reason = "composited channel values are divided back into u8 range"
)]
pub fn encode_jpg(bitmap: &CardBitmap, background: Color) -> Result<Vec<u8>, ExportError> {
    let bg = background.to_rgba8();
    let bg_rgb = [u32::from(bg.r), u32::from(bg.g), u32::from(bg.b)];

    let mut rgb = Vec::with_capacity(bitmap.rgba().len() / 4 * 3);
    for px in bitmap.rgba().chunks_exact(4) {
        let a = u32::from(px[3]);
        for (channel, bg_channel) in px[..3].iter().zip(bg_rgb) {
            // Straight-alpha source over an opaque background.
            let c = (u32::from(*channel) * a + bg_channel * (255 - a) + 127) / 255;
            rgb.push(c as u8);
        }
    }

    let mut out = Vec::new();
    let mut encoder = JpegEncoder::new_with_quality(&mut out, JPEG_QUALITY);
    encoder
        .encode(&rgb, bitmap.width(), bitmap.height(), image::ColorType::Rgb8)
        .map_err(|e| ExportError::Jpeg(e.to_string()))?;
    Ok(out)
}

/// Encodes a card as a `data:image/png;base64,` URL.
pub fn png_data_url(bitmap: &CardBitmap) -> Result<String, ExportError> {
    Ok(data_url("image/png", &encode_png(bitmap)?))
}

/// Encodes a card as a `data:image/jpeg;base64,` URL, composited over
/// `background`.
pub fn jpg_data_url(bitmap: &CardBitmap, background: Color) -> Result<String, ExportError> {
    Ok(data_url("image/jpeg", &encode_jpg(bitmap, background)?))
}

fn data_url(mime: &str, bytes: &[u8]) -> String {
    let mut url = format!("data:{mime};base64,");
    BASE64.encode_string(bytes, &mut url);
    url
}

#[cfg(test)]
mod tests {
    use dotspan_card::{CardSpec, DotStyle, build_card_scene};
    use dotspan_raster::{FontSet, render_card};

    use super::{DEFAULT_JPG_BACKGROUND, encode_jpg, encode_png, jpg_data_url, png_data_url};

    fn small_bitmap() -> dotspan_raster::CardBitmap {
        let mut spec = CardSpec::new(6, 3, 3, DotStyle::Classic);
        spec.scale = 1.0;
        let scene = build_card_scene(&spec);
        render_card(&scene, &FontSet::new()).unwrap()
    }

    #[test]
    fn png_bytes_carry_the_signature() {
        let bytes = encode_png(&small_bitmap()).unwrap();
        assert_eq!(&bytes[..8], &[0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a]);
    }

    #[test]
    fn jpeg_bytes_carry_the_marker() {
        let bytes = encode_jpg(&small_bitmap(), DEFAULT_JPG_BACKGROUND).unwrap();
        assert_eq!(&bytes[..2], &[0xff, 0xd8], "JPEG SOI marker");
        assert_eq!(&bytes[bytes.len() - 2..], &[0xff, 0xd9], "JPEG EOI marker");
    }

    #[test]
    fn data_urls_name_their_mime_type() {
        let bitmap = small_bitmap();
        let png = png_data_url(&bitmap).unwrap();
        assert!(png.starts_with("data:image/png;base64,"));
        let jpg = jpg_data_url(&bitmap, DEFAULT_JPG_BACKGROUND).unwrap();
        assert!(jpg.starts_with("data:image/jpeg;base64,"));
        // Base64 payloads stay on the URL-safe side of ASCII.
        assert!(png.bytes().all(|b| b.is_ascii_graphic()));
    }
}
