// Copyright 2025 the DotSpan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

#[cfg(feature = "std")]
use alloc::format;
#[cfg(feature = "std")]
use alloc::vec;

use dotspan_card::ImageData;

#[cfg(feature = "std")]
use png::{BitDepth, ColorType, Transformations};

/// A finished card render: straight-alpha RGBA8 pixels at device resolution.
#[derive(Clone, PartialEq, Eq)]
pub struct CardBitmap {
    width: u32,
    height: u32,
    rgba: Vec<u8>,
}

impl CardBitmap {
    pub(crate) fn from_parts(width: u32, height: u32, rgba: Vec<u8>) -> Self {
        debug_assert_eq!(
            rgba.len(),
            width as usize * height as usize * 4,
            "pixel buffer must match dimensions"
        );
        Self {
            width,
            height,
            rgba,
        }
    }

    /// Returns the width in device pixels.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Returns the height in device pixels.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns the RGBA8 pixel bytes, row-major, straight alpha.
    #[must_use]
    pub fn rgba(&self) -> &[u8] {
        &self.rgba
    }

    /// Consumes the bitmap, returning the pixel bytes.
    #[must_use]
    pub fn into_rgba(self) -> Vec<u8> {
        self.rgba
    }

    /// Returns the `[r, g, b, a]` sample at `(x, y)`, or `None` when out of
    /// bounds.
    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = (y as usize * self.width as usize + x as usize) * 4;
        let bytes = self.rgba.get(idx..idx + 4)?;
        Some([bytes[0], bytes[1], bytes[2], bytes[3]])
    }
}

impl fmt::Debug for CardBitmap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CardBitmap")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("bytes", &self.rgba.len())
            .finish()
    }
}

/// Error returned when a scene cannot be rasterized.
#[derive(Clone, PartialEq, Eq)]
pub enum RasterError {
    /// The device-pixel dimensions exceed what the renderer's backing store
    /// can address.
    SceneTooLarge {
        /// Requested width in device pixels.
        width: u32,
        /// Requested height in device pixels.
        height: u32,
    },
}

impl fmt::Debug for RasterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SceneTooLarge { width, height } => {
                write!(f, "RasterError::SceneTooLarge {{ {width}x{height} }}")
            }
        }
    }
}

impl fmt::Display for RasterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SceneTooLarge { width, height } => {
                write!(
                    f,
                    "{width}x{height} exceeds the maximum renderable size of {max}x{max}",
                    max = u16::MAX
                )
            }
        }
    }
}

impl core::error::Error for RasterError {}

/// Error returned when flag bytes cannot be decoded into an image.
#[derive(Clone, PartialEq, Eq)]
pub struct FlagDecodeError {
    /// Human-readable decode failure.
    pub detail: String,
}

impl fmt::Debug for FlagDecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FlagDecodeError {{ {} }}", self.detail)
    }
}

impl fmt::Display for FlagDecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to decode flag image: {}", self.detail)
    }
}

impl core::error::Error for FlagDecodeError {}

/// Decodes PNG bytes into straight-alpha RGBA pixels for use as a footer
/// flag icon.
///
/// Paletted and RGB sources are expanded to RGBA8 and 16-bit channels are
/// reduced to 8; sources that still decode to something other than RGBA8
/// (grayscale, say) are rejected.
#[cfg(feature = "std")]
pub fn decode_flag_png(data: &[u8]) -> Result<ImageData, FlagDecodeError> {
    let mut decoder = png::Decoder::new(data);
    decoder.set_transformations(Transformations::ALPHA | Transformations::STRIP_16);
    let mut reader = decoder.read_info().map_err(|e| FlagDecodeError {
        detail: format!("{e}"),
    })?;
    if reader.output_color_type() != (ColorType::Rgba, BitDepth::Eight) {
        return Err(FlagDecodeError {
            detail: String::from("expected an RGBA8 output frame"),
        });
    }
    let mut buf = vec![0_u8; reader.output_buffer_size()];
    let info = reader.next_frame(&mut buf).map_err(|e| FlagDecodeError {
        detail: format!("{e}"),
    })?;
    buf.truncate(info.buffer_size());
    ImageData::new(info.width, info.height, buf).map_err(|e| FlagDecodeError {
        detail: format!("{e}"),
    })
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::{CardBitmap, RasterError};

    #[test]
    fn pixel_lookup_is_row_major() {
        let mut rgba = vec![0_u8; 2 * 2 * 4];
        // (1, 0) red, (0, 1) green.
        rgba[4..8].copy_from_slice(&[255, 0, 0, 255]);
        rgba[8..12].copy_from_slice(&[0, 255, 0, 255]);
        let bitmap = CardBitmap::from_parts(2, 2, rgba);
        assert_eq!(bitmap.pixel(1, 0), Some([255, 0, 0, 255]));
        assert_eq!(bitmap.pixel(0, 1), Some([0, 255, 0, 255]));
        assert_eq!(bitmap.pixel(0, 0), Some([0, 0, 0, 0]));
    }

    #[test]
    fn pixel_out_of_bounds_is_none() {
        let bitmap = CardBitmap::from_parts(2, 1, vec![0_u8; 8]);
        assert_eq!(bitmap.pixel(2, 0), None);
        assert_eq!(bitmap.pixel(0, 1), None);
    }

    #[test]
    fn errors_format_their_dimensions() {
        let err = RasterError::SceneTooLarge {
            width: 70_000,
            height: 128,
        };
        let text = alloc::format!("{err}");
        assert!(text.contains("70000"), "display names the bad width");
    }

    #[cfg(feature = "std")]
    #[test]
    fn garbage_bytes_fail_flag_decode() {
        assert!(super::decode_flag_png(b"not a png").is_err());
    }
}
