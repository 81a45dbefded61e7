// Copyright 2025 the DotSpan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! DotSpan Export: turning rendered cards into files and print jobs.
//!
//! This crate owns the last mile of the export pipeline: safe download
//! filenames, PNG and JPEG encoding of a [`dotspan_raster::CardBitmap`],
//! `data:` URLs for hosts that hand images to a browser or webview, and a
//! print-formatted HTML document sized to [`PaperSize`]. Everything here is
//! pure byte and string production; no files are written and no dialogs are
//! opened.
//!
//! ```rust
//! use dotspan_card::{CardSpec, DotStyle, build_card_scene};
//! use dotspan_export::{build_export_filename, encode_png};
//! use dotspan_raster::{FontSet, render_card};
//!
//! let scene = build_card_scene(&CardSpec::new(12, 6, 4, DotStyle::Classic));
//! let bitmap = render_card(&scene, &FontSet::new())?;
//! let bytes = encode_png(&bitmap)?;
//! assert_eq!(&bytes[1..4], b"PNG");
//! assert_eq!(build_export_filename(Some("Jane Q. Doe"), "png"), "jane-q-doe.png");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod encode;
mod filename;
mod print;

pub use encode::{
    DEFAULT_JPG_BACKGROUND, ExportError, JPEG_QUALITY, encode_jpg, encode_png, jpg_data_url,
    png_data_url,
};
pub use filename::{DEFAULT_FILE_STEM, build_export_filename, sanitize_file_stem};
pub use print::{PRINT_MARGIN_MM, PaperSize, build_print_document};
