// Copyright 2025 the DotSpan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! DotSpan Raster: CPU rendering of card scenes.
//!
//! This crate replays a [`dotspan_card::CardScene`] through the
//! sparse-strips [`vello_cpu`] renderer and hands back straight-alpha RGBA
//! pixels as a [`CardBitmap`]. Text is drawn from caller-supplied font bytes
//! via skrifa glyph outlines; cards without loaded fonts still render their
//! grid, lines, and icons. [`PreviewTracker`] implements the ordering rule
//! for asynchronous preview renders: only the newest request's output is
//! applied.
//!
//! ```rust
//! use dotspan_card::{CardSpec, DotStyle, build_card_scene};
//! use dotspan_raster::{FontSet, render_card};
//!
//! let spec = CardSpec::new(52, 20, 13, DotStyle::Classic);
//! let scene = build_card_scene(&spec);
//! let bitmap = render_card(&scene, &FontSet::new())?;
//! assert_eq!(bitmap.width(), scene.pixel_width());
//! // The card background is opaque white by default.
//! assert_eq!(bitmap.pixel(0, 0), Some([0xff, 0xff, 0xff, 0xff]));
//! # Ok::<(), dotspan_raster::RasterError>(())
//! ```
//!
//! ## `no_std` Support
//!
//! This crate is `no_std` and uses `alloc`. PNG flag decoding requires the
//! `std` feature.

#![no_std]

extern crate alloc;

mod backend;
mod bitmap;
mod preview;
mod text;

pub use backend::render_card;
#[cfg(feature = "std")]
pub use bitmap::decode_flag_png;
pub use bitmap::{CardBitmap, FlagDecodeError, RasterError};
pub use preview::{PreviewTracker, RenderToken};
pub use text::FontSet;
