// Copyright 2025 the DotSpan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! DotSpan Card: deterministic layout of exportable life-calendar cards.
//!
//! This crate turns a [`CardSpec`] — grid shape, dot style, theme, text
//! lines, scale — into a [`CardScene`]: a flat, ordered list of circles,
//! rounded rectangles, and text items with a fixed logical size. The scene is
//! pure data; rasterizing it (and measuring text, and decoding flag icons)
//! belongs to a backend such as `dotspan_raster`.
//!
//! Layout runs top to bottom: title, the dot grid (with axis index labels
//! when [`CardSpec::axis`] is set), a progress line, a percent line, and an
//! optional footer with an optional flag icon. Equal specs always produce
//! equal scenes, so cards can be compared, cached, and replayed.
//!
//! ```rust
//! use dotspan_card::{CardSpec, DotStyle, build_card_scene};
//!
//! let mut spec = CardSpec::new(4_160, 1_826, 52, DotStyle::Classic);
//! spec.title = "Life in Weeks".to_string();
//! spec.progress_text = "Weeks: 1826/4160".to_string();
//! spec.percent_text = "44% of life lived".to_string();
//!
//! let scene = build_card_scene(&spec);
//! // One item per grid cell plus the three text lines.
//! assert_eq!(scene.items.len(), 4_160 + 3);
//! assert!(scene.pixel_width() > 0);
//! ```
//!
//! ## `no_std` Support
//!
//! This crate is `no_std` and uses `alloc`. It does not depend on `std`.

#![no_std]

extern crate alloc;

mod scene;
mod spec;
mod theme;

pub use scene::{
    CardItem, CardScene, GRID_AXIS_OFFSET, IconSlot, ImageData, ImageDataError, TextAlign,
    TextItem, build_card_scene,
};
pub use spec::{
    AxisSpec, CardSpec, DotStyle, EXPORT_SIZE_PRESETS, ExportSizing, FontChoice, SCALE_DOWNLOAD,
    SCALE_PREVIEW, SCALE_PRINT,
};
pub use theme::{ColorParseError, DEFAULT_RAINBOW, Theme, parse_hex_color};
