// Copyright 2025 the DotSpan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;

use kurbo::{Point, Rect, Size};
use peniko::Color;

use crate::spec::{AxisSpec, CardSpec, DotStyle, FontChoice};

/// Offset between the grid edge and its axis index labels, in logical pixels.
///
/// Live hosts apply the same offset as padding when axis labels are shown,
/// so the card and the on-screen grid line up.
pub const GRID_AXIS_OFFSET: f64 = 16.0;

const CARD_PADDING: f64 = 48.0;
const MIN_CONTENT_WIDTH: f64 = 320.0;
const TITLE_SIZE: f64 = 28.0;
const PROGRESS_SIZE: f64 = 16.0;
const PERCENT_SIZE: f64 = 14.0;
const FOOTER_SIZE: f64 = 13.0;
const AXIS_SIZE: f64 = 9.0;
const TITLE_GAP: f64 = 28.0;
const GRID_GAP: f64 = 32.0;
const LINE_GAP: f64 = 10.0;
const FOOTER_GAP: f64 = 24.0;
const FLAG_SIZE: f64 = 14.0;
const FLAG_TEXT_GAP: f64 = 6.0;
// Rainbow cells are rounded squares; the corner radius tracks the dot size.
const ROUNDED_RADIUS_RATIO: f64 = 0.2;

/// A decoded RGBA8 bitmap, used for footer flag icons.
#[derive(Clone, PartialEq, Eq)]
pub struct ImageData {
    width: u32,
    height: u32,
    rgba: Vec<u8>,
}

impl ImageData {
    /// Wraps raw RGBA8 pixels.
    ///
    /// `rgba` must hold exactly `width × height × 4` bytes.
    pub fn new(width: u32, height: u32, rgba: Vec<u8>) -> Result<Self, ImageDataError> {
        let expected = width as usize * height as usize * 4;
        if rgba.len() != expected {
            return Err(ImageDataError {
                width,
                height,
                expected,
                actual: rgba.len(),
            });
        }
        Ok(Self {
            width,
            height,
            rgba,
        })
    }

    /// Returns the width in pixels.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Returns the height in pixels.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns the RGBA8 pixel bytes, row-major.
    #[must_use]
    pub fn rgba(&self) -> &[u8] {
        &self.rgba
    }
}

impl fmt::Debug for ImageData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImageData")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("bytes", &self.rgba.len())
            .finish()
    }
}

/// Error returned when raw pixel bytes do not match the declared dimensions.
#[derive(Clone, PartialEq, Eq)]
pub struct ImageDataError {
    /// Declared width in pixels.
    pub width: u32,
    /// Declared height in pixels.
    pub height: u32,
    /// Byte count the dimensions require.
    pub expected: usize,
    /// Byte count actually supplied.
    pub actual: usize,
}

impl fmt::Debug for ImageDataError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ImageDataError {{ width: {}, height: {}, expected: {}, actual: {} }}",
            self.width, self.height, self.expected, self.actual
        )
    }
}

impl fmt::Display for ImageDataError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}x{} RGBA image needs {} bytes, got {}",
            self.width, self.height, self.expected, self.actual
        )
    }
}

impl core::error::Error for ImageDataError {}

/// Horizontal interpretation of a text item's anchor point.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAlign {
    /// The anchor is the left edge of the line.
    Left,
    /// The anchor is the horizontal center of the line.
    Center,
}

/// A line of text, positioned by baseline anchor.
#[derive(Clone, Debug, PartialEq)]
pub struct TextItem {
    /// The text to draw.
    pub content: String,
    /// Baseline anchor; X is interpreted per `align`.
    pub anchor: Point,
    /// How `anchor.x` relates to the drawn line.
    pub align: TextAlign,
    /// Font size in logical pixels.
    pub size: f64,
    /// Fill color.
    pub color: Color,
    /// Optional icon drawn before the text, participating in centering.
    pub icon: Option<IconSlot>,
}

/// An icon attached to a [`TextItem`].
#[derive(Clone, Debug, PartialEq)]
pub struct IconSlot {
    /// Decoded icon pixels.
    pub image: ImageData,
    /// Rendered (square) icon size in logical pixels.
    pub size: f64,
    /// Gap between the icon and the text.
    pub gap: f64,
}

/// One drawable piece of a card.
#[derive(Clone, Debug, PartialEq)]
pub enum CardItem {
    /// A solid circle (classic dots).
    Circle {
        /// Center point.
        center: Point,
        /// Radius.
        radius: f64,
        /// Fill color.
        color: Color,
    },
    /// A solid rounded rectangle (rainbow dots).
    RoundedRect {
        /// Bounding rectangle.
        rect: Rect,
        /// Uniform corner radius.
        radius: f64,
        /// Fill color.
        color: Color,
    },
    /// A line of text.
    Text(TextItem),
}

/// The deterministic output of [`build_card_scene`]: a sized, scaled display
/// list ready for rasterization.
///
/// Coordinates are in logical pixels; the rasterizer multiplies everything by
/// `scale` to reach device pixels. Two scenes built from equal specs compare
/// equal.
#[derive(Clone, Debug, PartialEq)]
pub struct CardScene {
    /// Logical card size.
    pub size: Size,
    /// Device-pixel multiplier.
    pub scale: f64,
    /// Background fill behind all items.
    pub background: Color,
    /// Font family all text items draw with.
    pub font: FontChoice,
    /// Draw items in paint order.
    pub items: Vec<CardItem>,
}

impl CardScene {
    /// Returns the output width in device pixels, at least one.
    #[must_use]
    #[allow(
        clippy::cast_possible_truncation,
        reason = "card dimensions are bounded by the export clamps, far below u32 range"
    )]
    pub fn pixel_width(&self) -> u32 {
        (self.size.width * self.scale).ceil().max(1.0) as u32
    }

    /// Returns the output height in device pixels, at least one.
    #[must_use]
    #[allow(
        clippy::cast_possible_truncation,
        reason = "card dimensions are bounded by the export clamps, far below u32 range"
    )]
    pub fn pixel_height(&self) -> u32 {
        (self.size.height * self.scale).ceil().max(1.0) as u32
    }
}

/// Lays out a complete card from a spec.
///
/// The composition, top to bottom: title, the dot grid (with axis index
/// labels when [`CardSpec::axis`] is set), the progress line, the percent
/// line, and an optional footer with an optional flag icon. The card is as
/// wide as the grid plus margins, with a floor so short grids still carry
/// their text.
///
/// Building a scene never fails and reads nothing beyond its [`CardSpec`]:
/// asset loading and text measurement belong to the rasterizer.
#[must_use]
pub fn build_card_scene(spec: &CardSpec) -> CardScene {
    let text_color = spec.text_color.unwrap_or(spec.theme.text);
    let muted_color = spec.muted_color.unwrap_or(spec.theme.muted);
    let background = spec.background.unwrap_or(spec.theme.surface);
    let scale = if spec.scale.is_finite() && spec.scale > 0.0 {
        spec.scale
    } else {
        1.0
    };

    let per_row = spec.per_row.max(1);
    let rows = spec.rows();
    let cell = spec.dot_size + spec.gap;
    let grid_w = f64::from(per_row) * spec.dot_size + f64::from(per_row - 1) * spec.gap;
    let grid_h = f64::from(rows) * spec.dot_size + f64::from(rows - 1) * spec.gap;
    let axis_pad = if spec.axis.is_some() {
        GRID_AXIS_OFFSET
    } else {
        0.0
    };

    let content_w = (grid_w + axis_pad).max(MIN_CONTENT_WIDTH);
    let width = content_w + 2.0 * CARD_PADDING;
    let center_x = width / 2.0;

    let mut items = Vec::new();
    let mut y = CARD_PADDING;

    y += TITLE_SIZE;
    if !spec.title.is_empty() {
        items.push(CardItem::Text(TextItem {
            content: spec.title.clone(),
            anchor: Point::new(center_x, y),
            align: TextAlign::Center,
            size: TITLE_SIZE,
            color: text_color,
            icon: None,
        }));
    }
    y += TITLE_GAP + axis_pad;

    let grid_top = y;
    let grid_left = CARD_PADDING + (content_w - axis_pad - grid_w) / 2.0 + axis_pad;

    for index in 0..spec.total {
        let row = index / u64::from(per_row);
        let col = index % u64::from(per_row);
        let x = grid_left + col as f64 * cell;
        let cy = grid_top + row as f64 * cell;
        let rect = Rect::new(x, cy, x + spec.dot_size, cy + spec.dot_size);
        let color = spec.dot_style.cell_color(&spec.theme, index, spec.filled);
        items.push(match spec.dot_style {
            DotStyle::Classic => CardItem::Circle {
                center: rect.center(),
                radius: spec.dot_size / 2.0,
                color,
            },
            DotStyle::Rainbow => CardItem::RoundedRect {
                rect,
                radius: spec.dot_size * ROUNDED_RADIUS_RATIO,
                color,
            },
        });
    }

    if let Some(axis) = spec.axis {
        push_axis_labels(&mut items, spec, axis, grid_left, grid_top, cell, rows);
    }

    y += grid_h + GRID_GAP;

    y += PROGRESS_SIZE;
    if !spec.progress_text.is_empty() {
        items.push(CardItem::Text(TextItem {
            content: spec.progress_text.clone(),
            anchor: Point::new(center_x, y),
            align: TextAlign::Center,
            size: PROGRESS_SIZE,
            color: text_color,
            icon: None,
        }));
    }

    y += LINE_GAP + PERCENT_SIZE;
    if !spec.percent_text.is_empty() {
        items.push(CardItem::Text(TextItem {
            content: spec.percent_text.clone(),
            anchor: Point::new(center_x, y),
            align: TextAlign::Center,
            size: PERCENT_SIZE,
            color: muted_color,
            icon: None,
        }));
    }

    if spec.footer_text.is_some() || spec.footer_flag.is_some() {
        y += FOOTER_GAP + FOOTER_SIZE.max(FLAG_SIZE);
        items.push(CardItem::Text(TextItem {
            content: spec.footer_text.clone().unwrap_or_default(),
            anchor: Point::new(center_x, y),
            align: TextAlign::Center,
            size: FOOTER_SIZE,
            color: muted_color,
            icon: spec.footer_flag.clone().map(|image| IconSlot {
                image,
                size: FLAG_SIZE,
                gap: FLAG_TEXT_GAP,
            }),
        }));
    }

    y += CARD_PADDING;

    CardScene {
        size: Size::new(width, y),
        scale,
        background,
        font: spec.font,
        items,
    }
}

fn push_axis_labels(
    items: &mut Vec<CardItem>,
    spec: &CardSpec,
    axis: AxisSpec,
    grid_left: f64,
    grid_top: f64,
    cell: f64,
    rows: u32,
) {
    let per_row = spec.per_row.max(1);
    let color = spec.theme.axis_text;

    for col in 0..per_row {
        if !AxisSpec::labels_index(axis.column_step, col, per_row) {
            continue;
        }
        let cx = grid_left + f64::from(col) * cell + spec.dot_size / 2.0;
        items.push(CardItem::Text(TextItem {
            content: (col + 1).to_string(),
            anchor: Point::new(cx, grid_top - GRID_AXIS_OFFSET + AXIS_SIZE),
            align: TextAlign::Center,
            size: AXIS_SIZE,
            color,
            icon: None,
        }));
    }

    for row in 0..rows {
        if !AxisSpec::labels_index(axis.row_step, row, rows) {
            continue;
        }
        let cy = grid_top + f64::from(row) * cell + spec.dot_size / 2.0;
        items.push(CardItem::Text(TextItem {
            content: (row + 1).to_string(),
            anchor: Point::new(grid_left - GRID_AXIS_OFFSET, cy + AXIS_SIZE * 0.4),
            align: TextAlign::Left,
            size: AXIS_SIZE,
            color,
            icon: None,
        }));
    }
}
