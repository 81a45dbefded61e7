// Copyright 2025 the DotSpan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;

use peniko::Color;

use crate::scene::ImageData;
use crate::theme::Theme;

/// Device-pixel multiplier for live export previews.
pub const SCALE_PREVIEW: f64 = 2.0;

/// Device-pixel multiplier for downloaded files.
pub const SCALE_DOWNLOAD: f64 = 3.0;

/// Device-pixel multiplier for print jobs.
pub const SCALE_PRINT: f64 = 4.0;

/// User-selectable export size multipliers: small, medium, large.
pub const EXPORT_SIZE_PRESETS: [f64; 3] = [0.85, 1.0, 1.2];

/// Dot rendering style.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum DotStyle {
    /// Solid circles in the theme's filled color.
    #[default]
    Classic,
    /// Rounded squares cycling through the theme's rainbow palette.
    Rainbow,
}

impl DotStyle {
    /// Returns the fill color for a cell.
    ///
    /// Cells at `index < filled` are elapsed: classic style uses the theme's
    /// solid fill, rainbow style cycles the palette by index. Later cells use
    /// the empty color.
    #[must_use]
    pub fn cell_color(self, theme: &Theme, index: u64, filled: u64) -> Color {
        if index >= filled {
            return theme.dot_empty;
        }
        match self {
            Self::Classic => theme.dot_filled,
            Self::Rainbow => theme.rainbow_color(index),
        }
    }
}

/// Font family preference for card text.
///
/// The card pipeline does not ship font files; embedders map the choice to
/// concrete font bytes when rasterizing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum FontChoice {
    /// A sans-serif family (Arial-class).
    #[default]
    Sans,
    /// A serif family (Georgia-class).
    Serif,
    /// A monospaced family (Courier-class).
    Mono,
}

impl FontChoice {
    /// Returns the CSS family stack the choice corresponds to.
    #[must_use]
    pub fn css_family(self) -> &'static str {
        match self {
            Self::Sans => "Arial, sans-serif",
            Self::Serif => "Georgia, serif",
            Self::Mono => "'Courier New', monospace",
        }
    }
}

/// Axis index labels drawn around the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AxisSpec {
    /// Stride at which column labels are drawn.
    pub column_step: u32,
    /// Stride at which row labels are drawn.
    pub row_step: u32,
}

impl AxisSpec {
    /// Returns whether the 0-based `index` out of `count` gets a label.
    ///
    /// Labels land on the first index, the last index, and every index whose
    /// 1-based position is a multiple of `step`.
    #[must_use]
    pub fn labels_index(step: u32, index: u32, count: u32) -> bool {
        if count == 0 {
            return false;
        }
        index == 0 || (step > 0 && (index + 1) % step == 0) || index == count - 1
    }
}

/// Dot diameter and gap after applying an export size preset.
///
/// The export surface lets users scale the on-screen metrics up or down;
/// the scaled diameter is clamped into `[2, 20]` and the gap into
/// `[0.5, 12]` so extreme presets still produce a legible card.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ExportSizing {
    /// Clamped dot diameter.
    pub dot_size: f64,
    /// Clamped gap.
    pub gap: f64,
}

impl ExportSizing {
    /// Scales live metrics by an export preset and clamps the result.
    #[must_use]
    pub fn scaled(dot_size: f64, gap: f64, size_scale: f64) -> Self {
        Self {
            dot_size: (dot_size * size_scale).clamp(2.0, 20.0),
            gap: (gap * size_scale).clamp(0.5, 12.0),
        }
    }
}

/// Complete description of one card rendering.
///
/// A `CardSpec` is ephemeral: it is assembled per export from the resolved
/// view state, the live metrics, and the user's export options, then handed
/// to [`crate::build_card_scene`]. Optional fields default to the theme.
#[derive(Clone, Debug)]
pub struct CardSpec {
    /// Total grid cells.
    pub total: u64,
    /// Elapsed cells, expected within `[0, total]`.
    pub filled: u64,
    /// Grid column count.
    pub per_row: u32,
    /// Dot rendering style.
    pub dot_style: DotStyle,
    /// Active palette.
    pub theme: Theme,
    /// Dot diameter in logical pixels.
    pub dot_size: f64,
    /// Gap between dots in logical pixels.
    pub gap: f64,
    /// Card title, drawn centered at the top.
    pub title: String,
    /// Progress line, for example "Weeks: 1826/4160".
    pub progress_text: String,
    /// Percent line, for example "44%".
    pub percent_text: String,
    /// Optional footer line.
    pub footer_text: Option<String>,
    /// Optional flag bitmap drawn before the footer text.
    pub footer_flag: Option<ImageData>,
    /// Device-pixel multiplier for the whole composition.
    pub scale: f64,
    /// Axis labels; `None` draws a bare grid.
    pub axis: Option<AxisSpec>,
    /// Background override; defaults to the theme surface.
    pub background: Option<Color>,
    /// Primary text color override.
    pub text_color: Option<Color>,
    /// Secondary text color override.
    pub muted_color: Option<Color>,
    /// Font family preference.
    pub font: FontChoice,
}

impl CardSpec {
    /// Creates a spec with the required grid inputs; everything else starts
    /// at its default (empty text, theme colors, preview scale, no axis).
    #[must_use]
    pub fn new(total: u64, filled: u64, per_row: u32, dot_style: DotStyle) -> Self {
        Self {
            total,
            filled,
            per_row,
            dot_style,
            theme: Theme::dotspan(),
            dot_size: 10.0,
            gap: 5.0,
            title: String::new(),
            progress_text: String::new(),
            percent_text: String::new(),
            footer_text: None,
            footer_flag: None,
            scale: SCALE_PREVIEW,
            axis: None,
            background: None,
            text_color: None,
            muted_color: None,
            font: FontChoice::default(),
        }
    }

    /// Returns the grid row count: `ceil(total / per_row)`, at least one.
    #[must_use]
    #[allow(
        clippy::cast_possible_truncation,
        reason = "row counts stay tiny: total units top out at 120 years of weeks"
    )]
    pub fn rows(&self) -> u32 {
        let per_row = u64::from(self.per_row.max(1));
        self.total.div_ceil(per_row).max(1) as u32
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;
    use alloc::vec::Vec;

    use super::{AxisSpec, CardSpec, DotStyle, ExportSizing};
    use crate::theme::Theme;

    #[test]
    fn classic_cells_split_filled_and_empty() {
        let theme = Theme::dotspan();
        let style = DotStyle::Classic;
        assert_eq!(style.cell_color(&theme, 0, 10), theme.dot_filled);
        assert_eq!(style.cell_color(&theme, 9, 10), theme.dot_filled);
        assert_eq!(style.cell_color(&theme, 10, 10), theme.dot_empty);
        assert_eq!(style.cell_color(&theme, 0, 0), theme.dot_empty);
    }

    #[test]
    fn rainbow_cells_cycle_by_index() {
        let theme = Theme::dotspan();
        let style = DotStyle::Rainbow;
        let first = style.cell_color(&theme, 0, 20);
        let wrapped = style.cell_color(&theme, 16, 20);
        assert_eq!(first, wrapped);
        assert_ne!(first, style.cell_color(&theme, 1, 20));
        // Unfilled cells ignore the cycle.
        assert_eq!(style.cell_color(&theme, 18, 18), theme.dot_empty);
    }

    #[test]
    fn axis_rule_keeps_first_last_and_strides() {
        // per_row = 12, step = 3: indices 0, 2, 5, 8, 11 (1-based 1, 3, 6, 9, 12).
        let hits: Vec<u32> = (0..12)
            .filter(|&i| AxisSpec::labels_index(3, i, 12))
            .collect();
        assert_eq!(hits, vec![0, 2, 5, 8, 11]);

        // Step 5 over 8 rows: 0, 4, 7.
        let hits: Vec<u32> = (0..8)
            .filter(|&i| AxisSpec::labels_index(5, i, 8))
            .collect();
        assert_eq!(hits, vec![0, 4, 7]);

        // Step 1 labels everything.
        assert!((0..10).all(|i| AxisSpec::labels_index(1, i, 10)));
    }

    #[test]
    fn export_sizing_clamps_extremes() {
        let s = ExportSizing::scaled(10.0, 5.0, 1.0);
        assert!((s.dot_size - 10.0).abs() < 1e-9);
        assert!((s.gap - 5.0).abs() < 1e-9);

        let s = ExportSizing::scaled(60.0, 40.0, 1.2);
        assert!((s.dot_size - 20.0).abs() < 1e-9);
        assert!((s.gap - 12.0).abs() < 1e-9);

        let s = ExportSizing::scaled(1.0, 0.1, 0.85);
        assert!((s.dot_size - 2.0).abs() < 1e-9);
        assert!((s.gap - 0.5).abs() < 1e-9);
    }

    #[test]
    fn rows_round_up() {
        let spec = CardSpec::new(4160, 0, 52, DotStyle::Classic);
        assert_eq!(spec.rows(), 80);
        let spec = CardSpec::new(53, 0, 52, DotStyle::Classic);
        assert_eq!(spec.rows(), 2);
        let spec = CardSpec::new(0, 0, 52, DotStyle::Classic);
        assert_eq!(spec.rows(), 1);
    }
}
