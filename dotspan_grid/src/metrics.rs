// Copyright 2025 the DotSpan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Size;
#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `round`

use crate::view::{Fit, ViewState};

/// Concrete dot diameter and inter-dot gap, in logical pixels.
///
/// Both values are rounded to two decimal places so repeated solves over a
/// jittering container size produce stable output.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DotMetrics {
    /// Dot diameter, always at least one pixel.
    pub dot_size: f64,
    /// Gap between adjacent dots, `dot_size × gap_ratio`.
    pub gap: f64,
}

/// Rounds to two decimal places, half away from zero.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

impl DotMetrics {
    /// Metrics used when the grid shape is degenerate (zero rows or columns).
    pub const FALLBACK: Self = Self {
        dot_size: 10.38,
        gap: 5.0,
    };

    /// Returns the per-cell pitch: dot diameter plus gap.
    #[must_use]
    pub fn cell(&self) -> f64 {
        self.dot_size + self.gap
    }

    /// Solves metrics for a resolved view over a measured area.
    ///
    /// Convenience wrapper over [`DotMetrics::solve_raw`] that pulls the grid
    /// shape and fit policy out of the [`ViewState`].
    #[must_use]
    pub fn solve(area: Size, view: &ViewState, size_scale: f64) -> Self {
        Self::solve_raw(
            area,
            view.per_row,
            view.rows(),
            size_scale,
            view.fit,
            view.max_dot_size,
            view.gap_ratio,
        )
    }

    /// Solves the dot diameter and gap that make a `per_row × rows` grid fill
    /// the available area without overflowing.
    ///
    /// The solve has three regimes:
    /// 1. A degenerate shape (`per_row == 0 || rows == 0`) returns
    ///    [`DotMetrics::FALLBACK`] verbatim.
    /// 2. An unmeasured area (either extent not positive, as before the first
    ///    layout pass) returns the fallback diameter scaled by `size_scale`,
    ///    so there is a usable render before the host has measured itself.
    /// 3. Otherwise, two candidate diameters would exactly fill the width or
    ///    the height, accounting for the `count − 1` gaps of
    ///    `gap_ratio × dot` between cells. [`Fit::Width`] takes the width
    ///    candidate alone; [`Fit::Both`] takes the smaller of the two.
    ///
    /// In regimes 2 and 3 the diameter is scaled by `size_scale`, floored at
    /// one pixel, then capped by `max_dot_size` when present; the gap is
    /// `dot × gap_ratio`; both are rounded to two decimals.
    #[must_use]
    pub fn solve_raw(
        area: Size,
        per_row: u32,
        rows: u32,
        size_scale: f64,
        fit: Fit,
        max_dot_size: Option<f64>,
        gap_ratio: f64,
    ) -> Self {
        if per_row == 0 || rows == 0 {
            return Self::FALLBACK;
        }

        if area.width <= 0.0 || area.height <= 0.0 {
            let mut dot = (Self::FALLBACK.dot_size * size_scale).max(1.0);
            if let Some(max) = max_dot_size {
                dot = dot.min(max);
            }
            return Self {
                dot_size: round2(dot),
                gap: round2(dot * gap_ratio),
            };
        }

        let width_dot = area.width / (f64::from(per_row) + gap_ratio * f64::from(per_row - 1));
        let height_dot = area.height / (f64::from(rows) + gap_ratio * f64::from(rows - 1));
        let base = match fit {
            Fit::Width => width_dot,
            Fit::Both => width_dot.min(height_dot),
        };

        let mut dot = (base * size_scale).max(1.0);
        if let Some(max) = max_dot_size {
            dot = dot.min(max);
        }
        Self {
            dot_size: round2(dot),
            gap: round2(dot * gap_ratio),
        }
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Size;

    use super::{DotMetrics, Fit};

    #[test]
    fn degenerate_shape_returns_fallback_verbatim() {
        let m = DotMetrics::solve_raw(
            Size::new(800.0, 600.0),
            0,
            20,
            3.0,
            Fit::Both,
            Some(4.0),
            0.1,
        );
        assert_eq!(m, DotMetrics::FALLBACK);
        // Neither the scale nor the cap applies in this regime.
        assert!((m.dot_size - 10.38).abs() < 1e-9);
        assert!((m.gap - 5.0).abs() < 1e-9);
    }

    #[test]
    fn unmeasured_area_scales_fallback() {
        let m = DotMetrics::solve_raw(Size::ZERO, 52, 80, 1.0, Fit::Both, None, 0.5);
        assert!((m.dot_size - 10.38).abs() < 1e-9);
        assert!((m.gap - 5.19).abs() < 1e-9);

        let m = DotMetrics::solve_raw(Size::ZERO, 52, 80, 2.0, Fit::Both, None, 0.5);
        assert!((m.dot_size - 20.76).abs() < 1e-9);

        let m = DotMetrics::solve_raw(Size::ZERO, 12, 80, 1.0, Fit::Width, Some(8.0), 0.1);
        assert!((m.dot_size - 8.0).abs() < 1e-9);
        assert!((m.gap - 0.8).abs() < 1e-9);
    }

    #[test]
    fn fit_both_respects_both_bounds() {
        let (per_row, rows, g) = (52_u32, 20_u32, 0.5);
        let (w, h) = (900.0, 400.0);
        let m = DotMetrics::solve_raw(Size::new(w, h), per_row, rows, 1.0, Fit::Both, None, g);

        let width_span = m.dot_size * (f64::from(per_row) + g * f64::from(per_row - 1));
        let height_span = m.dot_size * (f64::from(rows) + g * f64::from(rows - 1));
        // Rounding down to two decimals keeps both spans within the area.
        assert!(width_span <= w + 1e-6, "grid must not overflow the width");
        assert!(height_span <= h + 1e-6, "grid must not overflow the height");

        // The result equals the binding candidate (here the width, since
        // 900 / 77.5 < 400 / 29.5).
        let width_dot = w / (f64::from(per_row) + g * f64::from(per_row - 1));
        assert!((m.dot_size - (width_dot * 100.0).round() / 100.0).abs() < 1e-9);
    }

    #[test]
    fn fit_width_ignores_height() {
        let tall = DotMetrics::solve_raw(Size::new(600.0, 10_000.0), 12, 80, 1.0, Fit::Width, None, 0.1);
        let short = DotMetrics::solve_raw(Size::new(600.0, 1.0), 12, 80, 1.0, Fit::Width, None, 0.1);
        assert_eq!(tall, short);

        let width_dot: f64 = 600.0 / (12.0 + 0.1 * 11.0);
        assert!((tall.dot_size - (width_dot * 100.0).round() / 100.0).abs() < 1e-9);
    }

    #[test]
    fn max_dot_size_caps_after_scaling() {
        let m = DotMetrics::solve_raw(
            Size::new(6_000.0, 600.0),
            12,
            10,
            1.0,
            Fit::Width,
            Some(60.0),
            0.1,
        );
        assert!((m.dot_size - 60.0).abs() < 1e-9);
        assert!((m.gap - 6.0).abs() < 1e-9);
    }

    #[test]
    fn tiny_area_floors_at_one_pixel() {
        let m = DotMetrics::solve_raw(Size::new(3.0, 2.0), 52, 80, 1.0, Fit::Both, None, 0.5);
        assert!((m.dot_size - 1.0).abs() < 1e-9);
        assert!((m.gap - 0.5).abs() < 1e-9);
    }

    #[test]
    fn output_is_rounded_to_two_decimals() {
        let m = DotMetrics::solve_raw(Size::new(1000.0, 1000.0), 52, 80, 1.0, Fit::Both, None, 0.5);
        assert!((m.dot_size * 100.0 - (m.dot_size * 100.0).round()).abs() < 1e-9);
        assert!((m.gap * 100.0 - (m.gap * 100.0).round()).abs() < 1e-9);
    }

    #[test]
    fn single_row_grid_has_no_gap_term() {
        // With one row the height candidate divides by rows alone.
        let m = DotMetrics::solve_raw(Size::new(10_000.0, 30.0), 52, 1, 1.0, Fit::Both, None, 0.5);
        assert!((m.dot_size - 30.0).abs() < 1e-9);
    }
}
