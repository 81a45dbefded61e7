// Copyright 2025 the DotSpan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use chrono::NaiveDate;
#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `round`

use dotspan_calendar::{months_between, weeks_between, years_between};

use crate::progress::Progress;

/// Default life expectancy in years when no country or custom value applies.
pub const DEFAULT_LIFE_EXPECTANCY_YEARS: f64 = 80.0;

/// Lowest accepted life expectancy in years.
pub const MIN_LIFE_EXPECTANCY_YEARS: f64 = 1.0;

/// Highest accepted life expectancy in years.
pub const MAX_LIFE_EXPECTANCY_YEARS: f64 = 120.0;

/// Default gap between dots as a fraction of the dot diameter.
///
/// Views that do not override the ratio (the weeks view) use this value.
pub const DEFAULT_GAP_RATIO: f64 = 0.5;

/// Clamps a life-expectancy value into the accepted `[1, 120]` year range.
///
/// Non-finite inputs fall back to [`DEFAULT_LIFE_EXPECTANCY_YEARS`].
#[must_use]
pub fn clamp_expectancy(years: f64) -> f64 {
    if !years.is_finite() {
        return DEFAULT_LIFE_EXPECTANCY_YEARS;
    }
    years.clamp(MIN_LIFE_EXPECTANCY_YEARS, MAX_LIFE_EXPECTANCY_YEARS)
}

/// Grid granularity: what one dot stands for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum ViewMode {
    /// One dot per week of life, 52 per row.
    #[default]
    Weeks,
    /// One dot per month of life, 12 per row.
    Months,
    /// One dot per year of life, 8 per row.
    Years,
}

/// How dot size is derived from the available area.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Fit {
    /// Constrain by both width and height so the whole grid fits without
    /// scrolling.
    #[default]
    Both,
    /// Constrain by width only; the grid may overflow vertically and scroll.
    Width,
}

/// Fully resolved state for one grid rendering: shape, progress, and layout
/// policy.
///
/// A `ViewState` is a value — it is recomputed from its inputs on every
/// relevant change and never persisted. [`ViewState::resolve`] is the only
/// constructor.
#[derive(Clone, Debug, PartialEq)]
pub struct ViewState {
    /// Grid column count.
    pub per_row: u32,
    /// Stride at which column index labels are drawn.
    pub column_step: u32,
    /// Stride at which row index labels are drawn.
    pub row_step: u32,
    /// Units per year of life for this granularity.
    pub units_per_year: u32,
    /// Total grid cells over the expectancy span, at least one.
    pub total_units: u64,
    /// Elapsed cells as of the resolve date, clamped into `[0, total_units]`.
    pub units_passed: u64,
    /// Rounded completion percentage, `0..=100`.
    pub percent: u8,
    /// Layout-fit policy for dot sizing.
    pub fit: Fit,
    /// Optional upper bound on the dot diameter.
    pub max_dot_size: Option<f64>,
    /// Gap between dots as a fraction of the dot diameter.
    pub gap_ratio: f64,
}

impl ViewState {
    /// Resolves the complete view state for a granularity.
    ///
    /// `total_units` is `round(expectancy_years) × units-per-year` (floored at
    /// one); `units_passed` is the matching calendar difference from `dob` to
    /// `today`, or zero when no birth date is set (the grid renders fully
    /// empty). Both are clamped through [`Progress::compute`].
    ///
    /// `today` is an explicit input so resolution is deterministic; callers
    /// normalize wall-clock time with [`dotspan_calendar::utc_date`] first.
    #[must_use]
    #[allow(
        clippy::cast_possible_truncation,
        reason = "expectancy is clamped to [1, 120] upstream, so the rounded year count fits i64"
    )]
    pub fn resolve(
        mode: ViewMode,
        dob: Option<NaiveDate>,
        today: NaiveDate,
        expectancy_years: f64,
    ) -> Self {
        let (units_per_year, per_row, column_step, row_step) = match mode {
            ViewMode::Weeks => (52, 52, 13, 5),
            ViewMode::Months => (12, 12, 3, 5),
            ViewMode::Years => (1, 8, 5, 1),
        };
        let (fit, max_dot_size, gap_ratio) = match mode {
            ViewMode::Weeks => (Fit::Both, None, DEFAULT_GAP_RATIO),
            ViewMode::Months => (Fit::Width, Some(60.0), 0.1),
            ViewMode::Years => (Fit::Width, None, 0.1),
        };

        let total_units = expectancy_years.round() as i64 * i64::from(units_per_year);
        let units_passed = match dob {
            Some(dob) => match mode {
                ViewMode::Weeks => weeks_between(dob, today),
                ViewMode::Months => months_between(dob, today),
                ViewMode::Years => years_between(dob, today),
            },
            None => 0,
        };
        let progress = Progress::compute(total_units, units_passed as i64);

        Self {
            per_row,
            column_step,
            row_step,
            units_per_year,
            total_units: progress.total_units,
            units_passed: progress.units_passed,
            percent: progress.percent,
            fit,
            max_dot_size,
            gap_ratio,
        }
    }

    /// Returns the grid row count: `ceil(total_units / per_row)`, at least one.
    #[must_use]
    #[allow(
        clippy::cast_possible_truncation,
        reason = "row counts stay tiny: total units top out at 120 years of weeks"
    )]
    pub fn rows(&self) -> u32 {
        let per_row = u64::from(self.per_row.max(1));
        self.total_units.div_ceil(per_row).max(1) as u32
    }

    /// Returns the progress record embedded in this state.
    #[must_use]
    pub fn progress(&self) -> Progress {
        Progress {
            percent: self.percent,
            units_passed: self.units_passed,
            total_units: self.total_units,
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::{Fit, ViewMode, ViewState, clamp_expectancy};

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn weeks_view_shape() {
        let v = ViewState::resolve(ViewMode::Weeks, None, date(2025, 6, 15), 80.0);
        assert_eq!(v.per_row, 52);
        assert_eq!(v.column_step, 13);
        assert_eq!(v.row_step, 5);
        assert_eq!(v.total_units, 4160);
        assert_eq!(v.fit, Fit::Both);
        assert_eq!(v.max_dot_size, None);
        assert_eq!(v.rows(), 80);
    }

    #[test]
    fn months_view_shape() {
        let v = ViewState::resolve(ViewMode::Months, None, date(2025, 6, 15), 80.0);
        assert_eq!(v.per_row, 12);
        assert_eq!(v.column_step, 3);
        assert_eq!(v.row_step, 5);
        assert_eq!(v.total_units, 960);
        assert_eq!(v.fit, Fit::Width);
        assert_eq!(v.max_dot_size, Some(60.0));
        assert!((v.gap_ratio - 0.1).abs() < 1e-12);
        assert_eq!(v.rows(), 80);
    }

    #[test]
    fn years_view_shape() {
        let v = ViewState::resolve(ViewMode::Years, None, date(2025, 6, 15), 80.0);
        assert_eq!(v.per_row, 8);
        assert_eq!(v.column_step, 5);
        assert_eq!(v.row_step, 1);
        assert_eq!(v.total_units, 80);
        assert_eq!(v.fit, Fit::Width);
        assert_eq!(v.rows(), 10);
    }

    #[test]
    fn total_units_ignores_birth_date() {
        let today = date(2025, 6, 15);
        let without = ViewState::resolve(ViewMode::Weeks, None, today, 80.0);
        let with = ViewState::resolve(ViewMode::Weeks, Some(date(1990, 6, 15)), today, 80.0);
        assert_eq!(without.total_units, 4160);
        assert_eq!(with.total_units, 4160);
    }

    #[test]
    fn missing_birth_date_renders_empty() {
        let v = ViewState::resolve(ViewMode::Months, None, date(2025, 6, 15), 80.0);
        assert_eq!(v.units_passed, 0);
        assert_eq!(v.percent, 0);
    }

    #[test]
    fn lifetime_weeks_end_to_end() {
        let v = ViewState::resolve(
            ViewMode::Weeks,
            Some(date(1990, 6, 15)),
            date(2025, 6, 15),
            80.0,
        );
        assert_eq!(v.units_passed, 1826);
        assert_eq!(v.total_units, 4160);
        assert_eq!(v.percent, 44);
    }

    #[test]
    fn expectancy_rounds_before_multiplying() {
        let v = ViewState::resolve(ViewMode::Weeks, None, date(2025, 6, 15), 79.6);
        assert_eq!(v.total_units, 4160);
        let v = ViewState::resolve(ViewMode::Weeks, None, date(2025, 6, 15), 79.4);
        assert_eq!(v.total_units, 79 * 52);
    }

    #[test]
    fn future_birth_date_clamps_to_zero() {
        let v = ViewState::resolve(
            ViewMode::Weeks,
            Some(date(2030, 1, 1)),
            date(2025, 6, 15),
            80.0,
        );
        assert_eq!(v.units_passed, 0);
        assert_eq!(v.percent, 0);
    }

    #[test]
    fn expectancy_clamp_bounds() {
        assert!((clamp_expectancy(0.0) - 1.0).abs() < 1e-12);
        assert!((clamp_expectancy(500.0) - 120.0).abs() < 1e-12);
        assert!((clamp_expectancy(80.0) - 80.0).abs() < 1e-12);
        assert!((clamp_expectancy(f64::NAN) - 80.0).abs() < 1e-12);
    }
}
