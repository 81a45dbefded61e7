// Copyright 2025 the DotSpan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use chrono::NaiveDate;
use kurbo::Size;

use crate::metrics::DotMetrics;
use crate::view::{DEFAULT_LIFE_EXPECTANCY_YEARS, ViewMode, ViewState, clamp_expectancy};

/// Reactive owner of the grid inputs and their derived state.
///
/// `GridSession` holds the inputs that determine a grid rendering — birth
/// date, life expectancy, view mode, the measured container area, and a size
/// multiplier — and keeps the derived [`ViewState`] and [`DotMetrics`] in
/// step with them. Setters return early when a value is unchanged, so pushed
/// updates (a resize observer firing at high frequency, say) are idempotent
/// and recomputation happens only on real changes.
///
/// All derived state is a pure function of the inputs; the session adds no
/// behavior beyond change detection. "Today" is itself an explicit input, so
/// two sessions with equal inputs are interchangeable.
#[derive(Clone, Debug)]
pub struct GridSession {
    dob: Option<NaiveDate>,
    today: NaiveDate,
    expectancy_years: f64,
    mode: ViewMode,
    area: Size,
    size_scale: f64,
    generation: u64,
    view: ViewState,
    metrics: DotMetrics,
}

impl GridSession {
    /// Creates a session for the given resolve date.
    ///
    /// Initial inputs: no birth date, the default life expectancy, the weeks
    /// view, an unmeasured (zero) area, and a size scale of `1.0`.
    #[must_use]
    pub fn new(today: NaiveDate) -> Self {
        let dob = None;
        let expectancy_years = DEFAULT_LIFE_EXPECTANCY_YEARS;
        let mode = ViewMode::default();
        let area = Size::ZERO;
        let size_scale = 1.0;
        let view = ViewState::resolve(mode, dob, today, expectancy_years);
        let metrics = DotMetrics::solve(area, &view, size_scale);
        Self {
            dob,
            today,
            expectancy_years,
            mode,
            area,
            size_scale,
            generation: 0,
            view,
            metrics,
        }
    }

    /// Returns the birth date, if set.
    #[must_use]
    pub fn dob(&self) -> Option<NaiveDate> {
        self.dob
    }

    /// Sets the birth date. `None` renders a fully empty grid.
    pub fn set_dob(&mut self, dob: Option<NaiveDate>) {
        if self.dob == dob {
            return;
        }
        self.dob = dob;
        self.recompute();
    }

    /// Returns the resolve date ("today").
    #[must_use]
    pub fn today(&self) -> NaiveDate {
        self.today
    }

    /// Sets the resolve date. Normally advanced once per civil day.
    pub fn set_today(&mut self, today: NaiveDate) {
        if self.today == today {
            return;
        }
        self.today = today;
        self.recompute();
    }

    /// Returns the life expectancy in years, after clamping.
    #[must_use]
    pub fn expectancy_years(&self) -> f64 {
        self.expectancy_years
    }

    /// Sets the life expectancy in years.
    ///
    /// The value is clamped into `[1, 120]` at this boundary; non-finite
    /// values fall back to the default expectancy.
    pub fn set_expectancy_years(&mut self, years: f64) {
        let years = clamp_expectancy(years);
        if (self.expectancy_years - years).abs() < f64::EPSILON {
            return;
        }
        self.expectancy_years = years;
        self.recompute();
    }

    /// Returns the view mode.
    #[must_use]
    pub fn view_mode(&self) -> ViewMode {
        self.mode
    }

    /// Sets the view mode.
    pub fn set_view_mode(&mut self, mode: ViewMode) {
        if self.mode == mode {
            return;
        }
        self.mode = mode;
        self.recompute();
    }

    /// Returns the measured container area.
    #[must_use]
    pub fn area(&self) -> Size {
        self.area
    }

    /// Pushes a new measured container area.
    ///
    /// This is the resize-observation entry point; it may be called at high
    /// frequency and is a no-op when the size is unchanged.
    pub fn set_area(&mut self, area: Size) {
        if self.area == area {
            return;
        }
        self.area = area;
        self.recompute();
    }

    /// Returns the size-scale multiplier.
    #[must_use]
    pub fn size_scale(&self) -> f64 {
        self.size_scale
    }

    /// Sets the size-scale multiplier applied to the solved dot diameter.
    ///
    /// Non-positive or non-finite values are ignored.
    pub fn set_size_scale(&mut self, scale: f64) {
        if !(scale > 0.0 && scale.is_finite()) {
            return;
        }
        if (self.size_scale - scale).abs() < f64::EPSILON {
            return;
        }
        self.size_scale = scale;
        self.recompute();
    }

    /// Returns the resolved view state for the current inputs.
    #[must_use]
    pub fn view_state(&self) -> &ViewState {
        &self.view
    }

    /// Returns the solved dot metrics for the current inputs.
    #[must_use]
    pub fn metrics(&self) -> DotMetrics {
        self.metrics
    }

    /// Returns the recompute generation.
    ///
    /// The counter increments once per effective input change; unchanged sets
    /// leave it untouched. Useful for verifying that pushed updates are not
    /// causing redundant work.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Snapshot of the session's inputs and derived state for debugging and
    /// inspection.
    #[must_use]
    pub fn debug_info(&self) -> GridSessionDebugInfo {
        GridSessionDebugInfo {
            dob: self.dob,
            today: self.today,
            expectancy_years: self.expectancy_years,
            mode: self.mode,
            area: self.area,
            size_scale: self.size_scale,
            generation: self.generation,
            view: self.view.clone(),
            metrics: self.metrics,
        }
    }

    fn recompute(&mut self) {
        self.generation += 1;
        self.view = ViewState::resolve(self.mode, self.dob, self.today, self.expectancy_years);
        self.metrics = DotMetrics::solve(self.area, &self.view, self.size_scale);
    }
}

/// Debug snapshot of a [`GridSession`].
#[derive(Clone, Debug)]
pub struct GridSessionDebugInfo {
    /// Birth date input.
    pub dob: Option<NaiveDate>,
    /// Resolve date input.
    pub today: NaiveDate,
    /// Clamped life expectancy input.
    pub expectancy_years: f64,
    /// View mode input.
    pub mode: ViewMode,
    /// Measured container area input.
    pub area: Size,
    /// Size-scale multiplier input.
    pub size_scale: f64,
    /// Recompute generation at the time of the snapshot.
    pub generation: u64,
    /// Derived view state.
    pub view: ViewState,
    /// Derived dot metrics.
    pub metrics: DotMetrics,
}
