// Copyright 2025 the DotSpan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use dotspan_grid::ViewMode;

/// Text the progress card and export surfaces render.
///
/// Only strings the headless pipeline consumes are carried here; drawer
/// labels and option captions stay with the host UI. Templates use
/// `{placeholder}` markers filled in by the formatting helpers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UiStrings {
    /// Application title, used in print-document titles.
    pub app_title: &'static str,
    /// Card title for the weeks view.
    pub life_in_weeks: &'static str,
    /// Card title for the months view.
    pub life_in_months: &'static str,
    /// Card title for the years view.
    pub life_in_years: &'static str,
    /// Weeks progress template with `{current}` and `{total}` placeholders.
    pub weeks_progress: &'static str,
    /// Months progress template with `{current}` and `{total}` placeholders.
    pub months_progress: &'static str,
    /// Years progress template with `{current}` and `{total}` placeholders.
    pub years_progress: &'static str,
    /// Footer template with a `{years}` placeholder.
    pub life_expectancy_label: &'static str,
}

impl UiStrings {
    /// English strings.
    pub const EN: Self = Self {
        app_title: "Life in Dots",
        life_in_weeks: "Life in Weeks",
        life_in_months: "Life in Months",
        life_in_years: "Life in Years",
        weeks_progress: "Weeks: {current}/{total}",
        months_progress: "Months: {current}/{total}",
        years_progress: "Years: {current}/{total}",
        life_expectancy_label: "Life Expectancy {years}/YEARS",
    };

    /// Returns the card title for a view.
    #[must_use]
    pub fn view_title(&self, mode: ViewMode) -> &'static str {
        match mode {
            ViewMode::Weeks => self.life_in_weeks,
            ViewMode::Months => self.life_in_months,
            ViewMode::Years => self.life_in_years,
        }
    }

    /// Formats the progress line for a view, e.g. `Weeks: 1826/4160`.
    #[must_use]
    pub fn format_progress(&self, mode: ViewMode, current: u64, total: u64) -> String {
        let template = match mode {
            ViewMode::Weeks => self.weeks_progress,
            ViewMode::Months => self.months_progress,
            ViewMode::Years => self.years_progress,
        };
        template
            .replace("{current}", &current.to_string())
            .replace("{total}", &total.to_string())
    }

    /// Formats the life-expectancy footer line.
    ///
    /// Whole-number years print without a trailing `.0`, so the default 80
    /// reads `80` rather than `80.0`.
    #[must_use]
    pub fn format_life_expectancy(&self, years: f64) -> String {
        self.life_expectancy_label.replace("{years}", &years.to_string())
    }
}

impl Default for UiStrings {
    fn default() -> Self {
        Self::EN
    }
}
