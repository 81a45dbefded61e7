// Copyright 2025 the DotSpan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Canonical card builds shared by the pipeline tests.

use chrono::NaiveDate;
use dotspan_card::{AxisSpec, CardScene, CardSpec, DotStyle, build_card_scene};
use dotspan_grid::{DotMetrics, ViewMode, ViewState};
use dotspan_profile::UiStrings;
use kurbo::Size;

/// Resolves a view and assembles the export card the way a host does.
///
/// This is the export path end to end: resolve the view for the profile
/// inputs, solve dot metrics for the measured area, then fill a card spec
/// with the shared string templates. Months views get axis labels, matching
/// the live grid.
pub fn export_card(
    mode: ViewMode,
    style: DotStyle,
    dob: Option<NaiveDate>,
    today: NaiveDate,
    expectancy: f64,
    area: Size,
) -> (ViewState, CardScene) {
    let view = ViewState::resolve(mode, dob, today, expectancy);
    let metrics = DotMetrics::solve(area, &view, 1.0);
    let strings = UiStrings::EN;

    let mut spec = CardSpec::new(view.total_units, view.units_passed, view.per_row, style);
    spec.dot_size = metrics.dot_size;
    spec.gap = metrics.gap;
    spec.title = strings.view_title(mode).to_owned();
    spec.progress_text = strings.format_progress(mode, view.units_passed, view.total_units);
    spec.percent_text = format!("{}%", view.percent);
    spec.footer_text = Some(strings.format_life_expectancy(expectancy));
    if mode == ViewMode::Months {
        spec.axis = Some(AxisSpec {
            column_step: view.column_step,
            row_step: view.row_step,
        });
    }
    (view, build_card_scene(&spec))
}
