// Copyright 2025 the DotSpan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for calendar arithmetic, view resolution, and metric solving.

use chrono::NaiveDate;
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use dotspan_calendar::{months_between, weeks_between, years_between};
use dotspan_grid::{DotMetrics, ViewMode, ViewState};
use kurbo::Size;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

fn bench_grid(c: &mut Criterion) {
    let mut group = c.benchmark_group("dotspan_grid");
    let dob = date(1990, 6, 15);
    let today = date(2025, 6, 15);

    group.bench_function("weeks_between(35y)", |b| {
        b.iter(|| black_box(weeks_between(black_box(dob), black_box(today))));
    });
    group.bench_function("months_between(35y)", |b| {
        b.iter(|| black_box(months_between(black_box(dob), black_box(today))));
    });
    group.bench_function("years_between(35y)", |b| {
        b.iter(|| black_box(years_between(black_box(dob), black_box(today))));
    });

    for mode in [ViewMode::Weeks, ViewMode::Months, ViewMode::Years] {
        group.bench_function(format!("resolve({mode:?})"), |b| {
            b.iter(|| black_box(ViewState::resolve(black_box(mode), Some(dob), today, 80.0)));
        });
    }

    let view = ViewState::resolve(ViewMode::Weeks, Some(dob), today, 80.0);
    for &(w, h) in &[(390.0, 310.0), (780.0, 620.0), (1560.0, 1240.0)] {
        group.bench_function(format!("solve_metrics({w}x{h})"), |b| {
            b.iter(|| black_box(DotMetrics::solve(Size::new(w, h), black_box(&view), 1.0)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_grid);
criterion_main!(benches);
