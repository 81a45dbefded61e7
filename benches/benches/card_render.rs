// Copyright 2025 the DotSpan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for card layout, rasterization, and PNG encoding.

use chrono::NaiveDate;
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use dotspan_card::{CardSpec, DotStyle, build_card_scene};
use dotspan_export::encode_png;
use dotspan_grid::{DotMetrics, ViewMode, ViewState};
use dotspan_raster::{FontSet, render_card};
use kurbo::Size;

/// A full 80-year weeks card, the heaviest scene the app builds.
fn weeks_spec(style: DotStyle) -> CardSpec {
    let dob = NaiveDate::from_ymd_opt(1990, 6, 15).expect("valid date");
    let today = NaiveDate::from_ymd_opt(2025, 6, 15).expect("valid date");
    let view = ViewState::resolve(ViewMode::Weeks, Some(dob), today, 80.0);
    let metrics = DotMetrics::solve(Size::new(780.0, 620.0), &view, 1.0);

    let mut spec = CardSpec::new(view.total_units, view.units_passed, view.per_row, style);
    spec.dot_size = metrics.dot_size;
    spec.gap = metrics.gap;
    spec.title = "Life in Weeks".to_string();
    spec.progress_text = "Weeks: 1826/4160".to_string();
    spec.percent_text = "44%".to_string();
    spec
}

fn bench_card(c: &mut Criterion) {
    let mut group = c.benchmark_group("dotspan_card");
    group.sample_size(50);

    for style in [DotStyle::Classic, DotStyle::Rainbow] {
        let spec = weeks_spec(style);
        group.bench_function(format!("build_scene({style:?})"), |b| {
            b.iter(|| black_box(build_card_scene(black_box(&spec))));
        });
    }

    let fonts = FontSet::new();
    for &scale in &[1.0, 2.0] {
        let mut spec = weeks_spec(DotStyle::Classic);
        spec.scale = scale;
        let scene = build_card_scene(&spec);
        group.bench_function(format!("render(scale={scale})"), |b| {
            b.iter(|| black_box(render_card(black_box(&scene), &fonts).expect("renderable scene")));
        });
    }

    {
        let mut spec = weeks_spec(DotStyle::Classic);
        spec.scale = 1.0;
        let scene = build_card_scene(&spec);
        let bitmap = render_card(&scene, &fonts).expect("renderable scene");
        group.bench_function("encode_png", |b| {
            b.iter(|| black_box(encode_png(black_box(&bitmap)).expect("encodable bitmap")));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_card);
criterion_main!(benches);
