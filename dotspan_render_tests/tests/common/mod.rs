// Copyright 2025 the DotSpan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared helpers for the pipeline integration tests.

#![allow(
    missing_docs,
    reason = "Integration-test helper module; not part of the public API."
)]

use dotspan_card::{CardItem, CardScene};
use dotspan_raster::{CardBitmap, FontSet, render_card};
use kurbo::Point;
use peniko::Color;

pub(crate) fn render(scene: &CardScene) -> CardBitmap {
    render_card(scene, &FontSet::new()).expect("card scenes stay well inside the backend limits")
}

/// Reads the device pixel under a logical scene point.
#[allow(
    clippy::cast_possible_truncation,
    reason = "probe coordinates are small positive integers by construction"
)]
#[allow(dead_code, reason = "not every test binary probes pixels")]
pub(crate) fn probe(bitmap: &CardBitmap, scene: &CardScene, point: Point) -> [u8; 4] {
    let x = (point.x * scene.scale).round() as u32;
    let y = (point.y * scene.scale).round() as u32;
    bitmap
        .pixel(x, y)
        .expect("probe points stay inside the bitmap")
}

#[allow(dead_code, reason = "not every test binary compares colors")]
pub(crate) fn rgba(color: Color) -> [u8; 4] {
    let c = color.to_rgba8();
    [c.r, c.g, c.b, c.a]
}

/// Collects every dot cell of a scene in paint order, as center plus fill.
#[allow(dead_code, reason = "not every test binary inspects cells")]
pub(crate) fn dot_cells(scene: &CardScene) -> Vec<(Point, [u8; 4])> {
    scene
        .items
        .iter()
        .filter_map(|item| match item {
            CardItem::Circle { center, color, .. } => Some((*center, rgba(*color))),
            CardItem::RoundedRect { rect, color, .. } => Some((rect.center(), rgba(*color))),
            CardItem::Text(_) => None,
        })
        .collect()
}
