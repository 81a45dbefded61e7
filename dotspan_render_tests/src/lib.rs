// Copyright 2025 the DotSpan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Development-only end-to-end tests for the DotSpan card pipeline.
//!
//! The cases here drive the full chain a host runs for an export: resolve the
//! view from profile inputs, solve dot metrics for a measured area, build the
//! card scene, raster it on the CPU, and encode the result. Assertions probe
//! scene geometry and individual pixels, so the suite needs no blessed
//! snapshot files.
//!
//! Run with `cargo test -p dotspan_render_tests`.

#![allow(
    missing_docs,
    reason = "development-only crate; cases are self-documenting via test names"
)]

pub mod cases;
