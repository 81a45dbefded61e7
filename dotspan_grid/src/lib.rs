// Copyright 2025 the DotSpan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! DotSpan Grid: headless state for a life-calendar dot grid.
//!
//! This crate turns a birth date, a life expectancy, and a view granularity
//! into everything a renderer needs to draw the grid:
//! - [`Progress`] — clamped passed/total/percent records.
//! - [`ViewState`] — the resolved grid shape (columns, label strides, fit
//!   policy) and progress for a granularity.
//! - [`DotMetrics`] — the concrete dot diameter and gap that fill a measured
//!   area under the view's fit policy.
//! - [`GridSession`] — a change-detecting owner of the inputs that keeps the
//!   derived state current, for hosts that push updates (resize observers,
//!   profile edits) rather than recompute by hand.
//!
//! It does **not** draw anything and owns no clock: "today" is an explicit
//! input everywhere, so all derived state is a pure, deterministic function
//! of its inputs.
//!
//! ## Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use dotspan_grid::{GridSession, ViewMode};
//! use kurbo::Size;
//!
//! let today = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();
//! let mut session = GridSession::new(today);
//! session.set_dob(NaiveDate::from_ymd_opt(1990, 6, 15));
//! session.set_area(Size::new(780.0, 620.0));
//!
//! let view = session.view_state();
//! assert_eq!(view.total_units, 4160);
//! assert_eq!(view.units_passed, 1826);
//! assert_eq!(view.percent, 44);
//!
//! // Dot metrics are solved for the measured area under the view's fit policy.
//! let metrics = session.metrics();
//! assert!(metrics.dot_size >= 1.0);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod metrics;
mod progress;
mod session;
mod view;

pub use metrics::DotMetrics;
pub use progress::Progress;
pub use session::{GridSession, GridSessionDebugInfo};
pub use view::{
    DEFAULT_GAP_RATIO, DEFAULT_LIFE_EXPECTANCY_YEARS, Fit, MAX_LIFE_EXPECTANCY_YEARS,
    MIN_LIFE_EXPECTANCY_YEARS, ViewMode, ViewState, clamp_expectancy,
};
