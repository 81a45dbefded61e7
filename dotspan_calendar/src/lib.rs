// Copyright 2025 the DotSpan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! DotSpan Calendar: day-level elapsed-time arithmetic over civil dates.
//!
//! This crate provides the small set of pure date-difference functions that the
//! DotSpan grid is built on: whole elapsed days, weeks, months, and years
//! between two calendar dates. It focuses on:
//! - Deterministic, timezone-free arithmetic: every function takes plain
//!   [`NaiveDate`] values, so "now" is always an explicit input.
//! - Never-negative results: a reversed range counts as zero elapsed time.
//! - Calendar-aware month/year counting with a deliberately literal
//!   day-of-month rule (see below).
//!
//! Wall-clock inputs are normalized by truncating to their UTC calendar date
//! first; [`utc_date`] performs that truncation.
//!
//! ## Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use dotspan_calendar::{days_between, weeks_between};
//!
//! let dob = NaiveDate::from_ymd_opt(1990, 6, 15).unwrap();
//! let today = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();
//! assert_eq!(days_between(dob, today), 12_784);
//! assert_eq!(weeks_between(dob, today), 1_826);
//! ```
//!
//! ## The literal day-of-month rule
//!
//! [`months_between`] and [`years_between`] decide whether the final partial
//! period is complete by comparing raw day-of-month (and month) numbers. The
//! comparison does not account for months of different lengths: starting on
//! Jan 31, the 28th of February reads as an incomplete month because
//! `28 < 31`, even though February has no day 31. Callers that want
//! conventional anniversary semantics should adjust their inputs; here the
//! literal rule is the documented, tested behavior.
//!
//! This crate is `no_std`.

#![no_std]

use chrono::{DateTime, Datelike, NaiveDate, Utc};

/// Returns the number of whole days from `start` to `end`.
///
/// Counts midnight-to-midnight transitions between the two civil dates.
/// If `end` is before `start`, the result is `0`; the count is never
/// negative.
#[must_use]
pub fn days_between(start: NaiveDate, end: NaiveDate) -> u64 {
    let days = end.signed_duration_since(start).num_days();
    days.max(0) as u64
}

/// Returns the number of whole weeks from `start` to `end`.
///
/// This is [`days_between`] divided by seven, discarding the remainder, so a
/// span of six days counts as zero weeks.
#[must_use]
pub fn weeks_between(start: NaiveDate, end: NaiveDate) -> u64 {
    days_between(start, end) / 7
}

/// Returns the number of whole calendar months from `start` to `end`.
///
/// The raw count is `(end.year − start.year) × 12 + (end.month − start.month)`,
/// reduced by one when `end`'s day-of-month is earlier than `start`'s: the
/// final month only counts once its starting day has been reached. The
/// day-of-month comparison is literal, with no adjustment for month length
/// (see the crate docs). If `end` is before `start`, the result is `0`.
#[must_use]
pub fn months_between(start: NaiveDate, end: NaiveDate) -> u64 {
    let mut months = i64::from(end.year() - start.year()) * 12
        + (i64::from(end.month()) - i64::from(start.month()));
    if end.day() < start.day() {
        months -= 1;
    }
    months.max(0) as u64
}

/// Returns the number of whole calendar years from `start` to `end`.
///
/// The raw count is `end.year − start.year`, reduced by one when `end`'s
/// (month, day) falls earlier in the civil year than `start`'s: the final
/// year only counts once the start date's month and day have been reached.
/// Like [`months_between`], the comparison is literal — a Feb 29 start never
/// matches in a common year. If `end` is before `start`, the result is `0`.
#[must_use]
pub fn years_between(start: NaiveDate, end: NaiveDate) -> u64 {
    let mut years = i64::from(end.year() - start.year());
    if (end.month(), end.day()) < (start.month(), start.day()) {
        years -= 1;
    }
    years.max(0) as u64
}

/// Truncates a UTC instant to its civil calendar date.
///
/// This is the normalization step applied to wall-clock inputs before any of
/// the difference functions: time-of-day is discarded entirely, so two
/// instants on the same UTC day always compare as zero days apart.
#[must_use]
pub fn utc_date(instant: DateTime<Utc>) -> NaiveDate {
    instant.date_naive()
}
