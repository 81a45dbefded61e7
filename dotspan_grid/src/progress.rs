// Copyright 2025 the DotSpan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `round`

/// Completion record for a life grid: how many units have passed out of how
/// many, and the rounded percentage.
///
/// `Progress` is always well-formed regardless of its inputs: the total is
/// floored at one, the passed count is clamped into `[0, total]`, and the
/// percentage is clamped into `[0, 100]`. There is no failing constructor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Progress {
    /// Rounded completion percentage, `0..=100`.
    pub percent: u8,
    /// Elapsed units, clamped into `[0, total_units]`.
    pub units_passed: u64,
    /// Total units, at least one.
    pub total_units: u64,
}

impl Progress {
    /// Builds a clamped progress record from raw unit counts.
    ///
    /// Both inputs are signed so that out-of-range upstream values (a future
    /// birth date, a nonsensical expectancy) degrade to a valid record
    /// instead of failing:
    /// - `total_units` is floored at `1`.
    /// - `units_passed` is clamped into `[0, total_units]`.
    /// - `percent` is `round(passed / total × 100)` clamped into `[0, 100]`.
    #[must_use]
    #[allow(
        clippy::cast_possible_truncation,
        reason = "the percentage is explicitly clamped to [0, 100] before casting"
    )]
    pub fn compute(total_units: i64, units_passed: i64) -> Self {
        let safe_total = total_units.max(1) as u64;
        let safe_passed = (units_passed.max(0) as u64).min(safe_total);
        let ratio = safe_passed as f64 / safe_total as f64;
        let percent = (ratio * 100.0).round().clamp(0.0, 100.0) as u8;
        Self {
            percent,
            units_passed: safe_passed,
            total_units: safe_total,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Progress;

    #[test]
    fn clamps_passed_into_total() {
        let p = Progress::compute(100, 250);
        assert_eq!(p.units_passed, 100);
        assert_eq!(p.percent, 100);

        let p = Progress::compute(100, -5);
        assert_eq!(p.units_passed, 0);
        assert_eq!(p.percent, 0);
    }

    #[test]
    fn zero_or_negative_total_floors_at_one() {
        let p = Progress::compute(0, 10);
        assert_eq!(p.total_units, 1);
        assert_eq!(p.units_passed, 1);
        assert_eq!(p.percent, 100);

        let p = Progress::compute(-260, 0);
        assert_eq!(p.total_units, 1);
        assert_eq!(p.units_passed, 0);
    }

    #[test]
    fn percent_rounds_to_nearest() {
        // 1826 / 4160 = 43.894…% -> 44.
        let p = Progress::compute(4160, 1826);
        assert_eq!(p.percent, 44);
        // 1 / 3 = 33.33…% -> 33.
        assert_eq!(Progress::compute(3, 1).percent, 33);
        // 2 / 3 = 66.66…% -> 67.
        assert_eq!(Progress::compute(3, 2).percent, 67);
    }

    #[test]
    fn invariant_holds_across_ranges() {
        for total in [-10_i64, 0, 1, 7, 52, 4160] {
            for passed in [-100_i64, -1, 0, 1, 26, 4160, 10_000] {
                let p = Progress::compute(total, passed);
                assert!(p.total_units >= 1, "total must be at least one");
                assert!(
                    p.units_passed <= p.total_units,
                    "passed must not exceed total"
                );
                assert!(p.percent <= 100, "percent must stay within 0..=100");
            }
        }
    }
}
