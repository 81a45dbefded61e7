// Copyright 2025 the DotSpan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use dotspan_grid::DEFAULT_LIFE_EXPECTANCY_YEARS;

// Lowercase ISO 3166-1 alpha-2 id, life expectancy at birth in years.
static LIFE_EXPECTANCY_BY_COUNTRY: &[(&str, f64)] = &[
    ("ar", 76.1),
    ("at", 81.6),
    ("au", 83.2),
    ("be", 82.1),
    ("br", 75.9),
    ("ca", 82.6),
    ("ch", 84.0),
    ("cl", 80.7),
    ("cn", 78.2),
    ("co", 77.3),
    ("cz", 79.3),
    ("de", 81.2),
    ("dk", 81.9),
    ("eg", 70.2),
    ("es", 83.9),
    ("fi", 82.0),
    ("fr", 82.9),
    ("gb", 81.3),
    ("gr", 81.1),
    ("hk", 85.5),
    ("id", 71.9),
    ("ie", 82.4),
    ("il", 82.7),
    ("in", 70.8),
    ("it", 83.5),
    ("jp", 84.8),
    ("ke", 66.7),
    ("kr", 83.7),
    ("mx", 75.1),
    ("my", 76.3),
    ("ng", 62.6),
    ("nl", 82.3),
    ("no", 83.2),
    ("nz", 82.5),
    ("ph", 71.2),
    ("pk", 67.3),
    ("pl", 78.3),
    ("pt", 81.9),
    ("ro", 76.1),
    ("ru", 73.2),
    ("sa", 76.9),
    ("se", 83.1),
    ("sg", 83.9),
    ("th", 78.7),
    ("tr", 78.5),
    ("tw", 81.0),
    ("ua", 73.4),
    ("us", 79.3),
    ("vn", 74.6),
    ("za", 65.3),
];

/// Returns the default life expectancy for a country id.
///
/// Ids are lowercase ISO 3166-1 alpha-2 codes; lookups are case-insensitive.
/// Unknown or empty ids fall back to
/// [`DEFAULT_LIFE_EXPECTANCY_YEARS`](dotspan_grid::DEFAULT_LIFE_EXPECTANCY_YEARS).
#[must_use]
pub fn life_expectancy_for(country: &str) -> f64 {
    LIFE_EXPECTANCY_BY_COUNTRY
        .iter()
        .find(|(id, _)| id.eq_ignore_ascii_case(country))
        .map_or(DEFAULT_LIFE_EXPECTANCY_YEARS, |&(_, years)| years)
}

/// Returns every known country id, in table order.
pub fn country_ids() -> impl Iterator<Item = &'static str> {
    LIFE_EXPECTANCY_BY_COUNTRY.iter().map(|&(id, _)| id)
}
