// Copyright 2025 the DotSpan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use chrono::{DateTime, NaiveDate};
use dotspan_card::DotStyle;
use dotspan_grid::{DEFAULT_LIFE_EXPECTANCY_YEARS, ViewMode, clamp_expectancy};
use serde::{Deserialize, Serialize};

use crate::country::life_expectancy_for;

/// The stored user profile.
///
/// This is the record hosts persist between sessions. Field names and value
/// encodings match the JSON payloads earlier releases wrote, so stored
/// profiles keep loading across versions: keys are camel-cased, the birth
/// date is a string, and the style and view fields are lowercase ids. Unknown
/// keys are ignored and missing keys take their defaults, so partial payloads
/// parse rather than error.
///
/// A freshly parsed profile may be internally inconsistent (for example a
/// payload from before the custom-expectancy flag existed); run it through
/// [`Profile::normalized`] before use. [`crate::load_profile`] does this.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Profile {
    /// Display name, empty when unset.
    pub name: String,
    /// Lowercase ISO 3166-1 alpha-2 country id, empty when unset.
    pub country: String,
    /// Birth date. Stored as `YYYY-MM-DD`; older payloads carried a full
    /// RFC 3339 timestamp and still parse.
    #[serde(with = "dob_string")]
    pub dob: Option<NaiveDate>,
    /// Stored life expectancy in years. Absent in partial legacy payloads.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub life_expectancy: Option<f64>,
    /// Whether the user overrode the country's default expectancy. Payloads
    /// from before this flag existed omit it; [`Profile::normalized`] infers
    /// it from the stored value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_custom_expectancy: Option<bool>,
    /// Dot rendering style, stored as `"classic"` or `"rainbow"`.
    #[serde(with = "dot_style_string")]
    pub dot_style: DotStyle,
    /// Language preference id; `"default"` means follow the host locale.
    pub language: String,
    /// Grid granularity, stored as `"weeks"`, `"months"`, or `"years"`.
    #[serde(with = "view_mode_string")]
    pub view_mode: ViewMode,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            name: String::new(),
            country: String::new(),
            dob: None,
            life_expectancy: None,
            has_custom_expectancy: None,
            dot_style: DotStyle::Classic,
            language: String::from("default"),
            view_mode: ViewMode::Weeks,
        }
    }
}

impl Profile {
    /// Resolves the expectancy fields into a consistent state.
    ///
    /// When the custom flag is absent it is inferred: a stored expectancy
    /// that differs from the country default counts as custom. When the flag
    /// resolves to `false` the country default wins over whatever value was
    /// stored, so changing country in an older payload takes effect on load.
    #[must_use]
    pub fn normalized(mut self) -> Self {
        let country_default = life_expectancy_for(&self.country);
        let stored = self.life_expectancy;
        let custom = self
            .has_custom_expectancy
            .unwrap_or_else(|| stored.is_some_and(|years| years != country_default));
        self.has_custom_expectancy = Some(custom);
        self.life_expectancy = Some(if custom {
            stored.unwrap_or(DEFAULT_LIFE_EXPECTANCY_YEARS)
        } else {
            country_default
        });
        self
    }

    /// Returns the expectancy the grid should use, clamped into `[1, 120]`.
    #[must_use]
    pub fn effective_expectancy(&self) -> f64 {
        clamp_expectancy(self.life_expectancy.unwrap_or(DEFAULT_LIFE_EXPECTANCY_YEARS))
    }
}

/// Parses a stored birth-date string.
///
/// Accepts the plain `YYYY-MM-DD` form current payloads write and the full
/// RFC 3339 timestamps older payloads carried. Anything else, including the
/// empty string, is treated as unset.
#[must_use]
pub fn parse_dob(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    DateTime::parse_from_rfc3339(raw).ok().map(|stamp| stamp.date_naive())
}

/// Returns the storage id for a dot style.
#[must_use]
pub fn dot_style_id(style: DotStyle) -> &'static str {
    match style {
        DotStyle::Classic => "classic",
        DotStyle::Rainbow => "rainbow",
    }
}

/// Parses a stored dot-style id; unknown ids fall back to classic.
#[must_use]
pub fn parse_dot_style(raw: &str) -> DotStyle {
    if raw == "rainbow" {
        DotStyle::Rainbow
    } else {
        DotStyle::Classic
    }
}

/// Returns the storage id for a view mode.
#[must_use]
pub fn view_mode_id(mode: ViewMode) -> &'static str {
    match mode {
        ViewMode::Weeks => "weeks",
        ViewMode::Months => "months",
        ViewMode::Years => "years",
    }
}

/// Parses a stored view-mode id; unknown ids fall back to weeks.
#[must_use]
pub fn parse_view_mode(raw: &str) -> ViewMode {
    match raw {
        "months" => ViewMode::Months,
        "years" => ViewMode::Years,
        _ => ViewMode::Weeks,
    }
}

mod dob_string {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    use super::parse_dob;

    pub(super) fn serialize<S>(dob: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match dob {
            Some(date) => serializer.collect_str(&date.format("%Y-%m-%d")),
            None => serializer.serialize_str(""),
        }
    }

    pub(super) fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.as_deref().and_then(parse_dob))
    }
}

mod dot_style_string {
    use dotspan_card::DotStyle;
    use serde::{Deserialize, Deserializer, Serializer};

    use super::{dot_style_id, parse_dot_style};

    pub(super) fn serialize<S>(style: &DotStyle, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(dot_style_id(*style))
    }

    pub(super) fn deserialize<'de, D>(deserializer: D) -> Result<DotStyle, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(parse_dot_style(&String::deserialize(deserializer)?))
    }
}

mod view_mode_string {
    use dotspan_grid::ViewMode;
    use serde::{Deserialize, Deserializer, Serializer};

    use super::{parse_view_mode, view_mode_id};

    pub(super) fn serialize<S>(mode: &ViewMode, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(view_mode_id(*mode))
    }

    pub(super) fn deserialize<'de, D>(deserializer: D) -> Result<ViewMode, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(parse_view_mode(&String::deserialize(deserializer)?))
    }
}
