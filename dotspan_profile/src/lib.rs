// Copyright 2025 the DotSpan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! DotSpan Profile: stored user state and the data tables behind it.
//!
//! This crate owns everything about the user that outlives a session:
//! - [`Profile`] — the persisted record (name, country, birth date,
//!   expectancy, style, view), serialized in the same JSON shape earlier
//!   releases wrote.
//! - [`ProfileStore`] + [`load_profile`] / [`persist_profile`] — the storage
//!   seam, with legacy-key migration and tolerant parsing.
//! - [`life_expectancy_for`] — country expectancy defaults.
//! - [`flag_codepoints`] and friends — twemoji flag asset URLs, with an
//!   optional `fetch` feature that downloads the PNG bytes for the raster
//!   pipeline.
//! - [`UiStrings`] — the card-facing strings and their formatting helpers.
//! - [`SaveDebouncer`] — the settle-before-persist policy as a clock-driven
//!   value type.
//!
//! The grid math itself lives in `dotspan_grid`; this crate only feeds it.
//!
//! ## Example
//!
//! ```rust
//! use dotspan_grid::ViewMode;
//! use dotspan_profile::{MemoryStore, UiStrings, load_profile, persist_profile};
//!
//! let mut store = MemoryStore::new();
//! let mut profile = load_profile(&mut store);
//! assert_eq!(profile.effective_expectancy(), 80.0);
//!
//! // Picking a country resets the custom flag so its default applies.
//! profile.country = "jp".to_owned();
//! profile.has_custom_expectancy = Some(false);
//! let profile = profile.normalized();
//! assert_eq!(profile.effective_expectancy(), 84.8);
//! persist_profile(&mut store, &profile)?;
//!
//! let strings = UiStrings::EN;
//! assert_eq!(strings.view_title(ViewMode::Weeks), "Life in Weeks");
//! assert_eq!(strings.format_life_expectancy(84.8), "Life Expectancy 84.8/YEARS");
//! # Ok::<(), serde_json::Error>(())
//! ```

mod country;
mod debounce;
mod flags;
mod profile;
mod store;
mod strings;

pub use country::{country_ids, life_expectancy_for};
pub use debounce::{SAVE_DEBOUNCE_MS, SaveDebouncer};
#[cfg(feature = "fetch")]
pub use flags::{FlagFetchError, fetch_flag_png};
pub use flags::{TWEMOJI_VERSION, flag_codepoints, flag_png_url, flag_svg_url};
pub use profile::{
    Profile, dot_style_id, parse_dob, parse_dot_style, parse_view_mode, view_mode_id,
};
pub use store::{
    LEGACY_STORAGE_KEYS, MemoryStore, ProfileStore, STORAGE_KEY, load_profile, persist_profile,
};
pub use strings::UiStrings;
