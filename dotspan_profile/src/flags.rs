// Copyright 2025 the DotSpan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Pinned twemoji release every flag asset URL references.
pub const TWEMOJI_VERSION: &str = "14.0.2";

const CDN_BASE: &str = "https://cdn.jsdelivr.net/gh/twitter/twemoji";

/// First regional-indicator codepoint, `U+1F1E6 REGIONAL INDICATOR SYMBOL
/// LETTER A`.
const REGIONAL_INDICATOR_A: u32 = 0x1F1E6;

/// Maps a country id to the codepoint key of its flag emoji.
///
/// Flag emoji are pairs of regional-indicator symbols, one per letter of the
/// ISO 3166-1 alpha-2 code. The key is the lowercase hex codepoints joined
/// with `-`, the naming scheme twemoji assets use: `flag_codepoints("US")`
/// is `1f1fa-1f1f8`. Ids that are not two ASCII letters return `None`.
#[must_use]
pub fn flag_codepoints(country: &str) -> Option<String> {
    let code = country.trim().as_bytes();
    if code.len() != 2 || !code.iter().all(u8::is_ascii_alphabetic) {
        return None;
    }
    let key = code
        .iter()
        .map(|letter| {
            let offset = u32::from(letter.to_ascii_uppercase() - b'A');
            format!("{:x}", REGIONAL_INDICATOR_A + offset)
        })
        .collect::<Vec<_>>()
        .join("-");
    Some(key)
}

/// Returns the twemoji SVG URL for a country's flag, as embedded by live
/// views.
#[must_use]
pub fn flag_svg_url(country: &str) -> Option<String> {
    let key = flag_codepoints(country)?;
    Some(format!("{CDN_BASE}@{TWEMOJI_VERSION}/assets/svg/{key}.svg"))
}

/// Returns the twemoji 72×72 PNG URL for a country's flag.
///
/// The raster pipeline wants a bitmap it can decode with the `png` crate, so
/// it uses this variant instead of the SVG.
#[must_use]
pub fn flag_png_url(country: &str) -> Option<String> {
    let key = flag_codepoints(country)?;
    Some(format!("{CDN_BASE}@{TWEMOJI_VERSION}/assets/72x72/{key}.png"))
}

/// Failure downloading a flag bitmap.
#[cfg(feature = "fetch")]
pub enum FlagFetchError {
    /// The country id does not map to a flag emoji.
    UnknownCountry,
    /// The HTTP request failed.
    Transport(ureq::Error),
}

#[cfg(feature = "fetch")]
impl core::fmt::Debug for FlagFetchError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::UnknownCountry => write!(f, "UnknownCountry"),
            Self::Transport(err) => f.debug_tuple("Transport").field(err).finish(),
        }
    }
}

#[cfg(feature = "fetch")]
impl core::fmt::Display for FlagFetchError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::UnknownCountry => write!(f, "country id does not map to a flag emoji"),
            Self::Transport(err) => write!(f, "flag download failed: {err}"),
        }
    }
}

#[cfg(feature = "fetch")]
impl std::error::Error for FlagFetchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::UnknownCountry => None,
            Self::Transport(err) => Some(err),
        }
    }
}

/// Downloads the 72×72 PNG flag bitmap for a country.
///
/// The bytes decode with `dotspan_raster::decode_flag_png`. Rendering treats
/// the flag as best-effort: callers drop the icon on failure rather than
/// failing the card.
#[cfg(feature = "fetch")]
pub fn fetch_flag_png(country: &str) -> Result<Vec<u8>, FlagFetchError> {
    let url = flag_png_url(country).ok_or(FlagFetchError::UnknownCountry)?;
    let mut response = ureq::get(&url).call().map_err(FlagFetchError::Transport)?;
    response
        .body_mut()
        .read_to_vec()
        .map_err(FlagFetchError::Transport)
}

#[cfg(test)]
mod tests {
    use super::{flag_codepoints, flag_png_url, flag_svg_url};

    #[test]
    fn maps_codes_to_regional_indicator_pairs() {
        assert_eq!(flag_codepoints("US").as_deref(), Some("1f1fa-1f1f8"));
        assert_eq!(flag_codepoints("gb").as_deref(), Some("1f1ec-1f1e7"));
        assert_eq!(flag_codepoints(" jp ").as_deref(), Some("1f1ef-1f1f5"));
    }

    #[test]
    fn rejects_ids_that_are_not_two_letters() {
        assert_eq!(flag_codepoints(""), None);
        assert_eq!(flag_codepoints("USA"), None);
        assert_eq!(flag_codepoints("u1"), None);
        assert_eq!(flag_codepoints("ü"), None);
    }

    #[test]
    fn builds_pinned_cdn_urls() {
        assert_eq!(
            flag_svg_url("US").as_deref(),
            Some("https://cdn.jsdelivr.net/gh/twitter/twemoji@14.0.2/assets/svg/1f1fa-1f1f8.svg"),
        );
        assert_eq!(
            flag_png_url("US").as_deref(),
            Some("https://cdn.jsdelivr.net/gh/twitter/twemoji@14.0.2/assets/72x72/1f1fa-1f1f8.png"),
        );
        assert_eq!(flag_svg_url("!!"), None);
    }
}
