// Copyright 2025 the DotSpan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// File stem used when no usable name survives sanitizing.
pub const DEFAULT_FILE_STEM: &str = "life-in-dots";

/// Reduces a display name to a filesystem-safe stem: ASCII lowercase, with
/// every run of other characters collapsed to a single `-` and no leading or
/// trailing separators. Names with nothing to keep become
/// [`DEFAULT_FILE_STEM`].
#[must_use]
pub fn sanitize_file_stem(name: &str) -> String {
    let mut stem = String::with_capacity(name.len());
    let mut pending_dash = false;
    for ch in name.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_dash && !stem.is_empty() {
                stem.push('-');
            }
            pending_dash = false;
            stem.push(ch.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }
    if stem.is_empty() {
        DEFAULT_FILE_STEM.to_string()
    } else {
        stem
    }
}

/// Builds a download filename from an optional profile name and an extension
/// (without the dot).
///
/// ```rust
/// use dotspan_export::build_export_filename;
///
/// assert_eq!(build_export_filename(Some("Jane Q. Doe"), "png"), "jane-q-doe.png");
/// assert_eq!(build_export_filename(None, "jpg"), "life-in-dots.jpg");
/// ```
#[must_use]
pub fn build_export_filename(name: Option<&str>, extension: &str) -> String {
    let stem = sanitize_file_stem(name.unwrap_or_default());
    format!("{stem}.{extension}")
}

#[cfg(test)]
mod tests {
    use super::{DEFAULT_FILE_STEM, build_export_filename, sanitize_file_stem};

    #[test]
    fn stems_are_lowercase_and_dash_separated() {
        assert_eq!(sanitize_file_stem("Jane Q. Doe"), "jane-q-doe");
        assert_eq!(sanitize_file_stem("Ada  Lovelace!"), "ada-lovelace");
        assert_eq!(sanitize_file_stem("--2024 plans--"), "2024-plans");
    }

    #[test]
    fn unusable_names_fall_back() {
        assert_eq!(sanitize_file_stem(""), DEFAULT_FILE_STEM);
        assert_eq!(sanitize_file_stem("!!!"), DEFAULT_FILE_STEM);
        assert_eq!(sanitize_file_stem("¯\\_(ツ)_/¯"), DEFAULT_FILE_STEM);
    }

    #[test]
    fn filenames_join_stem_and_extension() {
        assert_eq!(build_export_filename(Some("Jane Q. Doe"), "png"), "jane-q-doe.png");
        assert_eq!(build_export_filename(Some(""), "png"), "life-in-dots.png");
        assert_eq!(build_export_filename(None, "jpg"), "life-in-dots.jpg");
    }

    #[test]
    fn non_ascii_letters_collapse_to_dashes() {
        assert_eq!(sanitize_file_stem("café del mar"), "caf-del-mar");
    }
}
