// Copyright 2025 the DotSpan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use dotspan_card::FontChoice;
use skrifa::instance::{LocationRef, Size};
use skrifa::metrics::GlyphMetrics;
use skrifa::outline::OutlinePen;
use skrifa::{FontRef, GlyphId, MetadataProvider};
use vello_cpu::kurbo::BezPath;

/// Advance assumed for glyphs without metrics, as a fraction of the font size.
const FALLBACK_ADVANCE: f32 = 0.6;

/// Caller-supplied font bytes for the card font families.
///
/// Every slot is optional: a card whose family has no bytes renders its grid
/// and icons but skips text. Hosts typically load these once at startup and
/// reuse the set for every render.
#[derive(Clone, Copy, Debug, Default)]
pub struct FontSet<'a> {
    /// Sans-serif family, used by [`FontChoice::Sans`].
    pub sans: Option<&'a [u8]>,
    /// Serif family, used by [`FontChoice::Serif`].
    pub serif: Option<&'a [u8]>,
    /// Monospace family, used by [`FontChoice::Mono`].
    pub mono: Option<&'a [u8]>,
}

impl<'a> FontSet<'a> {
    /// Returns an empty set. Cards render without any text.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the font bytes backing a card font choice, if loaded.
    #[must_use]
    pub fn bytes_for(&self, choice: FontChoice) -> Option<&'a [u8]> {
        match choice {
            FontChoice::Sans => self.sans,
            FontChoice::Serif => self.serif,
            FontChoice::Mono => self.mono,
        }
    }
}

/// A line of glyphs with per-glyph X offsets and the total advance width.
///
/// Layout is a plain horizontal accumulation of advance widths; characters
/// the font's character map cannot resolve are skipped. No shaping.
pub(crate) struct ShapedLine {
    pub(crate) glyphs: Vec<(GlyphId, f32)>,
    pub(crate) width: f32,
}

pub(crate) fn shape_line(font: &FontRef<'_>, text: &str, size_px: f32) -> ShapedLine {
    let charmap = font.charmap();
    let metrics = GlyphMetrics::new(font, Size::new(size_px), LocationRef::default());
    let mut x = 0.0_f32;
    let mut glyphs = Vec::new();
    for gid in text.chars().filter_map(|ch| charmap.map(ch)) {
        glyphs.push((gid, x));
        x += metrics
            .advance_width(gid)
            .unwrap_or(size_px * FALLBACK_ADVANCE);
    }
    ShapedLine { glyphs, width: x }
}

/// Records a glyph outline into a `BezPath`, offset to its position in the
/// line and flipped so glyphs are upright in screen coordinates.
struct BezPen {
    path: BezPath,
    dx: f64,
}

impl OutlinePen for BezPen {
    fn move_to(&mut self, x: f32, y: f32) {
        self.path.move_to((self.dx + f64::from(x), -f64::from(y)));
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.path.line_to((self.dx + f64::from(x), -f64::from(y)));
    }

    fn quad_to(&mut self, x1: f32, y1: f32, x: f32, y: f32) {
        self.path.quad_to(
            (self.dx + f64::from(x1), -f64::from(y1)),
            (self.dx + f64::from(x), -f64::from(y)),
        );
    }

    fn curve_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, x: f32, y: f32) {
        self.path.curve_to(
            (self.dx + f64::from(x1), -f64::from(y1)),
            (self.dx + f64::from(x2), -f64::from(y2)),
            (self.dx + f64::from(x), -f64::from(y)),
        );
    }

    fn close(&mut self) {
        self.path.close_path();
    }
}

/// Builds one path holding all glyph outlines of a shaped line, in line-local
/// coordinates with the origin at the left end of the baseline.
///
/// Glyphs whose outlines fail to draw are dropped.
pub(crate) fn line_path(font: &FontRef<'_>, line: &ShapedLine, size_px: f32) -> BezPath {
    let outlines = font.outline_glyphs();
    let mut path = BezPath::new();
    for &(gid, x) in &line.glyphs {
        let Some(outline) = outlines.get(gid) else {
            continue;
        };
        let mut pen = BezPen {
            path: BezPath::new(),
            dx: f64::from(x),
        };
        if outline.draw(Size::new(size_px), &mut pen).is_ok() {
            for el in pen.path.elements() {
                path.push(*el);
            }
        }
    }
    path
}

#[cfg(test)]
mod tests {
    use skrifa::FontRef;
    use skrifa::outline::OutlinePen;
    use vello_cpu::kurbo::{BezPath, PathEl, Point};

    use super::{BezPen, FontSet};
    use dotspan_card::FontChoice;

    #[test]
    fn font_set_maps_choices_to_slots() {
        let sans = [0_u8; 4];
        let mono = [1_u8; 4];
        let fonts = FontSet {
            sans: Some(&sans),
            serif: None,
            mono: Some(&mono),
        };
        assert_eq!(fonts.bytes_for(FontChoice::Sans), Some(&sans[..]));
        assert_eq!(fonts.bytes_for(FontChoice::Serif), None);
        assert_eq!(fonts.bytes_for(FontChoice::Mono), Some(&mono[..]));
        assert_eq!(FontSet::new().bytes_for(FontChoice::Sans), None);
    }

    #[test]
    fn garbage_bytes_are_not_a_font() {
        assert!(FontRef::new(b"definitely not a font").is_err());
    }

    #[test]
    fn pen_offsets_x_and_flips_y() {
        let mut pen = BezPen {
            path: BezPath::new(),
            dx: 10.0,
        };
        pen.move_to(1.0, 2.0);
        pen.line_to(3.0, -4.0);
        pen.close();
        let els = pen.path.elements();
        assert_eq!(els[0], PathEl::MoveTo(Point::new(11.0, -2.0)));
        assert_eq!(els[1], PathEl::LineTo(Point::new(13.0, 4.0)));
        assert_eq!(els[2], PathEl::ClosePath);
    }
}
