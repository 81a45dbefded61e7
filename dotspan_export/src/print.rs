// Copyright 2025 the DotSpan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::fmt::Write as _;

/// Page margin used by print documents, in millimeters per edge.
pub const PRINT_MARGIN_MM: f64 = 12.0;

/// Physical paper sizes supported by the print flow.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum PaperSize {
    /// US Letter, 8.5 × 11 inches.
    #[default]
    Letter,
    /// ISO A4, 210 × 297 millimeters.
    A4,
}

impl PaperSize {
    /// Returns the CSS `@page` size keyword.
    #[must_use]
    pub fn css_name(self) -> &'static str {
        match self {
            Self::Letter => "letter",
            Self::A4 => "A4",
        }
    }

    /// Returns the physical page size in millimeters, width then height.
    #[must_use]
    pub fn size_mm(self) -> (f64, f64) {
        match self {
            Self::Letter => (215.9, 279.4),
            Self::A4 => (210.0, 297.0),
        }
    }

    /// Returns the printable area in millimeters after [`PRINT_MARGIN_MM`]
    /// on every edge.
    #[must_use]
    pub fn printable_mm(self) -> (f64, f64) {
        let (w, h) = self.size_mm();
        (w - 2.0 * PRINT_MARGIN_MM, h - 2.0 * PRINT_MARGIN_MM)
    }
}

/// Builds a self-contained HTML document that prints a card image centered
/// on one page, scaled down to the paper's printable area when needed.
///
/// `image_url` is typically a data URL from
/// [`png_data_url`](crate::png_data_url). Opening a window and invoking the
/// print dialog is the embedder's job.
#[must_use]
pub fn build_print_document(image_url: &str, title: &str, paper: PaperSize) -> String {
    let (max_w, max_h) = paper.printable_mm();
    let title = escape_html(title);
    let url = escape_html(image_url);

    let mut doc = String::new();
    let _ = write!(
        doc,
        "<!doctype html>\n\
         <html>\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <title>{title}</title>\n\
         <style>\n\
         @page {{ size: {page}; margin: {margin}mm; }}\n\
         html, body {{ margin: 0; padding: 0; }}\n\
         body {{ display: flex; align-items: center; justify-content: center; }}\n\
         img {{ max-width: {max_w}mm; max-height: {max_h}mm; }}\n\
         </style>\n\
         </head>\n\
         <body><img src=\"{url}\" alt=\"{title}\"></body>\n\
         </html>\n",
        page = paper.css_name(),
        margin = PRINT_MARGIN_MM,
    );
    doc
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::{PRINT_MARGIN_MM, PaperSize, build_print_document};

    #[test]
    fn printable_area_subtracts_margins() {
        let (w, h) = PaperSize::A4.printable_mm();
        assert!((w - (210.0 - 2.0 * PRINT_MARGIN_MM)).abs() < 1e-9);
        assert!((h - (297.0 - 2.0 * PRINT_MARGIN_MM)).abs() < 1e-9);
        let (lw, lh) = PaperSize::Letter.size_mm();
        assert!(lw < lh, "portrait orientation");
    }

    #[test]
    fn document_embeds_url_page_size_and_title() {
        let doc = build_print_document("data:image/png;base64,QUJD", "Life in Weeks", PaperSize::A4);
        assert!(doc.contains("size: A4; margin: 12mm"));
        assert!(doc.contains("<title>Life in Weeks</title>"));
        assert!(doc.contains("src=\"data:image/png;base64,QUJD\""));
        assert!(doc.contains("max-width: 186mm"));
    }

    #[test]
    fn titles_are_html_escaped() {
        let doc = build_print_document("about:blank", "Ada & Grace <3", PaperSize::Letter);
        assert!(doc.contains("<title>Ada &amp; Grace &lt;3</title>"));
        assert!(!doc.contains("Ada & Grace <3"));
        assert!(doc.contains("size: letter"));
    }
}
