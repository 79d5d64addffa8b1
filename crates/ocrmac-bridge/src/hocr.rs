//! Annotation to hOCR conversion and multi-page merging.
//!
//! Backend annotations carry relative coordinates (0.0-1.0) with a
//! bottom-left origin; hOCR wants absolute pixels with a top-left origin.
//! The vertical flip subtracts both the offset and the box height from 1.0
//! before scaling. Coordinates and confidences are truncated toward zero and
//! never clamped: out-of-range backend values show up verbatim in the output.

use crate::backend::RecognizedSpan;
use quick_xml::escape::escape;

const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;
const DOCTYPE: &str = r#"<!DOCTYPE html PUBLIC "-//W3C//DTD XHTML 1.0 Transitional//EN" "http://www.w3.org/TR/xhtml1/DTD/xhtml1-transitional.dtd">"#;
const XHTML_NAMESPACE: &str = "http://www.w3.org/1999/xhtml";

const BODY_OPEN: &str = "<body>";
const BODY_CLOSE: &str = "</body>";

/// Wrap page markup in the hOCR document shell.
fn wrap_document(body: &str) -> String {
    format!(
        "{XML_DECLARATION}\n{DOCTYPE}\n<html xmlns=\"{XHTML_NAMESPACE}\">\n<head>\n<meta http-equiv=\"content-type\" content=\"text/html; charset=utf-8\" />\n<meta name=\"ocr-system\" content=\"ocrmac\" />\n</head>\n<body>{body}</body>\n</html>"
    )
}

/// Convert one page of recognized spans to a complete hOCR document.
///
/// Word elements keep input order and carry a stable `word_1_{i}` id (1-based
/// position; page index is always 1 here, merging does not renumber). Span
/// text is XML-escaped but otherwise untouched; empty text yields an empty
/// element.
pub fn page_to_hocr(spans: &[RecognizedSpan], width: u32, height: u32) -> String {
    let mut page = format!(r#"<div class="ocr_page" id="page_1" title="bbox 0 0 {width} {height}">"#);

    for (index, span) in spans.iter().enumerate() {
        let bbox = span.bounding_box;
        let x_min = (bbox.x * f64::from(width)) as i64;
        let x_max = ((bbox.x + bbox.width) * f64::from(width)) as i64;
        let y_min = ((1.0 - bbox.y - bbox.height) * f64::from(height)) as i64;
        let y_max = ((1.0 - bbox.y) * f64::from(height)) as i64;
        let confidence = (span.confidence * 100.0) as i64;

        page.push_str(&format!(
            r#"<span class="ocrx_word" id="word_1_{}" title="bbox {} {} {} {}; x_wconf {}">{}</span>"#,
            index + 1,
            x_min,
            y_min,
            x_max,
            y_max,
            confidence,
            escape(span.text.as_str()),
        ));
    }

    page.push_str("</div>");
    wrap_document(&page)
}

/// Merge per-page hOCR documents into one document.
///
/// A single page is returned unchanged. Otherwise the interior of each
/// page's body is located by first-occurrence search for the literal
/// `<body>`/`</body>` markers and the pieces are concatenated, in input
/// order, into a fresh shell. Pages missing either marker contribute
/// nothing; page containers keep their original ids and titles. An empty
/// input yields a well-formed document with an empty body.
pub fn merge_hocr_pages(pages: &[String]) -> String {
    if let [page] = pages {
        return page.clone();
    }

    let mut combined = String::new();
    for page in pages {
        let Some(start) = page.find(BODY_OPEN) else { continue };
        let Some(end) = page.find(BODY_CLOSE) else { continue };
        let interior = start + BODY_OPEN.len();
        if interior <= end {
            combined.push_str(&page[interior..end]);
        }
    }

    wrap_document(&combined)
}
