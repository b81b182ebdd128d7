//! Right-to-left display reordering.
//!
//! Terminals are responsible for bidirectional rendering of Hebrew text;
//! by default transcript lines are printed in logical order and left
//! untouched. For terminals that render text strictly left-to-right, this
//! module offers an explicit opt-in logical-to-visual reordering of each
//! output line.

use unicode_bidi::BidiInfo;

/// Reorder a single logical line into visual order.
///
/// The input must not contain newlines; each transcript line is reordered
/// independently.
#[must_use]
pub fn reorder_rtl(line: &str) -> String {
    if line.is_empty() {
        return String::new();
    }

    let bidi = BidiInfo::new(line, None);
    match bidi.paragraphs.first() {
        Some(paragraph) => bidi
            .reorder_line(paragraph, paragraph.range.clone())
            .into_owned(),
        None => line.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hebrew_line_is_reversed() {
        assert_eq!(reorder_rtl("שלום עולם"), "םלוע םולש");
    }

    #[test]
    fn test_latin_line_is_untouched() {
        assert_eq!(reorder_rtl("hello world"), "hello world");
    }

    #[test]
    fn test_mixed_line_reorders_hebrew_run_only() {
        assert_eq!(reorder_rtl("abc אב"), "abc בא");
    }

    #[test]
    fn test_empty_line() {
        assert_eq!(reorder_rtl(""), "");
    }
}
