//! HTML fragment helpers.

use std::borrow::Cow;

use crate::site::content::OWNER_NAME;
use crate::site::SectionKind;

/// Escape a text node.
pub fn text(value: &str) -> Cow<'_, str> {
    html_escape::encode_text(value)
}

/// Escape a double-quoted attribute value.
pub fn attr(value: &str) -> Cow<'_, str> {
    html_escape::encode_double_quoted_attribute(value)
}

/// Opening tag shared by every section: `id` and `data-section` carry the anchor.
pub fn section_open(kind: SectionKind, class: &str) -> String {
    format!(
        "<section id=\"{anchor}\" data-section=\"{anchor}\" class=\"{}\">",
        attr(class),
        anchor = kind.anchor()
    )
}

pub fn section_close() -> &'static str {
    "</section>"
}

/// `© {year} Adam Line. All rights reserved.`
pub fn copyright_line(year: i32) -> String {
    format!("\u{a9} {} {}. All rights reserved.", year, OWNER_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_escapes_ampersand() {
        assert_eq!(text("Numbers & Documents"), "Numbers &amp; Documents");
        assert_eq!(text("Theatre503"), "Theatre503");
    }

    #[test]
    fn test_attr_escapes_quotes() {
        assert_eq!(attr("a\"b"), "a&quot;b");
    }

    #[test]
    fn test_section_open() {
        let open = section_open(SectionKind::CorePillars, "py-24");
        assert_eq!(
            open,
            "<section id=\"core-pillars\" data-section=\"core-pillars\" class=\"py-24\">"
        );
    }

    #[test]
    fn test_copyright_line() {
        assert_eq!(copyright_line(2024), "© 2024 Adam Line. All rights reserved.");
    }
}
