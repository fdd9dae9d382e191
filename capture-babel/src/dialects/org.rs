//! Org-mode dialect
//!
//! | Style         | Delimiter |
//! |---------------|-----------|
//! | emphasis      | `/`       |
//! | strong        | `*`       |
//! | code          | `~`       |
//! | underline     | `_`       |
//! | strikethrough | `+`       |
//!
//! Headers are `*` repeated per level; links are `[[url][description]]`.

use crate::dialect::{Dialect, Style};

/// Dialect implementation for Org-mode
#[derive(Debug, Clone, Copy, Default)]
pub struct OrgDialect;

impl Dialect for OrgDialect {
    fn name(&self) -> &str {
        "org"
    }

    fn description(&self) -> &str {
        "Emacs Org-mode markup"
    }

    fn file_extensions(&self) -> &[&str] {
        &["org"]
    }

    fn header_glyph(&self) -> &str {
        "*"
    }

    fn delimiter(&self, style: Style) -> Option<&str> {
        Some(match style {
            Style::Emphasis => "/",
            Style::Strong => "*",
            Style::Code => "~",
            Style::Underline => "_",
            Style::Strikethrough => "+",
        })
    }

    fn link(&self, url: &str, description: Option<&str>) -> String {
        match description {
            Some(description) => format!("[[{url}][{description}]]"),
            None => format!("[[{url}]]"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delimiters() {
        let expected = [
            (Style::Emphasis, "/"),
            (Style::Strong, "*"),
            (Style::Code, "~"),
            (Style::Underline, "_"),
            (Style::Strikethrough, "+"),
        ];
        for (style, delimiter) in expected {
            assert_eq!(OrgDialect.delimiter(style), Some(delimiter));
        }
    }

    #[test]
    fn test_styles_wrap_text() {
        assert_eq!(OrgDialect.emphasis("word"), "/word/");
        assert_eq!(OrgDialect.strong("word"), "*word*");
        assert_eq!(OrgDialect.code("word"), "~word~");
        assert_eq!(OrgDialect.underline("word"), "_word_");
        assert_eq!(OrgDialect.strikethrough("word"), "+word+");
    }

    #[test]
    fn test_styles_keep_trailing_newline() {
        for style in Style::ALL {
            let delimiter = OrgDialect.delimiter(style).unwrap();
            assert_eq!(
                OrgDialect.style("some text\n", style),
                format!("{delimiter}some text{delimiter}\n")
            );
        }
    }

    #[test]
    fn test_header_levels() {
        assert_eq!(OrgDialect.header("Title", 1), "* Title");
        assert_eq!(OrgDialect.header("Title", 2), "** Title");
        assert_eq!(OrgDialect.header("Title", 6), "****** Title");
        assert_eq!(OrgDialect.header("\n", 3), "\n");
    }

    #[test]
    fn test_links() {
        assert_eq!(
            OrgDialect.link("https://example.com", Some("Example")),
            "[[https://example.com][Example]]"
        );
        assert_eq!(
            OrgDialect.link("https://example.com", None),
            "[[https://example.com]]"
        );
    }
}
