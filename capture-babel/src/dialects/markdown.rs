//! Markdown dialect
//!
//! | Style         | Delimiter  |
//! |---------------|------------|
//! | emphasis      | `*`        |
//! | strong        | `**`       |
//! | code          | `` ` ``    |
//! | underline     | (none)     |
//! | strikethrough | `~`        |
//!
//! Markdown has no underline syntax, so underlined text passes through.
//! Headers are `#` repeated per level; links are `[description](url)` or the
//! autolink form `<url>`.

use crate::dialect::{Dialect, Style};

/// Dialect implementation for Markdown
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownDialect;

impl Dialect for MarkdownDialect {
    fn name(&self) -> &str {
        "markdown"
    }

    fn description(&self) -> &str {
        "Markdown with GitHub-style strikethrough"
    }

    fn file_extensions(&self) -> &[&str] {
        &["md", "markdown"]
    }

    fn header_glyph(&self) -> &str {
        "#"
    }

    fn delimiter(&self, style: Style) -> Option<&str> {
        match style {
            Style::Emphasis => Some("*"),
            Style::Strong => Some("**"),
            Style::Code => Some("`"),
            Style::Underline => None,
            Style::Strikethrough => Some("~"),
        }
    }

    fn link(&self, url: &str, description: Option<&str>) -> String {
        match description {
            Some(description) => format!("[{description}]({url})"),
            None => format!("<{url}>"),
        }
    }
}
