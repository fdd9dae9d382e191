//! Dialect trait definition
//!
//! A dialect is the syntax of one target markup language. Implementors only
//! describe their glyphs (header marker, inline delimiters) and link syntax;
//! the shared operations are provided on top of the delimiter table.

use crate::common::delimit;
use crate::error::CaptureError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::warn;

/// Inline styles a dialect can express.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Style {
    Emphasis,
    Strong,
    Code,
    Underline,
    Strikethrough,
}

impl Style {
    pub const ALL: [Style; 5] = [
        Style::Emphasis,
        Style::Strong,
        Style::Code,
        Style::Underline,
        Style::Strikethrough,
    ];
}

/// Deepest header level rendered.
pub const MAX_HEADER_LEVEL: usize = 64;

/// Trait for markup dialects
///
/// # Examples
///
/// ```ignore
/// struct Wiki;
///
/// impl Dialect for Wiki {
///     fn name(&self) -> &str {
///         "wiki"
///     }
///
///     fn header_glyph(&self) -> &str {
///         "="
///     }
///
///     fn delimiter(&self, style: Style) -> Option<&str> {
///         match style {
///             Style::Strong => Some("'''"),
///             _ => None,
///         }
///     }
///
///     fn link(&self, url: &str, description: Option<&str>) -> String {
///         format!("[{url} {}]", description.unwrap_or(url))
///     }
/// }
/// ```
pub trait Dialect: Send + Sync {
    /// The name of this dialect (e.g., "org", "markdown")
    fn name(&self) -> &str;

    /// Optional description of this dialect
    fn description(&self) -> &str {
        ""
    }

    /// File extensions associated with this dialect, without the leading dot.
    fn file_extensions(&self) -> &[&str] {
        &[]
    }

    /// Glyph repeated once per header level.
    fn header_glyph(&self) -> &str;

    /// Delimiter for an inline style, or `None` when the dialect has no syntax
    /// for it (the text is then left unchanged).
    fn delimiter(&self, style: Style) -> Option<&str>;

    /// Render a link, with or without a description.
    fn link(&self, url: &str, description: Option<&str>) -> String;

    /// Prefix `text` with `level` header glyphs and a space.
    ///
    /// A bare `"\n"` is returned unchanged: it is the block separator left by
    /// the editor, not header content. Levels outside `1..=MAX_HEADER_LEVEL`
    /// leave the text as is.
    fn header(&self, text: &str, level: usize) -> String {
        if level == 0 {
            warn!(dialect = self.name(), "non-positive header level, leaving text as is");
            return text.to_string();
        }
        if level > MAX_HEADER_LEVEL {
            warn!(dialect = self.name(), level, "header level too deep, leaving text as is");
            return text.to_string();
        }
        if text == "\n" {
            return text.to_string();
        }
        format!("{} {text}", self.header_glyph().repeat(level))
    }

    /// Wrap `text` in the delimiter for `style`, one line at a time.
    fn style(&self, text: &str, style: Style) -> String {
        match self.delimiter(style) {
            Some(delimiter) => delimit(text, delimiter, true),
            None => text.to_string(),
        }
    }

    fn emphasis(&self, text: &str) -> String {
        self.style(text, Style::Emphasis)
    }

    fn strong(&self, text: &str) -> String {
        self.style(text, Style::Strong)
    }

    fn code(&self, text: &str) -> String {
        self.style(text, Style::Code)
    }

    fn underline(&self, text: &str) -> String {
        self.style(text, Style::Underline)
    }

    fn strikethrough(&self, text: &str) -> String {
        self.style(text, Style::Strikethrough)
    }
}

/// Tag selecting one of the built-in dialects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DialectTag {
    #[serde(rename = "org", alias = "org-mode", alias = "orgmode")]
    OrgMode,
    #[serde(rename = "markdown", alias = "md")]
    Markdown,
}

impl DialectTag {
    pub const ALL: [DialectTag; 2] = [DialectTag::OrgMode, DialectTag::Markdown];

    /// The shared dialect instance for this tag.
    pub fn dialect(self) -> &'static dyn Dialect {
        match self {
            DialectTag::OrgMode => &crate::dialects::OrgDialect,
            DialectTag::Markdown => &crate::dialects::MarkdownDialect,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            DialectTag::OrgMode => "org",
            DialectTag::Markdown => "markdown",
        }
    }
}

impl fmt::Display for DialectTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DialectTag {
    type Err = CaptureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "org" | "org-mode" | "orgmode" => Ok(DialectTag::OrgMode),
            "markdown" | "md" => Ok(DialectTag::Markdown),
            _ => Err(CaptureError::DialectNotFound(s.to_string())),
        }
    }
}
