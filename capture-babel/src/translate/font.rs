//! Font heuristics for appearance-flavored runs.
//!
//! Editors that only record presentation encode emphasis in the font itself:
//! "Helvetica-Bold", "Menlo-Italic", a fixed-pitch face for code. The
//! classification works on [`FontFacts`] alone so it needs no font system.

use crate::dialect::Style;
use crate::ir::nodes::{AppearanceAttributes, FontFacts};
use once_cell::sync::Lazy;
use regex::Regex;

static EMPHASIS_FONT: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)oblique|italic").unwrap());

/// Style implied by the font alone: bold, then oblique/italic, then fixed pitch.
pub fn classify_font(font: &FontFacts) -> Option<Style> {
    if font.name.to_lowercase().contains("bold") {
        Some(Style::Strong)
    } else if EMPHASIS_FONT.is_match(&font.name) {
        Some(Style::Emphasis)
    } else if font.fixed_pitch {
        Some(Style::Code)
    } else {
        None
    }
}

/// Style implied by a run's appearance. The font wins over the underline and
/// strikethrough flags; only the first match applies.
pub fn classify(attrs: &AppearanceAttributes) -> Option<Style> {
    attrs
        .font
        .as_ref()
        .and_then(classify_font)
        .or(if attrs.underline {
            Some(Style::Underline)
        } else if attrs.strikethrough {
            Some(Style::Strikethrough)
        } else {
            None
        })
}
