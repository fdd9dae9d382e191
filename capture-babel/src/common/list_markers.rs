//! List marker normalization.
//!
//! Rich-text editors serialize list items with a tab-delimited marker at the
//! start of each line (`"\t•\titem"`, `"\t3.\titem"`). These helpers rewrite
//! such prefixes into plain-text markers indented two spaces per nesting
//! level, leaving every other line untouched.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// Glyphs recognized as unordered list markers.
pub const UNORDERED_GLYPHS: &[&str] = &["⁃", "▪", "•", "✓", "◦", "*", "+", "-", "☐", "◆"];

static UNORDERED_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\t([⁃▪•✓◦*+\-☐◆])\t").unwrap());

static ORDERED_MARKER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\t([\d\p{L}]+)[.)]\t").unwrap());

fn indent(depth: usize) -> String {
    assert!(depth >= 1, "list depth must be at least 1, got {depth}");
    "  ".repeat(depth - 1)
}

/// Rewrite ordered list prefixes as `<indent><ordinal>. `.
///
/// # Panics
///
/// Panics if `depth` is 0; a list item always sits at least one level deep.
pub fn replace_ordered(text: &str, depth: usize) -> String {
    let indent = indent(depth);
    text.split('\n')
        .map(|line| {
            ORDERED_MARKER.replace(line, |caps: &Captures| format!("{indent}{}. ", &caps[1]))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Rewrite unordered list prefixes as `<indent><marker> `.
///
/// `marker` replaces the matched glyph when given. A text consisting of a
/// single bare glyph (an empty list item) becomes `<indent><marker>` with no
/// trailing space.
///
/// # Panics
///
/// Panics if `depth` is 0.
pub fn replace_unordered(text: &str, depth: usize, marker: Option<&str>) -> String {
    let indent = indent(depth);

    if UNORDERED_GLYPHS.contains(&text) {
        return format!("{indent}{}", marker.unwrap_or(text));
    }

    text.split('\n')
        .map(|line| {
            UNORDERED_MARKER.replace(line, |caps: &Captures| {
                format!("{indent}{} ", marker.unwrap_or(&caps[1]))
            })
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unordered_nested_with_hyphen() {
        assert_eq!(
            replace_unordered("\t-\tbuy milk", 2, Some("-")),
            "  - buy milk"
        );
    }

    #[test]
    fn test_unordered_keeps_glyph_without_marker() {
        assert_eq!(replace_unordered("\t•\tbuy milk", 1, None), "• buy milk");
    }

    #[test]
    fn test_unordered_every_glyph_is_recognized() {
        for glyph in UNORDERED_GLYPHS {
            let line = format!("\t{glyph}\titem");
            assert_eq!(replace_unordered(&line, 3, Some("-")), "    - item");
        }
    }

    #[test]
    fn test_unordered_bare_glyph() {
        assert_eq!(replace_unordered("◦", 2, Some("-")), "  -");
        assert_eq!(replace_unordered("☐", 1, None), "☐");
    }

    #[test]
    fn test_unordered_multiline() {
        let text = "\t•\tone\n\t•\ttwo\n";
        assert_eq!(replace_unordered(text, 1, Some("-")), "- one\n- two\n");
    }

    #[test]
    fn test_unordered_leaves_other_lines() {
        let text = "intro\n\n  \t•\tnot at line start";
        assert_eq!(replace_unordered(text, 1, Some("-")), text);
    }

    #[test]
    fn test_ordered_digits() {
        assert_eq!(replace_ordered("\t3.\tthird item", 1), "3. third item");
    }

    #[test]
    fn test_ordered_letters_and_paren() {
        assert_eq!(replace_ordered("\tb)\tsecond", 2), "  b. second");
        assert_eq!(replace_ordered("\tiv.\tfourth", 3), "    iv. fourth");
    }

    #[test]
    fn test_ordered_multiline_with_blank_line() {
        let text = "\t1.\tone\n\n\t2.\ttwo";
        assert_eq!(replace_ordered(text, 1), "1. one\n\n2. two");
    }

    #[test]
    fn test_ordered_ignores_unordered_prefix() {
        assert_eq!(replace_ordered("\t•\titem", 1), "\t•\titem");
    }

    #[test]
    #[should_panic(expected = "list depth must be at least 1")]
    fn test_ordered_depth_zero_panics() {
        replace_ordered("\t1.\tone", 0);
    }

    #[test]
    #[should_panic(expected = "list depth must be at least 1")]
    fn test_unordered_depth_zero_panics() {
        replace_unordered("\t•\tone", 0, Some("-"));
    }

    #[test]
    #[should_panic(expected = "list depth must be at least 1")]
    fn test_bare_glyph_depth_zero_panics() {
        replace_unordered("•", 0, None);
    }
}
