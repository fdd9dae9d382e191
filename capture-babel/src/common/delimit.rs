//! Line-preserving inline delimiting.
//!
//! Inline styles in both dialects cannot span a line break, so a styled span
//! is wrapped one visual line at a time. Blank lines are never delimited and
//! every newline of the input survives in place.

/// Wrap each non-empty line of `text` with `delimiter`.
///
/// The delimiter is always added as a prefix and, when `trailing` is true,
/// as a suffix. A text that is exactly `"\n"` is returned unchanged.
///
/// ```ignore
/// assert_eq!(delimit("mary\n\njane", "*", true), "*mary*\n\n*jane*");
/// assert_eq!(delimit("word\n", "~", true), "~word~\n");
/// ```
pub fn delimit(text: &str, delimiter: &str, trailing: bool) -> String {
    if text == "\n" {
        return text.to_string();
    }

    let suffix = if trailing { delimiter } else { "" };
    text.split('\n')
        .map(|line| {
            if line.is_empty() {
                String::new()
            } else {
                format!("{delimiter}{line}{suffix}")
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
