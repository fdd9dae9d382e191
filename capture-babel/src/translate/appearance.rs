//! Translation of appearance-flavored documents.
//!
//! These documents carry their block structure as literal newlines and tab
//! delimited list prefixes, so every run is rendered on its own: links first,
//! then either list marker rewriting (for runs inside a list) or the font and
//! flag heuristics.

use super::{font, link_target, Translator};
use crate::common::{replace_ordered, replace_unordered};
use crate::dialect::Dialect;
use crate::ir::flavor::FlavoredRun;
use crate::ir::nodes::AppearanceAttributes;
use tracing::trace;

/// Marker used for every unordered list item, whatever glyph the editor drew.
pub const UNORDERED_MARKER: &str = "-";

/// Translator for documents whose runs carry presentational attributes.
pub struct AppearanceTranslator<'d, 'a> {
    runs: &'d [FlavoredRun<'a, AppearanceAttributes>],
}

impl<'d, 'a> AppearanceTranslator<'d, 'a> {
    pub fn new(runs: &'d [FlavoredRun<'a, AppearanceAttributes>]) -> Self {
        Self { runs }
    }
}

impl Translator for AppearanceTranslator<'_, '_> {
    fn translate(&self, dialect: &dyn Dialect) -> String {
        let joined: String = self
            .runs
            .iter()
            .map(|run| render_run(run, dialect))
            .collect();

        joined.split('\n').collect::<Vec<_>>().join("\n")
    }
}

fn render_run(run: &FlavoredRun<'_, AppearanceAttributes>, dialect: &dyn Dialect) -> String {
    let Some(attrs) = run.attributes else {
        return run.text.to_string();
    };
    trace!(text = run.text, ?attrs, "appearance run");

    let mut text = run.text.to_string();

    if let Some(url) = attrs.link.as_deref().and_then(link_target) {
        let description = (!text.is_empty()).then_some(text.as_str());
        text = dialect.link(url, description);
    }

    let innermost = attrs
        .paragraph
        .as_ref()
        .and_then(|paragraph| paragraph.innermost());

    match innermost {
        Some(marker) if run.text != "\n" => {
            let depth = attrs.list_depth();
            if marker.is_ordered() {
                replace_ordered(&text, depth)
            } else {
                replace_unordered(&text, depth, Some(UNORDERED_MARKER))
            }
        }
        _ => match font::classify(attrs) {
            Some(style) => dialect.style(&text, style),
            None => text,
        },
    }
}
