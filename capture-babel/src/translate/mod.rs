//! Styled document to markup translation
//!
//! Translation runs in two steps: the document's flavor is decided once
//! ([`crate::ir::flavor::classify`]), then the matching translator renders
//! the runs through a [`Dialect`]. Documents with no decisive flavor come out
//! as their plain text.
//!
//! Translation never fails. Attributes that cannot be used (an unparseable
//! link, an unknown font) are dropped and the raw text is kept.

pub mod appearance;
pub mod font;
pub mod semantic;

use crate::dialect::{Dialect, DialectTag};
use crate::ir::flavor::{classify, FlavoredDocument};
use crate::ir::nodes::StyledDocument;
use tracing::{debug, warn};
use url::Url;

pub use appearance::AppearanceTranslator;
pub use semantic::SemanticTranslator;

/// A flavor-specific renderer over borrowed runs.
pub trait Translator {
    fn translate(&self, dialect: &dyn Dialect) -> String;
}

/// Translate a document into one of the built-in dialects.
pub fn translate(doc: &StyledDocument, dialect: DialectTag) -> String {
    translate_with(doc, dialect.dialect())
}

/// Translate a document through any dialect implementation.
pub fn translate_with(doc: &StyledDocument, dialect: &dyn Dialect) -> String {
    let flavored = classify(doc);
    debug!(
        dialect = dialect.name(),
        flavor = %flavored.flavor(),
        "translating document"
    );
    match flavored {
        FlavoredDocument::Semantic(runs) => SemanticTranslator::new(&runs).translate(dialect),
        FlavoredDocument::Appearance(runs) => AppearanceTranslator::new(&runs).translate(dialect),
        FlavoredDocument::Undetermined(doc) => doc.plain_text(),
    }
}

/// The link target to render, if `raw` parses as an absolute URL.
pub(crate) fn link_target(raw: &str) -> Option<&str> {
    match Url::parse(raw) {
        Ok(_) => Some(raw),
        Err(err) => {
            warn!(link = raw, %err, "ignoring unparseable link");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::flavor::{detect, Flavor};
    use crate::ir::nodes::{
        AppearanceAttributes, BlockKind, FontFacts, ListMarker, ParagraphStyle, Run,
        SemanticAttributes,
    };

    #[test]
    fn test_link_target() {
        assert_eq!(link_target("https://example.com"), Some("https://example.com"));
        assert_eq!(link_target("file:///tmp/notes.txt"), Some("file:///tmp/notes.txt"));
        assert_eq!(link_target("example.com"), None);
        assert_eq!(link_target(""), None);
    }

    #[test]
    fn test_undetermined_returns_plain_text() {
        let doc = StyledDocument::new(vec![Run::plain("mary\n\n"), Run::plain("jane")]);
        for tag in DialectTag::ALL {
            assert_eq!(translate(&doc, tag), "mary\n\njane");
        }
    }

    #[test]
    fn test_empty_document() {
        assert_eq!(translate(&StyledDocument::default(), DialectTag::OrgMode), "");
    }

    #[test]
    fn test_dispatches_semantic() {
        let doc = StyledDocument::new(vec![Run::semantic(
            "Title",
            SemanticAttributes::block(BlockKind::Header { level: 3 }, 1),
        )]);
        assert_eq!(translate(&doc, DialectTag::Markdown), "### Title");
        assert_eq!(translate(&doc, DialectTag::OrgMode), "*** Title");
    }

    #[test]
    fn test_dispatches_appearance() {
        let item = AppearanceAttributes::default()
            .with_font(FontFacts::new("Helvetica"))
            .with_paragraph(ParagraphStyle::nested(ListMarker::unordered("•"), 1));
        let bold = AppearanceAttributes::default()
            .with_font(FontFacts::new("Helvetica-Bold"))
            .with_paragraph(ParagraphStyle::default());
        let doc = StyledDocument::new(vec![
            Run::appearance("Shopping", bold),
            Run::plain("\n"),
            Run::appearance("\t•\tmilk", item),
        ]);
        assert_eq!(translate(&doc, DialectTag::Markdown), "**Shopping**\n- milk");
    }

    #[test]
    fn test_font_only_runs_are_plain_text() {
        let bold = AppearanceAttributes::default().with_font(FontFacts::new("Helvetica-Bold"));
        let doc = StyledDocument::new(vec![
            Run::appearance("Shopping", bold),
            Run::plain(" list"),
        ]);
        assert_eq!(detect(&doc), Flavor::Undetermined);
        for tag in DialectTag::ALL {
            assert_eq!(translate(&doc, tag), "Shopping list");
        }
    }

    #[test]
    fn test_oversized_header_level_from_json() {
        let doc = StyledDocument::from_json(
            r#"{"runs":[{"text":"Title","attributes":{"flavor":"semantic",
                "block":{"kind":{"type":"header","level":18446744073709551615},"identity":1}}}]}"#,
        )
        .unwrap();
        assert_eq!(translate(&doc, DialectTag::Markdown), "Title");
        assert_eq!(translate(&doc, DialectTag::OrgMode), "Title");
    }
}
