//! Property tests over whole documents.

use capture_babel::{
    translate, AppearanceAttributes, BlockKind, DialectTag, FontFacts, ParagraphStyle, Run,
    SemanticAttributes, StyledDocument,
};
use proptest::prelude::*;

fn any_tag() -> impl Strategy<Value = DialectTag> {
    prop_oneof![Just(DialectTag::OrgMode), Just(DialectTag::Markdown)]
}

proptest! {
    #[test]
    fn prop_unstyled_text_is_unchanged(
        chunks in prop::collection::vec("[a-z \n]{0,12}", 0..6),
        tag in any_tag(),
    ) {
        let doc: StyledDocument = chunks.iter().map(Run::plain).collect();
        prop_assert_eq!(translate(&doc, tag), chunks.concat());
    }

    #[test]
    fn prop_plain_appearance_text_is_unchanged(
        text in "[a-z ]{0,10}(\n[a-z ]{0,10}){0,4}",
        tag in any_tag(),
    ) {
        let doc = StyledDocument::new(vec![Run::appearance(
            text.clone(),
            AppearanceAttributes::default()
                .with_font(FontFacts::new("Helvetica"))
                .with_paragraph(ParagraphStyle::default()),
        )]);
        prop_assert_eq!(translate(&doc, tag), text);
    }

    #[test]
    fn prop_single_paragraph_is_its_text(text in "[a-z][a-z \n]{0,30}", tag in any_tag()) {
        let doc = StyledDocument::new(vec![Run::semantic(
            text.clone(),
            SemanticAttributes::block(BlockKind::Paragraph, 1),
        )]);
        prop_assert_eq!(translate(&doc, tag), text);
    }

    #[test]
    fn prop_translation_is_deterministic(
        texts in prop::collection::vec("[a-z]{1,8}", 1..8),
        tag in any_tag(),
    ) {
        let doc: StyledDocument = texts
            .iter()
            .enumerate()
            .map(|(index, text)| {
                Run::semantic(
                    text.as_str(),
                    SemanticAttributes::block(BlockKind::Paragraph, (index / 2) as u64),
                )
            })
            .collect();
        let first = translate(&doc, tag);
        prop_assert_eq!(first.matches("\n\n").count(), (texts.len() - 1) / 2);
        prop_assert_eq!(translate(&doc, tag), first);
    }
}
