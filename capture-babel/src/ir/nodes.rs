//! Core data structures for styled documents.
//!
//! A [`StyledDocument`] is a flat sequence of [`Run`]s. Each run is a slice of
//! text plus an [`AttributeSet`] in one of two flavors: semantic intents
//! (paragraph/header/list roles, inline emphasis) or presentational appearance
//! (font, underline/strikethrough flags, paragraph list descriptors).

use crate::error::CaptureError;
use serde::{Deserialize, Serialize};

/// The root of a captured document: runs in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyledDocument {
    #[serde(default)]
    pub runs: Vec<Run>,
}

impl StyledDocument {
    pub fn new(runs: Vec<Run>) -> Self {
        Self { runs }
    }

    /// Decode a document from its JSON representation.
    pub fn from_json(source: &str) -> Result<Self, CaptureError> {
        Ok(serde_json::from_str(source)?)
    }

    pub fn to_json(&self) -> Result<String, CaptureError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    /// Concatenated run text with every attribute ignored.
    pub fn plain_text(&self) -> String {
        self.runs.iter().map(|run| run.text.as_str()).collect()
    }
}

impl FromIterator<Run> for StyledDocument {
    fn from_iter<I: IntoIterator<Item = Run>>(iter: I) -> Self {
        Self {
            runs: iter.into_iter().collect(),
        }
    }
}

/// A contiguous span of document text sharing one attribute set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Run {
    pub text: String,
    #[serde(default)]
    pub attributes: AttributeSet,
}

impl Run {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            attributes: AttributeSet::Plain,
        }
    }

    pub fn semantic(text: impl Into<String>, attributes: SemanticAttributes) -> Self {
        Self {
            text: text.into(),
            attributes: AttributeSet::Semantic(attributes),
        }
    }

    pub fn appearance(text: impl Into<String>, attributes: AppearanceAttributes) -> Self {
        Self {
            text: text.into(),
            attributes: AttributeSet::Appearance(attributes),
        }
    }
}

/// Attributes attached to a run, tagged by flavor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "flavor", rename_all = "snake_case")]
pub enum AttributeSet {
    /// No recognized attributes.
    #[default]
    Plain,
    Semantic(SemanticAttributes),
    Appearance(AppearanceAttributes),
}

/// Semantic-role attributes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SemanticAttributes {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block: Option<BlockIntent>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub inline: Vec<InlineIntent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

impl SemanticAttributes {
    pub fn block(kind: BlockKind, identity: u64) -> Self {
        Self {
            block: Some(BlockIntent { kind, identity }),
            ..Self::default()
        }
    }

    pub fn with_inline(mut self, intent: InlineIntent) -> Self {
        if !self.inline.contains(&intent) {
            self.inline.push(intent);
        }
        self
    }

    pub fn with_link(mut self, url: impl Into<String>) -> Self {
        self.link = Some(url.into());
        self
    }

    pub fn has_inline(&self, intent: InlineIntent) -> bool {
        self.inline.contains(&intent)
    }
}

/// The block role of a run: what kind of block it belongs to and which one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BlockIntent {
    pub kind: BlockKind,
    /// Opaque token shared by every run of the same rendered block.
    pub identity: u64,
}

/// Block kinds. Equality includes the payload, so `Header { level: 1 }` and
/// `Header { level: 2 }` are different kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BlockKind {
    Paragraph,
    Header {
        level: usize,
    },
    ListItem {
        #[serde(default)]
        ordinal: Option<u32>,
    },
    ThematicBreak,
    UnorderedList,
}

/// Inline emphasis intents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InlineIntent {
    Code,
    Emphasized,
    StronglyEmphasized,
    Strikethrough,
}

/// Presentational attributes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppearanceAttributes {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font: Option<FontFacts>,
    #[serde(default)]
    pub underline: bool,
    #[serde(default)]
    pub strikethrough: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paragraph: Option<ParagraphStyle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

impl AppearanceAttributes {
    pub fn with_font(mut self, font: FontFacts) -> Self {
        self.font = Some(font);
        self
    }

    pub fn with_underline(mut self) -> Self {
        self.underline = true;
        self
    }

    pub fn with_strikethrough(mut self) -> Self {
        self.strikethrough = true;
        self
    }

    pub fn with_paragraph(mut self, paragraph: ParagraphStyle) -> Self {
        self.paragraph = Some(paragraph);
        self
    }

    pub fn with_link(mut self, url: impl Into<String>) -> Self {
        self.link = Some(url.into());
        self
    }

    /// Number of list levels this run is nested in (0 outside any list).
    pub fn list_depth(&self) -> usize {
        self.paragraph
            .as_ref()
            .map_or(0, |paragraph| paragraph.text_lists.len())
    }
}

/// The facts about a font the classifier needs, detached from any font system.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontFacts {
    pub name: String,
    #[serde(default)]
    pub fixed_pitch: bool,
}

impl FontFacts {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fixed_pitch: false,
        }
    }

    pub fn fixed_pitch(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fixed_pitch: true,
        }
    }
}

/// Paragraph-level layout. Only the list descriptors matter here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParagraphStyle {
    /// One marker per nesting level, outermost first.
    #[serde(default)]
    pub text_lists: Vec<ListMarker>,
}

impl ParagraphStyle {
    /// A paragraph nested `depth` levels deep in lists using `marker`.
    pub fn nested(marker: ListMarker, depth: usize) -> Self {
        Self {
            text_lists: vec![marker; depth],
        }
    }

    /// The innermost list this paragraph belongs to.
    pub fn innermost(&self) -> Option<&ListMarker> {
        self.text_lists.last()
    }
}

/// A list descriptor for one nesting level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ListMarker {
    Ordered {
        #[serde(default)]
        format: String,
    },
    Unordered {
        #[serde(default)]
        glyph: String,
    },
}

impl ListMarker {
    pub fn ordered(format: impl Into<String>) -> Self {
        ListMarker::Ordered {
            format: format.into(),
        }
    }

    pub fn unordered(glyph: impl Into<String>) -> Self {
        ListMarker::Unordered {
            glyph: glyph.into(),
        }
    }

    pub fn is_ordered(&self) -> bool {
        matches!(self, ListMarker::Ordered { .. })
    }
}
