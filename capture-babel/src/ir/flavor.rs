//! Flavor detection.
//!
//! A document describes its styling either through semantic intents or
//! through presentational appearance. The choice is made once per document
//! here, producing a [`FlavoredDocument`] that borrows the runs in the shape
//! the matching translator expects.

use crate::ir::nodes::{AppearanceAttributes, AttributeSet, SemanticAttributes, StyledDocument};
use std::fmt;
use tracing::debug;

/// Which attribute representation a document uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flavor {
    Semantic,
    Appearance,
    Undetermined,
}

impl Flavor {
    pub fn name(&self) -> &'static str {
        match self {
            Flavor::Semantic => "semantic",
            Flavor::Appearance => "appearance",
            Flavor::Undetermined => "undetermined",
        }
    }
}

impl fmt::Display for Flavor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A run viewed through one flavor. Runs carrying attributes of the other
/// flavor (or none) show up with `attributes: None`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlavoredRun<'a, A> {
    pub text: &'a str,
    pub attributes: Option<&'a A>,
}

/// A document together with the flavor decided for it.
#[derive(Debug, Clone, PartialEq)]
pub enum FlavoredDocument<'a> {
    Semantic(Vec<FlavoredRun<'a, SemanticAttributes>>),
    Appearance(Vec<FlavoredRun<'a, AppearanceAttributes>>),
    /// No decisive signal: the caller falls back to the raw text.
    Undetermined(&'a StyledDocument),
}

impl FlavoredDocument<'_> {
    pub fn flavor(&self) -> Flavor {
        match self {
            FlavoredDocument::Semantic(_) => Flavor::Semantic,
            FlavoredDocument::Appearance(_) => Flavor::Appearance,
            FlavoredDocument::Undetermined(_) => Flavor::Undetermined,
        }
    }
}

/// Decide the flavor of a document.
///
/// Any run with a semantic block intent makes the document semantic. Failing
/// that, any run with an appearance paragraph style makes it appearance
/// flavored. Otherwise the flavor is undetermined.
pub fn detect(doc: &StyledDocument) -> Flavor {
    let mut flavor = Flavor::Undetermined;
    for run in &doc.runs {
        match &run.attributes {
            AttributeSet::Semantic(attrs) if attrs.block.is_some() => {
                flavor = Flavor::Semantic;
                break;
            }
            AttributeSet::Appearance(attrs) if attrs.paragraph.is_some() => {
                flavor = Flavor::Appearance;
            }
            _ => {}
        }
    }
    debug!(runs = doc.runs.len(), %flavor, "detected document flavor");
    flavor
}

/// Detect the flavor and project the runs accordingly.
pub fn classify(doc: &StyledDocument) -> FlavoredDocument<'_> {
    match detect(doc) {
        Flavor::Semantic => FlavoredDocument::Semantic(
            doc.runs
                .iter()
                .map(|run| FlavoredRun {
                    text: run.text.as_str(),
                    attributes: match &run.attributes {
                        AttributeSet::Semantic(attrs) => Some(attrs),
                        _ => None,
                    },
                })
                .collect(),
        ),
        Flavor::Appearance => FlavoredDocument::Appearance(
            doc.runs
                .iter()
                .map(|run| FlavoredRun {
                    text: run.text.as_str(),
                    attributes: match &run.attributes {
                        AttributeSet::Appearance(attrs) => Some(attrs),
                        _ => None,
                    },
                })
                .collect(),
        ),
        Flavor::Undetermined => FlavoredDocument::Undetermined(doc),
    }
}
