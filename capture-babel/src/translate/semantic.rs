//! Translation of semantic-intent documents.
//!
//! Block structure is not spelled out with newlines in these documents: each
//! run names its block kind and block identity instead. A blank-line
//! separator is emitted whenever the kind changes, or the kind stays the same
//! but the identity moves on (the next paragraph, the next list item).

use super::{link_target, Translator};
use crate::dialect::Dialect;
use crate::ir::flavor::FlavoredRun;
use crate::ir::nodes::{BlockIntent, BlockKind, InlineIntent, SemanticAttributes};
use std::collections::HashMap;
use tracing::{debug, trace};

/// Separator inserted between rendered blocks.
pub const BLOCK_SEPARATOR: &str = "\n\n";

/// Inline intents in wrapping order, innermost first. Code ends up outermost.
const INLINE_ORDER: [InlineIntent; 4] = [
    InlineIntent::Strikethrough,
    InlineIntent::Emphasized,
    InlineIntent::StronglyEmphasized,
    InlineIntent::Code,
];

/// Where a run sits relative to the block before it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Boundary {
    /// The block kind differs from the previous run's.
    NewKind,
    /// Same kind, different block identity.
    NewBlock,
    /// Another run of the block already open.
    Continuation,
}

/// Block tracking for a single translation call.
#[derive(Debug, Default)]
struct BlockTracker {
    previous_kind: Option<BlockKind>,
    last_identity: HashMap<BlockKind, u64>,
}

impl BlockTracker {
    fn observe(&mut self, intent: &BlockIntent) -> Boundary {
        let kind_changed = self.previous_kind != Some(intent.kind);
        let previous_identity = self.last_identity.insert(intent.kind, intent.identity);
        self.previous_kind = Some(intent.kind);

        if kind_changed {
            Boundary::NewKind
        } else if previous_identity != Some(intent.identity) {
            Boundary::NewBlock
        } else {
            Boundary::Continuation
        }
    }
}

/// Translator for documents whose runs carry semantic intents.
pub struct SemanticTranslator<'d, 'a> {
    runs: &'d [FlavoredRun<'a, SemanticAttributes>],
}

impl<'d, 'a> SemanticTranslator<'d, 'a> {
    pub fn new(runs: &'d [FlavoredRun<'a, SemanticAttributes>]) -> Self {
        Self { runs }
    }
}

impl Translator for SemanticTranslator<'_, '_> {
    fn translate(&self, dialect: &dyn Dialect) -> String {
        let mut tracker = BlockTracker::default();
        let mut fragments: Vec<String> = Vec::with_capacity(self.runs.len() * 2);

        for run in self.runs {
            render_run(run, dialect, &mut tracker, &mut fragments);
        }

        let start = fragments
            .iter()
            .position(|fragment| !fragment.is_empty() && fragment != BLOCK_SEPARATOR)
            .unwrap_or(fragments.len());
        fragments[start..].concat()
    }
}

fn render_run(
    run: &FlavoredRun<'_, SemanticAttributes>,
    dialect: &dyn Dialect,
    tracker: &mut BlockTracker,
    fragments: &mut Vec<String>,
) {
    let Some(attrs) = run.attributes else {
        fragments.push(run.text.to_string());
        return;
    };
    trace!(text = run.text, ?attrs, "semantic run");

    let mut text = match &attrs.block {
        Some(intent) => {
            let boundary = tracker.observe(intent);
            if boundary != Boundary::Continuation {
                debug!(kind = ?intent.kind, identity = intent.identity, ?boundary, "block boundary");
                fragments.push(BLOCK_SEPARATOR.to_string());
            }
            match intent.kind {
                BlockKind::Header { level } if boundary != Boundary::Continuation => {
                    dialect.header(run.text, level)
                }
                _ => run.text.to_string(),
            }
        }
        None => run.text.to_string(),
    };

    if let Some(url) = attrs.link.as_deref().and_then(link_target) {
        let description = (!text.is_empty()).then_some(text.as_str());
        text = dialect.link(url, description);
    }

    for intent in INLINE_ORDER {
        if attrs.has_inline(intent) {
            text = match intent {
                InlineIntent::Code => dialect.code(&text),
                InlineIntent::Emphasized => dialect.emphasis(&text),
                InlineIntent::StronglyEmphasized => dialect.strong(&text),
                InlineIntent::Strikethrough => dialect.strikethrough(&text),
            };
        }
    }

    fragments.push(text);
}
