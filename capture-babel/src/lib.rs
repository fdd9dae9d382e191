//! Styled text to Org-mode / Markdown translation
//!
//!     This crate turns a captured rich-text document (a flat list of styled runs) into plain-text
//!     markup for one of the supported dialects, and assembles the capture requests (org-protocol
//!     URLs, clipboard messages) that carry the result to Emacs.
//!
//!     This is a pure lib: it powers the capture cli but is shell agnostic. No code here prints,
//!     reads env vars or installs a log subscriber; diagnostics go through `tracing` macros only.
//!
//! Architecture
//!
//!     Documents come in one of two flavors. Semantic documents tag each run with a block intent
//!     (paragraph, header, list item) and inline intents. Appearance documents only carry what the
//!     text looked like: font, underline and strikethrough flags, and list descriptors, with
//!     block structure spelled out as literal newlines. The flavor is decided once per document
//!     (./ir/flavor.rs) and each flavor has its own translator (./translate/).
//!
//!     Translators never emit syntax themselves. They go through the Dialect trait (./dialect.rs),
//!     which describes a markup language by its header glyph, inline delimiters and link syntax.
//!
//!     The file structure :
//!     .
//!     ├── error.rs
//!     ├── dialect.rs              # Dialect trait and the built-in dialect tags
//!     ├── registry.rs             # DialectRegistry for discovery and selection
//!     ├── dialects
//!     │   ├── org.rs
//!     │   └── markdown.rs
//!     ├── ir                      # Styled document model and flavor detection
//!     ├── common                  # Text utilities (delimiting, list markers)
//!     ├── translate               # Semantic and appearance translators
//!     └── capture.rs              # org-protocol URLs and clipboard messages
//!
//! Testing
//!     tests
//!     ├── lib.rs
//!     ├── <dialect>.rs
//!     └── fixtures
//!         └── <docname>.json
//!
//!     Fixtures are styled documents in their JSON form, the same input the cli reads.
//!
//! Core Algorithms
//!
//!     Delimiting (./common/delimit.rs) wraps every non-empty line of a span separately, since
//!     neither dialect allows inline markup to cross a line break. Semantic translation tracks
//!     block kind and identity to decide where blank-line separators and header prefixes go.
//!     Appearance translation rewrites tab-delimited list prefixes and infers inline style from
//!     font facts.
//!
//!     Translation is infallible: unusable attributes degrade to the raw text.

pub mod capture;
pub mod common;
pub mod dialect;
pub mod dialects;
pub mod error;
pub mod ir;
pub mod registry;
pub mod translate;

pub use capture::{
    message, org_protocol_url, validate_url, CapturePayload, OrgProtocol, PayloadKind,
};
pub use dialect::{Dialect, DialectTag, Style};
pub use error::CaptureError;
pub use ir::flavor::{detect, Flavor};
pub use ir::nodes::{
    AppearanceAttributes, AttributeSet, BlockIntent, BlockKind, FontFacts, InlineIntent,
    ListMarker, ParagraphStyle, Run, SemanticAttributes, StyledDocument,
};
pub use registry::DialectRegistry;
pub use translate::{translate, translate_with};
