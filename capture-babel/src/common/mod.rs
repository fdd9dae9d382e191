//! Text utilities shared by every dialect and translator.
//!
//! - delimit: per-line wrapping of inline style spans
//! - list_markers: rewriting of editor list prefixes into plain-text markers

pub mod delimit;
pub mod list_markers;

pub use delimit::delimit;
pub use list_markers::{replace_ordered, replace_unordered};
