//! Dialect implementations
//!
//! This module contains the built-in markup dialects a capture can be
//! rendered into.

pub mod markdown;
pub mod org;

pub use markdown::MarkdownDialect;
pub use org::OrgDialect;
