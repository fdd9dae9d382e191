//! Intermediate Representation (IR) for captured rich text.
//!
//! This module defines the styled-run document model produced by an editing
//! surface, and the flavor detection that decides how it will be translated.

pub mod flavor;
pub mod nodes;
