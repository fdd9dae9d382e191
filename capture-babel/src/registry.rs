//! Dialect registry for dialect discovery and selection
//!
//! This module provides a centralized registry for the available dialects.
//! Dialects can be registered and retrieved by name or file extension.

use crate::dialect::{Dialect, DialectTag};
use crate::error::CaptureError;
use crate::ir::nodes::StyledDocument;
use std::collections::HashMap;

/// Registry of markup dialects
///
/// # Examples
///
/// ```ignore
/// let registry = DialectRegistry::default();
/// let org = registry.get("org")?;
/// let text = registry.translate(&doc, "markdown")?;
/// ```
pub struct DialectRegistry {
    dialects: HashMap<String, Box<dyn Dialect>>,
}

impl DialectRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        DialectRegistry {
            dialects: HashMap::new(),
        }
    }

    /// Register a dialect
    ///
    /// If a dialect with the same name already exists, it will be replaced.
    pub fn register<D: Dialect + 'static>(&mut self, dialect: D) {
        self.dialects
            .insert(dialect.name().to_string(), Box::new(dialect));
    }

    /// Get a dialect by name or by its tag aliases (`md`, `org-mode`, ...)
    pub fn get(&self, name: &str) -> Result<&dyn Dialect, CaptureError> {
        let key = if self.dialects.contains_key(name) {
            name.to_string()
        } else {
            name.parse::<DialectTag>()?.name().to_string()
        };
        self.dialects
            .get(&key)
            .map(|d| d.as_ref())
            .ok_or_else(|| CaptureError::DialectNotFound(name.to_string()))
    }

    /// Check if a dialect exists
    pub fn has(&self, name: &str) -> bool {
        self.get(name).is_ok()
    }

    /// List all available dialect names (sorted)
    pub fn list_dialects(&self) -> Vec<String> {
        let mut names: Vec<_> = self.dialects.keys().cloned().collect();
        names.sort();
        names
    }

    /// Detect a dialect from a filename based on its extension
    ///
    /// ```ignore
    /// let registry = DialectRegistry::default();
    /// assert_eq!(registry.detect_dialect_from_filename("notes.org"), Some("org".to_string()));
    /// assert_eq!(registry.detect_dialect_from_filename("notes.md"), Some("markdown".to_string()));
    /// assert_eq!(registry.detect_dialect_from_filename("notes.txt"), None);
    /// ```
    pub fn detect_dialect_from_filename(&self, filename: &str) -> Option<String> {
        let extension = std::path::Path::new(filename)
            .extension()
            .and_then(|ext| ext.to_str())?;

        self.dialects
            .values()
            .find(|dialect| dialect.file_extensions().contains(&extension))
            .map(|dialect| dialect.name().to_string())
    }

    /// Translate a document into the named dialect
    pub fn translate(&self, doc: &StyledDocument, dialect: &str) -> Result<String, CaptureError> {
        let dialect = self.get(dialect)?;
        Ok(crate::translate::translate_with(doc, dialect))
    }

    /// Create a registry with the built-in dialects
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(crate::dialects::OrgDialect);
        registry.register(crate::dialects::MarkdownDialect);
        registry
    }
}

impl Default for DialectRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
