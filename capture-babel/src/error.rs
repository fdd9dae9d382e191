//! Error types for capture operations
//!
//! The translation engine itself never fails: unusable attributes degrade to
//! raw text. These errors cover the fallible edges around it (loading a
//! document, resolving a dialect name, assembling a capture request).

use thiserror::Error;

/// Errors that can occur outside the translation core
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CaptureError {
    /// Dialect name not found in registry
    #[error("Dialect '{0}' not found")]
    DialectNotFound(String),
    /// Styled document could not be decoded
    #[error("Document parse error: {0}")]
    DocumentParse(String),
    /// Address string is not an acceptable URL
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
    /// The request kind requires a URL but none was given
    #[error("A URL is required for {0}")]
    MissingUrl(&'static str),
    /// Nothing to send
    #[error("Capture payload is empty")]
    EmptyPayload,
}

impl From<serde_json::Error> for CaptureError {
    fn from(err: serde_json::Error) -> Self {
        CaptureError::DocumentParse(err.to_string())
    }
}
