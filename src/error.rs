//! Error types shared across the object model.
//!
//! Decoding never panics: JSON failures surface as [`JsonError`] (with the
//! JSON path of the offending value), RDF failures as [`ResourceError`]
//! (with the resource and predicate involved). [`ModelError`] wraps both
//! for callers that do not care which representation failed.

use std::fmt;

use thiserror::Error;

pub use crate::identifier::IdentifierError;
pub use crate::json::{JsonError, JsonErrorKind};
pub use crate::rdf::ResourceError;

// =============================================================================
// MODEL ERROR
// =============================================================================

/// Any failure produced by this crate.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error(transparent)]
    Json(#[from] JsonError),

    #[error(transparent)]
    Resource(#[from] ResourceError),

    #[error(transparent)]
    Identifier(#[from] IdentifierError),

    #[error("RDF syntax error: {0}")]
    RdfSyntax(String),

    #[error("JSON syntax error: {0}")]
    JsonSyntax(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ModelError {
    /// Stable category used as a structured logging field.
    pub fn category(&self) -> ErrorCategory {
        match self {
            ModelError::Json(_) | ModelError::JsonSyntax(_) => ErrorCategory::Json,
            ModelError::Resource(_) | ModelError::RdfSyntax(_) => ErrorCategory::Rdf,
            ModelError::Identifier(_) => ErrorCategory::Identifier,
            ModelError::Io(_) => ErrorCategory::Io,
        }
    }
}

/// Coarse classification of [`ModelError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    Json,
    Rdf,
    Identifier,
    Io,
}

impl ErrorCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::Json => "json",
            ErrorCategory::Rdf => "rdf",
            ErrorCategory::Identifier => "identifier",
            ErrorCategory::Io => "io",
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub type ModelResult<T> = Result<T, ModelError>;
