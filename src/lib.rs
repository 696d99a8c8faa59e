//! A schema.org object model with lossless mappings to JSON, RDF and JSON
//! Schema.
//!
//! Objects are built with per-class builders, compared structurally and
//! hashed into stable content identifiers. See [`model`] for the classes,
//! [`schema`] for schema export and [`commands`] for the document-level
//! operations behind the `schemaorg-rdf` binary.

pub mod commands;
pub mod config;
pub mod equality;
pub mod error;
pub mod hashing;
pub mod identifier;
pub mod json;
pub mod logging;
pub mod model;
pub mod property;
pub mod rdf;
pub mod schema;

pub use commands::execute;
pub use config::{CliArgs, DocumentFormat, ToolConfig};
pub use error::{ErrorCategory, ModelError, ModelResult};
pub use identifier::Identifier;
pub use logging::{LoggingConfig, init_logging};
pub use model::{AnyObject, ClassKind, ObjectType};
