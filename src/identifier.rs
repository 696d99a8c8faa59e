//! Object identifiers.
//!
//! Every object is identified by an RDF named node. [`Identifier`] wraps
//! [`NamedNode`] so an identifier cannot be confused with an arbitrary IRI
//! property value at the type level, and so that identifier synthesis lives
//! in one place.

use std::fmt;
use std::str::FromStr;

use oxigraph::model::{NamedNode, NamedNodeRef};
use sha2::{Digest, Sha256};
use thiserror::Error;

use crate::model::ObjectType;

/// Prefix of synthesized identifiers.
pub const SYNTHESIZED_PREFIX: &str = "urn:schemaorg-rdf:";

/// Error raised when a string is not a valid absolute IRI.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid identifier {value:?}: {reason}")]
pub struct IdentifierError {
    pub value: String,
    pub reason: String,
}

/// Identifier of an object: an RDF named node.
///
/// # Example
/// ```rust
/// use schemaorg_rdf::Identifier;
///
/// let id = Identifier::parse("http://example.org/alice").unwrap();
/// assert_eq!(id.as_str(), "http://example.org/alice");
/// assert!(Identifier::parse("not an iri").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Identifier(NamedNode);

impl Identifier {
    /// Parses and validates an absolute IRI.
    ///
    /// # Errors
    /// Returns `Err` if `iri` is not a valid IRI.
    pub fn parse(iri: impl Into<String>) -> Result<Self, IdentifierError> {
        let iri = iri.into();
        NamedNode::new(iri.as_str())
            .map(Self)
            .map_err(|error| IdentifierError {
                value: iri,
                reason: error.to_string(),
            })
    }

    /// Synthesizes the identifier of `object` from its class name and a
    /// SHA-256 of its properties. Structurally identical objects receive
    /// the same identifier.
    pub fn synthesize<T: ObjectType>(object: &T) -> Self {
        let mut hasher = Sha256::new();
        crate::hashing::hash_str(&mut hasher, T::KIND.name());
        object.hash_properties(&mut hasher);
        let digest = hasher.finalize();
        Self(NamedNode::new_unchecked(format!(
            "{}{}:{}",
            SYNTHESIZED_PREFIX,
            T::KIND.name(),
            crate::hashing::to_hex(&digest)
        )))
    }

    /// Placeholder used while an object is assembled, before its real
    /// identifier is known.
    pub(crate) fn unassigned() -> Self {
        Self(NamedNode::new_unchecked(format!("{SYNTHESIZED_PREFIX}unassigned")))
    }

    /// Whether this identifier was produced by [`Identifier::synthesize`].
    pub fn is_synthesized(&self) -> bool {
        self.as_str().starts_with(SYNTHESIZED_PREFIX)
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    pub fn as_named_node(&self) -> &NamedNode {
        &self.0
    }

    pub fn as_node_ref(&self) -> NamedNodeRef<'_> {
        self.0.as_ref()
    }

    pub fn into_inner(self) -> NamedNode {
        self.0
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<NamedNode> for Identifier {
    fn from(node: NamedNode) -> Self {
        Self(node)
    }
}

impl From<NamedNodeRef<'_>> for Identifier {
    fn from(node: NamedNodeRef<'_>) -> Self {
        Self(node.into_owned())
    }
}

impl From<Identifier> for NamedNode {
    fn from(id: Identifier) -> NamedNode {
        id.0
    }
}

impl FromStr for Identifier {
    type Err = IdentifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for Identifier {
    type Error = IdentifierError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl TryFrom<String> for Identifier {
    type Error = IdentifierError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Occupation, ObjectType};

    #[test]
    fn test_parse_validation() {
        assert!(Identifier::parse("http://example.org/a").is_ok());
        assert!(Identifier::parse("urn:isbn:0451450523").is_ok());
        assert!(Identifier::parse("").is_err());
        assert!(Identifier::parse("relative/path").is_err());

        let error = Identifier::parse("no scheme").unwrap_err();
        assert_eq!(error.value, "no scheme");
    }

    #[test]
    fn test_synthesized_identifiers_are_deterministic() {
        let first = Occupation::builder().skill("welding").build();
        let second = Occupation::builder().skill("welding").build();
        let other = Occupation::builder().skill("plumbing").build();

        assert!(first.identifier().is_synthesized());
        assert_eq!(first.identifier(), second.identifier());
        assert_ne!(first.identifier(), other.identifier());
        assert!(
            first
                .identifier()
                .as_str()
                .starts_with("urn:schemaorg-rdf:Occupation:")
        );
    }

    #[test]
    fn test_explicit_identifier_is_kept() {
        let id = Identifier::parse("http://example.org/welder").unwrap();
        let occupation = Occupation::builder().identifier(id.clone()).build();
        assert_eq!(occupation.identifier(), &id);
        assert!(!id.is_synthesized());
    }
}
