//! RDF resource access.
//!
//! A [`Resource`] is a named subject of a [`Graph`] together with accessors
//! over its outgoing triples; a [`MutableResource`] writes them. Objects
//! are decoded from and encoded to resources, one resource per object.
//!
//! ```rust
//! use oxigraph::model::Graph;
//! use schemaorg_rdf::rdf::{MutableResource, Resource, vocab::schema};
//! use schemaorg_rdf::Identifier;
//!
//! let id = Identifier::parse("http://example.org/acme").unwrap();
//! let mut graph = Graph::new();
//! MutableResource::new(&mut graph, id.clone())
//!     .add_literal(schema::NAME, "ACME");
//!
//! let resource = Resource::new(&graph, id);
//! assert_eq!(resource.values(schema::NAME).len(), 1);
//! ```

pub mod document;
pub mod vocab;

use oxigraph::model::vocab::rdf;
use oxigraph::model::{Graph, Literal, NamedNode, NamedNodeRef, Term, TermRef, TripleRef};
use thiserror::Error;

use crate::identifier::Identifier;
use crate::model::ClassKind;

pub use document::{parse_graph, serialize_graph};

/// Nesting limit when decoding nested resources. Each level costs several
/// decoder stack frames, so the limit keeps a debug build within a 2 MiB
/// thread stack.
pub const MAX_NESTING_DEPTH: usize = 16;

// =============================================================================
// RESOURCE ERROR
// =============================================================================

/// Failure to decode an object from a resource.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ResourceError {
    #[error("{resource} {predicate}: expected {expected}, found {actual}")]
    UnexpectedValue {
        resource: NamedNode,
        predicate: NamedNode,
        expected: &'static str,
        actual: Term,
    },

    #[error("{resource} {predicate}: expected at most one value, found {count}")]
    TooManyValues {
        resource: NamedNode,
        predicate: NamedNode,
        count: usize,
    },

    #[error("{resource} is not a {expected} (rdf:type {actual:?})")]
    UnexpectedType {
        resource: NamedNode,
        expected: &'static str,
        actual: Vec<NamedNode>,
    },

    #[error("{resource} has no rdf:type the model knows")]
    MissingType { resource: NamedNode },

    #[error("{resource} matches no variant of {union}: {}", display_attempts(attempts))]
    NoMatchingVariant {
        resource: NamedNode,
        union: &'static str,
        attempts: Vec<ResourceError>,
    },

    #[error("{resource}: nesting deeper than {limit} resources")]
    NestingTooDeep { resource: NamedNode, limit: usize },

    #[error("{resource} is its own value through a cycle of {length} resources")]
    Cycle { resource: NamedNode, length: usize },

    #[error("{resource} is not a member of {enumeration}")]
    NotAMember {
        resource: NamedNode,
        enumeration: &'static str,
    },
}

impl ResourceError {
    /// Failures of the graph's shape rather than of one candidate class.
    /// They end decoding at once; retrying another union variant on the
    /// same subtree would only hit them again.
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            ResourceError::NestingTooDeep { .. } | ResourceError::Cycle { .. }
        )
    }
}

fn display_attempts(attempts: &[ResourceError]) -> String {
    attempts
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

// =============================================================================
// RESOURCE
// =============================================================================

/// Read access to the outgoing triples of a named subject.
#[derive(Debug, Clone)]
pub struct Resource<'g> {
    graph: &'g Graph,
    identifier: Identifier,
    /// Resources decoded on the way here, outermost first.
    ancestors: Vec<Identifier>,
}

impl<'g> Resource<'g> {
    pub fn new(graph: &'g Graph, identifier: impl Into<Identifier>) -> Self {
        Self {
            graph,
            identifier: identifier.into(),
            ancestors: Vec::new(),
        }
    }

    pub fn graph(&self) -> &'g Graph {
        self.graph
    }

    pub fn identifier(&self) -> &Identifier {
        &self.identifier
    }

    pub fn node(&self) -> NamedNode {
        self.identifier.as_named_node().clone()
    }

    pub fn depth(&self) -> usize {
        self.ancestors.len()
    }

    /// All objects of `predicate` on this subject.
    pub fn values(&self, predicate: NamedNodeRef<'_>) -> Vec<Term> {
        self.graph
            .objects_for_subject_predicate(self.identifier.as_node_ref(), predicate)
            .map(TermRef::into_owned)
            .collect()
    }

    /// Named-node values of `rdf:type`.
    pub fn types(&self) -> Vec<NamedNode> {
        self.values(rdf::TYPE)
            .into_iter()
            .filter_map(|term| match term {
                Term::NamedNode(node) => Some(node),
                _ => None,
            })
            .collect()
    }

    /// Known classes among this resource's `rdf:type` values.
    pub fn class_kinds(&self) -> Vec<ClassKind> {
        self.types()
            .iter()
            .filter_map(|node| ClassKind::from_iri(node.as_str()))
            .collect()
    }

    /// Checks that the resource is typed `expected` or one of its subclasses.
    pub fn expect_type(&self, expected: ClassKind) -> Result<(), ResourceError> {
        if self
            .class_kinds()
            .into_iter()
            .any(|kind| kind.is_subclass_of(expected))
        {
            Ok(())
        } else {
            Err(ResourceError::UnexpectedType {
                resource: self.node(),
                expected: expected.name(),
                actual: self.types(),
            })
        }
    }

    /// Resource for a nested object, one level deeper. Fails when
    /// `identifier` is already being decoded further up.
    pub fn nested(&self, identifier: NamedNode) -> Result<Resource<'g>, ResourceError> {
        let path = self.ancestors.iter().chain(std::iter::once(&self.identifier));
        if let Some(position) = path
            .clone()
            .position(|ancestor| ancestor.as_named_node() == &identifier)
        {
            return Err(ResourceError::Cycle {
                resource: identifier,
                length: self.depth() + 1 - position,
            });
        }
        if self.depth() >= MAX_NESTING_DEPTH {
            return Err(ResourceError::NestingTooDeep {
                resource: identifier,
                limit: MAX_NESTING_DEPTH,
            });
        }
        tracing::trace!(parent = %self.identifier, nested = %identifier, depth = self.depth() + 1, "descending into nested resource");
        Ok(Resource {
            graph: self.graph,
            identifier: identifier.into(),
            ancestors: path.cloned().collect(),
        })
    }

    pub fn value_context<'r>(&'r self, predicate: NamedNodeRef<'r>) -> ValueContext<'r, 'g> {
        ValueContext {
            resource: self,
            predicate,
        }
    }
}

/// Where a value being decoded came from: which resource, which predicate.
#[derive(Debug, Clone, Copy)]
pub struct ValueContext<'r, 'g> {
    resource: &'r Resource<'g>,
    predicate: NamedNodeRef<'r>,
}

impl<'r, 'g> ValueContext<'r, 'g> {
    pub fn resource(&self) -> &'r Resource<'g> {
        self.resource
    }

    pub fn predicate(&self) -> NamedNodeRef<'r> {
        self.predicate
    }

    pub fn unexpected(&self, expected: &'static str, actual: &Term) -> ResourceError {
        ResourceError::UnexpectedValue {
            resource: self.resource.node(),
            predicate: self.predicate.into_owned(),
            expected,
            actual: actual.clone(),
        }
    }

    /// Nested resource named by `term`, which must be a named node.
    pub fn nested(&self, term: &Term) -> Result<Resource<'g>, ResourceError> {
        match term {
            Term::NamedNode(node) => self.resource.nested(node.clone()),
            other => Err(self.unexpected("a named node", other)),
        }
    }
}

// =============================================================================
// MUTABLE RESOURCE
// =============================================================================

/// Write access to the outgoing triples of a named subject.
#[derive(Debug)]
pub struct MutableResource<'g> {
    graph: &'g mut Graph,
    identifier: Identifier,
}

impl<'g> MutableResource<'g> {
    pub fn new(graph: &'g mut Graph, identifier: impl Into<Identifier>) -> Self {
        Self {
            graph,
            identifier: identifier.into(),
        }
    }

    pub fn identifier(&self) -> &Identifier {
        &self.identifier
    }

    pub fn graph_mut(&mut self) -> &mut Graph {
        self.graph
    }

    pub fn add(&mut self, predicate: NamedNodeRef<'_>, object: &Term) -> &mut Self {
        self.graph.insert(TripleRef::new(
            self.identifier.as_node_ref(),
            predicate,
            object.as_ref(),
        ));
        self
    }

    pub fn add_literal(&mut self, predicate: NamedNodeRef<'_>, value: &str) -> &mut Self {
        self.add(predicate, &Term::Literal(Literal::new_simple_literal(value)))
    }

    pub fn add_type(&mut self, class: ClassKind) -> &mut Self {
        self.add(rdf::TYPE, &Term::NamedNode(class.iri().into_owned()))
    }
}
