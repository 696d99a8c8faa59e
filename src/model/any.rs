//! Values of any concrete class, for documents whose class is only known
//! at run time.

use std::collections::BTreeSet;

use oxigraph::model::vocab::rdf;
use oxigraph::model::{Graph, NamedNode, Term, TermRef};
use serde_json::Value;
use sha2::Digest;

use super::{
    ClassKind, GenderType, ImageObject, ObjectType, Occupation, Organization, Person,
    QuantitativeValue, Role, Thing,
};
use crate::equality::{EqualsResult, Unequal};
use crate::identifier::Identifier;
use crate::json::{JsonError, JsonObject, JsonPath};
use crate::rdf::{Resource, ResourceError};

macro_rules! any_object {
    ($($variant:ident),+ $(,)?) => {
        /// A value of any concrete class.
        #[derive(Debug, Clone, PartialEq)]
        pub enum AnyObject {
            $($variant($variant)),+
        }

        $(
            impl From<$variant> for AnyObject {
                fn from(value: $variant) -> Self {
                    AnyObject::$variant(value)
                }
            }
        )+

        impl AnyObject {
            pub fn kind(&self) -> ClassKind {
                match self {
                    $(AnyObject::$variant(_) => ClassKind::$variant),+
                }
            }

            pub fn identifier(&self) -> &Identifier {
                match self {
                    $(AnyObject::$variant(value) => value.identifier()),+
                }
            }

            pub fn equals(&self, other: &Self) -> EqualsResult {
                match (self, other) {
                    $((AnyObject::$variant(left), AnyObject::$variant(right)) => left.equals(right),)+
                    _ => Err(Unequal::Variant {
                        left: self.kind().name(),
                        right: other.kind().name(),
                    }),
                }
            }

            pub fn hash<H: Digest>(&self, hasher: &mut H) {
                match self {
                    $(AnyObject::$variant(value) => ObjectType::hash(value, hasher)),+
                }
            }

            pub fn to_json(&self) -> Value {
                match self {
                    $(AnyObject::$variant(value) => value.to_json()),+
                }
            }

            pub fn to_rdf(&self, graph: &mut Graph, ignore_rdf_type: bool) -> NamedNode {
                match self {
                    $(AnyObject::$variant(value) => value.to_rdf(graph, ignore_rdf_type)),+
                }
            }

            /// Decodes `object` as the concrete class `kind`, without
            /// checking the discriminant again.
            fn decode_json(kind: ClassKind, object: &JsonObject<'_>) -> Result<Self, JsonError> {
                match kind {
                    $(ClassKind::$variant => $variant::from_json_object(object).map(AnyObject::$variant),)+
                    _ => Thing::from_json_object(object).map(AnyObject::Thing),
                }
            }

            /// Decodes `resource` as the concrete class `kind`; the type
            /// check is skipped when `ignore_rdf_type` is set.
            pub fn from_rdf_as(
                kind: ClassKind,
                resource: &Resource<'_>,
                ignore_rdf_type: bool,
            ) -> Result<Self, ResourceError> {
                match kind.concrete() {
                    $(ClassKind::$variant => $variant::from_rdf(resource, ignore_rdf_type).map(AnyObject::$variant),)+
                    _ => Thing::from_rdf(resource, ignore_rdf_type).map(AnyObject::Thing),
                }
            }
        }
    };
}

any_object!(
    Thing,
    ImageObject,
    Person,
    Organization,
    Role,
    Occupation,
    QuantitativeValue,
    GenderType,
);

impl AnyObject {
    /// Decodes a JSON object as the class its `type` names. Abstract classes
    /// decode as their nearest concrete ancestor.
    ///
    /// ```rust
    /// use schemaorg_rdf::model::{AnyObject, ClassKind};
    /// use serde_json::json;
    ///
    /// let value = AnyObject::from_json(&json!({"type": "Occupation", "skills": ["rust"]})).unwrap();
    /// assert_eq!(value.kind(), ClassKind::Occupation);
    /// ```
    pub fn from_json(value: &Value) -> Result<Self, JsonError> {
        let object = JsonObject::new(value, JsonPath::root())?;
        let kind = object.class_kind()?;
        tracing::debug!(declared = kind.name(), decoded = kind.concrete().name(), "dispatching JSON object");
        Self::decode_json(kind.concrete(), &object)
    }

    /// Decodes a resource as the most specific class among its known
    /// `rdf:type` values.
    pub fn from_rdf(resource: &Resource<'_>) -> Result<Self, ResourceError> {
        let kind = ClassKind::most_specific(resource.class_kinds()).ok_or_else(|| {
            ResourceError::MissingType {
                resource: resource.node(),
            }
        })?;
        tracing::debug!(resource = %resource.identifier(), declared = kind.name(), decoded = kind.concrete().name(), "dispatching resource");
        Self::from_rdf_as(kind, resource, false)
    }

    /// Decodes a JSON object as `kind`, which its `type` must name or
    /// specialize. The value keeps only the properties of `kind`.
    pub fn from_json_as(kind: ClassKind, value: &Value) -> Result<Self, JsonError> {
        let object = JsonObject::new(value, JsonPath::root())?;
        object.expect_type(kind)?;
        Self::decode_json(kind.concrete(), &object)
    }

    /// Decodes every root of `graph`: each named subject with a known
    /// `rdf:type` that is not itself the value of another triple. Roots are
    /// returned in identifier order.
    pub fn decode_roots(graph: &Graph) -> Result<Vec<Self>, ResourceError> {
        let roots = root_subjects(graph, true);
        tracing::debug!(roots = roots.len(), triples = graph.len(), "decoding graph roots");
        roots
            .into_iter()
            .map(|identifier| Self::from_rdf(&Resource::new(graph, identifier)))
            .collect()
    }

    /// Decodes every root of `graph` as `kind`. With `ignore_rdf_type`,
    /// untyped subjects count as roots too.
    pub fn decode_roots_as(
        graph: &Graph,
        kind: ClassKind,
        ignore_rdf_type: bool,
    ) -> Result<Vec<Self>, ResourceError> {
        let roots = root_subjects(graph, !ignore_rdf_type);
        tracing::debug!(roots = roots.len(), class = kind.name(), ignore_rdf_type, "decoding graph roots");
        roots
            .into_iter()
            .map(|identifier| Self::from_rdf_as(kind, &Resource::new(graph, identifier), ignore_rdf_type))
            .collect()
    }
}

/// Named subjects that are not the object of any triple, optionally only
/// those typed with a known class.
fn root_subjects(graph: &Graph, typed_only: bool) -> BTreeSet<Identifier> {
    let candidates: BTreeSet<NamedNode> = graph
        .iter()
        .filter(|triple| {
            !typed_only
                || (triple.predicate == rdf::TYPE
                    && matches!(triple.object, TermRef::NamedNode(class) if ClassKind::from_iri(class.as_str()).is_some()))
        })
        .filter_map(|triple| match Term::from(triple.subject.into_owned()) {
            Term::NamedNode(node) => Some(node),
            _ => None,
        })
        .collect();
    let roots: BTreeSet<Identifier> = candidates
        .iter()
        .filter(|node| graph.triples_for_object(node.as_ref()).next().is_none())
        .cloned()
        .map(Identifier::from)
        .collect();
    if roots.is_empty() && !candidates.is_empty() {
        tracing::warn!(
            candidates = candidates.len(),
            "no root resources: every candidate subject is the value of another triple"
        );
    }
    roots
}
