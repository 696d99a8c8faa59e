//! Properties whose values may belong to one of several classes.
//!
//! Decoding tries each variant in declaration order and keeps the first
//! that succeeds. JSON values are discriminated by `type`, RDF resources by
//! `rdf:type`, so at most one variant normally applies; the order only
//! matters for input typed with several classes. Cycles and excessive
//! nesting end RDF decoding at once instead of moving on to the next
//! variant.

use schemars::{JsonSchema, Schema, SchemaGenerator, json_schema};
use serde_json::Value;
use sha2::Digest;
use std::borrow::Cow;

use oxigraph::model::{Graph, Term};

use super::{ClassKind, ObjectType, Organization, Person, Role};
use crate::equality::{EqualsResult, Unequal};
use crate::identifier::Identifier;
use crate::json::{JsonError, JsonErrorKind, JsonPath};
use crate::property::PropertyValue;
use crate::rdf::{ResourceError, ValueContext};

macro_rules! union_value {
    (
        $(#[$meta:meta])*
        pub enum $name:ident { $($variant:ident),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq)]
        pub enum $name {
            $($variant($variant)),+
        }

        impl $name {
            /// Candidate classes in decoding order.
            pub const VARIANTS: &'static [ClassKind] = &[$(ClassKind::$variant),+];

            pub fn kind(&self) -> ClassKind {
                match self {
                    $($name::$variant(_) => ClassKind::$variant),+
                }
            }

            pub fn identifier(&self) -> &Identifier {
                match self {
                    $($name::$variant(value) => value.identifier()),+
                }
            }
        }

        $(
            impl From<$variant> for $name {
                fn from(value: $variant) -> Self {
                    $name::$variant(value)
                }
            }
        )+

        impl PropertyValue for $name {
            fn value_equals(&self, other: &Self) -> EqualsResult {
                match (self, other) {
                    $(($name::$variant(left), $name::$variant(right)) => left.equals(right),)+
                    _ => Err(Unequal::Variant {
                        left: self.kind().name(),
                        right: other.kind().name(),
                    }),
                }
            }

            fn hash_value<H: Digest>(&self, hasher: &mut H) {
                match self {
                    $($name::$variant(value) => ObjectType::hash(value, hasher)),+
                }
            }

            fn sort_key(&self) -> String {
                self.identifier().as_str().to_string()
            }

            fn to_json_value(&self) -> Value {
                match self {
                    $($name::$variant(value) => value.to_json()),+
                }
            }

            fn from_json_value(value: &Value, path: &JsonPath) -> Result<Self, JsonError> {
                let mut attempts = Vec::new();
                $(
                    match <$variant as ObjectType>::from_json_at(value, path) {
                        Ok(decoded) => return Ok($name::$variant(decoded)),
                        Err(error) => attempts.push(error),
                    }
                )+
                tracing::warn!(union = stringify!($name), path = %path, attempts = attempts.len(), "no variant matched JSON value");
                Err(JsonError::new(
                    path.clone(),
                    JsonErrorKind::NoMatchingVariant {
                        union: stringify!($name),
                        attempts,
                    },
                ))
            }

            fn to_rdf_term(&self, graph: &mut Graph) -> Term {
                let node = match self {
                    $($name::$variant(value) => value.to_rdf(graph, false)),+
                };
                Term::NamedNode(node)
            }

            fn from_rdf_term(term: &Term, context: &ValueContext<'_, '_>) -> Result<Self, ResourceError> {
                let nested = context.nested(term)?;
                let mut attempts = Vec::new();
                $(
                    match <$variant as ObjectType>::from_rdf(&nested, false) {
                        Ok(decoded) => return Ok($name::$variant(decoded)),
                        Err(error) if error.is_structural() => return Err(error),
                        Err(error) => attempts.push(error),
                    }
                )+
                tracing::warn!(union = stringify!($name), resource = %nested.identifier(), attempts = attempts.len(), "no variant matched resource");
                Err(ResourceError::NoMatchingVariant {
                    resource: nested.node(),
                    union: stringify!($name),
                    attempts,
                })
            }

            fn value_schema(generator: &mut SchemaGenerator) -> Schema {
                generator.subschema_for::<Self>()
            }
        }

        impl JsonSchema for $name {
            fn schema_name() -> Cow<'static, str> {
                Cow::Borrowed(stringify!($name))
            }

            fn json_schema(generator: &mut SchemaGenerator) -> Schema {
                let variants = vec![$(generator.subschema_for::<$variant>()),+];
                json_schema!({ "anyOf": variants })
            }
        }
    };
}

union_value! {
    /// Who did something: a person or an organization.
    pub enum Agent { Person, Organization }
}

union_value! {
    /// What a person is a member of: an organization directly, or a role
    /// qualifying the membership.
    pub enum Membership { Organization, Role }
}
