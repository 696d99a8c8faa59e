//! The operations every class supports.

use std::fmt;

use oxigraph::model::{Graph, NamedNode};
use schemars::{Schema, SchemaGenerator, json_schema};
use serde_json::{Map, Value};
use sha2::Digest;

use super::ClassKind;
use crate::equality::{self, EqualsResult};
use crate::hashing;
use crate::identifier::Identifier;
use crate::json::{ID_KEY, JsonError, JsonObject, JsonPath, TYPE_KEY};
use crate::property::PropertyInfo;
use crate::rdf::{MutableResource, Resource, ResourceError};

/// Properties declared by one class, as shown in generated forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSetInfo {
    pub class: ClassKind,
    pub properties: &'static [PropertyInfo],
}

/// The properties one class declares, composed into every subclass.
///
/// Implementations are generated by `field_set!`.
pub trait FieldSet: Clone + Default + fmt::Debug {
    const INFO: FieldSetInfo;

    fn equals(&self, other: &Self) -> EqualsResult;

    fn hash_into<H: Digest>(&self, hasher: &mut H);

    fn canonicalize(&mut self);

    fn write_json(&self, object: &mut Map<String, Value>);

    fn read_json(object: &JsonObject<'_>) -> Result<Self, JsonError>;

    fn write_rdf(&self, resource: &mut MutableResource<'_>);

    fn read_rdf(resource: &Resource<'_>) -> Result<Self, ResourceError>;

    fn write_schema(generator: &mut SchemaGenerator, properties: &mut Map<String, Value>);
}

/// A concrete class: an identifier plus the field sets of the class and
/// its ancestors.
///
/// Conversions to JSON and RDF are provided on top of the per-class
/// `*_properties` hooks, which visit field sets in inheritance order.
pub trait ObjectType: Clone + fmt::Debug + Sized {
    const KIND: ClassKind;

    /// Field sets from `Thing` down to this class.
    const FIELD_SETS: &'static [FieldSetInfo];

    /// Whether JSON input must carry an `@id` instead of having one
    /// synthesized.
    const REQUIRES_IDENTIFIER: bool = false;

    fn identifier(&self) -> &Identifier;

    /// Compares field sets in declared order, stopping at the first
    /// mismatch. Identifiers are not compared.
    fn equals_properties(&self, other: &Self) -> EqualsResult;

    fn hash_properties<H: Digest>(&self, hasher: &mut H);

    fn write_json_properties(&self, object: &mut Map<String, Value>);

    /// Decodes a JSON object whose `type` has already been checked.
    fn from_json_object(object: &JsonObject<'_>) -> Result<Self, JsonError>;

    fn write_rdf_properties(&self, resource: &mut MutableResource<'_>);

    /// Decodes a resource whose `rdf:type` has already been checked.
    fn from_rdf_properties(resource: &Resource<'_>) -> Result<Self, ResourceError>;

    fn write_schema_properties(generator: &mut SchemaGenerator, properties: &mut Map<String, Value>);

    fn identifier_schema() -> Schema {
        json_schema!({ "type": "string", "format": "iri" })
    }

    fn equals(&self, other: &Self) -> EqualsResult {
        equality::scalars(self.identifier(), other.identifier())
            .map_err(|unequal| unequal.in_property(Self::KIND.name(), ID_KEY))?;
        self.equals_properties(other)
    }

    /// Feeds the class name, the identifier and every property to `hasher`.
    fn hash<H: Digest>(&self, hasher: &mut H) {
        hashing::hash_str(hasher, Self::KIND.name());
        hashing::hash_str(hasher, self.identifier().as_str());
        self.hash_properties(hasher);
    }

    fn to_json(&self) -> Value {
        let mut object = Map::new();
        object.insert(
            ID_KEY.to_string(),
            Value::String(self.identifier().as_str().to_string()),
        );
        object.insert(
            TYPE_KEY.to_string(),
            Value::String(Self::KIND.name().to_string()),
        );
        self.write_json_properties(&mut object);
        Value::Object(object)
    }

    fn from_json(value: &Value) -> Result<Self, JsonError> {
        Self::from_json_at(value, &JsonPath::root())
    }

    /// Decodes a value nested at `path`; the `type` discriminant must name
    /// this class or a subclass.
    fn from_json_at(value: &Value, path: &JsonPath) -> Result<Self, JsonError> {
        let object = JsonObject::new(value, path.clone())?;
        object.expect_type(Self::KIND)?;
        Self::from_json_object(&object)
    }

    /// Writes this object, and every object nested in it, to `graph`.
    /// Returns the node naming this object.
    fn to_rdf(&self, graph: &mut Graph, ignore_rdf_type: bool) -> NamedNode {
        let mut resource = MutableResource::new(graph, self.identifier().clone());
        if !ignore_rdf_type {
            resource.add_type(Self::KIND);
        }
        self.write_rdf_properties(&mut resource);
        self.identifier().as_named_node().clone()
    }

    fn from_rdf(resource: &Resource<'_>, ignore_rdf_type: bool) -> Result<Self, ResourceError> {
        if !ignore_rdf_type {
            resource.expect_type(Self::KIND)?;
        }
        tracing::trace!(resource = %resource.identifier(), class = Self::KIND.name(), "decoding resource");
        Self::from_rdf_properties(resource)
    }
}

/// Checks that `object` carries an `@id`, and returns it.
pub(crate) fn required_identifier(object: &JsonObject<'_>) -> Result<Identifier, JsonError> {
    object.identifier()?.ok_or_else(|| {
        JsonError::new(
            object.path_of(ID_KEY),
            crate::json::JsonErrorKind::MissingField,
        )
    })
}
