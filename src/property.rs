//! Property codecs.
//!
//! A property maps one struct field to one JSON key and one RDF predicate.
//! [`PropertyValue`] encodes a single value (a literal, an IRI, a nested
//! object or a union of objects); [`Property`] adds cardinality on top of
//! it: `Option<T>` for 0..1 values and `Vec<T>` for repeated values.
//!
//! Class code stays one line per field and operation:
//!
//! ```rust,ignore
//! self.name.write_json(object, &NAME);
//! let name = Option::<String>::read_json(object, &NAME)?;
//! ```

use std::fmt;

use chrono::NaiveDate;
use oxigraph::model::vocab::{rdf, xsd};
use oxigraph::model::{Graph, Literal, NamedNodeRef, Term};
use schemars::{Schema, SchemaGenerator, json_schema};
use serde_json::{Map, Value};
use sha2::Digest;

use crate::equality::{self, EqualsResult, Unequal};
use crate::hashing;
use crate::identifier::Identifier;
use crate::json::{ID_KEY, JsonError, JsonObject, JsonPath};
use crate::rdf::{MutableResource, Resource, ResourceError, ValueContext};

// =============================================================================
// PROPERTY METADATA
// =============================================================================

/// Static description of a property.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PropertyInfo {
    /// Declaring class, used in mismatch descriptors.
    pub type_name: &'static str,
    pub json_key: &'static str,
    pub predicate: NamedNodeRef<'static>,
    /// Human-readable label for generated forms.
    pub label: &'static str,
}

impl PropertyInfo {
    pub const fn new(
        type_name: &'static str,
        json_key: &'static str,
        predicate: NamedNodeRef<'static>,
        label: &'static str,
    ) -> Self {
        Self {
            type_name,
            json_key,
            predicate,
            label,
        }
    }
}

// =============================================================================
// SINGLE VALUES
// =============================================================================

/// Codec for one property value.
pub trait PropertyValue: Clone + fmt::Debug + Sized {
    fn value_equals(&self, other: &Self) -> EqualsResult;

    fn hash_value<H: Digest>(&self, hasher: &mut H);

    /// Key ordering values of repeated properties.
    fn sort_key(&self) -> String;

    fn to_json_value(&self) -> Value;

    fn from_json_value(value: &Value, path: &JsonPath) -> Result<Self, JsonError>;

    /// Writes any triples the value needs and returns the term to link.
    fn to_rdf_term(&self, graph: &mut Graph) -> Term;

    fn from_rdf_term(term: &Term, context: &ValueContext<'_, '_>) -> Result<Self, ResourceError>;

    fn value_schema(generator: &mut SchemaGenerator) -> Schema;
}

impl PropertyValue for String {
    fn value_equals(&self, other: &Self) -> EqualsResult {
        equality::scalars(self, other)
    }

    fn hash_value<H: Digest>(&self, hasher: &mut H) {
        hashing::hash_str(hasher, self);
    }

    fn sort_key(&self) -> String {
        self.clone()
    }

    fn to_json_value(&self) -> Value {
        Value::String(self.clone())
    }

    fn from_json_value(value: &Value, path: &JsonPath) -> Result<Self, JsonError> {
        value
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| JsonError::expected(path, "string", value))
    }

    fn to_rdf_term(&self, _graph: &mut Graph) -> Term {
        Term::Literal(Literal::new_simple_literal(self.as_str()))
    }

    /// Language-tagged literals are accepted; the tag is dropped.
    fn from_rdf_term(term: &Term, context: &ValueContext<'_, '_>) -> Result<Self, ResourceError> {
        match term {
            Term::Literal(literal)
                if literal.datatype() == xsd::STRING || literal.datatype() == rdf::LANG_STRING =>
            {
                Ok(literal.value().to_string())
            }
            other => Err(context.unexpected("an xsd:string or rdf:langString literal", other)),
        }
    }

    fn value_schema(_generator: &mut SchemaGenerator) -> Schema {
        json_schema!({ "type": "string" })
    }
}

const NAN: &str = "NaN";
const INF: &str = "INF";
const NEG_INF: &str = "-INF";

/// Canonical xsd:double lexical form. `-0.0` is written as `0`: the two
/// compare and hash alike, so they must also land on the same RDF node.
fn double_lexical(value: f64) -> String {
    if value.is_nan() {
        NAN.to_string()
    } else if value == 0.0 {
        "0".to_string()
    } else if value == f64::INFINITY {
        INF.to_string()
    } else if value == f64::NEG_INFINITY {
        NEG_INF.to_string()
    } else {
        value.to_string()
    }
}

fn parse_double(lexical: &str) -> Option<f64> {
    match lexical {
        NAN => Some(f64::NAN),
        INF | "+INF" => Some(f64::INFINITY),
        NEG_INF => Some(f64::NEG_INFINITY),
        other => other.trim().parse::<f64>().ok().filter(|v| v.is_finite()),
    }
}

impl PropertyValue for f64 {
    fn value_equals(&self, other: &Self) -> EqualsResult {
        equality::doubles(*self, *other)
    }

    fn hash_value<H: Digest>(&self, hasher: &mut H) {
        hashing::hash_f64(hasher, *self);
    }

    fn sort_key(&self) -> String {
        double_lexical(*self)
    }

    /// Finite values are JSON numbers; non-finite ones use their xsd
    /// lexical form since JSON has no representation for them.
    fn to_json_value(&self) -> Value {
        serde_json::Number::from_f64(*self)
            .map(Value::Number)
            .unwrap_or_else(|| Value::String(double_lexical(*self)))
    }

    fn from_json_value(value: &Value, path: &JsonPath) -> Result<Self, JsonError> {
        match value {
            Value::Number(number) => number
                .as_f64()
                .ok_or_else(|| JsonError::invalid(path, format!("{number} is not a double"))),
            Value::String(lexical) if matches!(lexical.as_str(), NAN | INF | NEG_INF) => {
                parse_double(lexical)
                    .ok_or_else(|| JsonError::invalid(path, format!("{lexical:?} is not a double")))
            }
            other => Err(JsonError::expected(path, "number", other)),
        }
    }

    fn to_rdf_term(&self, _graph: &mut Graph) -> Term {
        Term::Literal(Literal::new_typed_literal(double_lexical(*self), xsd::DOUBLE))
    }

    fn from_rdf_term(term: &Term, context: &ValueContext<'_, '_>) -> Result<Self, ResourceError> {
        match term {
            Term::Literal(literal)
                if [xsd::DOUBLE, xsd::FLOAT, xsd::DECIMAL, xsd::INTEGER]
                    .contains(&literal.datatype()) =>
            {
                parse_double(literal.value()).ok_or_else(|| context.unexpected("a double", term))
            }
            other => Err(context.unexpected("a numeric literal", other)),
        }
    }

    fn value_schema(_generator: &mut SchemaGenerator) -> Schema {
        json_schema!({
            "anyOf": [
                { "type": "number" },
                { "enum": [NAN, INF, NEG_INF] }
            ]
        })
    }
}

impl PropertyValue for bool {
    fn value_equals(&self, other: &Self) -> EqualsResult {
        equality::scalars(self, other)
    }

    fn hash_value<H: Digest>(&self, hasher: &mut H) {
        hashing::hash_bool(hasher, *self);
    }

    fn sort_key(&self) -> String {
        self.to_string()
    }

    fn to_json_value(&self) -> Value {
        Value::Bool(*self)
    }

    fn from_json_value(value: &Value, path: &JsonPath) -> Result<Self, JsonError> {
        value
            .as_bool()
            .ok_or_else(|| JsonError::expected(path, "boolean", value))
    }

    fn to_rdf_term(&self, _graph: &mut Graph) -> Term {
        Term::Literal(Literal::new_typed_literal(self.to_string(), xsd::BOOLEAN))
    }

    fn from_rdf_term(term: &Term, context: &ValueContext<'_, '_>) -> Result<Self, ResourceError> {
        match term {
            Term::Literal(literal) if literal.datatype() == xsd::BOOLEAN => {
                match literal.value() {
                    "true" | "1" => Ok(true),
                    "false" | "0" => Ok(false),
                    _ => Err(context.unexpected("a boolean", term)),
                }
            }
            other => Err(context.unexpected("an xsd:boolean literal", other)),
        }
    }

    fn value_schema(_generator: &mut SchemaGenerator) -> Schema {
        json_schema!({ "type": "boolean" })
    }
}

impl PropertyValue for NaiveDate {
    fn value_equals(&self, other: &Self) -> EqualsResult {
        equality::scalars(self, other)
    }

    fn hash_value<H: Digest>(&self, hasher: &mut H) {
        hashing::hash_str(hasher, &self.to_string());
    }

    fn sort_key(&self) -> String {
        self.to_string()
    }

    fn to_json_value(&self) -> Value {
        Value::String(self.to_string())
    }

    fn from_json_value(value: &Value, path: &JsonPath) -> Result<Self, JsonError> {
        let lexical = value
            .as_str()
            .ok_or_else(|| JsonError::expected(path, "string", value))?;
        lexical
            .parse::<NaiveDate>()
            .map_err(|error| JsonError::invalid(path, format!("{lexical:?} is not a date: {error}")))
    }

    fn to_rdf_term(&self, _graph: &mut Graph) -> Term {
        Term::Literal(Literal::new_typed_literal(self.to_string(), xsd::DATE))
    }

    fn from_rdf_term(term: &Term, context: &ValueContext<'_, '_>) -> Result<Self, ResourceError> {
        match term {
            Term::Literal(literal) if literal.datatype() == xsd::DATE => literal
                .value()
                .parse::<NaiveDate>()
                .map_err(|_| context.unexpected("a date", term)),
            other => Err(context.unexpected("an xsd:date literal", other)),
        }
    }

    fn value_schema(_generator: &mut SchemaGenerator) -> Schema {
        json_schema!({ "type": "string", "format": "date" })
    }
}

/// IRI-valued properties, in the `{"@id": ...}` reference form.
impl PropertyValue for Identifier {
    fn value_equals(&self, other: &Self) -> EqualsResult {
        equality::scalars(self, other)
    }

    fn hash_value<H: Digest>(&self, hasher: &mut H) {
        hashing::hash_str(hasher, self.as_str());
    }

    fn sort_key(&self) -> String {
        self.as_str().to_string()
    }

    fn to_json_value(&self) -> Value {
        let mut object = Map::new();
        object.insert(ID_KEY.to_string(), Value::String(self.as_str().to_string()));
        Value::Object(object)
    }

    fn from_json_value(value: &Value, path: &JsonPath) -> Result<Self, JsonError> {
        let object = JsonObject::new(value, path.clone())?;
        object
            .identifier()?
            .ok_or_else(|| JsonError::new(object.path_of(ID_KEY), crate::json::JsonErrorKind::MissingField))
    }

    fn to_rdf_term(&self, _graph: &mut Graph) -> Term {
        Term::NamedNode(self.as_named_node().clone())
    }

    fn from_rdf_term(term: &Term, context: &ValueContext<'_, '_>) -> Result<Self, ResourceError> {
        match term {
            Term::NamedNode(node) => Ok(Identifier::from(node.clone())),
            other => Err(context.unexpected("a named node", other)),
        }
    }

    fn value_schema(_generator: &mut SchemaGenerator) -> Schema {
        json_schema!({
            "type": "object",
            "properties": {
                "@id": { "type": "string", "format": "iri" }
            },
            "required": ["@id"]
        })
    }
}

// =============================================================================
// CARDINALITY
// =============================================================================

/// A struct field: a [`PropertyValue`] with its cardinality.
pub trait Property: Default + Sized {
    type Item: PropertyValue;

    /// Sets an optional value or adds a repeated one.
    fn put(&mut self, value: Self::Item);

    /// Brings repeated values into canonical order.
    fn canonicalize(&mut self) {}

    fn property_equals(&self, other: &Self) -> EqualsResult;

    fn hash_into<H: Digest>(&self, hasher: &mut H);

    fn write_json(&self, object: &mut Map<String, Value>, info: &PropertyInfo);

    fn read_json(object: &JsonObject<'_>, info: &PropertyInfo) -> Result<Self, JsonError>;

    fn write_rdf(&self, resource: &mut MutableResource<'_>, info: &PropertyInfo);

    fn read_rdf(resource: &Resource<'_>, info: &PropertyInfo) -> Result<Self, ResourceError>;

    fn property_schema(generator: &mut SchemaGenerator) -> Schema;
}

/// Compares one field of two objects, attributing a mismatch to it.
pub fn equals<P: Property>(left: &P, right: &P, info: &PropertyInfo) -> EqualsResult {
    left.property_equals(right)
        .map_err(|unequal| unequal.in_property(info.type_name, info.json_key))
}

/// Adds one field's schema to a properties map.
pub fn insert_schema<P: Property>(
    generator: &mut SchemaGenerator,
    properties: &mut Map<String, Value>,
    info: &PropertyInfo,
) {
    let mut schema = P::property_schema(generator);
    schema.insert("title".to_string(), Value::String(info.label.to_string()));
    properties.insert(info.json_key.to_string(), schema.to_value());
}

impl<T: PropertyValue> Property for Option<T> {
    type Item = T;

    fn put(&mut self, value: T) {
        *self = Some(value);
    }

    fn property_equals(&self, other: &Self) -> EqualsResult {
        match (self, other) {
            (None, None) => Ok(()),
            (Some(left), Some(right)) => left.value_equals(right),
            (Some(left), None) => Err(Unequal::LeftPresent {
                left: left.sort_key(),
            }),
            (None, Some(right)) => Err(Unequal::RightPresent {
                right: right.sort_key(),
            }),
        }
    }

    fn hash_into<H: Digest>(&self, hasher: &mut H) {
        hashing::hash_presence(hasher, self.is_some());
        if let Some(value) = self {
            value.hash_value(hasher);
        }
    }

    fn write_json(&self, object: &mut Map<String, Value>, info: &PropertyInfo) {
        if let Some(value) = self {
            object.insert(info.json_key.to_string(), value.to_json_value());
        }
    }

    fn read_json(object: &JsonObject<'_>, info: &PropertyInfo) -> Result<Self, JsonError> {
        object
            .get(info.json_key)
            .map(|value| T::from_json_value(value, &object.path_of(info.json_key)))
            .transpose()
    }

    fn write_rdf(&self, resource: &mut MutableResource<'_>, info: &PropertyInfo) {
        if let Some(value) = self {
            let term = value.to_rdf_term(resource.graph_mut());
            resource.add(info.predicate, &term);
        }
    }

    fn read_rdf(resource: &Resource<'_>, info: &PropertyInfo) -> Result<Self, ResourceError> {
        let values = resource.values(info.predicate);
        match values.as_slice() {
            [] => Ok(None),
            [term] => T::from_rdf_term(term, &resource.value_context(info.predicate)).map(Some),
            _ => Err(ResourceError::TooManyValues {
                resource: resource.node(),
                predicate: info.predicate.into_owned(),
                count: values.len(),
            }),
        }
    }

    fn property_schema(generator: &mut SchemaGenerator) -> Schema {
        T::value_schema(generator)
    }
}

impl<T: PropertyValue> Property for Vec<T> {
    type Item = T;

    fn put(&mut self, value: T) {
        self.push(value);
    }

    fn canonicalize(&mut self) {
        *self = canonical_set(std::mem::take(self));
    }

    fn property_equals(&self, other: &Self) -> EqualsResult {
        if self.len() != other.len() {
            return Err(Unequal::ArrayLength {
                left: self.len(),
                right: other.len(),
            });
        }
        for (index, (left, right)) in self.iter().zip(other).enumerate() {
            left.value_equals(right)
                .map_err(|inner| Unequal::ArrayElement {
                    index,
                    inner: Box::new(inner),
                })?;
        }
        Ok(())
    }

    fn hash_into<H: Digest>(&self, hasher: &mut H) {
        hashing::hash_len(hasher, self.len());
        for value in self {
            value.hash_value(hasher);
        }
    }

    fn write_json(&self, object: &mut Map<String, Value>, info: &PropertyInfo) {
        if !self.is_empty() {
            object.insert(
                info.json_key.to_string(),
                Value::Array(self.iter().map(PropertyValue::to_json_value).collect()),
            );
        }
    }

    /// Accepts an array, or a single bare value as a one-element set.
    fn read_json(object: &JsonObject<'_>, info: &PropertyInfo) -> Result<Self, JsonError> {
        let path = object.path_of(info.json_key);
        match object.get(info.json_key) {
            None => Ok(Vec::new()),
            Some(Value::Array(items)) => items
                .iter()
                .enumerate()
                .map(|(index, item)| T::from_json_value(item, &path.index(index)))
                .collect(),
            Some(single) => T::from_json_value(single, &path).map(|value| vec![value]),
        }
    }

    fn write_rdf(&self, resource: &mut MutableResource<'_>, info: &PropertyInfo) {
        for value in self {
            let term = value.to_rdf_term(resource.graph_mut());
            resource.add(info.predicate, &term);
        }
    }

    fn read_rdf(resource: &Resource<'_>, info: &PropertyInfo) -> Result<Self, ResourceError> {
        let context = resource.value_context(info.predicate);
        resource
            .values(info.predicate)
            .iter()
            .map(|term| T::from_rdf_term(term, &context))
            .collect()
    }

    fn property_schema(generator: &mut SchemaGenerator) -> Schema {
        let items = T::value_schema(generator);
        json_schema!({
            "type": "array",
            "items": items
        })
    }
}

/// Sorts and de-duplicates the values of a repeated property. RDF carries
/// no order, so this is the order every representation agrees on.
pub fn canonical_set<T: PropertyValue>(mut values: Vec<T>) -> Vec<T> {
    values.sort_by_cached_key(PropertyValue::sort_key);
    values.dedup_by(|a, b| a.sort_key() == b.sort_key() && a.value_equals(b).is_ok());
    values
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rdf::vocab::schema;
    use serde_json::json;

    const NAME: PropertyInfo = PropertyInfo::new("Thing", "name", schema::NAME, "Name");
    const ALTERNATE_NAME: PropertyInfo =
        PropertyInfo::new("Thing", "alternateName", schema::ALTERNATE_NAME, "Alternate names");

    fn subject() -> Identifier {
        Identifier::parse("http://example.org/s").unwrap()
    }

    #[test]
    fn test_option_equality_reports_presence() {
        let present = Some("a".to_string());
        let absent: Option<String> = None;
        assert_eq!(
            equals(&present, &absent, &NAME),
            Err(Unequal::LeftPresent {
                left: "a".to_string()
            }
            .in_property("Thing", "name"))
        );
        assert!(equals(&absent, &absent, &NAME).is_ok());
    }

    #[test]
    fn test_set_reads_single_bare_value() {
        let value = json!({"alternateName": "Bob"});
        let object = JsonObject::new(&value, JsonPath::root()).unwrap();
        let names = Vec::<String>::read_json(&object, &ALTERNATE_NAME).unwrap();
        assert_eq!(names, vec!["Bob".to_string()]);
    }

    #[test]
    fn test_set_errors_carry_element_path() {
        let value = json!({"alternateName": ["Bob", 7]});
        let object = JsonObject::new(&value, JsonPath::root()).unwrap();
        let error = Vec::<String>::read_json(&object, &ALTERNATE_NAME).unwrap_err();
        assert_eq!(error.path.to_string(), "$.alternateName[1]");
    }

    #[test]
    fn test_optional_rejects_multiple_rdf_values() {
        let mut graph = Graph::new();
        MutableResource::new(&mut graph, subject())
            .add_literal(schema::NAME, "a")
            .add_literal(schema::NAME, "b");
        let resource = Resource::new(&graph, subject());
        let error = Option::<String>::read_rdf(&resource, &NAME).unwrap_err();
        assert!(matches!(error, ResourceError::TooManyValues { count: 2, .. }));
    }

    #[test]
    fn test_double_lexical_forms() {
        for value in [1.5, -0.25, 1e300, f64::INFINITY, f64::NEG_INFINITY] {
            assert_eq!(parse_double(&double_lexical(value)), Some(value));
        }
        assert!(parse_double(&double_lexical(f64::NAN)).unwrap().is_nan());
        assert_eq!(double_lexical(-0.0), double_lexical(0.0));
        assert_eq!((-0.0f64).sort_key(), "0");
        assert_eq!(f64::NAN.to_json_value(), json!("NaN"));
        assert_eq!(2.5f64.to_json_value(), json!(2.5));
    }

    #[test]
    fn test_canonical_set_sorts_and_dedups() {
        let values = vec!["b".to_string(), "a".to_string(), "b".to_string()];
        assert_eq!(canonical_set(values), vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn test_literal_datatypes_are_checked() {
        let mut graph = Graph::new();
        let mut resource = MutableResource::new(&mut graph, subject());
        resource.add(
            schema::NAME,
            &Term::Literal(Literal::new_typed_literal("5", xsd::INTEGER)),
        );
        let resource = Resource::new(&graph, subject());
        let error = Option::<String>::read_rdf(&resource, &NAME).unwrap_err();
        assert!(matches!(
            error,
            ResourceError::UnexpectedValue { expected: "an xsd:string or rdf:langString literal", .. }
        ));
    }

    #[test]
    fn test_language_tagged_strings_lose_their_tag() {
        let mut graph = Graph::new();
        let mut resource = MutableResource::new(&mut graph, subject());
        resource.add(
            schema::NAME,
            &Term::Literal(Literal::new_language_tagged_literal_unchecked("ACME", "en")),
        );
        let resource = Resource::new(&graph, subject());
        let name = Option::<String>::read_rdf(&resource, &NAME).unwrap();
        assert_eq!(name.as_deref(), Some("ACME"));
    }
}
