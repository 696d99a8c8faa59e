//! JSON decoding support.
//!
//! Decoders walk a [`serde_json::Value`] through a [`JsonObject`] that
//! remembers where in the document it sits, so every failure is reported
//! with the JSON path of the offending value (`$.member[0].name`).

use std::fmt;

use serde_json::{Map, Value};
use thiserror::Error;

use crate::identifier::Identifier;
use crate::model::ClassKind;

/// JSON key holding an object's identifier.
pub const ID_KEY: &str = "@id";
/// JSON key holding an object's class discriminant.
pub const TYPE_KEY: &str = "type";

// =============================================================================
// JSON PATH
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JsonPathSegment {
    Key(String),
    Index(usize),
}

/// Location of a value inside a JSON document.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct JsonPath(Vec<JsonPathSegment>);

impl JsonPath {
    pub fn root() -> Self {
        Self(Vec::new())
    }

    pub fn key(&self, key: &str) -> Self {
        let mut segments = self.0.clone();
        segments.push(JsonPathSegment::Key(key.to_string()));
        Self(segments)
    }

    pub fn index(&self, index: usize) -> Self {
        let mut segments = self.0.clone();
        segments.push(JsonPathSegment::Index(index));
        Self(segments)
    }

    pub fn segments(&self) -> &[JsonPathSegment] {
        &self.0
    }
}

impl fmt::Display for JsonPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("$")?;
        for segment in &self.0 {
            match segment {
                JsonPathSegment::Key(key) => write!(f, ".{key}")?,
                JsonPathSegment::Index(index) => write!(f, "[{index}]")?,
            }
        }
        Ok(())
    }
}

// =============================================================================
// JSON ERROR
// =============================================================================

#[derive(Debug, Clone, PartialEq, Error)]
pub enum JsonErrorKind {
    #[error("expected {expected}, got {actual}")]
    ExpectedType {
        expected: &'static str,
        actual: &'static str,
    },

    #[error("missing required field")]
    MissingField,

    #[error("invalid value: {reason}")]
    InvalidValue { reason: String },

    #[error("type {actual:?} is not {expected} or one of its subclasses")]
    UnexpectedType {
        expected: &'static str,
        actual: String,
    },

    #[error("no variant of {union} matched ({} attempts)", attempts.len())]
    NoMatchingVariant {
        union: &'static str,
        attempts: Vec<JsonError>,
    },
}

/// Decoding failure at a JSON path.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{path}: {kind}")]
pub struct JsonError {
    pub path: JsonPath,
    pub kind: JsonErrorKind,
}

impl JsonError {
    pub fn new(path: JsonPath, kind: JsonErrorKind) -> Self {
        Self { path, kind }
    }

    pub fn expected(path: &JsonPath, expected: &'static str, actual: &Value) -> Self {
        Self::new(
            path.clone(),
            JsonErrorKind::ExpectedType {
                expected,
                actual: value_kind(actual),
            },
        )
    }

    pub fn invalid(path: &JsonPath, reason: impl Into<String>) -> Self {
        Self::new(
            path.clone(),
            JsonErrorKind::InvalidValue {
                reason: reason.into(),
            },
        )
    }
}

/// JSON Schema name of a value's type.
pub fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

// =============================================================================
// JSON OBJECT READER
// =============================================================================

/// A JSON object being decoded, positioned at `path`.
#[derive(Debug, Clone)]
pub struct JsonObject<'a> {
    map: &'a Map<String, Value>,
    path: JsonPath,
}

impl<'a> JsonObject<'a> {
    /// # Errors
    /// Returns `Err` if `value` is not a JSON object.
    pub fn new(value: &'a Value, path: JsonPath) -> Result<Self, JsonError> {
        match value {
            Value::Object(map) => Ok(Self { map, path }),
            other => Err(JsonError::expected(&path, "object", other)),
        }
    }

    pub fn path(&self) -> &JsonPath {
        &self.path
    }

    /// Field value, treating `null` as absent.
    pub fn get(&self, key: &str) -> Option<&'a Value> {
        self.map.get(key).filter(|value| !value.is_null())
    }

    pub fn path_of(&self, key: &str) -> JsonPath {
        self.path.key(key)
    }

    /// Reads the `type` discriminant as a class.
    pub fn class_kind(&self) -> Result<ClassKind, JsonError> {
        let path = self.path_of(TYPE_KEY);
        let value = self
            .get(TYPE_KEY)
            .ok_or_else(|| JsonError::new(path.clone(), JsonErrorKind::MissingField))?;
        let name = value
            .as_str()
            .ok_or_else(|| JsonError::expected(&path, "string", value))?;
        ClassKind::from_name(name)
            .ok_or_else(|| JsonError::invalid(&path, format!("unknown type {name:?}")))
    }

    /// Checks that the `type` discriminant names `expected` or a subclass.
    pub fn expect_type(&self, expected: ClassKind) -> Result<ClassKind, JsonError> {
        let actual = self.class_kind()?;
        if actual.is_subclass_of(expected) {
            Ok(actual)
        } else {
            Err(JsonError::new(
                self.path_of(TYPE_KEY),
                JsonErrorKind::UnexpectedType {
                    expected: expected.name(),
                    actual: actual.name().to_string(),
                },
            ))
        }
    }

    /// Reads the optional `@id`.
    pub fn identifier(&self) -> Result<Option<Identifier>, JsonError> {
        let Some(value) = self.get(ID_KEY) else {
            return Ok(None);
        };
        let path = self.path_of(ID_KEY);
        let iri = value
            .as_str()
            .ok_or_else(|| JsonError::expected(&path, "string", value))?;
        Identifier::parse(iri)
            .map(Some)
            .map_err(|error| JsonError::invalid(&path, error.reason))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_path_display() {
        let path = JsonPath::root().key("member").index(0).key("name");
        assert_eq!(path.to_string(), "$.member[0].name");
        assert_eq!(JsonPath::root().to_string(), "$");
    }

    #[test]
    fn test_non_object_is_rejected() {
        let value = json!(["not", "an", "object"]);
        let error = JsonObject::new(&value, JsonPath::root()).unwrap_err();
        assert_eq!(
            error.kind,
            JsonErrorKind::ExpectedType {
                expected: "object",
                actual: "array"
            }
        );
    }

    #[test]
    fn test_expect_type_accepts_subclasses() {
        let value = json!({"type": "Person"});
        let object = JsonObject::new(&value, JsonPath::root()).unwrap();
        assert_eq!(
            object.expect_type(ClassKind::Thing).unwrap(),
            ClassKind::Person
        );
        let error = object.expect_type(ClassKind::Organization).unwrap_err();
        assert_eq!(error.path.to_string(), "$.type");
    }

    #[test]
    fn test_identifier_is_validated() {
        let value = json!({"@id": "not an iri"});
        let object = JsonObject::new(&value, JsonPath::root()).unwrap();
        let error = object.identifier().unwrap_err();
        assert_eq!(error.path.to_string(), "$.@id");

        let value = json!({"@id": null});
        let object = JsonObject::new(&value, JsonPath::root()).unwrap();
        assert_eq!(object.identifier().unwrap(), None);
    }
}
