//! JSON Schema and UI schema export.
//!
//! Every concrete class implements [`schemars::JsonSchema`]; the schema of a
//! class lists `@id`, the `type` discriminant and the properties of all its
//! field sets, with nested classes under `$defs`. The UI schema is a JSON
//! Forms layout with one group per field set.
//!
//! ```rust
//! use schemaorg_rdf::model::ClassKind;
//! use schemaorg_rdf::schema;
//!
//! let person = schema::json_schema(ClassKind::Person);
//! let value = person.as_value();
//! assert_eq!(value["title"], "Person");
//! assert!(value["properties"]["givenName"].is_object());
//!
//! let ui = schema::ui_schema(ClassKind::Person);
//! assert_eq!(ui["type"], "VerticalLayout");
//! ```

use schemars::{Schema, SchemaGenerator, json_schema, schema_for};
use serde_json::{Map, Value, json};

use crate::json::{ID_KEY, TYPE_KEY};
use crate::model::{
    ClassKind, FieldSetInfo, GenderType, ImageObject, ObjectType, Occupation, Organization, Person,
    QuantitativeValue, Role, Thing,
};

/// Schema of one concrete class, used by its `JsonSchema` implementation.
pub fn object_schema<T: ObjectType>(generator: &mut SchemaGenerator) -> Schema {
    let mut properties = Map::new();
    properties.insert(ID_KEY.to_string(), T::identifier_schema().to_value());

    let accepted: Vec<&str> = T::KIND.descendants().map(ClassKind::name).collect();
    properties.insert(
        TYPE_KEY.to_string(),
        json!({
            "type": "string",
            "enum": accepted,
            "default": T::KIND.name()
        }),
    );
    T::write_schema_properties(generator, &mut properties);

    let mut required = vec![TYPE_KEY];
    if T::REQUIRES_IDENTIFIER {
        required.push(ID_KEY);
    }

    json_schema!({
        "type": "object",
        "title": T::KIND.name(),
        "properties": properties,
        "required": required
    })
}

/// Root JSON Schema for `kind`. Abstract classes yield the schema of their
/// nearest concrete ancestor.
pub fn json_schema(kind: ClassKind) -> Schema {
    match kind.concrete() {
        ClassKind::ImageObject => schema_for!(ImageObject),
        ClassKind::Person => schema_for!(Person),
        ClassKind::Organization => schema_for!(Organization),
        ClassKind::Role => schema_for!(Role),
        ClassKind::Occupation => schema_for!(Occupation),
        ClassKind::QuantitativeValue => schema_for!(QuantitativeValue),
        ClassKind::GenderType => schema_for!(GenderType),
        _ => schema_for!(Thing),
    }
}

/// Field sets of `kind`, from `Thing` down.
pub fn field_sets(kind: ClassKind) -> &'static [FieldSetInfo] {
    match kind.concrete() {
        ClassKind::ImageObject => ImageObject::FIELD_SETS,
        ClassKind::Person => Person::FIELD_SETS,
        ClassKind::Organization => Organization::FIELD_SETS,
        ClassKind::Role => Role::FIELD_SETS,
        ClassKind::Occupation => Occupation::FIELD_SETS,
        ClassKind::QuantitativeValue => QuantitativeValue::FIELD_SETS,
        ClassKind::GenderType => GenderType::FIELD_SETS,
        _ => Thing::FIELD_SETS,
    }
}

fn control(key: &str, label: &str) -> Value {
    json!({
        "type": "Control",
        "scope": format!("#/properties/{key}"),
        "label": label
    })
}

/// JSON Forms UI schema for `kind`.
pub fn ui_schema(kind: ClassKind) -> Value {
    let mut elements = vec![control(ID_KEY, "Identifier")];

    let mut type_control = control(TYPE_KEY, "Type");
    type_control["rule"] = json!({
        "effect": "HIDE",
        "condition": { "scope": "#", "schema": {} }
    });
    elements.push(type_control);

    for field_set in field_sets(kind) {
        let controls: Vec<Value> = field_set
            .properties
            .iter()
            .map(|property| control(property.json_key, property.label))
            .collect();
        elements.push(json!({
            "type": "Group",
            "label": field_set.class.name(),
            "elements": controls
        }));
    }

    json!({
        "type": "VerticalLayout",
        "elements": elements
    })
}
