//! `schema:QuantitativeValue`.

use schemars::SchemaGenerator;
use serde_json::{Map, Value};
use sha2::Digest;

use super::{ClassKind, FieldSet, FieldSetInfo, ObjectType, ThingProperties};
use crate::equality::EqualsResult;
use crate::identifier::Identifier;
use crate::json::{JsonError, JsonObject};
use crate::rdf::vocab::schema;
use crate::rdf::{MutableResource, Resource, ResourceError};

field_set! {
    pub struct QuantitativeValueProperties(QuantitativeValue) setters on QuantitativeValueBuilder {
        max_value: Option<f64>
            => MAX_VALUE("maxValue", schema::MAX_VALUE, "Maximum value")
            => max_value, maybe_max_value;
        min_value: Option<f64>
            => MIN_VALUE("minValue", schema::MIN_VALUE, "Minimum value")
            => min_value, maybe_min_value;
        /// UN/CEFACT common code of the unit.
        unit_code: Option<String>
            => UNIT_CODE("unitCode", schema::UNIT_CODE, "Unit code")
            => unit_code, maybe_unit_code;
        unit_text: Option<String>
            => UNIT_TEXT("unitText", schema::UNIT_TEXT, "Unit")
            => unit_text, maybe_unit_text;
        value: Option<f64>
            => VALUE("value", schema::VALUE, "Value")
            => value, maybe_value;
    }
}

/// A measured quantity, such as the height of an image.
///
/// ```rust
/// use schemaorg_rdf::model::{ObjectType, QuantitativeValue};
///
/// let height = QuantitativeValue::builder().value(480.0).unit_text("px").build();
/// assert_eq!(height.properties().value, Some(480.0));
/// assert!(height.identifier().is_synthesized());
/// ```
#[derive(Debug, Clone)]
pub struct QuantitativeValue {
    identifier: Identifier,
    thing: ThingProperties,
    quantity: QuantitativeValueProperties,
}

impl QuantitativeValue {
    pub fn builder() -> QuantitativeValueBuilder {
        QuantitativeValueBuilder::default()
    }

    pub fn thing(&self) -> &ThingProperties {
        &self.thing
    }

    pub fn properties(&self) -> &QuantitativeValueProperties {
        &self.quantity
    }
}

#[derive(Debug, Clone, Default)]
pub struct QuantitativeValueBuilder {
    identifier: Option<Identifier>,
    thing: ThingProperties,
    quantity: QuantitativeValueProperties,
}

impl AsMut<QuantitativeValueProperties> for QuantitativeValueBuilder {
    fn as_mut(&mut self) -> &mut QuantitativeValueProperties {
        &mut self.quantity
    }
}

impl QuantitativeValueBuilder {
    pub fn identifier(mut self, identifier: impl Into<Identifier>) -> Self {
        self.identifier = Some(identifier.into());
        self
    }

    pub fn maybe_identifier(mut self, identifier: Option<Identifier>) -> Self {
        self.identifier = identifier;
        self
    }

    pub fn thing(mut self, thing: ThingProperties) -> Self {
        self.thing = thing;
        self
    }

    pub fn properties(mut self, quantity: QuantitativeValueProperties) -> Self {
        self.quantity = quantity;
        self
    }

    pub fn build(mut self) -> QuantitativeValue {
        self.thing.canonicalize();
        self.quantity.canonicalize();
        let mut value = QuantitativeValue {
            identifier: self.identifier.clone().unwrap_or_else(Identifier::unassigned),
            thing: self.thing,
            quantity: self.quantity,
        };
        if self.identifier.is_none() {
            value.identifier = Identifier::synthesize(&value);
        }
        value
    }
}

impl ObjectType for QuantitativeValue {
    const KIND: ClassKind = ClassKind::QuantitativeValue;
    const FIELD_SETS: &'static [FieldSetInfo] =
        &[ThingProperties::INFO, QuantitativeValueProperties::INFO];

    fn identifier(&self) -> &Identifier {
        &self.identifier
    }

    fn equals_properties(&self, other: &Self) -> EqualsResult {
        self.thing.equals(&other.thing)?;
        self.quantity.equals(&other.quantity)
    }

    fn hash_properties<H: Digest>(&self, hasher: &mut H) {
        self.thing.hash_into(hasher);
        self.quantity.hash_into(hasher);
    }

    fn write_json_properties(&self, object: &mut Map<String, Value>) {
        self.thing.write_json(object);
        self.quantity.write_json(object);
    }

    fn from_json_object(object: &JsonObject<'_>) -> Result<Self, JsonError> {
        Ok(QuantitativeValue::builder()
            .maybe_identifier(object.identifier()?)
            .thing(ThingProperties::read_json(object)?)
            .properties(QuantitativeValueProperties::read_json(object)?)
            .build())
    }

    fn write_rdf_properties(&self, resource: &mut MutableResource<'_>) {
        self.thing.write_rdf(resource);
        self.quantity.write_rdf(resource);
    }

    fn from_rdf_properties(resource: &Resource<'_>) -> Result<Self, ResourceError> {
        Ok(QuantitativeValue::builder()
            .identifier(resource.identifier().clone())
            .thing(ThingProperties::read_rdf(resource)?)
            .properties(QuantitativeValueProperties::read_rdf(resource)?)
            .build())
    }

    fn write_schema_properties(generator: &mut SchemaGenerator, properties: &mut Map<String, Value>) {
        ThingProperties::write_schema(generator, properties);
        QuantitativeValueProperties::write_schema(generator, properties);
    }
}
