//! `schema:Occupation`.

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
    pub struct OccupationProperties(Occupation) setters on OccupationBuilder {
        occupational_categories: Vec<String>
            => OCCUPATIONAL_CATEGORY("occupationalCategory", schema::OCCUPATIONAL_CATEGORY, "Occupational categories")
            => occupational_category, occupational_categories;
        responsibilities: Vec<String>
            => RESPONSIBILITIES("responsibilities", schema::RESPONSIBILITIES, "Responsibilities")
            => responsibility, responsibilities;
        skills: Vec<String>
            => SKILLS("skills", schema::SKILLS, "Skills")
            => skill, skills;
    }
}

/// A profession, with the skills and responsibilities it involves.
#[derive(Debug, Clone)]
pub struct Occupation {
    identifier: Identifier,
    thing: ThingProperties,
    occupation: OccupationProperties,
}

impl Occupation {
    pub fn builder() -> OccupationBuilder {
        OccupationBuilder::default()
    }

    pub fn thing(&self) -> &ThingProperties {
        &self.thing
    }

    pub fn properties(&self) -> &OccupationProperties {
        &self.occupation
    }
}

#[derive(Debug, Clone, Default)]
pub struct OccupationBuilder {
    identifier: Option<Identifier>,
    thing: ThingProperties,
    occupation: OccupationProperties,
}

impl AsMut<OccupationProperties> for OccupationBuilder {
    fn as_mut(&mut self) -> &mut OccupationProperties {
        &mut self.occupation
    }
}

impl OccupationBuilder {
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

    pub fn properties(mut self, occupation: OccupationProperties) -> Self {
        self.occupation = occupation;
        self
    }

    pub fn build(mut self) -> Occupation {
        self.thing.canonicalize();
        self.occupation.canonicalize();
        let mut occupation = Occupation {
            identifier: self.identifier.clone().unwrap_or_else(Identifier::unassigned),
            thing: self.thing,
            occupation: self.occupation,
        };
        if self.identifier.is_none() {
            occupation.identifier = Identifier::synthesize(&occupation);
        }
        occupation
    }
}

impl ObjectType for Occupation {
    const KIND: ClassKind = ClassKind::Occupation;
    const FIELD_SETS: &'static [FieldSetInfo] = &[ThingProperties::INFO, OccupationProperties::INFO];

    fn identifier(&self) -> &Identifier {
        &self.identifier
    }

    fn equals_properties(&self, other: &Self) -> EqualsResult {
        self.thing.equals(&other.thing)?;
        self.occupation.equals(&other.occupation)
    }

    fn hash_properties<H: Digest>(&self, hasher: &mut H) {
        self.thing.hash_into(hasher);
        self.occupation.hash_into(hasher);
    }

    fn write_json_properties(&self, object: &mut Map<String, Value>) {
        self.thing.write_json(object);
        self.occupation.write_json(object);
    }

    fn from_json_object(object: &JsonObject<'_>) -> Result<Self, JsonError> {
        Ok(Occupation::builder()
            .maybe_identifier(object.identifier()?)
            .thing(ThingProperties::read_json(object)?)
            .properties(OccupationProperties::read_json(object)?)
            .build())
    }

    fn write_rdf_properties(&self, resource: &mut MutableResource<'_>) {
        self.thing.write_rdf(resource);
        self.occupation.write_rdf(resource);
    }

    fn from_rdf_properties(resource: &Resource<'_>) -> Result<Self, ResourceError> {
        Ok(Occupation::builder()
            .identifier(resource.identifier().clone())
            .thing(ThingProperties::read_rdf(resource)?)
            .properties(OccupationProperties::read_rdf(resource)?)
            .build())
    }

    fn write_schema_properties(generator: &mut SchemaGenerator, properties: &mut Map<String, Value>) {
        ThingProperties::write_schema(generator, properties);
        OccupationProperties::write_schema(generator, properties);
    }
}
