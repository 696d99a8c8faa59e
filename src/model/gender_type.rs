//! `schema:GenderType`, an enumeration.

use oxigraph::model::NamedNodeRef;
use schemars::{Schema, SchemaGenerator, json_schema};
use serde_json::{Map, Value};
use sha2::Digest;
use strum::{Display, EnumIter, IntoEnumIterator, IntoStaticStr};

use super::object::required_identifier;
use super::{ClassKind, FieldSet, FieldSetInfo, ObjectType, ThingProperties};
use crate::equality::EqualsResult;
use crate::identifier::Identifier;
use crate::json::{ID_KEY, JsonError, JsonObject};
use crate::rdf::vocab::schema;
use crate::rdf::{MutableResource, Resource, ResourceError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, IntoStaticStr)]
pub enum GenderMember {
    Female,
    Male,
}

impl GenderMember {
    pub fn iri(self) -> NamedNodeRef<'static> {
        match self {
            GenderMember::Female => schema::FEMALE,
            GenderMember::Male => schema::MALE,
        }
    }

    pub fn from_identifier(identifier: &Identifier) -> Option<Self> {
        GenderMember::iter().find(|member| member.iri() == identifier.as_node_ref())
    }
}

/// A member of the gender enumeration. Its identifier is the member IRI,
/// `schema:Female` or `schema:Male`; any other identifier fails to decode.
#[derive(Debug, Clone)]
pub struct GenderType {
    identifier: Identifier,
    member: GenderMember,
    thing: ThingProperties,
}

impl GenderType {
    pub fn new(member: GenderMember) -> Self {
        Self::builder(member).build()
    }

    pub fn builder(member: GenderMember) -> GenderTypeBuilder {
        GenderTypeBuilder {
            member,
            thing: ThingProperties::default(),
        }
    }

    pub fn member(&self) -> GenderMember {
        self.member
    }

    pub fn thing(&self) -> &ThingProperties {
        &self.thing
    }
}

impl From<GenderMember> for GenderType {
    fn from(member: GenderMember) -> Self {
        GenderType::new(member)
    }
}

#[derive(Debug, Clone)]
pub struct GenderTypeBuilder {
    member: GenderMember,
    thing: ThingProperties,
}

impl GenderTypeBuilder {
    pub fn thing(mut self, thing: ThingProperties) -> Self {
        self.thing = thing;
        self
    }

    pub fn build(mut self) -> GenderType {
        self.thing.canonicalize();
        GenderType {
            identifier: Identifier::from(self.member.iri()),
            member: self.member,
            thing: self.thing,
        }
    }
}

impl ObjectType for GenderType {
    const KIND: ClassKind = ClassKind::GenderType;
    const FIELD_SETS: &'static [FieldSetInfo] = &[ThingProperties::INFO];
    const REQUIRES_IDENTIFIER: bool = true;

    fn identifier(&self) -> &Identifier {
        &self.identifier
    }

    fn equals_properties(&self, other: &Self) -> EqualsResult {
        self.thing.equals(&other.thing)
    }

    fn hash_properties<H: Digest>(&self, hasher: &mut H) {
        self.thing.hash_into(hasher);
    }

    fn write_json_properties(&self, object: &mut Map<String, Value>) {
        self.thing.write_json(object);
    }

    fn from_json_object(object: &JsonObject<'_>) -> Result<Self, JsonError> {
        let identifier = required_identifier(object)?;
        let member = GenderMember::from_identifier(&identifier).ok_or_else(|| {
            JsonError::invalid(
                &object.path_of(ID_KEY),
                format!("{identifier} is not a member of GenderType"),
            )
        })?;
        Ok(GenderType::builder(member)
            .thing(ThingProperties::read_json(object)?)
            .build())
    }

    fn write_rdf_properties(&self, resource: &mut MutableResource<'_>) {
        self.thing.write_rdf(resource);
    }

    fn from_rdf_properties(resource: &Resource<'_>) -> Result<Self, ResourceError> {
        let member = GenderMember::from_identifier(resource.identifier()).ok_or_else(|| {
            ResourceError::NotAMember {
                resource: resource.node(),
                enumeration: Self::KIND.name(),
            }
        })?;
        Ok(GenderType::builder(member)
            .thing(ThingProperties::read_rdf(resource)?)
            .build())
    }

    fn write_schema_properties(generator: &mut SchemaGenerator, properties: &mut Map<String, Value>) {
        ThingProperties::write_schema(generator, properties);
    }

    fn identifier_schema() -> Schema {
        let members: Vec<&str> = GenderMember::iter().map(|member| member.iri().as_str()).collect();
        json_schema!({ "type": "string", "enum": members })
    }
}
