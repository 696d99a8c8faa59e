//! `schema:Organization`.

use schemars::SchemaGenerator;
use serde_json::{Map, Value};
use sha2::Digest;

use super::{Agent, ClassKind, FieldSet, FieldSetInfo, ImageObject, ObjectType, ThingProperties};
use crate::equality::EqualsResult;
use crate::identifier::Identifier;
use crate::json::{JsonError, JsonObject};
use crate::rdf::vocab::schema;
use crate::rdf::{MutableResource, Resource, ResourceError};

field_set! {
    pub struct OrganizationProperties(Organization) setters on OrganizationBuilder {
        legal_name: Option<String>
            => LEGAL_NAME("legalName", schema::LEGAL_NAME, "Legal name")
            => legal_name, maybe_legal_name;
        logo: Option<ImageObject>
            => LOGO("logo", schema::LOGO, "Logo")
            => logo, maybe_logo;
        members: Vec<Agent>
            => MEMBER("member", schema::MEMBER, "Members")
            => member, members;
        /// Referenced by identifier only, so organization trees stay flat.
        parent_organization: Option<Identifier>
            => PARENT_ORGANIZATION("parentOrganization", schema::PARENT_ORGANIZATION, "Parent organization")
            => parent_organization, maybe_parent_organization;
    }
}

/// An organization such as a company, a club or a school.
///
/// ```rust
/// use schemaorg_rdf::model::{ObjectType, Organization, Person};
///
/// let acme = Organization::builder()
///     .legal_name("ACME Inc.")
///     .member(Person::builder().given_name("Alice").build())
///     .build();
/// assert_eq!(acme.properties().members.len(), 1);
/// assert_eq!(acme.to_json()["member"][0]["type"], "Person");
/// ```
#[derive(Debug, Clone)]
pub struct Organization {
    identifier: Identifier,
    thing: ThingProperties,
    organization: OrganizationProperties,
}

impl Organization {
    pub fn builder() -> OrganizationBuilder {
        OrganizationBuilder::default()
    }

    pub fn thing(&self) -> &ThingProperties {
        &self.thing
    }

    pub fn properties(&self) -> &OrganizationProperties {
        &self.organization
    }
}

#[derive(Debug, Clone, Default)]
pub struct OrganizationBuilder {
    identifier: Option<Identifier>,
    thing: ThingProperties,
    organization: OrganizationProperties,
}

impl AsMut<OrganizationProperties> for OrganizationBuilder {
    fn as_mut(&mut self) -> &mut OrganizationProperties {
        &mut self.organization
    }
}

impl OrganizationBuilder {
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

    pub fn properties(mut self, organization: OrganizationProperties) -> Self {
        self.organization = organization;
        self
    }

    pub fn build(mut self) -> Organization {
        self.thing.canonicalize();
        self.organization.canonicalize();
        let mut organization = Organization {
            identifier: self.identifier.clone().unwrap_or_else(Identifier::unassigned),
            thing: self.thing,
            organization: self.organization,
        };
        if self.identifier.is_none() {
            organization.identifier = Identifier::synthesize(&organization);
        }
        organization
    }
}

impl ObjectType for Organization {
    const KIND: ClassKind = ClassKind::Organization;
    const FIELD_SETS: &'static [FieldSetInfo] =
        &[ThingProperties::INFO, OrganizationProperties::INFO];

    fn identifier(&self) -> &Identifier {
        &self.identifier
    }

    fn equals_properties(&self, other: &Self) -> EqualsResult {
        self.thing.equals(&other.thing)?;
        self.organization.equals(&other.organization)
    }

    fn hash_properties<H: Digest>(&self, hasher: &mut H) {
        self.thing.hash_into(hasher);
        self.organization.hash_into(hasher);
    }

    fn write_json_properties(&self, object: &mut Map<String, Value>) {
        self.thing.write_json(object);
        self.organization.write_json(object);
    }

    fn from_json_object(object: &JsonObject<'_>) -> Result<Self, JsonError> {
        Ok(Organization::builder()
            .maybe_identifier(object.identifier()?)
            .thing(ThingProperties::read_json(object)?)
            .properties(OrganizationProperties::read_json(object)?)
            .build())
    }

    fn write_rdf_properties(&self, resource: &mut MutableResource<'_>) {
        self.thing.write_rdf(resource);
        self.organization.write_rdf(resource);
    }

    fn from_rdf_properties(resource: &Resource<'_>) -> Result<Self, ResourceError> {
        Ok(Organization::builder()
            .identifier(resource.identifier().clone())
            .thing(ThingProperties::read_rdf(resource)?)
            .properties(OrganizationProperties::read_rdf(resource)?)
            .build())
    }

    fn write_schema_properties(generator: &mut SchemaGenerator, properties: &mut Map<String, Value>) {
        ThingProperties::write_schema(generator, properties);
        OrganizationProperties::write_schema(generator, properties);
    }
}
