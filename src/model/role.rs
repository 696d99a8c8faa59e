//! `schema:Role`.

use chrono::NaiveDate;
use schemars::SchemaGenerator;
use serde_json::{Map, Value};
use sha2::Digest;

use super::{ClassKind, FieldSet, FieldSetInfo, ObjectType, Organization, ThingProperties};
use crate::equality::EqualsResult;
use crate::identifier::Identifier;
use crate::json::{JsonError, JsonObject};
use crate::rdf::vocab::schema;
use crate::rdf::{MutableResource, Resource, ResourceError};

field_set! {
    pub struct RoleProperties(Role) setters on RoleBuilder {
        end_date: Option<NaiveDate>
            => END_DATE("endDate", schema::END_DATE, "End date")
            => end_date, maybe_end_date;
        member_of: Option<Organization>
            => MEMBER_OF("memberOf", schema::MEMBER_OF, "Member of")
            => member_of, maybe_member_of;
        role_name: Option<String>
            => ROLE_NAME("roleName", schema::ROLE_NAME, "Role name")
            => role_name, maybe_role_name;
        start_date: Option<NaiveDate>
            => START_DATE("startDate", schema::START_DATE, "Start date")
            => start_date, maybe_start_date;
    }
}

/// A membership qualified by a role name and a period.
///
/// The start and end dates can change after construction; the identifier
/// stays the one assigned when the role was built.
///
/// ```rust
/// use chrono::NaiveDate;
/// use schemaorg_rdf::model::{ObjectType, Role};
///
/// let mut role = Role::builder().role_name("Treasurer").build();
/// let id = role.identifier().clone();
///
/// role.set_end_date(NaiveDate::from_ymd_opt(2024, 12, 31));
/// assert_eq!(role.properties().end_date, NaiveDate::from_ymd_opt(2024, 12, 31));
/// assert_eq!(role.identifier(), &id);
/// ```
#[derive(Debug, Clone)]
pub struct Role {
    identifier: Identifier,
    thing: ThingProperties,
    role: RoleProperties,
}

impl Role {
    pub fn builder() -> RoleBuilder {
        RoleBuilder::default()
    }

    pub fn thing(&self) -> &ThingProperties {
        &self.thing
    }

    pub fn properties(&self) -> &RoleProperties {
        &self.role
    }

    pub fn set_start_date(&mut self, start_date: Option<NaiveDate>) {
        self.role.start_date = start_date;
    }

    pub fn set_end_date(&mut self, end_date: Option<NaiveDate>) {
        self.role.end_date = end_date;
    }
}

#[derive(Debug, Clone, Default)]
pub struct RoleBuilder {
    identifier: Option<Identifier>,
    thing: ThingProperties,
    role: RoleProperties,
}

impl AsMut<RoleProperties> for RoleBuilder {
    fn as_mut(&mut self) -> &mut RoleProperties {
        &mut self.role
    }
}

impl RoleBuilder {
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

    pub fn properties(mut self, role: RoleProperties) -> Self {
        self.role = role;
        self
    }

    pub fn build(mut self) -> Role {
        self.thing.canonicalize();
        self.role.canonicalize();
        let mut role = Role {
            identifier: self.identifier.clone().unwrap_or_else(Identifier::unassigned),
            thing: self.thing,
            role: self.role,
        };
        if self.identifier.is_none() {
            role.identifier = Identifier::synthesize(&role);
        }
        role
    }
}

impl ObjectType for Role {
    const KIND: ClassKind = ClassKind::Role;
    const FIELD_SETS: &'static [FieldSetInfo] = &[ThingProperties::INFO, RoleProperties::INFO];

    fn identifier(&self) -> &Identifier {
        &self.identifier
    }

    fn equals_properties(&self, other: &Self) -> EqualsResult {
        self.thing.equals(&other.thing)?;
        self.role.equals(&other.role)
    }

    fn hash_properties<H: Digest>(&self, hasher: &mut H) {
        self.thing.hash_into(hasher);
        self.role.hash_into(hasher);
    }

    fn write_json_properties(&self, object: &mut Map<String, Value>) {
        self.thing.write_json(object);
        self.role.write_json(object);
    }

    fn from_json_object(object: &JsonObject<'_>) -> Result<Self, JsonError> {
        Ok(Role::builder()
            .maybe_identifier(object.identifier()?)
            .thing(ThingProperties::read_json(object)?)
            .properties(RoleProperties::read_json(object)?)
            .build())
    }

    fn write_rdf_properties(&self, resource: &mut MutableResource<'_>) {
        self.thing.write_rdf(resource);
        self.role.write_rdf(resource);
    }

    fn from_rdf_properties(resource: &Resource<'_>) -> Result<Self, ResourceError> {
        Ok(Role::builder()
            .identifier(resource.identifier().clone())
            .thing(ThingProperties::read_rdf(resource)?)
            .properties(RoleProperties::read_rdf(resource)?)
            .build())
    }

    fn write_schema_properties(generator: &mut SchemaGenerator, properties: &mut Map<String, Value>) {
        ThingProperties::write_schema(generator, properties);
        RoleProperties::write_schema(generator, properties);
    }
}
