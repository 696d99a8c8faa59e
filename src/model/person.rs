//! `schema:Person`.

use chrono::NaiveDate;
use schemars::SchemaGenerator;
use serde_json::{Map, Value};
use sha2::Digest;

use super::{
    ClassKind, FieldSet, FieldSetInfo, GenderType, ImageObject, Membership, ObjectType, Occupation,
    ThingProperties,
};
use crate::equality::EqualsResult;
use crate::identifier::Identifier;
use crate::json::{JsonError, JsonObject};
use crate::rdf::vocab::schema;
use crate::rdf::{MutableResource, Resource, ResourceError};

field_set! {
    pub struct PersonProperties(Person) setters on PersonBuilder {
        birth_date: Option<NaiveDate>
            => BIRTH_DATE("birthDate", schema::BIRTH_DATE, "Birth date")
            => birth_date, maybe_birth_date;
        family_name: Option<String>
            => FAMILY_NAME("familyName", schema::FAMILY_NAME, "Family name")
            => family_name, maybe_family_name;
        gender: Option<GenderType>
            => GENDER("gender", schema::GENDER, "Gender")
            => gender, maybe_gender;
        given_name: Option<String>
            => GIVEN_NAME("givenName", schema::GIVEN_NAME, "Given name")
            => given_name, maybe_given_name;
        occupations: Vec<Occupation>
            => HAS_OCCUPATION("hasOccupation", schema::HAS_OCCUPATION, "Occupations")
            => occupation, occupations;
        image: Option<ImageObject>
            => IMAGE("image", schema::IMAGE, "Image")
            => image, maybe_image;
        job_titles: Vec<String>
            => JOB_TITLE("jobTitle", schema::JOB_TITLE, "Job titles")
            => job_title, job_titles;
        /// Organizations the person belongs to, directly or through a role.
        member_of: Vec<Membership>
            => MEMBER_OF("memberOf", schema::MEMBER_OF, "Member of")
            => member_of, memberships;
    }
}

/// A person, alive, dead or fictional.
#[derive(Debug, Clone)]
pub struct Person {
    identifier: Identifier,
    thing: ThingProperties,
    person: PersonProperties,
}

impl Person {
    pub fn builder() -> PersonBuilder {
        PersonBuilder::default()
    }

    pub fn thing(&self) -> &ThingProperties {
        &self.thing
    }

    pub fn properties(&self) -> &PersonProperties {
        &self.person
    }
}

#[derive(Debug, Clone, Default)]
pub struct PersonBuilder {
    identifier: Option<Identifier>,
    thing: ThingProperties,
    person: PersonProperties,
}

impl AsMut<PersonProperties> for PersonBuilder {
    fn as_mut(&mut self) -> &mut PersonProperties {
        &mut self.person
    }
}

impl PersonBuilder {
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

    pub fn properties(mut self, person: PersonProperties) -> Self {
        self.person = person;
        self
    }

    pub fn build(mut self) -> Person {
        self.thing.canonicalize();
        self.person.canonicalize();
        let mut person = Person {
            identifier: self.identifier.clone().unwrap_or_else(Identifier::unassigned),
            thing: self.thing,
            person: self.person,
        };
        if self.identifier.is_none() {
            person.identifier = Identifier::synthesize(&person);
        }
        person
    }
}

impl ObjectType for Person {
    const KIND: ClassKind = ClassKind::Person;
    const FIELD_SETS: &'static [FieldSetInfo] = &[ThingProperties::INFO, PersonProperties::INFO];

    fn identifier(&self) -> &Identifier {
        &self.identifier
    }

    fn equals_properties(&self, other: &Self) -> EqualsResult {
        self.thing.equals(&other.thing)?;
        self.person.equals(&other.person)
    }

    fn hash_properties<H: Digest>(&self, hasher: &mut H) {
        self.thing.hash_into(hasher);
        self.person.hash_into(hasher);
    }

    fn write_json_properties(&self, object: &mut Map<String, Value>) {
        self.thing.write_json(object);
        self.person.write_json(object);
    }

    fn from_json_object(object: &JsonObject<'_>) -> Result<Self, JsonError> {
        Ok(Person::builder()
            .maybe_identifier(object.identifier()?)
            .thing(ThingProperties::read_json(object)?)
            .properties(PersonProperties::read_json(object)?)
            .build())
    }

    fn write_rdf_properties(&self, resource: &mut MutableResource<'_>) {
        self.thing.write_rdf(resource);
        self.person.write_rdf(resource);
    }

    fn from_rdf_properties(resource: &Resource<'_>) -> Result<Self, ResourceError> {
        Ok(Person::builder()
            .identifier(resource.identifier().clone())
            .thing(ThingProperties::read_rdf(resource)?)
            .properties(PersonProperties::read_rdf(resource)?)
            .build())
    }

    fn write_schema_properties(generator: &mut SchemaGenerator, properties: &mut Map<String, Value>) {
        ThingProperties::write_schema(generator, properties);
        PersonProperties::write_schema(generator, properties);
    }
}
