//! `schema:Thing`, the root of the hierarchy.

use schemars::SchemaGenerator;
use serde_json::{Map, Value};
use sha2::Digest;

use super::{ClassKind, FieldSet, FieldSetInfo, ObjectType};
use crate::equality::EqualsResult;
use crate::identifier::Identifier;
use crate::json::{JsonError, JsonObject};
use crate::rdf::vocab::schema;
use crate::rdf::{MutableResource, Resource, ResourceError};

field_set! {
    /// Properties every class inherits.
    ///
    /// ```rust
    /// use schemaorg_rdf::model::ThingProperties;
    ///
    /// let thing = ThingProperties::default()
    ///     .name("ACME")
    ///     .alternate_names(["Acme Corp", "ACME Inc."]);
    /// assert_eq!(thing.alternate_names.len(), 2);
    /// ```
    pub struct ThingProperties(Thing) setters on ThingProperties {
        alternate_names: Vec<String>
            => ALTERNATE_NAME("alternateName", schema::ALTERNATE_NAME, "Alternate names")
            => alternate_name, alternate_names;
        description: Option<String>
            => DESCRIPTION("description", schema::DESCRIPTION, "Description")
            => description, maybe_description;
        name: Option<String>
            => NAME("name", schema::NAME, "Name")
            => name, maybe_name;
        same_as: Vec<Identifier>
            => SAME_AS("sameAs", schema::SAME_AS, "Same as")
            => same_as_iri, same_as;
        url: Option<Identifier>
            => URL("url", schema::URL, "URL")
            => url, maybe_url;
    }
}

/// A thing of no more specific class.
#[derive(Debug, Clone)]
pub struct Thing {
    identifier: Identifier,
    thing: ThingProperties,
}

impl Thing {
    pub fn builder() -> ThingBuilder {
        ThingBuilder::default()
    }

    pub fn thing(&self) -> &ThingProperties {
        &self.thing
    }
}

#[derive(Debug, Clone, Default)]
pub struct ThingBuilder {
    identifier: Option<Identifier>,
    thing: ThingProperties,
}

impl ThingBuilder {
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

    pub fn build(mut self) -> Thing {
        self.thing.canonicalize();
        let mut thing = Thing {
            identifier: self.identifier.clone().unwrap_or_else(Identifier::unassigned),
            thing: self.thing,
        };
        if self.identifier.is_none() {
            thing.identifier = Identifier::synthesize(&thing);
        }
        thing
    }
}

impl ObjectType for Thing {
    const KIND: ClassKind = ClassKind::Thing;
    const FIELD_SETS: &'static [FieldSetInfo] = &[ThingProperties::INFO];

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
        Ok(Thing::builder()
            .maybe_identifier(object.identifier()?)
            .thing(ThingProperties::read_json(object)?)
            .build())
    }

    fn write_rdf_properties(&self, resource: &mut MutableResource<'_>) {
        self.thing.write_rdf(resource);
    }

    fn from_rdf_properties(resource: &Resource<'_>) -> Result<Self, ResourceError> {
        Ok(Thing::builder()
            .identifier(resource.identifier().clone())
            .thing(ThingProperties::read_rdf(resource)?)
            .build())
    }

    fn write_schema_properties(generator: &mut SchemaGenerator, properties: &mut Map<String, Value>) {
        ThingProperties::write_schema(generator, properties);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::equality::Unequal;
    use oxigraph::model::Graph;
    use serde_json::json;

    fn sample() -> Thing {
        Thing::builder()
            .identifier(Identifier::parse("http://example.org/thing").unwrap())
            .thing(
                ThingProperties::default()
                    .name("Widget")
                    .alternate_names(["gizmo", "doohickey", "gizmo"])
                    .same_as_iri(Identifier::parse("http://www.wikidata.org/entity/Q1").unwrap()),
            )
            .build()
    }

    #[test]
    fn test_repeated_properties_are_canonical() {
        let thing = sample();
        assert_eq!(thing.thing().alternate_names, vec!["doohickey", "gizmo"]);
    }

    #[test]
    fn test_maybe_setters_replace_optional_values() {
        let properties = ThingProperties::default()
            .name("Widget")
            .description("A widget")
            .maybe_name(None)
            .maybe_description(Some("A better widget".to_string()));
        assert_eq!(properties.name, None);
        assert_eq!(properties.description.as_deref(), Some("A better widget"));

        let properties = properties.alternate_names(None::<String>).alternate_name("gizmo");
        assert_eq!(properties.alternate_names, vec!["gizmo"]);
    }

    #[test]
    fn test_json_shape() {
        assert_eq!(
            sample().to_json(),
            json!({
                "@id": "http://example.org/thing",
                "type": "Thing",
                "alternateName": ["doohickey", "gizmo"],
                "name": "Widget",
                "sameAs": [{"@id": "http://www.wikidata.org/entity/Q1"}]
            })
        );
    }

    #[test]
    fn test_rdf_round_trip() {
        let thing = sample();
        let mut graph = Graph::new();
        let node = thing.to_rdf(&mut graph, false);
        assert_eq!(graph.len(), 5);

        let decoded = Thing::from_rdf(&Resource::new(&graph, node), false).unwrap();
        assert_eq!(thing.equals(&decoded), Ok(()));
    }

    #[test]
    fn test_ignore_rdf_type() {
        let thing = sample();
        let mut graph = Graph::new();
        let node = thing.to_rdf(&mut graph, true);
        assert_eq!(graph.len(), 4);

        let resource = Resource::new(&graph, node);
        assert!(Thing::from_rdf(&resource, false).is_err());
        assert_eq!(Thing::from_rdf(&resource, true).unwrap(), thing);
    }

    #[test]
    fn test_mismatch_names_property() {
        let left = sample();
        let right = Thing::builder()
            .identifier(left.identifier().clone())
            .thing(left.thing().clone().name("Sprocket"))
            .build();
        let unequal = left.equals(&right).unwrap_err();
        assert_eq!(unequal.path(), vec!["name"]);
        assert_eq!(
            unequal,
            Unequal::values("Widget", "Sprocket").in_property("Thing", "name")
        );
    }
}
