//! `schema:ImageObject`.

use schemars::SchemaGenerator;
use serde_json::{Map, Value};
use sha2::Digest;

use super::{
    ClassKind, CreativeWorkProperties, FieldSet, FieldSetInfo, MediaObjectProperties, ObjectType,
    ThingProperties,
};
use crate::equality::EqualsResult;
use crate::identifier::Identifier;
use crate::json::{JsonError, JsonObject};
use crate::rdf::vocab::schema;
use crate::rdf::{MutableResource, Resource, ResourceError};

field_set! {
    pub struct ImageObjectProperties(ImageObject) setters on ImageObjectBuilder {
        caption: Option<String>
            => CAPTION("caption", schema::CAPTION, "Caption")
            => caption, maybe_caption;
        representative_of_page: Option<bool>
            => REPRESENTATIVE_OF_PAGE("representativeOfPage", schema::REPRESENTATIVE_OF_PAGE, "Representative of page")
            => representative_of_page, maybe_representative_of_page;
    }
}

/// An image file, such as a logo or a portrait.
///
/// Carries the properties of every ancestor: `Thing`, `CreativeWork` and
/// `MediaObject`.
#[derive(Debug, Clone)]
pub struct ImageObject {
    identifier: Identifier,
    thing: ThingProperties,
    creative_work: CreativeWorkProperties,
    media_object: MediaObjectProperties,
    image: ImageObjectProperties,
}

impl ImageObject {
    pub fn builder() -> ImageObjectBuilder {
        ImageObjectBuilder::default()
    }

    pub fn thing(&self) -> &ThingProperties {
        &self.thing
    }

    pub fn creative_work(&self) -> &CreativeWorkProperties {
        &self.creative_work
    }

    pub fn media_object(&self) -> &MediaObjectProperties {
        &self.media_object
    }

    pub fn properties(&self) -> &ImageObjectProperties {
        &self.image
    }
}

#[derive(Debug, Clone, Default)]
pub struct ImageObjectBuilder {
    identifier: Option<Identifier>,
    thing: ThingProperties,
    creative_work: CreativeWorkProperties,
    media_object: MediaObjectProperties,
    image: ImageObjectProperties,
}

impl AsMut<ImageObjectProperties> for ImageObjectBuilder {
    fn as_mut(&mut self) -> &mut ImageObjectProperties {
        &mut self.image
    }
}

impl ImageObjectBuilder {
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

    pub fn creative_work(mut self, creative_work: CreativeWorkProperties) -> Self {
        self.creative_work = creative_work;
        self
    }

    pub fn media_object(mut self, media_object: MediaObjectProperties) -> Self {
        self.media_object = media_object;
        self
    }

    pub fn properties(mut self, image: ImageObjectProperties) -> Self {
        self.image = image;
        self
    }

    pub fn build(mut self) -> ImageObject {
        self.thing.canonicalize();
        self.creative_work.canonicalize();
        self.media_object.canonicalize();
        self.image.canonicalize();
        let mut image = ImageObject {
            identifier: self.identifier.clone().unwrap_or_else(Identifier::unassigned),
            thing: self.thing,
            creative_work: self.creative_work,
            media_object: self.media_object,
            image: self.image,
        };
        if self.identifier.is_none() {
            image.identifier = Identifier::synthesize(&image);
        }
        image
    }
}

impl ObjectType for ImageObject {
    const KIND: ClassKind = ClassKind::ImageObject;
    const FIELD_SETS: &'static [FieldSetInfo] = &[
        ThingProperties::INFO,
        CreativeWorkProperties::INFO,
        MediaObjectProperties::INFO,
        ImageObjectProperties::INFO,
    ];

    fn identifier(&self) -> &Identifier {
        &self.identifier
    }

    fn equals_properties(&self, other: &Self) -> EqualsResult {
        self.thing.equals(&other.thing)?;
        self.creative_work.equals(&other.creative_work)?;
        self.media_object.equals(&other.media_object)?;
        self.image.equals(&other.image)
    }

    fn hash_properties<H: Digest>(&self, hasher: &mut H) {
        self.thing.hash_into(hasher);
        self.creative_work.hash_into(hasher);
        self.media_object.hash_into(hasher);
        self.image.hash_into(hasher);
    }

    fn write_json_properties(&self, object: &mut Map<String, Value>) {
        self.thing.write_json(object);
        self.creative_work.write_json(object);
        self.media_object.write_json(object);
        self.image.write_json(object);
    }

    fn from_json_object(object: &JsonObject<'_>) -> Result<Self, JsonError> {
        Ok(ImageObject::builder()
            .maybe_identifier(object.identifier()?)
            .thing(ThingProperties::read_json(object)?)
            .creative_work(CreativeWorkProperties::read_json(object)?)
            .media_object(MediaObjectProperties::read_json(object)?)
            .properties(ImageObjectProperties::read_json(object)?)
            .build())
    }

    fn write_rdf_properties(&self, resource: &mut MutableResource<'_>) {
        self.thing.write_rdf(resource);
        self.creative_work.write_rdf(resource);
        self.media_object.write_rdf(resource);
        self.image.write_rdf(resource);
    }

    fn from_rdf_properties(resource: &Resource<'_>) -> Result<Self, ResourceError> {
        Ok(ImageObject::builder()
            .identifier(resource.identifier().clone())
            .thing(ThingProperties::read_rdf(resource)?)
            .creative_work(CreativeWorkProperties::read_rdf(resource)?)
            .media_object(MediaObjectProperties::read_rdf(resource)?)
            .properties(ImageObjectProperties::read_rdf(resource)?)
            .build())
    }

    fn write_schema_properties(generator: &mut SchemaGenerator, properties: &mut Map<String, Value>) {
        ThingProperties::write_schema(generator, properties);
        CreativeWorkProperties::write_schema(generator, properties);
        MediaObjectProperties::write_schema(generator, properties);
        ImageObjectProperties::write_schema(generator, properties);
    }
}
