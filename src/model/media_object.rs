//! `schema:MediaObject` properties.

use super::QuantitativeValue;
use crate::identifier::Identifier;
use crate::rdf::vocab::schema;

field_set! {
    /// Properties of media objects; abstract like `CreativeWork`.
    pub struct MediaObjectProperties(MediaObject) setters on MediaObjectProperties {
        content_url: Option<Identifier>
            => CONTENT_URL("contentUrl", schema::CONTENT_URL, "Content URL")
            => content_url, maybe_content_url;
        encoding_format: Option<String>
            => ENCODING_FORMAT("encodingFormat", schema::ENCODING_FORMAT, "Encoding format")
            => encoding_format, maybe_encoding_format;
        height: Option<QuantitativeValue>
            => HEIGHT("height", schema::HEIGHT, "Height")
            => height, maybe_height;
        width: Option<QuantitativeValue>
            => WIDTH("width", schema::WIDTH, "Width")
            => width, maybe_width;
    }
}
