//! `schema:CreativeWork` properties.

use chrono::NaiveDate;

use super::Agent;
use crate::identifier::Identifier;
use crate::rdf::vocab::schema;

field_set! {
    /// Properties of creative works. `CreativeWork` itself is abstract;
    /// its properties reach values through [`ImageObject`](super::ImageObject).
    pub struct CreativeWorkProperties(CreativeWork) setters on CreativeWorkProperties {
        authors: Vec<Agent>
            => AUTHOR("author", schema::AUTHOR, "Authors")
            => author, authors;
        date_created: Option<NaiveDate>
            => DATE_CREATED("dateCreated", schema::DATE_CREATED, "Date created")
            => date_created, maybe_date_created;
        date_modified: Option<NaiveDate>
            => DATE_MODIFIED("dateModified", schema::DATE_MODIFIED, "Date modified")
            => date_modified, maybe_date_modified;
        date_published: Option<NaiveDate>
            => DATE_PUBLISHED("datePublished", schema::DATE_PUBLISHED, "Date published")
            => date_published, maybe_date_published;
        headline: Option<String>
            => HEADLINE("headline", schema::HEADLINE, "Headline")
            => headline, maybe_headline;
        keywords: Vec<String>
            => KEYWORDS("keywords", schema::KEYWORDS, "Keywords")
            => keyword, keywords;
        license: Option<Identifier>
            => LICENSE("license", schema::LICENSE, "License")
            => license, maybe_license;
    }
}
