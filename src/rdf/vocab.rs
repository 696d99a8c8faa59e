//! Vocabulary constants.

use oxigraph::model::NamedNodeRef;

pub const SCHEMA_NS: &str = "http://schema.org/";
pub const SCHEMA_PREFIX: &str = "schema";

/// Terms of the `http://schema.org/` namespace used by the model.
pub mod schema {
    use super::NamedNodeRef;

    macro_rules! terms {
        ($($name:ident => $local:literal),* $(,)?) => {
            $(
                pub const $name: NamedNodeRef<'static> =
                    NamedNodeRef::new_unchecked(concat!("http://schema.org/", $local));
            )*
        };
    }

    // Classes
    terms! {
        THING => "Thing",
        INTANGIBLE => "Intangible",
        STRUCTURED_VALUE => "StructuredValue",
        ENUMERATION => "Enumeration",
        CREATIVE_WORK => "CreativeWork",
        MEDIA_OBJECT => "MediaObject",
        IMAGE_OBJECT => "ImageObject",
        PERSON => "Person",
        ORGANIZATION => "Organization",
        ROLE => "Role",
        OCCUPATION => "Occupation",
        QUANTITATIVE_VALUE => "QuantitativeValue",
        GENDER_TYPE => "GenderType",
    }

    // Enumeration members
    terms! {
        FEMALE => "Female",
        MALE => "Male",
    }

    // Properties
    terms! {
        ALTERNATE_NAME => "alternateName",
        DESCRIPTION => "description",
        NAME => "name",
        SAME_AS => "sameAs",
        URL => "url",
        AUTHOR => "author",
        DATE_CREATED => "dateCreated",
        DATE_MODIFIED => "dateModified",
        DATE_PUBLISHED => "datePublished",
        HEADLINE => "headline",
        KEYWORDS => "keywords",
        LICENSE => "license",
        CONTENT_URL => "contentUrl",
        ENCODING_FORMAT => "encodingFormat",
        HEIGHT => "height",
        WIDTH => "width",
        CAPTION => "caption",
        REPRESENTATIVE_OF_PAGE => "representativeOfPage",
        BIRTH_DATE => "birthDate",
        FAMILY_NAME => "familyName",
        GENDER => "gender",
        GIVEN_NAME => "givenName",
        HAS_OCCUPATION => "hasOccupation",
        IMAGE => "image",
        JOB_TITLE => "jobTitle",
        MEMBER_OF => "memberOf",
        LEGAL_NAME => "legalName",
        LOGO => "logo",
        MEMBER => "member",
        PARENT_ORGANIZATION => "parentOrganization",
        ROLE_NAME => "roleName",
        START_DATE => "startDate",
        END_DATE => "endDate",
        OCCUPATIONAL_CATEGORY => "occupationalCategory",
        RESPONSIBILITIES => "responsibilities",
        SKILLS => "skills",
        MAX_VALUE => "maxValue",
        MIN_VALUE => "minValue",
        UNIT_CODE => "unitCode",
        UNIT_TEXT => "unitText",
        VALUE => "value",
    }
}
