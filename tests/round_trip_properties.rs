//! Property-based tests for the JSON and RDF mappings.
//!
//! Every generated object must survive a trip through JSON and through an
//! RDF graph unchanged, keep its content hash, and compare equal to itself
//! regardless of the order repeated values were supplied in.

use chrono::NaiveDate;
use oxigraph::model::Graph;
use proptest::prelude::*;
use schemaorg_rdf::Identifier;
use schemaorg_rdf::model::{
    Agent, CreativeWorkProperties, GenderMember, GenderType, ImageObject, MediaObjectProperties,
    ObjectType, Occupation, Organization, Person, QuantitativeValue, Role, Thing, ThingProperties,
};
use schemaorg_rdf::rdf::Resource;
use sha2::{Digest, Sha256};

// =============================================================================
// Generators
// =============================================================================

fn arb_text() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 ,.'-]{1,16}"
}

fn arb_iri() -> impl Strategy<Value = Identifier> {
    "[a-z0-9]{1,10}".prop_map(|path| {
        Identifier::parse(format!("http://example.org/{path}")).expect("generated IRI is valid")
    })
}

/// Any double, including NaN, both infinities, `-0.0` and subnormals.
fn arb_number() -> impl Strategy<Value = f64> {
    any::<f64>()
}

/// An explicit identifier with probability `chance`, else a synthesized one.
fn arb_identifier(chance: f64) -> impl Strategy<Value = Option<Identifier>> {
    prop::option::weighted(chance, arb_iri())
}

fn arb_date() -> impl Strategy<Value = NaiveDate> {
    (1900i32..2100, 1u32..=12, 1u32..=28)
        .prop_map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).expect("day 28 exists in every month"))
}

fn arb_thing_properties() -> impl Strategy<Value = ThingProperties> {
    (
        prop::collection::vec(arb_text(), 0..3),
        prop::option::of(arb_text()),
        prop::option::of(arb_text()),
        prop::collection::vec(arb_iri(), 0..2),
        prop::option::of(arb_iri()),
    )
        .prop_map(|(alternate_names, description, name, same_as, url)| {
            ThingProperties::default()
                .alternate_names(alternate_names)
                .maybe_description(description)
                .maybe_name(name)
                .same_as(same_as)
                .maybe_url(url)
        })
}

fn arb_quantitative_value() -> impl Strategy<Value = QuantitativeValue> {
    (
        arb_thing_properties(),
        prop::option::of(arb_number()),
        prop::option::of(arb_number()),
        prop::option::of("[A-Z0-9]{3}"),
        prop::option::of(arb_number()),
    )
        .prop_map(|(thing, min, max, unit_code, value)| {
            QuantitativeValue::builder()
                .thing(thing)
                .maybe_min_value(min)
                .maybe_max_value(max)
                .maybe_unit_code(unit_code)
                .maybe_value(value)
                .build()
        })
}

fn arb_occupation() -> impl Strategy<Value = Occupation> {
    (
        arb_thing_properties(),
        prop::collection::vec(arb_text(), 0..3),
        prop::collection::vec(arb_text(), 0..3),
    )
        .prop_map(|(thing, skills, responsibilities)| {
            Occupation::builder()
                .thing(thing)
                .skills(skills)
                .responsibilities(responsibilities)
                .build()
        })
}

/// Nested objects keep synthesized identifiers: two different nested
/// objects sharing an explicit identifier would merge in a graph.
fn arb_leaf_organization() -> impl Strategy<Value = Organization> {
    (arb_thing_properties(), prop::option::of(arb_text()))
        .prop_map(|(thing, legal_name)| {
            Organization::builder()
                .thing(thing)
                .maybe_legal_name(legal_name)
                .build()
        })
}

fn arb_leaf_person() -> impl Strategy<Value = Person> {
    (
        arb_thing_properties(),
        prop::option::of(arb_text()),
        prop::option::of(arb_text()),
        prop::option::of(arb_date()),
        prop::option::of(arb_gender()),
    )
        .prop_map(|(thing, given, family, birth_date, gender)| {
            Person::builder()
                .thing(thing)
                .maybe_given_name(given)
                .maybe_family_name(family)
                .maybe_birth_date(birth_date)
                .maybe_gender(gender)
                .build()
        })
}

fn arb_agent() -> impl Strategy<Value = Agent> {
    prop_oneof![
        arb_leaf_person().prop_map(Agent::from),
        arb_leaf_organization().prop_map(Agent::from),
    ]
}

fn arb_creative_work() -> impl Strategy<Value = CreativeWorkProperties> {
    (
        prop::collection::vec(arb_agent(), 0..3),
        (
            prop::option::of(arb_date()),
            prop::option::of(arb_date()),
            prop::option::of(arb_date()),
        ),
        prop::option::of(arb_text()),
        prop::collection::vec(arb_text(), 0..3),
        prop::option::of(arb_iri()),
    )
        .prop_map(|(authors, (created, modified, published), headline, keywords, license)| {
            CreativeWorkProperties::default()
                .authors(authors)
                .maybe_date_created(created)
                .maybe_date_modified(modified)
                .maybe_date_published(published)
                .maybe_headline(headline)
                .keywords(keywords)
                .maybe_license(license)
        })
}

fn arb_media_object() -> impl Strategy<Value = MediaObjectProperties> {
    (
        prop::option::of(arb_iri()),
        prop::option::of("(image|video)/[a-z]{2,5}"),
        prop::option::of(arb_quantitative_value()),
        prop::option::of(arb_quantitative_value()),
    )
        .prop_map(|(content_url, encoding_format, height, width)| {
            MediaObjectProperties::default()
                .maybe_content_url(content_url)
                .maybe_encoding_format(encoding_format)
                .maybe_height(height)
                .maybe_width(width)
        })
}

fn arb_image_object(identifier_chance: f64) -> impl Strategy<Value = ImageObject> {
    (
        arb_identifier(identifier_chance),
        arb_thing_properties(),
        arb_creative_work(),
        arb_media_object(),
        prop::option::of(arb_text()),
        prop::option::of(any::<bool>()),
    )
        .prop_map(|(identifier, thing, creative_work, media_object, caption, representative)| {
            ImageObject::builder()
                .maybe_identifier(identifier)
                .thing(thing)
                .creative_work(creative_work)
                .media_object(media_object)
                .maybe_caption(caption)
                .maybe_representative_of_page(representative)
                .build()
        })
}

/// Members and logo are nested; the parent is a reference, so it may be
/// any IRI, including the organization's own.
fn arb_organization() -> impl Strategy<Value = Organization> {
    (
        arb_identifier(0.5),
        arb_thing_properties(),
        prop::option::of(arb_text()),
        prop::option::of(arb_image_object(0.0)),
        prop::collection::vec(arb_agent(), 0..3),
        prop::option::of(arb_iri()),
    )
        .prop_map(|(identifier, thing, legal_name, logo, members, parent)| {
            Organization::builder()
                .maybe_identifier(identifier)
                .thing(thing)
                .maybe_legal_name(legal_name)
                .maybe_logo(logo)
                .members(members)
                .maybe_parent_organization(parent)
                .build()
        })
}

fn arb_thing() -> impl Strategy<Value = Thing> {
    (arb_identifier(0.5), arb_thing_properties()).prop_map(|(identifier, thing)| {
        Thing::builder().maybe_identifier(identifier).thing(thing).build()
    })
}

fn arb_role() -> impl Strategy<Value = Role> {
    (
        prop::option::of(arb_leaf_organization()),
        prop::option::of(arb_text()),
        prop::option::of(arb_date()),
        prop::option::of(arb_date()),
    )
        .prop_map(|(organization, role_name, start, end)| {
            Role::builder()
                .maybe_member_of(organization)
                .maybe_role_name(role_name)
                .maybe_start_date(start)
                .maybe_end_date(end)
                .build()
        })
}

fn arb_gender() -> impl Strategy<Value = GenderType> {
    prop_oneof![Just(GenderMember::Female), Just(GenderMember::Male)].prop_map(GenderType::new)
}

fn arb_person() -> impl Strategy<Value = Person> {
    (
        prop::option::of(arb_iri()),
        arb_thing_properties(),
        (prop::option::of(arb_text()), prop::option::of(arb_text())),
        prop::option::of(arb_date()),
        prop::option::of(arb_gender()),
        prop::collection::vec(arb_occupation(), 0..2),
        prop::collection::vec(arb_leaf_organization(), 0..2),
        prop::collection::vec(arb_role(), 0..2),
    )
        .prop_map(
            |(identifier, thing, (given, family), birth_date, gender, occupations, organizations, roles)| {
                Person::builder()
                    .maybe_identifier(identifier)
                    .thing(thing)
                    .maybe_given_name(given)
                    .maybe_family_name(family)
                    .maybe_birth_date(birth_date)
                    .maybe_gender(gender)
                    .occupations(occupations)
                    .memberships(organizations)
                    .memberships(roles)
                    .build()
            },
        )
}

// =============================================================================
// Helpers
// =============================================================================

fn content_hash<T: ObjectType>(value: &T) -> Vec<u8> {
    let mut hasher = Sha256::new();
    value.hash(&mut hasher);
    hasher.finalize().to_vec()
}

fn rdf_round_trip<T: ObjectType>(value: &T) -> T {
    let mut graph = Graph::new();
    let node = value.to_rdf(&mut graph, false);
    T::from_rdf(&Resource::new(&graph, node), false).expect("graph decodes")
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn person_survives_json(person in arb_person()) {
        let decoded = Person::from_json(&person.to_json()).expect("JSON decodes");
        prop_assert_eq!(decoded.equals(&person), Ok(()));
        prop_assert_eq!(content_hash(&decoded), content_hash(&person));
    }

    #[test]
    fn person_survives_rdf(person in arb_person()) {
        let decoded = rdf_round_trip(&person);
        prop_assert_eq!(decoded.equals(&person), Ok(()));
        prop_assert_eq!(decoded.identifier(), person.identifier());
    }

    #[test]
    fn quantitative_value_survives_both(value in arb_quantitative_value()) {
        let from_json = QuantitativeValue::from_json(&value.to_json()).expect("JSON decodes");
        prop_assert_eq!(&from_json, &value);
        prop_assert_eq!(&rdf_round_trip(&value), &value);
    }

    #[test]
    fn role_survives_both(role in arb_role()) {
        let from_json = Role::from_json(&role.to_json()).expect("JSON decodes");
        prop_assert_eq!(&from_json, &role);
        prop_assert_eq!(&rdf_round_trip(&role), &role);
    }

    #[test]
    fn image_object_survives_both(image in arb_image_object(0.5)) {
        let from_json = ImageObject::from_json(&image.to_json()).expect("JSON decodes");
        prop_assert_eq!(from_json.equals(&image), Ok(()));
        prop_assert_eq!(content_hash(&from_json), content_hash(&image));

        let from_rdf = rdf_round_trip(&image);
        prop_assert_eq!(from_rdf.equals(&image), Ok(()));
        prop_assert_eq!(from_rdf.identifier(), image.identifier());
    }

    #[test]
    fn organization_survives_both(organization in arb_organization()) {
        let from_json = Organization::from_json(&organization.to_json()).expect("JSON decodes");
        prop_assert_eq!(from_json.equals(&organization), Ok(()));
        prop_assert_eq!(content_hash(&from_json), content_hash(&organization));

        let from_rdf = rdf_round_trip(&organization);
        prop_assert_eq!(from_rdf.equals(&organization), Ok(()));
        prop_assert_eq!(from_rdf.identifier(), organization.identifier());
    }

    #[test]
    fn thing_survives_both(thing in arb_thing()) {
        let from_json = Thing::from_json(&thing.to_json()).expect("JSON decodes");
        prop_assert_eq!(&from_json, &thing);
        prop_assert_eq!(&rdf_round_trip(&thing), &thing);
        prop_assert_eq!(content_hash(&from_json), content_hash(&thing));
    }

    #[test]
    fn doubles_keep_their_value(value in arb_number()) {
        let quantity = QuantitativeValue::builder().value(value).min_value(-value).build();
        let from_json = QuantitativeValue::from_json(&quantity.to_json()).expect("JSON decodes");
        let from_rdf = rdf_round_trip(&quantity);
        for decoded in [&from_json, &from_rdf] {
            let decoded_value = decoded.properties().value.expect("value survives");
            prop_assert!(decoded_value == value || (decoded_value.is_nan() && value.is_nan()));
        }
        prop_assert_eq!(content_hash(&from_json), content_hash(&quantity));
    }

    #[test]
    fn gender_type_keeps_its_member(gender in arb_gender()) {
        let decoded = rdf_round_trip(&gender);
        prop_assert_eq!(decoded.member(), gender.member());
        prop_assert_eq!(decoded.identifier().as_named_node(), &gender.member().iri().into_owned());
    }

    #[test]
    fn repeated_values_are_unordered(skills in prop::collection::vec(arb_text(), 0..5)) {
        let forward = Occupation::builder().skills(skills.clone()).build();
        let backward = Occupation::builder().skills(skills.into_iter().rev()).build();
        prop_assert_eq!(forward.equals(&backward), Ok(()));
        prop_assert_eq!(content_hash(&forward), content_hash(&backward));
        prop_assert_eq!(forward.identifier(), backward.identifier());
    }

    #[test]
    fn synthesized_identifiers_follow_content(name in arb_text(), other in arb_text()) {
        let first = Organization::builder().legal_name(name.clone()).build();
        let second = Organization::builder().legal_name(other.clone()).build();
        prop_assert!(first.identifier().is_synthesized());
        prop_assert_eq!(first.identifier() == second.identifier(), name == other);
    }
}
