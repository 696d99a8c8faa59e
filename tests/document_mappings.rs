//! End-to-end checks of the JSON and RDF document mappings through the
//! public API.

use assert_matches::assert_matches;
use oxigraph::io::RdfFormat;
use oxigraph::model::Graph;
use serde_json::json;

use schemaorg_rdf::json::JsonErrorKind;
use schemaorg_rdf::model::{
    AnyObject, ClassKind, GenderMember, ImageObject, MediaObjectProperties, ObjectType, Organization,
    Person, QuantitativeValue, ThingProperties,
};
use schemaorg_rdf::rdf::{MAX_NESTING_DEPTH, Resource, ResourceError, parse_graph, serialize_graph};
use schemaorg_rdf::Identifier;

const TEAM: &str = r#"
    @prefix schema: <http://schema.org/> .
    @prefix xsd: <http://www.w3.org/2001/XMLSchema#> .

    <http://example.org/acme> a schema:Organization ;
        schema:legalName "ACME Corporation" ;
        schema:member <http://example.org/ada> .

    <http://example.org/ada> a schema:Person ;
        schema:givenName "Ada" ;
        schema:birthDate "1815-12-10"^^xsd:date ;
        schema:gender schema:Female .

    schema:Female a schema:GenderType .

    <http://example.org/anvil> a schema:Thing ;
        schema:name "Anvil" .
"#;

fn iri(value: &str) -> Identifier {
    Identifier::parse(value).unwrap()
}

#[test]
fn turtle_document_decodes_to_its_roots() {
    let graph = parse_graph(TEAM, RdfFormat::Turtle).unwrap();
    let roots = AnyObject::decode_roots(&graph).unwrap();

    let kinds: Vec<ClassKind> = roots.iter().map(AnyObject::kind).collect();
    assert_eq!(kinds, vec![ClassKind::Organization, ClassKind::Thing]);

    let AnyObject::Organization(acme) = &roots[0] else {
        panic!("expected an organization, got {:?}", roots[0].kind());
    };
    assert_eq!(acme.properties().legal_name.as_deref(), Some("ACME Corporation"));
    let ada = &acme.properties().members[0];
    assert_eq!(ada.identifier(), &iri("http://example.org/ada"));

    let json = roots[0].to_json();
    assert_eq!(json["member"][0]["gender"]["@id"], "http://schema.org/Female");
    assert_eq!(json["member"][0]["birthDate"], "1815-12-10");
}

#[test]
fn blank_nodes_are_not_decoded() {
    let turtle = r#"
        @prefix schema: <http://schema.org/> .
        <http://example.org/logo> a schema:ImageObject ;
            schema:caption "Anvil" ;
            schema:height [ a schema:QuantitativeValue ; schema:value 64.0 ] .
    "#;
    let graph = parse_graph(turtle, RdfFormat::Turtle).unwrap();
    let error = ImageObject::from_rdf(&Resource::new(&graph, iri("http://example.org/logo")), false)
        .unwrap_err();
    assert_matches!(error, ResourceError::UnexpectedValue { expected: "a named node", .. });
}

#[test]
fn json_to_ntriples_and_back() {
    let logo = ImageObject::builder()
        .identifier(iri("http://example.org/logo"))
        .media_object(
            MediaObjectProperties::default()
                .encoding_format("image/png")
                .height(QuantitativeValue::builder().value(64.0).unit_text("px").build()),
        )
        .caption("Anvil")
        .build();
    let acme = Organization::builder()
        .identifier(iri("http://example.org/acme"))
        .legal_name("ACME Corporation")
        .logo(logo)
        .member(Person::builder().given_name("Wile").family_name("Coyote").build())
        .build();

    let mut graph = Graph::new();
    acme.to_rdf(&mut graph, false);
    let ntriples = serialize_graph(&graph, RdfFormat::NTriples).unwrap();
    let reparsed = parse_graph(&ntriples, RdfFormat::NTriples).unwrap();

    let roots = AnyObject::decode_roots(&reparsed).unwrap();
    assert_eq!(roots, vec![AnyObject::from(acme.clone())]);
    assert_eq!(Organization::from_json(&acme.to_json()).unwrap(), acme);
}

#[test]
fn json_errors_carry_their_path() {
    let document = json!({
        "type": "Person",
        "hasOccupation": [{"type": "Occupation", "skills": ["rust", 7]}]
    });
    let error = Person::from_json(&document).unwrap_err();
    assert_eq!(error.path.to_string(), "$.hasOccupation[0].skills[1]");
    assert_matches!(error.kind, JsonErrorKind::ExpectedType { expected: "string", actual: "number" });

    let error = Person::from_json(&json!({"type": "Person", "birthDate": "10 December 1815"}))
        .unwrap_err();
    assert_eq!(error.path.to_string(), "$.birthDate");

    let error = Person::from_json(&json!({"type": "Organization"})).unwrap_err();
    assert_matches!(error.kind, JsonErrorKind::UnexpectedType { expected: "Person", .. });
}

#[test]
fn unions_report_every_attempt() {
    let document = json!({"type": "Organization", "member": [{"type": "Role"}]});
    let error = Organization::from_json(&document).unwrap_err();
    assert_eq!(error.path.to_string(), "$.member[0]");
    assert_matches!(
        error.kind,
        JsonErrorKind::NoMatchingVariant { union: "Agent", ref attempts } if attempts.len() == 2
    );
}

#[test]
fn single_valued_properties_reject_repeats() {
    let turtle = r#"
        @prefix schema: <http://schema.org/> .
        <http://example.org/ada> a schema:Person ;
            schema:givenName "Ada", "Augusta" .
    "#;
    let graph = parse_graph(turtle, RdfFormat::Turtle).unwrap();
    let error = Person::from_rdf(&Resource::new(&graph, iri("http://example.org/ada")), false)
        .unwrap_err();
    assert_matches!(error, ResourceError::TooManyValues { count: 2, .. });
}

#[test]
fn unknown_gender_is_rejected() {
    let turtle = r#"
        @prefix schema: <http://schema.org/> .
        <http://example.org/ada> a schema:Person ;
            schema:gender <http://example.org/other> .
        <http://example.org/other> a schema:GenderType .
    "#;
    let graph = parse_graph(turtle, RdfFormat::Turtle).unwrap();
    let error = Person::from_rdf(&Resource::new(&graph, iri("http://example.org/ada")), false)
        .unwrap_err();
    assert_matches!(error, ResourceError::NotAMember { enumeration: "GenderType", .. });

    let json = json!({"type": "Person", "gender": {"type": "GenderType", "@id": "http://schema.org/Male"}});
    let person = Person::from_json(&json).unwrap();
    let gender = person.properties().gender.as_ref().unwrap();
    assert_eq!(gender.member(), GenderMember::Male);
}

#[test]
fn cyclic_graphs_stop_at_the_first_revisit() {
    let turtle = r#"
        @prefix schema: <http://schema.org/> .
        <http://example.org/acme> a schema:Organization ;
            schema:member <http://example.org/ada> .
        <http://example.org/ada> a schema:Person ;
            schema:memberOf <http://example.org/acme> .
    "#;
    let graph = parse_graph(turtle, RdfFormat::Turtle).unwrap();
    let error = Organization::from_rdf(&Resource::new(&graph, iri("http://example.org/acme")), false)
        .unwrap_err();
    assert_matches!(error, ResourceError::Cycle { length: 2, .. });

    // Neither subject is a root: each is the value of the other.
    assert!(AnyObject::decode_roots(&graph).unwrap().is_empty());
}

#[test]
fn self_referencing_multi_typed_resources_fail_fast() {
    let turtle = r#"
        @prefix schema: <http://schema.org/> .
        <http://example.org/root> a schema:Organization ;
            schema:member <http://example.org/x> .
        <http://example.org/x> a schema:Person, schema:Organization ;
            schema:member <http://example.org/x> ;
            schema:memberOf <http://example.org/x> .
    "#;
    let graph = parse_graph(turtle, RdfFormat::Turtle).unwrap();
    let error = AnyObject::decode_roots(&graph).unwrap_err();
    assert_matches!(error, ResourceError::Cycle { length: 1, .. });
}

#[test]
fn deep_acyclic_nesting_hits_the_limit() {
    let mut turtle = String::from("@prefix schema: <http://schema.org/> .\n");
    let levels = MAX_NESTING_DEPTH + 4;
    for level in 0..levels {
        let (class, predicate) = if level % 2 == 0 {
            ("Organization", "member")
        } else {
            ("Person", "memberOf")
        };
        turtle.push_str(&format!(
            "<http://example.org/n{level}> a schema:{class} ; schema:{predicate} <http://example.org/n{}> .\n",
            level + 1
        ));
    }
    let graph = parse_graph(&turtle, RdfFormat::Turtle).unwrap();

    let error = Organization::from_rdf(&Resource::new(&graph, iri("http://example.org/n0")), false)
        .unwrap_err();
    assert_matches!(error, ResourceError::NestingTooDeep { limit: MAX_NESTING_DEPTH, .. });
}

#[test]
fn ignoring_rdf_type_decodes_untyped_subjects() {
    let thing = ThingProperties::default().name("Loose");
    let value = QuantitativeValue::builder()
        .identifier(iri("http://example.org/q"))
        .thing(thing)
        .value(2.5)
        .build();

    let mut graph = Graph::new();
    value.to_rdf(&mut graph, true);
    assert!(AnyObject::decode_roots(&graph).unwrap().is_empty());

    let roots = AnyObject::decode_roots_as(&graph, ClassKind::QuantitativeValue, true).unwrap();
    assert_eq!(roots, vec![AnyObject::from(value)]);
}
