//! Reading and writing RDF documents.

use oxigraph::io::{RdfFormat, RdfParser, RdfSerializer};
use oxigraph::model::{Graph, Triple};

use super::vocab::{SCHEMA_NS, SCHEMA_PREFIX};
use crate::error::ModelError;

/// Parses an RDF document into a graph. Named graphs of quad formats are
/// merged into one.
pub fn parse_graph(input: &str, format: RdfFormat) -> Result<Graph, ModelError> {
    let mut graph = Graph::new();
    for quad in RdfParser::from_format(format).for_reader(input.as_bytes()) {
        let quad = quad.map_err(|error| ModelError::RdfSyntax(error.to_string()))?;
        graph.insert(&Triple::new(quad.subject, quad.predicate, quad.object));
    }
    tracing::debug!(triples = graph.len(), format = ?format, "parsed RDF document");
    Ok(graph)
}

/// Serializes a graph; Turtle output declares the `schema:` prefix.
pub fn serialize_graph(graph: &Graph, format: RdfFormat) -> Result<String, ModelError> {
    let mut serializer = RdfSerializer::from_format(format)
        .with_prefix(SCHEMA_PREFIX, SCHEMA_NS)
        .map_err(|error| ModelError::RdfSyntax(error.to_string()))?
        .for_writer(Vec::new());
    for triple in graph.iter() {
        serializer.serialize_triple(triple)?;
    }
    let bytes = serializer.finish()?;
    String::from_utf8(bytes).map_err(|error| ModelError::RdfSyntax(error.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const TURTLE: &str = r#"
        @prefix schema: <http://schema.org/> .
        <http://example.org/acme> a schema:Organization ;
            schema:name "ACME" .
    "#;

    #[test]
    fn test_parse_and_serialize() {
        let graph = parse_graph(TURTLE, RdfFormat::Turtle).unwrap();
        assert_eq!(graph.len(), 2);

        let ntriples = serialize_graph(&graph, RdfFormat::NTriples).unwrap();
        assert!(ntriples.contains("<http://example.org/acme> <http://schema.org/name> \"ACME\" ."));

        let reparsed = parse_graph(&ntriples, RdfFormat::NTriples).unwrap();
        assert_eq!(reparsed.len(), graph.len());
        assert!(graph.iter().all(|triple| reparsed.contains(triple)));
    }

    #[test]
    fn test_syntax_errors_are_reported() {
        let error = parse_graph("<http://example.org/a> <broken", RdfFormat::NTriples).unwrap_err();
        assert!(matches!(error, ModelError::RdfSyntax(_)));
    }
}
