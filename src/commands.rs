//! The subcommands of the `schemaorg-rdf` binary.
//!
//! Each command renders its whole result as a string; `main` decides where
//! to write it. The document helpers take input text rather than paths so
//! they can be exercised without touching the filesystem.

use anyhow::{Context, Result};
use oxigraph::model::Graph;
use serde_json::Value;
use sha2::{Digest, Sha256};
use std::fs;
use std::io::{self, Read};
use std::path::Path;
use tracing::{debug, info};

use crate::config::{CommandConfig, DocumentFormat, InputConfig, STDIN_PATH, ToolConfig};
use crate::hashing::to_hex;
use crate::model::AnyObject;
use crate::rdf::{parse_graph, serialize_graph};
use crate::schema;

/// Runs the configured command and returns its output.
pub fn execute(config: &ToolConfig) -> Result<String> {
    match &config.command {
        CommandConfig::Convert { input, format, .. } => {
            let text = read_input(&input.path)?;
            convert_document(&text, input, *format, config.pretty_json)
        }
        CommandConfig::Schema { class, ui, .. } => {
            info!(class = class.name(), ui = *ui, "exporting schema");
            let value = if *ui {
                schema::ui_schema(*class)
            } else {
                schema::json_schema(*class).to_value()
            };
            render_json(&value, true)
        }
        CommandConfig::Identify { input } => {
            let text = read_input(&input.path)?;
            identify_document(&text, input)
        }
    }
}

fn read_input(path: &Path) -> Result<String> {
    if path.as_os_str() == STDIN_PATH {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .context("failed to read standard input")?;
        Ok(text)
    } else {
        fs::read_to_string(path).with_context(|| format!("failed to read {:?}", path))
    }
}

/// Decodes every object of a document. A JSON document holds one object or
/// an array of them; an RDF document contributes each of its roots.
pub fn decode_document(text: &str, input: &InputConfig) -> Result<Vec<AnyObject>> {
    let objects = match input.format.rdf_format() {
        None => {
            let value: Value = serde_json::from_str(text).context("input is not valid JSON")?;
            let items = match value {
                Value::Array(items) => items,
                single => vec![single],
            };
            items
                .iter()
                .enumerate()
                .map(|(index, item)| {
                    let decoded = match input.class {
                        Some(kind) => AnyObject::from_json_as(kind, item),
                        None => AnyObject::from_json(item),
                    };
                    decoded.with_context(|| format!("object {index} of the input document"))
                })
                .collect::<Result<Vec<_>>>()?
        }
        Some(format) => {
            let graph = parse_graph(text, format)?;
            let roots = match input.class {
                Some(kind) => AnyObject::decode_roots_as(&graph, kind, input.ignore_rdf_type)?,
                None => AnyObject::decode_roots(&graph)?,
            };
            anyhow::ensure!(
                !roots.is_empty() || graph.is_empty(),
                "none of the {} triples has a root subject: every typed subject is the value \
                 of another triple, or no subject has a known rdf:type (use --class with \
                 --ignore-rdf-type for untyped input)",
                graph.len()
            );
            roots
        }
    };
    debug!(objects = objects.len(), format = %input.format, "decoded input document");
    Ok(objects)
}

/// Renders objects in `format`. JSON output is a bare object when there is
/// exactly one, an array otherwise.
pub fn encode_document(objects: &[AnyObject], format: DocumentFormat, pretty: bool) -> Result<String> {
    match format.rdf_format() {
        None => {
            let value = match objects {
                [single] => single.to_json(),
                many => Value::Array(many.iter().map(AnyObject::to_json).collect()),
            };
            render_json(&value, pretty)
        }
        Some(rdf_format) => {
            let mut graph = Graph::new();
            for object in objects {
                object.to_rdf(&mut graph, false);
            }
            debug!(triples = graph.len(), "encoded output graph");
            Ok(serialize_graph(&graph, rdf_format)?)
        }
    }
}

pub fn convert_document(
    text: &str,
    input: &InputConfig,
    to: DocumentFormat,
    pretty: bool,
) -> Result<String> {
    let objects = decode_document(text, input)?;
    info!(from = %input.format, to = %to, objects = objects.len(), "converting document");
    encode_document(&objects, to, pretty)
}

/// One line per object: identifier, class and SHA-256 content hash,
/// separated by tabs.
pub fn identify_document(text: &str, input: &InputConfig) -> Result<String> {
    let objects = decode_document(text, input)?;
    let mut output = String::new();
    for object in &objects {
        let mut hasher = Sha256::new();
        object.hash(&mut hasher);
        output.push_str(&format!(
            "{}\t{}\t{}\n",
            object.identifier(),
            object.kind(),
            to_hex(&hasher.finalize())
        ));
    }
    Ok(output)
}

fn render_json(value: &Value, pretty: bool) -> Result<String> {
    let mut text = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    text.push('\n');
    Ok(text)
}
