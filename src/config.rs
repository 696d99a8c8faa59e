use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use oxigraph::io::RdfFormat;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::model::ClassKind;

/// Input path that reads standard input.
pub const STDIN_PATH: &str = "-";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentFormat {
    Json,
    #[value(alias = "nt", alias = "n-triples")]
    #[serde(alias = "nt", alias = "n-triples")]
    Ntriples,
    #[value(alias = "ttl")]
    #[serde(alias = "ttl")]
    Turtle,
}

impl DocumentFormat {
    /// RDF syntax of this format, `None` for JSON.
    pub fn rdf_format(self) -> Option<RdfFormat> {
        match self {
            DocumentFormat::Json => None,
            DocumentFormat::Ntriples => Some(RdfFormat::NTriples),
            DocumentFormat::Turtle => Some(RdfFormat::Turtle),
        }
    }

    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "json" | "jsonld" => Some(DocumentFormat::Json),
            "nt" => Some(DocumentFormat::Ntriples),
            "ttl" => Some(DocumentFormat::Turtle),
            _ => None,
        }
    }
}

impl std::fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DocumentFormat::Json => write!(f, "json"),
            DocumentFormat::Ntriples => write!(f, "ntriples"),
            DocumentFormat::Turtle => write!(f, "turtle"),
        }
    }
}

fn parse_class_kind(value: &str) -> Result<ClassKind, String> {
    ClassKind::from_name(value).ok_or_else(|| format!("unknown class {value:?}"))
}

#[derive(Parser, Debug, Clone)]
#[command(
    name = "schemaorg-rdf",
    about = "Convert schema.org objects between JSON and RDF",
    version
)]
pub struct CliArgs {
    #[arg(
        long,
        value_name = "FILE",
        help = "Path to a configuration file (YAML or JSON)",
        global = true
    )]
    pub config: Option<PathBuf>,

    #[arg(
        long,
        env = "SCHEMAORG_RDF_PRETTY",
        value_name = "BOOL",
        help = "Pretty-print JSON output",
        global = true
    )]
    pub pretty: Option<bool>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Convert a document between JSON, N-Triples and Turtle
    Convert(ConvertArgs),
    /// Print the JSON Schema or UI schema of a class
    Schema(SchemaArgs),
    /// Print the identifier and content hash of every object in a document
    Identify(IdentifyArgs),
}

#[derive(Args, Debug, Clone, Default)]
pub struct InputArgs {
    #[arg(long, short, value_name = "FILE", help = "Input document, `-` for stdin")]
    pub input: PathBuf,

    #[arg(
        long,
        env = "SCHEMAORG_RDF_FROM",
        value_enum,
        value_name = "FORMAT",
        help = "Input format; inferred from the file extension when omitted"
    )]
    pub from: Option<DocumentFormat>,

    #[arg(
        long,
        env = "SCHEMAORG_RDF_CLASS",
        value_name = "CLASS",
        value_parser = parse_class_kind,
        help = "Decode every root object as this class"
    )]
    pub class: Option<ClassKind>,

    #[arg(
        long,
        env = "SCHEMAORG_RDF_IGNORE_RDF_TYPE",
        help = "Do not require rdf:type triples on RDF input (needs --class)"
    )]
    pub ignore_rdf_type: bool,
}

#[derive(Args, Debug, Clone)]
pub struct ConvertArgs {
    #[command(flatten)]
    pub input: InputArgs,

    #[arg(
        long,
        env = "SCHEMAORG_RDF_TO",
        value_enum,
        value_name = "FORMAT",
        help = "Output format"
    )]
    pub to: Option<DocumentFormat>,

    #[arg(long, short, value_name = "FILE", help = "Write output here instead of stdout")]
    pub output: Option<PathBuf>,
}

#[derive(Args, Debug, Clone)]
pub struct SchemaArgs {
    #[arg(long, value_name = "CLASS", value_parser = parse_class_kind)]
    pub class: ClassKind,

    #[arg(long, help = "Print the UI schema instead of the JSON Schema")]
    pub ui: bool,

    #[arg(long, short, value_name = "FILE", help = "Write output here instead of stdout")]
    pub output: Option<PathBuf>,
}

#[derive(Args, Debug, Clone)]
pub struct IdentifyArgs {
    #[command(flatten)]
    pub input: InputArgs,
}

/// Where and how to read a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputConfig {
    pub path: PathBuf,
    pub format: DocumentFormat,
    pub class: Option<ClassKind>,
    pub ignore_rdf_type: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandConfig {
    Convert {
        input: InputConfig,
        format: DocumentFormat,
        output: Option<PathBuf>,
    },
    Schema {
        class: ClassKind,
        ui: bool,
        output: Option<PathBuf>,
    },
    Identify {
        input: InputConfig,
    },
}

/// Resolved settings: command line first, then environment, then the
/// configuration file, then defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolConfig {
    pub command: CommandConfig,
    pub pretty_json: bool,
}

impl ToolConfig {
    pub fn from_args(args: CliArgs) -> Result<Self> {
        let CliArgs {
            config,
            pretty: cli_pretty,
            command,
        } = args;

        let file_config = if let Some(path) = config.as_ref() {
            load_config_file(path)?
        } else {
            PartialConfig::default()
        };

        let pretty_json = cli_pretty.or(file_config.pretty_json).unwrap_or(true);

        let command = match command {
            Command::Convert(ConvertArgs { input, to, output }) => CommandConfig::Convert {
                input: resolve_input(input, &file_config)?,
                format: to
                    .or(file_config.output_format)
                    .unwrap_or(DocumentFormat::Json),
                output,
            },
            Command::Schema(SchemaArgs { class, ui, output }) => {
                CommandConfig::Schema { class, ui, output }
            }
            Command::Identify(IdentifyArgs { input }) => CommandConfig::Identify {
                input: resolve_input(input, &file_config)?,
            },
        };

        Ok(Self {
            command,
            pretty_json,
        })
    }

    /// Fails fast on settings that cannot work together.
    pub fn validate(&self) -> Result<()> {
        let input = match &self.command {
            CommandConfig::Convert { input, .. } | CommandConfig::Identify { input } => input,
            CommandConfig::Schema { .. } => return Ok(()),
        };

        if input.path.as_os_str() != STDIN_PATH {
            anyhow::ensure!(
                input.path.exists(),
                "input file {:?} does not exist",
                input.path
            );
            anyhow::ensure!(
                input.path.is_file(),
                "input {:?} is not a file",
                input.path
            );
        }

        anyhow::ensure!(
            !input.ignore_rdf_type || input.class.is_some(),
            "--ignore-rdf-type requires --class: untyped resources cannot be dispatched"
        );
        anyhow::ensure!(
            !input.ignore_rdf_type || input.format.rdf_format().is_some(),
            "--ignore-rdf-type only applies to RDF input, not {}",
            input.format
        );
        Ok(())
    }
}

fn resolve_input(args: InputArgs, file_config: &PartialConfig) -> Result<InputConfig> {
    let InputArgs {
        input: path,
        from,
        class,
        ignore_rdf_type,
    } = args;

    let format = from
        .or(file_config.input_format)
        .or_else(|| DocumentFormat::from_path(&path))
        .with_context(|| {
            format!(
                "cannot infer the format of {:?}; pass --from json|ntriples|turtle",
                path
            )
        })?;

    Ok(InputConfig {
        path,
        format,
        class: class.or_else(|| {
            file_config
                .class
                .as_deref()
                .and_then(ClassKind::from_name)
        }),
        ignore_rdf_type: ignore_rdf_type || file_config.ignore_rdf_type.unwrap_or(false),
    })
}

#[derive(Debug, Default, Deserialize)]
struct PartialConfig {
    input_format: Option<DocumentFormat>,
    output_format: Option<DocumentFormat>,
    class: Option<String>,
    ignore_rdf_type: Option<bool>,
    pretty_json: Option<bool>,
}

fn load_config_file(path: &Path) -> Result<PartialConfig> {
    if !path.exists() {
        anyhow::bail!("config file {:?} does not exist", path);
    }
    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read config file {:?}", path))?;
    let ext = path
        .extension()
        .and_then(|os| os.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let parsed: PartialConfig = match ext.as_str() {
        "yaml" | "yml" => serde_yaml::from_str(&contents)
            .with_context(|| format!("failed to parse YAML config {:?}", path))?,
        "json" => serde_json::from_str(&contents)
            .with_context(|| format!("failed to parse JSON config {:?}", path))?,
        other => anyhow::bail!("unsupported config extension: {other}"),
    };

    if let Some(class) = parsed.class.as_deref() {
        anyhow::ensure!(
            ClassKind::from_name(class).is_some(),
            "config file {:?} names unknown class {:?}",
            path,
            class
        );
    }
    Ok(parsed)
}
