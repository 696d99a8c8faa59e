use anyhow::Context;
use clap::Parser;
use schemaorg_rdf::config::CommandConfig;
use schemaorg_rdf::{CliArgs, LoggingConfig, ToolConfig, execute, init_logging};
use std::io::Write;

fn main() -> anyhow::Result<()> {
    let logging_config = LoggingConfig::from_env();
    let _guard = init_logging(logging_config)?;

    let cli = CliArgs::parse();
    let config = ToolConfig::from_args(cli)?;

    // Validate configuration before touching any document (fail-fast)
    config.validate()?;

    let output = execute(&config)?;

    let destination = match &config.command {
        CommandConfig::Convert { output, .. } | CommandConfig::Schema { output, .. } => {
            output.as_ref()
        }
        CommandConfig::Identify { .. } => None,
    };

    match destination {
        Some(path) => {
            std::fs::write(path, output).with_context(|| format!("failed to write {:?}", path))?;
            tracing::info!(path = %path.display(), "wrote output");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(output.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}
