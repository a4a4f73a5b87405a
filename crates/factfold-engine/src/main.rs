//! The `factfold` binary.
//!
//! Reads a schema file and an assert/retract fact history, folds the
//! history into the facts that currently hold, and writes them out in
//! the same delimited format.
//!
//! # Startup Sequence
//!
//! 1. Parse command-line flags
//! 2. Load configuration (YAML file if given, else defaults) and overlay
//!    the flags
//! 3. Initialize structured logging (tracing)
//! 4. Run the pipeline
//! 5. Log the result

mod cli;
mod error;

use std::path::Path;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use factfold_core::config::{FoldConfig, LogFormat, LoggingConfig};
use factfold_core::pipeline;

use crate::cli::Cli;
use crate::error::EngineError;

/// Application entry point.
///
/// # Errors
///
/// Returns an error if configuration cannot be loaded, the log filter is
/// invalid, or the pipeline fails.
fn main() -> Result<(), EngineError> {
    let cli = Cli::parse();

    let mut config = load_config(cli.config.as_deref())?;
    cli.apply(&mut config);

    init_logging(&config.logging)?;
    info!(
        schema = %config.files.schema.display(),
        facts = %config.files.facts.display(),
        output = %config.files.output.display(),
        "factfold starting"
    );

    let summary = pipeline::run(&config).inspect_err(|e| error!(error = %e, "fold failed"))?;

    info!(
        schema_entries = summary.schema_entries,
        operations = summary.operations,
        active_facts = summary.active_facts,
        output = %summary.output.display(),
        "fold complete"
    );
    Ok(())
}

/// Load configuration from `path` if given, otherwise start from defaults.
///
/// File-path environment overrides apply either way.
fn load_config(path: Option<&Path>) -> Result<FoldConfig, EngineError> {
    if let Some(path) = path {
        return Ok(FoldConfig::from_file(path)?);
    }
    let mut config = FoldConfig::default();
    config.files.apply_env_overrides();
    Ok(config)
}

/// Install the global tracing subscriber. `RUST_LOG` wins over the
/// configured level. Logs go to stderr.
fn init_logging(logging: &LoggingConfig) -> Result<(), EngineError> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&logging.level))
        .map_err(|e| EngineError::Logging {
            message: format!("invalid log filter {:?}: {e}", logging.level),
        })?;

    match logging.format {
        LogFormat::Text => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .with_writer(std::io::stderr)
            .init(),
        LogFormat::Json => tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_target(true)
            .with_writer(std::io::stderr)
            .init(),
    }
    Ok(())
}
