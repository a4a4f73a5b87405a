//! Command-line arguments.
//!
//! Flags override the YAML config file, which overrides built-in defaults.

use std::path::PathBuf;

use clap::Parser;

use factfold_core::config::{FoldConfig, OutputOrder};

/// Fold an assert/retract fact history into the facts that currently hold.
#[derive(Parser, Debug, Clone)]
#[command(name = "factfold", version)]
pub struct Cli {
    /// Path to the schema file.
    #[arg(short = 's', long, visible_alias = "schema_file_path")]
    pub schema_file: Option<PathBuf>,

    /// Path to the fact history file.
    #[arg(short = 'f', long, visible_alias = "facts_file_path")]
    pub facts_file: Option<PathBuf>,

    /// Path the active facts are written to.
    #[arg(short = 'o', long, visible_alias = "output_file_path")]
    pub output_file: Option<PathBuf>,

    /// Optional YAML config file.
    #[arg(short = 'c', long)]
    pub config: Option<PathBuf>,

    /// Sort output by entity, then attribute.
    #[arg(long, default_value_t = false)]
    pub sort: bool,

    /// Reject fact flags other than true/false.
    #[arg(long, default_value_t = false)]
    pub strict_flags: bool,

    /// Log filter directive, e.g. `debug` or `factfold_ledger=trace`.
    #[arg(long)]
    pub log_level: Option<String>,
}

impl Cli {
    /// Overlay the flags that were given onto `config`.
    pub fn apply(&self, config: &mut FoldConfig) {
        if let Some(path) = &self.schema_file {
            config.files.schema.clone_from(path);
        }
        if let Some(path) = &self.facts_file {
            config.files.facts.clone_from(path);
        }
        if let Some(path) = &self.output_file {
            config.files.output.clone_from(path);
        }
        if self.sort {
            config.fold.output_order = OutputOrder::Sorted;
        }
        if self.strict_flags {
            config.fold.strict_flags = true;
        }
        if let Some(level) = &self.log_level {
            config.logging.level.clone_from(level);
        }
    }
}
