//! Configuration loading and typed config structures for factfold.
//!
//! Configuration is an optional YAML file. Every field has a default that
//! matches the command-line defaults, so an empty file (or no file) is a
//! valid configuration.
//!
//! ```yaml
//! files:
//!   schema: ./files/schema.txt
//!   facts: ./files/facts.txt
//!   output: ./files/output.txt
//! fold:
//!   output_order: insertion
//!   strict_flags: false
//! logging:
//!   level: info
//!   format: text
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

use factfold_store::BoolMode;

/// Environment variable overriding `files.schema`.
pub const SCHEMA_FILE_ENV: &str = "FACTFOLD_SCHEMA_FILE";

/// Environment variable overriding `files.facts`.
pub const FACTS_FILE_ENV: &str = "FACTFOLD_FACTS_FILE";

/// Environment variable overriding `files.output`.
pub const OUTPUT_FILE_ENV: &str = "FACTFOLD_OUTPUT_FILE";

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct FoldConfig {
    /// Input and output file locations.
    #[serde(default)]
    pub files: FilesConfig,

    /// Fold and format options.
    #[serde(default)]
    pub fold: FoldOptions,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl FoldConfig {
    /// Load configuration from a YAML file at the given path.
    ///
    /// Environment variables override YAML values for file paths:
    /// - `FACTFOLD_SCHEMA_FILE` overrides `files.schema`
    /// - `FACTFOLD_FACTS_FILE` overrides `files.facts`
    /// - `FACTFOLD_OUTPUT_FILE` overrides `files.output`
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or
    /// [`ConfigError::Yaml`] if the content is not valid YAML.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parse configuration from a YAML string, then apply environment
    /// overrides.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        Self::parse_with_overrides(yaml, |key| std::env::var(key).ok())
    }

    /// Parse configuration from a YAML string, then apply path overrides
    /// looked up through `var` instead of the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML.
    pub fn parse_with_overrides(
        yaml: &str,
        var: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        // An empty document carries no settings.
        let mut config: Self = if yaml.trim().is_empty() {
            Self::default()
        } else {
            serde_yml::from_str(yaml)?
        };
        config.files.apply_overrides(var);
        Ok(config)
    }
}

/// Input and output file locations.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FilesConfig {
    /// Schema file (`attribute---kind---cardinality` per line).
    #[serde(default = "default_schema_file")]
    pub schema: PathBuf,

    /// Fact history file (`entity---attribute---value---flag` per line).
    #[serde(default = "default_facts_file")]
    pub facts: PathBuf,

    /// Where active facts are written.
    #[serde(default = "default_output_file")]
    pub output: PathBuf,
}

impl FilesConfig {
    /// Override file paths with environment variables when set.
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Override file paths with whatever `var` returns for
    /// [`SCHEMA_FILE_ENV`], [`FACTS_FILE_ENV`] and [`OUTPUT_FILE_ENV`].
    pub fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(val) = var(SCHEMA_FILE_ENV) {
            self.schema = PathBuf::from(val);
        }
        if let Some(val) = var(FACTS_FILE_ENV) {
            self.facts = PathBuf::from(val);
        }
        if let Some(val) = var(OUTPUT_FILE_ENV) {
            self.output = PathBuf::from(val);
        }
    }
}

impl Default for FilesConfig {
    fn default() -> Self {
        Self {
            schema: default_schema_file(),
            facts: default_facts_file(),
            output: default_output_file(),
        }
    }
}

/// Order in which active facts are written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputOrder {
    /// Entities and attributes in the order they were first touched.
    #[default]
    Insertion,
    /// Sorted by entity, then attribute. Values of a multi-valued attribute
    /// keep their assert order.
    Sorted,
}

/// Fold and format options.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct FoldOptions {
    /// Output ordering.
    #[serde(default)]
    pub output_order: OutputOrder,

    /// Reject fact flags other than `true`/`false` instead of reading them
    /// as `false`.
    #[serde(default)]
    pub strict_flags: bool,
}

impl FoldOptions {
    /// The flag-reading mode these options select.
    pub const fn bool_mode(&self) -> BoolMode {
        if self.strict_flags {
            BoolMode::Strict
        } else {
            BoolMode::Permissive
        }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// One JSON object per event.
    Json,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    /// Filter directive (trace, debug, info, warn, error, or a full
    /// `EnvFilter` expression). `RUST_LOG` takes precedence.
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Output format.
    #[serde(default)]
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
        }
    }
}

// ---------------------------------------------------------------------------
// Default value functions
// ---------------------------------------------------------------------------

fn default_schema_file() -> PathBuf {
    PathBuf::from("./files/schema.txt")
}

fn default_facts_file() -> PathBuf {
    PathBuf::from("./files/facts.txt")
}

fn default_output_file() -> PathBuf {
    PathBuf::from("./files/output.txt")
}

fn default_log_level() -> String {
    "info".to_owned()
}
