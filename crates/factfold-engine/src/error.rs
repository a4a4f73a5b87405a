//! Error types for the factfold binary.
//!
//! [`EngineError`] is the top-level error type that wraps all possible
//! failure modes during startup and the pipeline run.

/// Top-level error for the factfold binary.
///
/// Each variant wraps a specific subsystem error, providing a single
/// error type that `main` can propagate with `?`.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// Configuration loading failed.
    #[error("config error: {source}")]
    Config {
        /// The underlying config error.
        #[from]
        source: factfold_core::config::ConfigError,
    },

    /// The logging filter could not be built.
    #[error("logging error: {message}")]
    Logging {
        /// Description of the logging failure.
        message: String,
    },

    /// Loading, folding, or writing failed.
    #[error("pipeline error: {source}")]
    Pipeline {
        /// The underlying pipeline error.
        #[from]
        source: factfold_core::pipeline::PipelineError,
    },
}
