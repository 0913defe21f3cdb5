use thiserror::Error;

use crate::llm::LlmError;

/// Configuration errors, reported fatally before any simulation work.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing credential: environment variable '{0}' is not set")]
    MissingCredential(String),

    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Errors aborting a simulation run.
///
/// A failed run produces no artifacts; there is no partial-result
/// recovery or skip-and-continue.
#[derive(Debug, Error)]
pub enum SimError {
    #[error(transparent)]
    Llm(#[from] LlmError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Errors from chart and diagram rendering.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("chart rendering failed: {0}")]
    Chart(String),

    #[error("graphviz rendering failed: {0}")]
    Graphviz(String),
}
