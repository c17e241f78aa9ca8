//! Error types for the tarifa CLI.
//!
//! Every failure funnels into one `Error: <message>` line on stderr and a
//! status-1 exit; no per-kind exit codes.

use thiserror::Error;

/// Result type alias for CLI operations
pub(crate) type Result<T> = std::result::Result<T, CliError>;

/// CLI error types
#[derive(Error, Debug)]
pub(crate) enum CliError {
    /// A positional argument failed to parse
    #[error("invalid value '{value}' for {arg}: expected {expected}")]
    InvalidArgument {
        arg: &'static str,
        value: String,
        expected: &'static str,
    },

    /// The default model path could not be resolved
    #[error("cannot resolve default model path: {0}")]
    NoDefaultModelPath(String),

    /// Error from the tarifa library
    #[error("{0}")]
    Tarifa(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<tarifa::error::TarifaError> for CliError {
    fn from(e: tarifa::error::TarifaError) -> Self {
        Self::Tarifa(e.to_string())
    }
}
