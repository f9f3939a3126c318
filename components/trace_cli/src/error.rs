//! Error types for the CLI

use source_resolver::ConfigError;
use std::path::PathBuf;
use thiserror::Error;

/// CLI-specific errors
#[derive(Debug, Error)]
pub enum CliError {
    /// An input file could not be read
    #[error("could not read '{path}': {source}")]
    Input {
        /// File that failed
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Resolver configuration error
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Writing results failed
    #[error("output error: {0}")]
    Output(#[from] std::io::Error),

    /// JSON encoding of results failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Interactive mode error
    #[error("interactive mode error: {0}")]
    Repl(String),
}

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// Read a whole input file, naming it in the error
pub fn read_input(path: &std::path::Path) -> CliResult<String> {
    std::fs::read_to_string(path).map_err(|source| CliError::Input {
        path: path.to_path_buf(),
        source,
    })
}
