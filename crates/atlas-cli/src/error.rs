//! Error types for the CLI application.

use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Graph engine error (notation could not be loaded or parsed)
    #[error("Graph error: {0}")]
    Graph(#[from] atlas_graph::GraphError),

    /// Catalog error
    #[error("Catalog error: {0}")]
    Catalog(#[from] atlas_catalog::CatalogError),

    /// Referential audit found dangling endpoints
    #[error("Validation failed with {0} error(s)")]
    ValidationFailed(usize),
}
