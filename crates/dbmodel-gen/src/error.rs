//! Error types for the generator.

use std::path::PathBuf;

/// Errors that can occur while generating classes for a schema.
#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    /// A specification was malformed or a table is invalid.
    #[error(transparent)]
    Core(#[from] dbmodel_core::Error),

    /// No namespace segment can be derived from the path.
    #[error("Project script namespace not found for '{0}'")]
    MissingNamespace(PathBuf),

    /// The requested table is not part of the schema.
    #[error("Table not found: {0}")]
    TableNotFound(String),

    /// IO error (reading schemas, writing generated files).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to read a schema file.
    #[error("Failed to parse schema file '{path}': {source}")]
    Schema {
        /// Path to the schema file.
        path: PathBuf,
        /// Underlying JSON error.
        source: serde_json::Error,
    },
}

/// Result type for generator operations.
pub type Result<T> = std::result::Result<T, GenerateError>;
