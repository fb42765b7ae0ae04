//! Error types for specification parsing and schema validation.

/// Errors raised while parsing specifications or validating a table.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// An interface or attribute specification does not follow its grammar.
    #[error("Specification has wrong format : {spec} must be of the form 'Namespace.ClassName'")]
    Format {
        /// The offending specification text.
        spec: String,
    },

    /// Two columns of the same table share a name.
    #[error("Duplicate column '{column}' in table '{table}'")]
    DuplicateColumn {
        /// Table name.
        table: String,
        /// The repeated column name.
        column: String,
    },
}

impl Error {
    /// Creates a format error for the given specification text.
    #[must_use]
    pub fn format(spec: impl Into<String>) -> Self {
        Self::Format { spec: spec.into() }
    }
}

/// Result type for specification parsing and code generation.
pub type Result<T> = std::result::Result<T, Error>;
