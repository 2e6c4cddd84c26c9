//! Error types for the dopant library.

use thiserror::Error;

/// Main error type for dopant operations.
#[derive(Debug, Error)]
pub enum DopantError {
    /// A request parameter was missing or malformed.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The species does not carry a recognized host-site suffix.
    #[error("Invalid species '{species}': expected a 'Cs' or 'Sn' suffix")]
    InvalidSpecies { species: String },

    /// A well-formed query matched no document.
    #[error("No document in '{collection}' where {field} = '{value}'")]
    NotFound {
        collection: String,
        field: String,
        value: String,
    },

    /// The document store failed, timed out, is unreachable or returned
    /// unreadable data.
    #[error("Store error: {0}")]
    Store(String),

    /// A stored document does not have the expected shape.
    #[error("Malformed document in '{collection}': {message}")]
    MalformedDocument { collection: String, message: String },
}

impl DopantError {
    /// Short machine-readable label for the error kind.
    pub fn kind(&self) -> &'static str {
        match self {
            DopantError::InvalidInput(_) => "invalid_input",
            DopantError::InvalidSpecies { .. } => "invalid_species",
            DopantError::NotFound { .. } => "not_found",
            DopantError::Store(_) => "store_error",
            DopantError::MalformedDocument { .. } => "malformed_document",
        }
    }
}

/// Result type alias for dopant operations.
pub type Result<T> = std::result::Result<T, DopantError>;
