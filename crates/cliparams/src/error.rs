//! Error types for parameter marshalling.
//!
//! Every error here stems from a mismatch between a configuration record and
//! the shape the marshaller expects. None of them are transient.

use thiserror::Error;

/// Errors that can occur while building a parameter map.
#[derive(Debug, Error)]
pub enum Error {
    /// The input could not be resolved to a record at all
    #[error("unsupported type: {found}")]
    InvalidShape {
        /// Kind of value found where a record was expected
        found: &'static str,
    },

    /// A field in the descriptor table has a type the marshaller cannot render
    #[error("the type '{type_name}' assigned to '{key}' is not yet supported")]
    UnsupportedFieldType {
        /// Rust type name of the offending field
        type_name: &'static str,
        /// Export key the field was declared under
        key: &'static str,
    },

    /// A multi-valued field could not be encoded as JSON
    #[error("failed to encode '{key}' as JSON: {source}")]
    Encode {
        /// Export key of the field being encoded
        key: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// A request document did not match the record it was decoded into
    #[error("invalid request document: {0}")]
    Document(#[from] serde_json::Error),
}

impl Error {
    /// Whether this error comes from a statically wrong record declaration.
    ///
    /// Such errors are programming defects and must never be retried.
    pub fn is_schema_defect(&self) -> bool {
        matches!(self, Self::UnsupportedFieldType { .. })
    }
}

/// Result type for marshalling operations.
pub type Result<T> = std::result::Result<T, Error>;
