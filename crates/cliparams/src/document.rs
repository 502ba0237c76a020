//! Decoding request documents into records.
//!
//! Documents arrive as loosely typed JSON values (TOML input is converted
//! first). A `null` document stands for a configuration block that was not
//! provided, which is not an error.

use crate::error::{Error, Result};
use serde::de::DeserializeOwned;
use serde_json::Value as Json;

/// Decode a document into a record.
///
/// Returns `Ok(None)` for `null`, decodes objects, and rejects every other
/// kind of value with [`Error::InvalidShape`].
pub fn from_document<T: DeserializeOwned>(document: Json) -> Result<Option<T>> {
    match document {
        Json::Null => Ok(None),
        Json::Object(_) => Ok(Some(serde_json::from_value(document)?)),
        other => Err(Error::InvalidShape {
            found: json_kind(&other),
        }),
    }
}

/// Name of a JSON value's kind, for error messages
pub fn json_kind(value: &Json) -> &'static str {
    match value {
        Json::Null => "null",
        Json::Bool(_) => "bool",
        Json::Number(_) => "number",
        Json::String(_) => "string",
        Json::Array(_) => "array",
        Json::Object(_) => "object",
    }
}
