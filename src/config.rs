use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

/// Load a document as loosely typed JSON.
///
/// `.toml` files are parsed as TOML, anything else as JSON.
pub fn load_document(path: &Path) -> Result<serde_json::Value> {
    let content =
        fs::read_to_string(path).with_context(|| format!("Could not read {}", path.display()))?;

    log::debug!("Loading document {}", path.display());

    if is_toml(path) {
        let table: toml::Table = toml::from_str(&content)
            .with_context(|| format!("Invalid TOML format in {}", path.display()))?;
        serde_json::to_value(table).context("Failed to convert TOML document")
    } else {
        serde_json::from_str(&content)
            .with_context(|| format!("Invalid JSON format in {}", path.display()))
    }
}

/// Load a document and decode it into a record.
///
/// A JSON `null` document yields `None`.
pub fn load_record<T: DeserializeOwned>(path: &Path) -> Result<Option<T>> {
    let document = load_document(path)?;
    cliparams::from_document(document)
        .with_context(|| format!("Invalid document {}", path.display()))
}

fn is_toml(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"))
}
