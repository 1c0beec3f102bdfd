//! File-based OpenAPI document loader
//!
//! This loader handles only file I/O and deserialization. Walking the document
//! into the scaffold model is done by the [`SpecExtractor`](super::SpecExtractor).

use std::fs;
use std::path::Path;

use openapiv3::OpenAPI;
use tracing::debug;

use crate::core::error::{Error, Result};

/// Load an OpenAPI 3.x document from a YAML or JSON file
pub fn load_document<P: AsRef<Path>>(path: P) -> Result<OpenAPI> {
    let path = path.as_ref();

    let content = fs::read_to_string(path)
        .map_err(|e| Error::document_load(path, format!("failed to read file: {e}")))?;

    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);

    // Parse content as JSON or YAML
    let document: OpenAPI = match extension.as_deref() {
        Some("json") => serde_json::from_str(&content)
            .map_err(|e| Error::document_load(path, format!("failed to parse JSON: {e}")))?,
        Some("yaml") | Some("yml") => serde_yaml::from_str(&content)
            .map_err(|e| Error::document_load(path, format!("failed to parse YAML: {e}")))?,
        _ => serde_json::from_str(&content)
            .or_else(|_| serde_yaml::from_str(&content))
            .map_err(|e| Error::document_load(path, format!("failed to parse document: {e}")))?,
    };

    if !document.openapi.starts_with("3.") {
        return Err(Error::document_load(
            path,
            format!(
                "unsupported OpenAPI version {}; only 3.x is supported",
                document.openapi
            ),
        ));
    }

    debug!(
        path = %path.display(),
        version = %document.openapi,
        paths = document.paths.paths.len(),
        "Loaded OpenAPI document"
    );
    Ok(document)
}
