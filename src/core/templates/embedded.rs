//! Default templates embedded in the binary at compile time.
//!
//! These let `openapi2runn gen` work without a `template/` directory. They can be
//! written to disk with `openapi2runn templates export <DIR>` as a starting point
//! for customised templates.

use std::fs;
use std::path::{Path, PathBuf};

use rust_embed::RustEmbed;
use tracing::info;

use super::TemplateKind;
use crate::core::error::{Error, Result};

/// Every file under `templates/`, embedded at compile time
#[derive(RustEmbed)]
#[folder = "templates/"]
struct EmbeddedTemplates;

/// Returns the embedded source of a template
pub fn embedded_template(kind: TemplateKind) -> Result<String> {
    let file = EmbeddedTemplates::get(kind.file_name())
        .ok_or_else(|| Error::TemplateNotFound(PathBuf::from(kind.file_name())))?;
    Ok(String::from_utf8_lossy(&file.data).into_owned())
}

/// Write every embedded template into `dest`, creating it if needed.
///
/// Existing files with the same names are overwritten. Returns the written paths.
pub fn export_embedded_templates(dest: &Path) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(dest).map_err(|e| Error::file_system(dest, e))?;

    let mut written = Vec::new();
    for kind in TemplateKind::all() {
        let path = dest.join(kind.file_name());
        fs::write(&path, embedded_template(kind)?).map_err(|e| Error::file_system(&path, e))?;
        written.push(path);
    }

    info!(
        dest = %dest.display(),
        count = written.len(),
        "Exported embedded templates"
    );
    Ok(written)
}
