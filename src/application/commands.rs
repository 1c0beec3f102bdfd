//! Request and response types for the application layer

use std::path::PathBuf;

use crate::core::templates::TemplateDir;
use crate::generation::GenerationReport;

/// Request to generate a runn scaffold from an OpenAPI document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateRequest {
    /// OpenAPI document (YAML or JSON)
    pub schema_path: PathBuf,
    /// Output directory root
    pub output_dir: PathBuf,
    /// Server base URL injected into the base request definitions
    pub host: String,
    /// Explicit template directory; falls back to discovery when `None`
    pub template_dir: Option<PathBuf>,
}

impl GenerateRequest {
    pub fn new(
        schema_path: impl Into<PathBuf>,
        output_dir: impl Into<PathBuf>,
        host: impl Into<String>,
    ) -> Self {
        Self {
            schema_path: schema_path.into(),
            output_dir: output_dir.into(),
            host: host.into(),
            template_dir: None,
        }
    }

    /// Use templates from `dir` instead of discovering them
    pub fn with_template_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.template_dir = Some(dir.into());
        self
    }
}

/// Response from scaffold generation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateResponse {
    pub report: GenerationReport,
    pub output_path: PathBuf,
    /// Where the templates were read from
    pub templates: TemplateDir,
}
