//! Use case for generating a runn scaffold

use tracing::info;

use crate::application::{GenerateRequest, GenerateResponse};
use crate::core::error::Result;
use crate::core::templates::{TemplateDir, TemplateSet};
use crate::generation::{GenerationOptions, GenerationOrchestrator};
use crate::infrastructure::openapi::{SpecExtractor, load_document};

/// Loads the document, extracts the model and renders the scaffold tree
#[derive(Debug, Default)]
pub struct GenerateScaffoldUseCase;

impl GenerateScaffoldUseCase {
    pub fn new() -> Self {
        Self
    }

    pub fn execute(&self, request: GenerateRequest) -> Result<GenerateResponse> {
        // 1. Load and extract; nothing is written if either fails
        let document = load_document(&request.schema_path)?;
        let specs = SpecExtractor::new(&document).extract()?;
        info!(
            schema = %request.schema_path.display(),
            paths = specs.len(),
            "Extracted OpenAPI document"
        );

        // 2. Resolve and compile templates
        let templates = TemplateDir::discover(request.template_dir.as_deref())?;
        let orchestrator = GenerationOrchestrator::new(&TemplateSet::load(&templates)?)?;

        // 3. Render
        let options = GenerationOptions::new(&request.output_dir, request.host);
        let report = orchestrator.generate(&specs, &options)?;

        Ok(GenerateResponse {
            report,
            output_path: request.output_dir,
            templates,
        })
    }
}
