//! openapi2runn CLI entrypoint
//! Parses command-line arguments and dispatches to the scaffold generator.
#![deny(unsafe_code)]

use std::path::PathBuf;

// Internal imports
use openapi2runn::application::{GenerateRequest, GenerateScaffoldUseCase};
use openapi2runn::core::templates::{TemplateDir, TemplateKind, export_embedded_templates};

// External imports (alphabetized)
use anyhow::Context;
use clap::Parser;
use tracing::{Level, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "openapi2runn")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Generate runn scenarios and test data from an OpenAPI document
    #[command(name = "gen")]
    Generate {
        /// Path to the OpenAPI document (YAML or JSON)
        #[arg(short, long)]
        input: PathBuf,
        /// Output directory for the generated scaffold
        #[arg(short, long)]
        output: PathBuf,
        /// Server base URL written into every base request definition
        #[arg(short, long)]
        server: String,
        /// Custom template directory
        #[arg(long)]
        template_dir: Option<PathBuf>,
    },
    /// Inspect or export the built-in templates
    Templates {
        #[command(subcommand)]
        action: TemplateCommands,
    },
}

#[derive(clap::Subcommand, Debug)]
pub enum TemplateCommands {
    /// List the templates used for each operation
    List,
    /// Write the embedded templates to a directory for customisation
    Export {
        /// Destination directory
        path: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    // Initialize logging with default level INFO
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Generate {
            input,
            output,
            server,
            template_dir,
        } => {
            let mut request = GenerateRequest::new(input, output, server);
            if let Some(dir) = template_dir {
                request = request.with_template_dir(dir);
            }
            generate(request)?
        }
        Commands::Templates { action } => match action {
            TemplateCommands::List => list_templates(),
            TemplateCommands::Export { path } => export_templates(&path)?,
        },
    }
    Ok(())
}

fn generate(request: GenerateRequest) -> anyhow::Result<()> {
    let schema_path = request.schema_path.clone();
    info!("Generating runn scaffold from {}", schema_path.display());

    let response = GenerateScaffoldUseCase::new()
        .execute(request)
        .with_context(|| format!("Failed to generate scaffold from {}", schema_path.display()))?;

    if let TemplateDir::Directory(dir) = &response.templates {
        info!("Templates read from {}", dir.display());
    }
    info!(
        operations = response.report.operations,
        data_written = response.report.data_written,
        data_preserved = response.report.data_preserved,
        "✅ Scaffold generated at {}",
        response.output_path.display()
    );
    Ok(())
}

fn list_templates() {
    println!("Embedded templates:");
    for kind in TemplateKind::all() {
        println!("  {} -> {}", kind.file_name(), kind.output_file_name());
    }
}

fn export_templates(path: &std::path::Path) -> anyhow::Result<()> {
    let written = export_embedded_templates(path)
        .with_context(|| format!("Failed to export templates to {}", path.display()))?;

    println!("Exported {} templates to {}", written.len(), path.display());
    for file in written {
        println!("  {}", file.display());
    }
    Ok(())
}
