//! Template directory resolution

use std::path::{Path, PathBuf};
use tracing::{debug, error, info};

use super::TemplateKind;
use crate::core::error::{Error, Result};

/// Environment variable naming a template directory
pub const TEMPLATE_DIR_ENV: &str = "OPENAPI2RUNN_TEMPLATE_DIR";

/// Directory, relative to the working directory, searched when nothing else is configured
pub const DEFAULT_TEMPLATE_DIR: &str = "template";

/// Trait for reading template configuration, allowing dependency injection for testing
pub trait TemplateConfigReader {
    fn get_template_dir(&self) -> Option<String>;
}

/// Production implementation that reads from environment variables
pub struct EnvTemplateConfigReader;

impl TemplateConfigReader for EnvTemplateConfigReader {
    fn get_template_dir(&self) -> Option<String> {
        std::env::var(TEMPLATE_DIR_ENV).ok()
    }
}

/// Mock implementation for testing with controlled values
#[cfg(test)]
pub struct MockTemplateConfigReader(Option<String>);

#[cfg(test)]
impl MockTemplateConfigReader {
    pub fn new(template_dir: Option<String>) -> Self {
        Self(template_dir)
    }
}

#[cfg(test)]
impl TemplateConfigReader for MockTemplateConfigReader {
    fn get_template_dir(&self) -> Option<String> {
        self.0.clone()
    }
}

/// Where the three templates are read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateDir {
    /// A directory holding `base.yml.template`, `index.yml.template` and `data.json.template`
    Directory(PathBuf),
    /// The defaults compiled into the binary
    Embedded,
}

impl TemplateDir {
    /// Resolve the template location relative to the current directory.
    ///
    /// Order: `custom_dir`, then [`TEMPLATE_DIR_ENV`], then `./template`, then
    /// the embedded defaults.
    pub fn discover(custom_dir: Option<&Path>) -> Result<Self> {
        let cwd = std::env::current_dir().map_err(|e| Error::file_system(".", e))?;
        Self::discover_in(&cwd, custom_dir, &EnvTemplateConfigReader)
    }

    /// Resolve the template location with an explicit working directory and config reader
    pub fn discover_in(
        cwd: &Path,
        custom_dir: Option<&Path>,
        config_reader: &dyn TemplateConfigReader,
    ) -> Result<Self> {
        if let Some(dir) = custom_dir {
            debug!("Using custom template directory: {}", dir.display());
            return Self::validated(dir.to_path_buf());
        }

        if let Some(dir) = config_reader.get_template_dir() {
            debug!("Using template directory from {}: {}", TEMPLATE_DIR_ENV, dir);
            return Self::validated(PathBuf::from(dir));
        }

        let local = cwd.join(DEFAULT_TEMPLATE_DIR);
        if local.is_dir() {
            debug!("Auto-discovered template directory: {}", local.display());
            return Self::validated(local);
        }

        info!("No template directory found, using embedded templates");
        Ok(Self::Embedded)
    }

    fn validated(dir: PathBuf) -> Result<Self> {
        if !dir.is_dir() {
            error!("Template directory not found: {}", dir.display());
            return Err(Error::TemplateNotFound(dir));
        }
        for kind in TemplateKind::all() {
            let file = dir.join(kind.file_name());
            if !file.is_file() {
                error!("Template file missing: {}", file.display());
                return Err(Error::TemplateNotFound(file));
            }
        }
        Ok(Self::Directory(dir))
    }

    /// Get the path of the template directory, if templates come from disk
    pub fn template_path(&self) -> Option<&Path> {
        match self {
            Self::Directory(path) => Some(path),
            Self::Embedded => None,
        }
    }
}
