//! Loaded template sources

use std::fs;

use tracing::debug;

use super::{TemplateDir, TemplateKind, embedded_template};
use crate::core::error::{Error, Result};

/// Raw source text of the three scaffold templates
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateSet {
    base: String,
    no_auth: String,
    data: String,
}

impl TemplateSet {
    /// Build a set from explicit sources
    pub fn new(base: impl Into<String>, no_auth: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            no_auth: no_auth.into(),
            data: data.into(),
        }
    }

    /// The defaults compiled into the binary
    pub fn embedded() -> Result<Self> {
        Ok(Self::new(
            embedded_template(TemplateKind::Base)?,
            embedded_template(TemplateKind::NoAuth)?,
            embedded_template(TemplateKind::Data)?,
        ))
    }

    /// Read every template from the resolved location
    pub fn load(dir: &TemplateDir) -> Result<Self> {
        let path = match dir {
            TemplateDir::Embedded => return Self::embedded(),
            TemplateDir::Directory(path) => path,
        };

        let read = |kind: TemplateKind| -> Result<String> {
            let file = path.join(kind.file_name());
            debug!(template = %file.display(), "Reading template");
            fs::read_to_string(&file).map_err(|e| match e.kind() {
                std::io::ErrorKind::NotFound => Error::TemplateNotFound(file.clone()),
                _ => Error::file_system(&file, e),
            })
        };

        Ok(Self {
            base: read(TemplateKind::Base)?,
            no_auth: read(TemplateKind::NoAuth)?,
            data: read(TemplateKind::Data)?,
        })
    }

    /// Source of one template
    pub fn source(&self, kind: TemplateKind) -> &str {
        match kind {
            TemplateKind::Base => &self.base,
            TemplateKind::NoAuth => &self.no_auth,
            TemplateKind::Data => &self.data,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_load_from_directory() {
        let temp = tempdir().unwrap();
        for kind in TemplateKind::all() {
            fs::write(temp.path().join(kind.file_name()), kind.file_name()).unwrap();
        }

        let set = TemplateSet::load(&TemplateDir::Directory(temp.path().to_path_buf())).unwrap();

        for kind in TemplateKind::all() {
            assert_eq!(set.source(kind), kind.file_name());
        }
    }

    #[test]
    fn test_load_missing_file() {
        let temp = tempdir().unwrap();
        let result = TemplateSet::load(&TemplateDir::Directory(temp.path().to_path_buf()));
        assert!(matches!(result, Err(Error::TemplateNotFound(_))));
    }

    #[test]
    fn test_load_embedded() {
        let set = TemplateSet::load(&TemplateDir::Embedded).unwrap();
        assert_eq!(set, TemplateSet::embedded().unwrap());
    }
}
