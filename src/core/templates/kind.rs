//! Template kinds consumed by the scaffold generator.
//!
//! Each operation in the OpenAPI document is rendered through three templates:
//!
//! ```
//! use openapi2runn::core::templates::TemplateKind;
//!
//! assert_eq!(TemplateKind::Base.file_name(), "base.yml.template");
//! assert_eq!(TemplateKind::NoAuth.file_name(), "index.yml.template");
//! assert_eq!(TemplateKind::Data.file_name(), "data.json.template");
//! ```

use std::fmt;

/// The three templates that make up one operation's scaffold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateKind {
    /// Base request definition, rendered to `0_base/<DirName>/<method>/base.yml`
    Base,
    /// No-auth scenario, rendered to `1_noAuth/<DirName>/<method>/base.yml`
    NoAuth,
    /// Test data, rendered to `1_noAuth/<DirName>/<method>/data.json`
    Data,
}

impl TemplateKind {
    /// Returns the template file name inside a template directory
    pub fn file_name(&self) -> &'static str {
        match self {
            Self::Base => "base.yml.template",
            Self::NoAuth => "index.yml.template",
            Self::Data => "data.json.template",
        }
    }

    /// Returns the name of the file this template renders into
    pub fn output_file_name(&self) -> &'static str {
        match self {
            Self::Base | Self::NoAuth => "base.yml",
            Self::Data => "data.json",
        }
    }

    /// Returns an iterator over all template kinds
    pub fn all() -> impl Iterator<Item = Self> {
        use TemplateKind::*;
        [Base, NoAuth, Data].iter().copied()
    }
}

impl fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.file_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_kinds_have_distinct_file_names() {
        let names: std::collections::HashSet<_> =
            TemplateKind::all().map(|k| k.file_name()).collect();
        assert_eq!(names.len(), 3);
    }

    #[test]
    fn test_output_file_names() {
        assert_eq!(TemplateKind::Base.output_file_name(), "base.yml");
        assert_eq!(TemplateKind::NoAuth.output_file_name(), "base.yml");
        assert_eq!(TemplateKind::Data.output_file_name(), "data.json");
    }

    #[test]
    fn test_display_uses_file_name() {
        assert_eq!(TemplateKind::NoAuth.to_string(), "index.yml.template");
    }
}
