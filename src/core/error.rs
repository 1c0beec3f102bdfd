//! Error handling for the openapi2runn scaffold generator.
//!
//! This module defines the main error type `Error` used throughout the library,
//! along with a convenient `Result` type alias. Every variant carries enough
//! context (document path, operation, output file) to locate the failure.
//!
//! # Examples
//!
//! ```
//! use openapi2runn::core::error::{Error, Result};
//!
//! fn might_fail() -> Result<()> {
//!     Err(Error::document_load("openapi.yml", "file is empty"))
//! }
//!
//! assert!(might_fail().is_err());
//! ```

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Result type for scaffold generation operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for scaffold generation operations
#[derive(Debug, Error)]
pub enum Error {
    /// The input document could not be read or parsed
    #[error("Failed to load OpenAPI document {}: {reason}", .path.display())]
    DocumentLoad { path: PathBuf, reason: String },

    /// A parameter or body schema has no usable type or a dangling `$ref`
    #[error("Schema resolution error at {location}: {reason}")]
    SchemaResolution { location: String, reason: String },

    /// Directory creation, file creation or write failed
    #[error("File system error at {}: {source}", .path.display())]
    FileSystem {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Template parse or execution failure
    #[error("Template error in {name}: {}", render_chain(.source))]
    Template {
        name: String,
        #[source]
        source: tera::Error,
    },

    /// A required template file is missing from the template directory
    #[error("Template not found: {}", .0.display())]
    TemplateNotFound(PathBuf),

    /// A per-operation `config.toml` could not be decoded
    #[error("Invalid override config {}: {source}", .path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// Synthesized test data could not be encoded
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A path normalizes to a directory name that would leave the output tree
    #[error("Path {path} maps to unusable directory name {dir_name:?}")]
    InvalidDirName { path: String, dir_name: String },

    /// Two distinct OpenAPI paths normalize to the same directory name
    #[error("Paths {first} and {second} both map to directory {dir_name}")]
    DirNameCollision {
        dir_name: String,
        first: String,
        second: String,
    },
}

impl Error {
    /// Create a new document load error
    pub fn document_load<P: AsRef<Path>, S: Into<String>>(path: P, reason: S) -> Self {
        Self::DocumentLoad {
            path: path.as_ref().to_path_buf(),
            reason: reason.into(),
        }
    }

    /// Create a new schema resolution error
    pub fn schema<L: Into<String>, S: Into<String>>(location: L, reason: S) -> Self {
        Self::SchemaResolution {
            location: location.into(),
            reason: reason.into(),
        }
    }

    /// Wrap an I/O error with the path it occurred at
    pub fn file_system<P: AsRef<Path>>(path: P, source: std::io::Error) -> Self {
        Self::FileSystem {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Wrap a tera error with the template it came from
    pub fn template<S: Into<String>>(name: S, source: tera::Error) -> Self {
        Self::Template {
            name: name.into(),
            source,
        }
    }
}

// tera keeps the useful part of parse errors in the source chain.
fn render_chain(err: &tera::Error) -> String {
    let mut message = err.to_string();
    let mut current = std::error::Error::source(err);
    while let Some(cause) = current {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        current = cause.source();
    }
    message
}
