//! Core types for the generation domain

use std::path::{Path, PathBuf};

/// Root of the base request definitions inside the output directory
pub const BASE_DIR: &str = "0_base";

/// Root of the no-auth scenarios and their test data
pub const NO_AUTH_DIR: &str = "1_noAuth";

/// Resolved run settings handed to the orchestrator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationOptions {
    /// Output directory root
    pub output_dir: PathBuf,
    /// Server base URL injected as `host`
    pub host: String,
}

impl GenerationOptions {
    pub fn new(output_dir: impl Into<PathBuf>, host: impl Into<String>) -> Self {
        Self {
            output_dir: output_dir.into(),
            host: host.into(),
        }
    }

    /// `<output>/0_base/<dir_name>/<method>`
    pub fn base_dir(&self, dir_name: &str, method: &str) -> PathBuf {
        operation_dir(&self.output_dir, BASE_DIR, dir_name, method)
    }

    /// `<output>/1_noAuth/<dir_name>/<method>`
    pub fn no_auth_dir(&self, dir_name: &str, method: &str) -> PathBuf {
        operation_dir(&self.output_dir, NO_AUTH_DIR, dir_name, method)
    }
}

fn operation_dir(root: &Path, tree: &str, dir_name: &str, method: &str) -> PathBuf {
    root.join(tree).join(dir_name).join(method)
}

/// Summary of one generation run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenerationReport {
    /// Path/method pairs rendered
    pub operations: usize,
    /// `data.json` files (re)written
    pub data_written: usize,
    /// `data.json` files left untouched because `allowOverride = false`
    pub data_preserved: usize,
}
