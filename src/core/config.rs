//! Per-operation regeneration policy.
//!
//! A `config.toml` placed next to a generated `data.json` controls whether a
//! later run may overwrite that test data:
//!
//! ```toml
//! allowOverride = false
//! ```

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::core::error::{Error, Result};

/// File name of the override policy inside `1_noAuth/<DirName>/<method>/`
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Override policy for one operation's generated test data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct RegenConfig {
    /// Whether `data.json` may be regenerated; defaults to `true` when absent
    #[serde(rename = "allowOverride", default = "default_allow_override")]
    pub allow_override: bool,
}

fn default_allow_override() -> bool {
    true
}

impl Default for RegenConfig {
    fn default() -> Self {
        Self {
            allow_override: default_allow_override(),
        }
    }
}

impl RegenConfig {
    /// Load the policy from `dir/config.toml`.
    ///
    /// Returns `Ok(None)` when the file does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or is not valid TOML.
    pub fn load_from_dir(dir: &Path) -> Result<Option<Self>> {
        let config_path = dir.join(CONFIG_FILE_NAME);

        let content = match fs::read_to_string(&config_path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(Error::file_system(&config_path, e)),
        };
        debug!(config_path = %config_path.display(), "Read override config");

        let config = toml::from_str(&content).map_err(|source| Error::Config {
            path: config_path.clone(),
            source,
        })?;

        Ok(Some(config))
    }
}
