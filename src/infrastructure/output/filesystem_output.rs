//! Filesystem-based output service implementation

use std::fs;
use std::io::Write;
use std::path::Path;

use tracing::debug;

use crate::core::error::{Error, Result};

/// Output service that writes rendered scaffold files to the filesystem
pub struct FileSystemOutputService;

impl FileSystemOutputService {
    pub fn new() -> Self {
        Self
    }

    /// Create `path` and any missing parents; existing directories are fine
    pub fn ensure_directory(&self, path: &Path) -> Result<()> {
        fs::create_dir_all(path).map_err(|e| Error::file_system(path, e))
    }

    /// Create or truncate `path` and write `content` to it.
    ///
    /// The handle is flushed and closed before this returns.
    pub fn write_file(&self, path: &Path, content: &str) -> Result<()> {
        let mut file = fs::File::create(path).map_err(|e| Error::file_system(path, e))?;

        file.write_all(content.as_bytes())
            .map_err(|e| Error::file_system(path, e))?;
        file.flush().map_err(|e| Error::file_system(path, e))?;

        debug!(path = %path.display(), bytes = content.len(), "Wrote file");
        Ok(())
    }
}

impl Default for FileSystemOutputService {
    fn default() -> Self {
        Self::new()
    }
}
