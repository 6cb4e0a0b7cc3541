//! Local File System Implementation
//!
//! Reads and atomically writes published manifests.

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::{FolioError, FolioResult};

/// Local file system access
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl LocalFs {
    pub fn new() -> Self {
        Self
    }

    /// Read a file, or `None` if it does not exist
    pub fn read_if_exists(&self, path: &Path) -> FolioResult<Option<String>> {
        match std::fs::read_to_string(path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Write `content` to `path` through a temp file in the same directory,
    /// creating parent directories as needed. Readers never see a partial
    /// file.
    pub fn write_atomic(&self, path: &Path, content: &str) -> FolioResult<()> {
        let parent = match path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        std::fs::create_dir_all(parent)?;

        let mut tmp = NamedTempFile::new_in(parent)?;
        tmp.write_all(content.as_bytes())?;
        tmp.as_file().sync_all()?;
        tmp.persist(path).map_err(|e| FolioError::Io(e.error))?;
        Ok(())
    }
}
