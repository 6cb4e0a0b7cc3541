//! `.folioignore` patterns
//!
//! Gitignore-syntax exclusions read from the asset root. Matching uses the
//! `ignore` crate.

use ignore::gitignore::{Gitignore, GitignoreBuilder};
use std::fs;
use std::path::Path;

use crate::error::{FolioError, FolioResult};

/// Name of the ignore file in the asset root
pub const IGNORE_FILE: &str = ".folioignore";

/// Maximum file size for `.folioignore` (64KB)
const MAX_FILE_SIZE: u64 = 65536;

/// Maximum number of patterns allowed
const MAX_PATTERNS: usize = 1000;

/// Patterns loaded from a `.folioignore` file.
#[derive(Debug)]
pub struct IgnorePatterns {
    matcher: Gitignore,
    pattern_count: usize,
}

impl Default for IgnorePatterns {
    fn default() -> Self {
        Self::empty()
    }
}

impl IgnorePatterns {
    /// A pattern set that matches nothing.
    pub fn empty() -> Self {
        Self {
            matcher: Gitignore::empty(),
            pattern_count: 0,
        }
    }

    /// Load `.folioignore` from `root`. A missing file yields an empty set.
    pub fn load(root: &Path) -> FolioResult<Self> {
        let ignore_path = root.join(IGNORE_FILE);

        if !ignore_path.is_file() {
            return Ok(Self::empty());
        }

        let metadata = fs::metadata(&ignore_path)?;
        if metadata.len() > MAX_FILE_SIZE {
            return Err(FolioError::Ignore {
                file: ignore_path,
                message: format!(
                    "exceeds {}KB limit ({} bytes)",
                    MAX_FILE_SIZE / 1024,
                    metadata.len()
                ),
            });
        }

        let content = fs::read_to_string(&ignore_path)?;
        Self::from_content(root, &ignore_path, &content)
    }

    /// Parse patterns from string content.
    pub fn from_content(root: &Path, source_path: &Path, content: &str) -> FolioResult<Self> {
        let mut builder = GitignoreBuilder::new(root);
        let mut pattern_count = 0;

        for (line_num, line) in content.lines().enumerate() {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }

            pattern_count += 1;
            if pattern_count > MAX_PATTERNS {
                return Err(FolioError::Ignore {
                    file: source_path.to_path_buf(),
                    message: format!("more than {} patterns", MAX_PATTERNS),
                });
            }

            if let Err(e) = builder.add_line(Some(source_path.to_path_buf()), line) {
                return Err(FolioError::Ignore {
                    file: source_path.to_path_buf(),
                    message: format!("line {}: '{}' - {}", line_num + 1, line, e),
                });
            }
        }

        let matcher = builder.build().map_err(|e| FolioError::Ignore {
            file: source_path.to_path_buf(),
            message: e.to_string(),
        })?;

        Ok(Self {
            matcher,
            pattern_count,
        })
    }

    /// Check a path relative to the asset root.
    pub fn is_ignored(&self, rel_path: &Path, is_dir: bool) -> bool {
        self.matcher
            .matched_path_or_any_parents(rel_path, is_dir)
            .is_ignore()
    }

    pub fn pattern_count(&self) -> usize {
        self.pattern_count
    }

    pub fn is_empty(&self) -> bool {
        self.pattern_count == 0
    }
}
