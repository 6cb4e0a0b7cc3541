//! File System Asset Scanner
//!
//! Walks the asset root and builds the [`AssetManifest`] the loader
//! consumes:
//!
//! ```text
//! src/assets/projects/
//!   solo-shot.jpg          flat image
//!   solo-shot.txt          flat description
//!   orbit/
//!     01-cover.png         grouped image
//!     02-detail.webp       grouped image
//!     orbit.txt            grouped description
//! ```
//!
//! Hidden entries and anything matched by `.folioignore` are skipped.
//! Files more than one folder deep are never visited.

use std::fs;
use std::path::{Component, Path, PathBuf};

use crate::config::AssetsConfig;
use crate::domain::entities::AssetManifest;
use crate::domain::ports::AssetSource;
use crate::domain::value_objects::asset_path::{
    is_image_extension, join_key, normalize_prefix, DESCRIPTION_EXTENSION,
};
use crate::error::{FolioError, FolioResult};

use super::ignore::IgnorePatterns;

/// Files live at most one folder below the root
const MAX_DEPTH: usize = 2;

/// Asset source backed by a directory on disk
#[derive(Debug, Clone)]
pub struct FsAssetScanner {
    root: PathBuf,
    prefix: String,
    public_base: String,
}

impl FsAssetScanner {
    pub fn new(root: impl Into<PathBuf>, prefix: &str) -> Self {
        Self {
            root: root.into(),
            prefix: normalize_prefix(prefix),
            public_base: "/".to_string(),
        }
    }

    /// Scanner for the configured asset root
    pub fn from_config(assets: &AssetsConfig) -> Self {
        Self::new(assets.source.clone(), &assets.prefix).with_public_base(&assets.public_base)
    }

    /// Prefix prepended to manifest keys to form resource handles
    pub fn with_public_base(mut self, base: &str) -> Self {
        self.public_base = base.to_string();
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn handle_for(&self, key: &str) -> String {
        if self.public_base.is_empty() {
            key.to_string()
        } else if self.public_base.ends_with('/') {
            format!("{}{}", self.public_base, key)
        } else {
            format!("{}/{}", self.public_base, key)
        }
    }

    /// Relative paths of all candidate files, sorted
    fn collect_files(&self) -> FolioResult<Vec<String>> {
        let ignore = IgnorePatterns::load(&self.root)?;
        let mut files = Vec::new();
        self.collect_recursive(&self.root, 1, &ignore, &mut files)?;

        // Sort for deterministic discovery order
        files.sort();
        Ok(files)
    }

    fn collect_recursive(
        &self,
        current: &Path,
        depth: usize,
        ignore: &IgnorePatterns,
        files: &mut Vec<String>,
    ) -> FolioResult<()> {
        for entry in fs::read_dir(current)? {
            let entry = entry?;
            let path = entry.path();
            if is_hidden(&path) {
                continue;
            }

            let Ok(rel) = path.strip_prefix(&self.root) else {
                continue;
            };
            let is_dir = path.is_dir();
            if ignore.is_ignored(rel, is_dir) {
                tracing::debug!(path = %rel.display(), "ignored by {}", super::ignore::IGNORE_FILE);
                continue;
            }

            if is_dir {
                if depth < MAX_DEPTH {
                    self.collect_recursive(&path, depth + 1, ignore, files)?;
                } else {
                    tracing::debug!(path = %rel.display(), "folder too deep, skipping");
                }
                continue;
            }

            match to_key_path(rel) {
                Some(key) => files.push(key),
                None => tracing::warn!(path = %rel.display(), "skipping non UTF-8 path"),
            }
        }
        Ok(())
    }
}

impl AssetSource for FsAssetScanner {
    fn load_manifest(&self) -> FolioResult<AssetManifest> {
        if !self.root.is_dir() {
            return Err(FolioError::AssetRootNotFound {
                path: self.root.clone(),
            });
        }

        let mut manifest = AssetManifest::new(&self.prefix);
        for rel in self.collect_files()? {
            let key = join_key(&self.prefix, &rel);
            match rel.rsplit_once('.').map(|(_, ext)| ext) {
                Some(ext) if is_image_extension(ext) => {
                    let handle = self.handle_for(&key);
                    manifest.add_image(&key, handle)?;
                }
                Some(DESCRIPTION_EXTENSION) => {
                    let bytes = fs::read(self.root.join(&rel))?;
                    manifest.add_text(&key, String::from_utf8_lossy(&bytes).into_owned())?;
                }
                _ => tracing::debug!(path = %rel, "not a project asset"),
            }
        }

        tracing::info!(
            root = %self.root.display(),
            images = manifest.image_count(),
            texts = manifest.text_count(),
            "scanned assets"
        );
        Ok(manifest)
    }
}

/// Hidden files and folders start with a dot
pub(crate) fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|n| n.starts_with('.'))
}

/// Join path components with `/`, or `None` for non UTF-8 names
fn to_key_path(rel: &Path) -> Option<String> {
    let parts: Option<Vec<&str>> = rel
        .components()
        .map(|c| match c {
            Component::Normal(s) => s.to_str(),
            _ => None,
        })
        .collect();
    parts.map(|p| p.join("/"))
}
