//! Asset path value object
//!
//! Classifies a manifest key as a flat (`<prefix>/<name>.<ext>`) or grouped
//! (`<prefix>/<folder>/<file>.<ext>`) entry. Paths are forward-slash
//! delimited regardless of platform.

use std::fmt;

use crate::error::{FolioError, FolioResult};

/// Image extensions recognised as project images (case-sensitive)
pub const IMAGE_EXTENSIONS: [&str; 6] = ["jpg", "jpeg", "png", "gif", "webp", "avif"];

/// Extension of description files
pub const DESCRIPTION_EXTENSION: &str = "txt";

/// Default manifest prefix
pub const DEFAULT_PREFIX: &str = "assets/projects";

/// Whether `ext` is a supported image extension
pub fn is_image_extension(ext: &str) -> bool {
    IMAGE_EXTENSIONS.contains(&ext)
}

/// What a manifest entry holds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
    Image,
    Description,
}

/// Where a manifest entry sits relative to the prefix
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetLocation {
    /// Directly under the prefix
    Flat,
    /// One folder below the prefix
    Grouped { folder: String },
}

/// A validated manifest key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetPath {
    raw: String,
    location: AssetLocation,
    file_name: String,
    kind: AssetKind,
}

impl AssetPath {
    /// Parse `raw` as a key under `prefix`.
    pub fn parse(prefix: &str, raw: &str) -> FolioResult<Self> {
        let prefix = normalize_prefix(prefix);
        let rest = if prefix.is_empty() {
            raw
        } else {
            raw.strip_prefix(prefix.as_str())
                .and_then(|r| r.strip_prefix('/'))
                .ok_or_else(|| malformed(raw, format!("not under '{}'", prefix)))?
        };

        let segments: Vec<&str> = rest.split('/').collect();
        if segments.iter().any(|s| s.is_empty()) {
            return Err(malformed(raw, "empty path segment"));
        }

        let (location, file_name) = match segments.as_slice() {
            [file] => (AssetLocation::Flat, *file),
            [folder, file] => (
                AssetLocation::Grouped {
                    folder: (*folder).to_string(),
                },
                *file,
            ),
            _ => return Err(malformed(raw, "nested deeper than one folder")),
        };

        let kind = match extension(file_name) {
            Some(ext) if is_image_extension(ext) => AssetKind::Image,
            Some(DESCRIPTION_EXTENSION) => AssetKind::Description,
            Some(ext) => return Err(malformed(raw, format!("unsupported extension '{}'", ext))),
            None => return Err(malformed(raw, "missing file extension")),
        };

        Ok(Self {
            raw: raw.to_string(),
            location,
            file_name: file_name.to_string(),
            kind,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn kind(&self) -> AssetKind {
        self.kind
    }

    pub fn location(&self) -> &AssetLocation {
        &self.location
    }

    /// Folder name for grouped entries
    pub fn folder(&self) -> Option<&str> {
        match &self.location {
            AssetLocation::Grouped { folder } => Some(folder),
            AssetLocation::Flat => None,
        }
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// File name with its last extension removed
    pub fn stem(&self) -> &str {
        strip_last_extension(&self.file_name)
    }
}

impl fmt::Display for AssetPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// Key of the description file for a grouped project: `<prefix>/<folder>/<folder>.txt`
pub fn grouped_description_key(prefix: &str, folder: &str) -> String {
    join_key(prefix, &format!("{folder}/{folder}.{DESCRIPTION_EXTENSION}"))
}

/// Key of the description file for a flat project: `<prefix>/<name>.txt`
pub fn flat_description_key(prefix: &str, stem: &str) -> String {
    join_key(prefix, &format!("{stem}.{DESCRIPTION_EXTENSION}"))
}

/// Join a relative path onto the prefix with a single `/`
pub fn join_key(prefix: &str, relative: &str) -> String {
    let prefix = normalize_prefix(prefix);
    if prefix.is_empty() {
        relative.to_string()
    } else {
        format!("{}/{}", prefix, relative)
    }
}

/// Strip leading and trailing slashes
pub fn normalize_prefix(prefix: &str) -> String {
    prefix.trim_matches('/').to_string()
}

fn extension(file_name: &str) -> Option<&str> {
    file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext)
        .filter(|ext| !ext.is_empty())
}

fn strip_last_extension(file_name: &str) -> &str {
    match file_name.rsplit_once('.') {
        Some((stem, ext)) if !ext.is_empty() => stem,
        _ => file_name,
    }
}

fn malformed(raw: &str, reason: impl Into<String>) -> FolioError {
    FolioError::MalformedAssetPath {
        path: raw.to_string(),
        reason: reason.into(),
    }
}
