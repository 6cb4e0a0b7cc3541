//! Asset Manifest Entity
//!
//! The four path-keyed mappings the project loader consumes: flat images,
//! grouped images, flat description texts and grouped description texts.
//! Image mappings keep insertion order because discovery order decides ids.

use std::collections::BTreeMap;

use crate::domain::value_objects::asset_path::normalize_prefix;
use crate::domain::value_objects::{AssetKind, AssetLocation, AssetPath, ResourceHandle};
use crate::error::{FolioError, FolioResult};

/// An image entry: its validated path and the handle renderers load
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageEntry {
    pub path: AssetPath,
    pub handle: ResourceHandle,
}

/// Build-time snapshot of the project asset tree
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssetManifest {
    prefix: String,
    flat_images: Vec<ImageEntry>,
    grouped_images: Vec<ImageEntry>,
    flat_texts: BTreeMap<String, String>,
    grouped_texts: BTreeMap<String, String>,
}

impl AssetManifest {
    /// Create an empty manifest whose keys live under `prefix`
    pub fn new(prefix: &str) -> Self {
        Self {
            prefix: normalize_prefix(prefix),
            ..Self::default()
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Add an image. Re-adding a path replaces its handle in place.
    pub fn add_image(
        &mut self,
        path: &str,
        handle: impl Into<ResourceHandle>,
    ) -> FolioResult<()> {
        let path = AssetPath::parse(&self.prefix, path)?;
        if path.kind() != AssetKind::Image {
            return Err(FolioError::MalformedAssetPath {
                path: path.to_string(),
                reason: "not an image".to_string(),
            });
        }

        let entries = match path.location() {
            AssetLocation::Flat => &mut self.flat_images,
            AssetLocation::Grouped { .. } => &mut self.grouped_images,
        };
        let handle = handle.into();
        match entries.iter_mut().find(|e| e.path == path) {
            Some(existing) => existing.handle = handle,
            None => entries.push(ImageEntry { path, handle }),
        }
        Ok(())
    }

    /// Add a description text
    pub fn add_text(&mut self, path: &str, content: impl Into<String>) -> FolioResult<()> {
        let path = AssetPath::parse(&self.prefix, path)?;
        if path.kind() != AssetKind::Description {
            return Err(FolioError::MalformedAssetPath {
                path: path.to_string(),
                reason: "not a description file".to_string(),
            });
        }

        let texts = match path.location() {
            AssetLocation::Flat => &mut self.flat_texts,
            AssetLocation::Grouped { .. } => &mut self.grouped_texts,
        };
        texts.insert(path.as_str().to_string(), content.into());
        Ok(())
    }

    /// Builder form of [`add_image`](Self::add_image)
    pub fn with_image(mut self, path: &str, handle: impl Into<ResourceHandle>) -> FolioResult<Self> {
        self.add_image(path, handle)?;
        Ok(self)
    }

    /// Builder form of [`add_text`](Self::add_text)
    pub fn with_text(mut self, path: &str, content: impl Into<String>) -> FolioResult<Self> {
        self.add_text(path, content)?;
        Ok(self)
    }

    pub fn flat_images(&self) -> &[ImageEntry] {
        &self.flat_images
    }

    pub fn grouped_images(&self) -> &[ImageEntry] {
        &self.grouped_images
    }

    pub fn flat_text(&self, key: &str) -> Option<&str> {
        self.flat_texts.get(key).map(String::as_str)
    }

    pub fn grouped_text(&self, key: &str) -> Option<&str> {
        self.grouped_texts.get(key).map(String::as_str)
    }

    pub fn image_count(&self) -> usize {
        self.flat_images.len() + self.grouped_images.len()
    }

    pub fn text_count(&self) -> usize {
        self.flat_texts.len() + self.grouped_texts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.image_count() == 0 && self.text_count() == 0
    }
}
