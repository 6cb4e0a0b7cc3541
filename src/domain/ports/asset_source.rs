//! AssetSource port - abstraction for discovering project assets
//!
//! The loader never touches the file system. Whatever produces the
//! manifest (a directory scan, a bundler, a test fixture) implements this.

use crate::domain::entities::AssetManifest;
use crate::error::FolioResult;

/// Something that can enumerate project assets into a manifest
pub trait AssetSource {
    /// Snapshot the current asset set
    fn load_manifest(&self) -> FolioResult<AssetManifest>;
}

impl AssetSource for AssetManifest {
    fn load_manifest(&self) -> FolioResult<AssetManifest> {
        Ok(self.clone())
    }
}
