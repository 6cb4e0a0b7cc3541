//! Domain Entities

mod manifest;
mod project;

pub use manifest::{AssetManifest, ImageEntry};
pub use project::ProjectRecord;
pub(crate) use project::NewProject;
