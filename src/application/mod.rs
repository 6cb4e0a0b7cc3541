//! Application Layer
//!
//! Use cases orchestrating domain services and infrastructure.

pub mod build;
pub mod diff;
pub mod manifest;

pub use build::{BuildOptions, BuildResult, BuildUseCase};
pub use diff::{diff_manifest, DiffOutcome};
pub use manifest::{render_manifest, PublishedManifest, MANIFEST_VERSION};
