//! Build Use Case
//!
//! Orchestrates the build flow:
//! 1. Snapshot assets from the source
//! 2. Load projects
//! 3. Render the manifest document
//! 4. Write it if the content changed

use std::path::PathBuf;

use crate::domain::ports::AssetSource;
use crate::domain::services::load_projects;
use crate::error::FolioResult;
use crate::infrastructure::LocalFs;

use super::diff::{diff_manifest, DiffOutcome};
use super::manifest::{render_manifest, PublishedManifest};

/// Options for the build operation
#[derive(Debug, Clone)]
pub struct BuildOptions {
    /// Manifest file to write
    pub output: PathBuf,
    /// Pretty-print JSON
    pub pretty: bool,
}

impl BuildOptions {
    pub fn new(output: impl Into<PathBuf>) -> Self {
        Self {
            output: output.into(),
            pretty: true,
        }
    }

    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}

/// Result of a build
#[derive(Debug, Clone)]
pub struct BuildResult {
    pub manifest: PublishedManifest,
    pub output: PathBuf,
    /// False when the file already held identical content
    pub written: bool,
}

/// Use case tying an asset source to the manifest on disk
pub struct BuildUseCase<S: AssetSource> {
    source: S,
    fs: LocalFs,
}

impl<S: AssetSource> BuildUseCase<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            fs: LocalFs::new(),
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Scan, load and render without touching the output file
    pub fn generate(&self, pretty: bool) -> FolioResult<PublishedManifest> {
        let manifest = self.source.load_manifest()?;
        let projects = load_projects(&manifest);
        render_manifest(projects, pretty)
    }

    /// Generate and write the manifest
    pub fn execute(&self, options: &BuildOptions) -> FolioResult<BuildResult> {
        let manifest = self.generate(options.pretty)?;
        let existing = self.fs.read_if_exists(&options.output)?;

        let written = existing.as_deref() != Some(manifest.content.as_str());
        if written {
            self.fs.write_atomic(&options.output, &manifest.content)?;
            tracing::info!(
                path = %options.output.display(),
                projects = manifest.projects.len(),
                fingerprint = %manifest.fingerprint,
                "wrote manifest"
            );
        } else {
            tracing::debug!(path = %options.output.display(), "manifest unchanged");
        }

        Ok(BuildResult {
            manifest,
            output: options.output.clone(),
            written,
        })
    }

    /// Compare a freshly generated manifest with the one on disk
    pub fn diff(&self, options: &BuildOptions) -> FolioResult<(PublishedManifest, DiffOutcome)> {
        let manifest = self.generate(options.pretty)?;
        let existing = self.fs.read_if_exists(&options.output)?;
        let outcome = diff_manifest(
            existing.as_deref(),
            &manifest.content,
            options.output.display().to_string(),
        );
        Ok((manifest, outcome))
    }
}
