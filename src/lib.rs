//! Folio - portfolio project loader
//!
//! Folio turns a folder of project images and plain-text descriptions into
//! ordered gallery records: display titles, categories, stable ids and the
//! style, motion and column hints a masonry renderer needs.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;
pub mod watcher;

// Re-exports for convenience
pub use application::{BuildOptions, BuildResult, BuildUseCase, DiffOutcome, PublishedManifest};
pub use config::Config;
pub use domain::entities::{AssetManifest, ImageEntry, ProjectRecord};
pub use domain::ports::AssetSource;
pub use domain::services::{
    filename_to_title, load_projects, parse_description_file, project_columns, ParsedDescription,
    ProjectColumns,
};
pub use error::{FolioError, FolioResult};
pub use infrastructure::FsAssetScanner;
pub use watcher::{watch, WatchEvent, WatchOptions};
