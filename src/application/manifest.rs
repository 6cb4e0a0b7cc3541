//! Published manifest document
//!
//! The JSON a gallery renderer reads:
//!
//! ```json
//! {
//!   "version": 1,
//!   "fingerprint": "sha256:…",
//!   "count": 4,
//!   "projects": [ { "id": 1, "title": "ORBIT", … } ],
//!   "columns": [[1, 4], [2], [3]]
//! }
//! ```

use serde::Serialize;

use crate::domain::entities::ProjectRecord;
use crate::domain::services::project_columns;
use crate::domain::value_objects::{ContentHash, ProjectId, COLUMN_COUNT};
use crate::error::FolioResult;

/// Schema version of the published document
pub const MANIFEST_VERSION: u32 = 1;

#[derive(Serialize)]
struct ManifestDocument<'a> {
    version: u32,
    fingerprint: &'a ContentHash,
    count: usize,
    projects: &'a [ProjectRecord],
    columns: [Vec<ProjectId>; COLUMN_COUNT],
}

/// Loaded projects together with their serialized form
#[derive(Debug, Clone)]
pub struct PublishedManifest {
    pub projects: Vec<ProjectRecord>,
    /// SHA-256 of the compact `projects` array
    pub fingerprint: ContentHash,
    /// Full document text, newline terminated
    pub content: String,
}

/// Serialize projects into the manifest document.
pub fn render_manifest(projects: Vec<ProjectRecord>, pretty: bool) -> FolioResult<PublishedManifest> {
    let fingerprint = ContentHash::from_content(&serde_json::to_string(&projects)?);
    let columns: [Vec<ProjectId>; COLUMN_COUNT] =
        project_columns(&projects).map(|lane| lane.iter().map(|p| p.id()).collect());

    let document = ManifestDocument {
        version: MANIFEST_VERSION,
        fingerprint: &fingerprint,
        count: projects.len(),
        projects: &projects,
        columns,
    };
    let mut content = if pretty {
        serde_json::to_string_pretty(&document)?
    } else {
        serde_json::to_string(&document)?
    };
    content.push('\n');

    Ok(PublishedManifest {
        projects,
        fingerprint,
        content,
    })
}
