//! Project Loader
//!
//! Turns an [`AssetManifest`] into the ordered project list and its
//! three-lane column view.
//!
//! ## Ordering
//!
//! 1. Grouped projects, one per folder, in the order each folder's first
//!    image appears in the manifest.
//! 2. Flat projects, one per image, in manifest order.
//!
//! Ids are assigned densely from 1 across both passes. Within a folder,
//! images are sorted by full path and the first becomes the cover.

use std::collections::HashSet;

use crate::domain::entities::{AssetManifest, ImageEntry, NewProject, ProjectRecord};
use crate::domain::value_objects::asset_path::{flat_description_key, grouped_description_key};
use crate::domain::value_objects::{ProjectId, ResourceHandle, StyleHint, COLUMN_COUNT};

use super::description::parse_description_file;
use super::title::filename_to_title;

/// Projects split into masonry lanes, each lane in project order
pub type ProjectColumns<'a> = [Vec<&'a ProjectRecord>; COLUMN_COUNT];

/// Load every project described by `manifest`.
///
/// Pure and deterministic: identical manifests give identical output.
pub fn load_projects(manifest: &AssetManifest) -> Vec<ProjectRecord> {
    let mut projects = Vec::new();
    let mut id = ProjectId::first();

    for (folder, mut entries) in group_by_folder(manifest.grouped_images()) {
        entries.sort_by(|a, b| a.path.as_str().cmp(b.path.as_str()));
        let images: Vec<ResourceHandle> = entries.iter().map(|e| e.handle.clone()).collect();

        let text_key = grouped_description_key(manifest.prefix(), folder);
        let parsed = parse_description_file(manifest.grouped_text(&text_key));
        tracing::trace!(folder, images = images.len(), "grouped project");

        let record = ProjectRecord::new(NewProject {
            id,
            title: filename_to_title(folder),
            category: parsed.category,
            description: parsed.description,
            images,
            style: StyleHint::for_folder(id, folder),
        });
        if let Some(record) = record {
            projects.push(record);
            id = id.next();
        }
    }

    for entry in manifest.flat_images() {
        let stem = entry.path.stem();
        let text_key = flat_description_key(manifest.prefix(), stem);
        let parsed = parse_description_file(manifest.flat_text(&text_key));
        tracing::trace!(stem, "flat project");

        let record = ProjectRecord::new(NewProject {
            id,
            title: filename_to_title(stem),
            category: parsed.category,
            description: parsed.description,
            images: vec![entry.handle.clone()],
            style: StyleHint::for_id(id),
        });
        if let Some(record) = record {
            projects.push(record);
            id = id.next();
        }
    }

    tracing::debug!(count = projects.len(), "loaded projects");
    projects
}

/// Partition projects into lanes by their column, keeping relative order.
pub fn project_columns(projects: &[ProjectRecord]) -> ProjectColumns<'_> {
    let mut columns: ProjectColumns<'_> = Default::default();
    for project in projects {
        columns[project.column().index()].push(project);
    }
    columns
}

/// Folders in first-encounter order, each with all of its entries
fn group_by_folder(entries: &[ImageEntry]) -> Vec<(&str, Vec<&ImageEntry>)> {
    let mut seen = HashSet::new();
    let mut groups = Vec::new();

    for entry in entries {
        let Some(folder) = entry.path.folder() else {
            continue;
        };
        if !seen.insert(folder) {
            continue;
        }
        let members = entries
            .iter()
            .filter(|e| e.path.folder() == Some(folder))
            .collect();
        groups.push((folder, members));
    }

    groups
}
