//! Project Entity
//!
//! One discovered portfolio project. Records are produced by the loader
//! and never mutated afterwards.

use serde::Serialize;

use crate::domain::value_objects::{Column, MotionHint, ProjectId, ResourceHandle, StyleHint};

/// A gallery project ready for rendering
///
/// Serializes with the field names gallery renderers expect
/// (`image`, `color`, `scrollSpeed`, ...).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRecord {
    id: ProjectId,
    title: String,
    category: String,
    description: String,
    #[serde(rename = "image")]
    cover_image: ResourceHandle,
    images: Vec<ResourceHandle>,
    #[serde(rename = "color")]
    style: StyleHint,
    #[serde(rename = "scrollSpeed")]
    motion: MotionHint,
    overlap: u32,
    column: Column,
}

/// Fields the loader supplies for a new record
pub(crate) struct NewProject {
    pub id: ProjectId,
    pub title: String,
    pub category: String,
    pub description: String,
    pub images: Vec<ResourceHandle>,
    pub style: StyleHint,
}

impl ProjectRecord {
    /// Build a record. `images` must be non-empty and already sorted; the
    /// first image becomes the cover. Motion hint and column follow the id.
    pub(crate) fn new(project: NewProject) -> Option<Self> {
        let cover_image = project.images.first()?.clone();
        Some(Self {
            id: project.id,
            title: project.title,
            category: project.category,
            description: project.description,
            cover_image,
            images: project.images,
            style: project.style,
            motion: MotionHint::for_id(project.id),
            overlap: 0,
            column: Column::for_id(project.id),
        })
    }

    pub fn id(&self) -> ProjectId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn cover_image(&self) -> &ResourceHandle {
        &self.cover_image
    }

    pub fn images(&self) -> &[ResourceHandle] {
        &self.images
    }

    pub fn style(&self) -> StyleHint {
        self.style
    }

    pub fn motion(&self) -> MotionHint {
        self.motion
    }

    pub fn overlap(&self) -> u32 {
        self.overlap
    }

    pub fn column(&self) -> Column {
        self.column
    }
}
