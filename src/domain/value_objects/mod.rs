//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

pub mod asset_path;
mod hash;
mod hints;
mod resource;

pub use asset_path::{AssetKind, AssetLocation, AssetPath};
pub use hash::ContentHash;
pub use hints::{
    Column, MotionHint, ProjectId, StyleHint, COLUMN_COUNT, MOTION_PALETTE, PINNED_STYLE,
    PINNED_STYLE_FOLDER, STYLE_PALETTE,
};
pub use resource::ResourceHandle;
