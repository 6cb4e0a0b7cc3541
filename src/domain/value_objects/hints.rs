//! Layout and cosmetic hints derived from a project id
//!
//! Every value here is a pure function of the id. Nothing is remembered
//! between loads.

use std::fmt;

use serde::Serialize;

/// Gradient classes cycled through by id
pub const STYLE_PALETTE: [&str; 8] = [
    "from-purple-600/40 to-blue-600/40",
    "from-cyan-600/40 to-teal-600/40",
    "from-orange-600/40 to-red-600/40",
    "from-pink-600/40 to-rose-600/40",
    "from-emerald-600/40 to-green-600/40",
    "from-indigo-600/40 to-violet-600/40",
    "from-amber-600/40 to-yellow-600/40",
    "from-sky-600/40 to-blue-600/40",
];

/// Gradient reserved for the pinned folder
pub const PINNED_STYLE: &str = "from-yellow-300/70 to-pink-300/70";

/// Folder name (compared lower-cased) that always receives [`PINNED_STYLE`]
pub const PINNED_STYLE_FOLDER: &str = "no sense of time";

/// Parallax speeds cycled through by id
pub const MOTION_PALETTE: [f64; 8] = [0.8, 1.2, 0.6, 1.0, 0.7, 1.3, 0.9, 1.1];

/// Number of masonry lanes
pub const COLUMN_COUNT: usize = 3;

/// 1-based project identity, assigned in discovery order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct ProjectId(u32);

impl ProjectId {
    pub fn first() -> Self {
        Self(1)
    }

    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }

    pub fn get(self) -> u32 {
        self.0
    }

    /// Zero-based position of this id in a cycle of `len` entries
    fn slot(self, len: usize) -> usize {
        (self.0 as usize - 1) % len
    }
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Gradient selector for a card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct StyleHint(&'static str);

impl StyleHint {
    pub fn for_id(id: ProjectId) -> Self {
        Self(STYLE_PALETTE[id.slot(STYLE_PALETTE.len())])
    }

    /// Style for a grouped project, honouring the pinned folder
    pub fn for_folder(id: ProjectId, folder: &str) -> Self {
        if folder.to_lowercase() == PINNED_STYLE_FOLDER {
            Self::pinned()
        } else {
            Self::for_id(id)
        }
    }

    pub fn pinned() -> Self {
        Self(PINNED_STYLE)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

/// Parallax speed for a card
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(transparent)]
pub struct MotionHint(f64);

impl MotionHint {
    pub fn for_id(id: ProjectId) -> Self {
        Self(MOTION_PALETTE[id.slot(MOTION_PALETTE.len())])
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

/// Masonry lane index in `0..COLUMN_COUNT`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Column(u8);

impl Column {
    pub fn for_id(id: ProjectId) -> Self {
        Self(id.slot(COLUMN_COUNT) as u8)
    }

    pub fn index(&self) -> usize {
        self.0 as usize
    }
}
