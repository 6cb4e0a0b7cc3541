//! Manifest staleness check

use similar::TextDiff;

/// How the manifest on disk compares with a fresh build
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiffOutcome {
    /// Byte-identical
    UpToDate,
    /// No manifest on disk yet
    Missing,
    /// Contents differ; `diff` is a unified diff from disk to fresh
    Stale { diff: String },
}

impl DiffOutcome {
    pub fn is_up_to_date(&self) -> bool {
        matches!(self, DiffOutcome::UpToDate)
    }
}

/// Compare `existing` (the file at `path`, if any) with `fresh`.
pub fn diff_manifest(existing: Option<&str>, fresh: &str, path: impl AsRef<str>) -> DiffOutcome {
    let Some(existing) = existing else {
        return DiffOutcome::Missing;
    };
    if existing == fresh {
        return DiffOutcome::UpToDate;
    }

    let path = path.as_ref();
    let diff = TextDiff::from_lines(existing, fresh)
        .unified_diff()
        .header(&format!("a/{}", path), &format!("b/{}", path))
        .to_string();
    DiffOutcome::Stale { diff }
}
