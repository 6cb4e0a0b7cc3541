//! `.folioignore` contracts.

use std::fs;
use std::path::Path;

use folio::{load_projects, AssetSource, FolioError, FsAssetScanner};
use tempfile::tempdir;

fn write(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

/// CONTRACT: ignored images never become projects or cover images.
#[test]
fn contract_ignored_images_are_invisible() {
    let dir = tempdir().unwrap();
    write(dir.path(), ".folioignore", "*.raw.jpg\narchive/\n");
    write(dir.path(), "set/a.raw.jpg", "x");
    write(dir.path(), "set/b.jpg", "x");
    write(dir.path(), "archive/old.jpg", "x");

    let manifest = FsAssetScanner::new(dir.path(), "assets/projects")
        .load_manifest()
        .unwrap();
    let projects = load_projects(&manifest);
    assert_eq!(projects.len(), 1);
    assert_eq!(projects[0].cover_image().as_str(), "/assets/projects/set/b.jpg");
}

/// CONTRACT: a folder whose images are all ignored yields no project.
#[test]
fn contract_fully_ignored_folder_disappears() {
    let dir = tempdir().unwrap();
    write(dir.path(), ".folioignore", "set/*.jpg\n");
    write(dir.path(), "set/a.jpg", "x");
    write(dir.path(), "set/set.txt", "Desc");

    let manifest = FsAssetScanner::new(dir.path(), "assets/projects")
        .load_manifest()
        .unwrap();
    assert!(load_projects(&manifest).is_empty());
}

/// CONTRACT: oversized ignore files are rejected, not truncated.
#[test]
fn contract_oversized_ignore_file_errors() {
    let dir = tempdir().unwrap();
    let content = "x.jpg\n".repeat(1001);
    write(dir.path(), ".folioignore", &content);
    write(dir.path(), "a.jpg", "x");

    let result = FsAssetScanner::new(dir.path(), "assets/projects").load_manifest();
    assert!(matches!(result, Err(FolioError::Ignore { .. })));
}
