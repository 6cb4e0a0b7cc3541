//! Description lookup contracts.

use std::fs;
use std::path::Path;

use folio::{load_projects, AssetSource, FsAssetScanner};
use tempfile::tempdir;

fn write(root: &Path, rel: &str, content: &[u8]) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

/// CONTRACT: a grouped project only reads `<folder>/<folder>.txt`.
#[test]
fn contract_grouped_description_is_named_after_folder() {
    let dir = tempdir().unwrap();
    write(dir.path(), "orbit/a.jpg", b"x");
    write(dir.path(), "orbit/readme.txt", b"Wrong\nwrong");
    write(dir.path(), "orbit.txt", b"Also wrong");

    let manifest = FsAssetScanner::new(dir.path(), "assets/projects")
        .load_manifest()
        .unwrap();
    let projects = load_projects(&manifest);
    assert_eq!(projects[0].category(), "Project");
    assert_eq!(projects[0].description(), "");

    write(dir.path(), "orbit/orbit.txt", b"Motion\nRight one");
    let manifest = FsAssetScanner::new(dir.path(), "assets/projects")
        .load_manifest()
        .unwrap();
    let projects = load_projects(&manifest);
    assert_eq!(projects[0].category(), "Motion");
    assert_eq!(projects[0].description(), "Right one");
}

/// CONTRACT: a flat project reads the sibling file sharing its stem.
#[test]
fn contract_flat_description_shares_stem() {
    let dir = tempdir().unwrap();
    write(dir.path(), "poster.final.png", b"x");
    write(dir.path(), "poster.final.txt", b"Print\n\nA3 poster\n");

    let manifest = FsAssetScanner::new(dir.path(), "assets/projects")
        .load_manifest()
        .unwrap();
    let projects = load_projects(&manifest);
    assert_eq!(projects[0].title(), "POSTER.FINAL");
    assert_eq!(projects[0].category(), "Print");
    assert_eq!(projects[0].description(), "A3 poster");
}

/// CONTRACT: invalid UTF-8 in a description never fails the load.
#[test]
fn contract_non_utf8_description_is_lossy() {
    let dir = tempdir().unwrap();
    write(dir.path(), "a.jpg", b"x");
    write(dir.path(), "a.txt", b"Cat\xff\nBody");

    let manifest = FsAssetScanner::new(dir.path(), "assets/projects")
        .load_manifest()
        .unwrap();
    let projects = load_projects(&manifest);
    assert!(projects[0].category().starts_with("Cat"));
    assert_eq!(projects[0].description(), "Body");
}

/// CONTRACT: a UTF-8 byte-order mark never leaks into the category.
#[test]
fn contract_byte_order_mark_is_stripped() {
    let dir = tempdir().unwrap();
    write(dir.path(), "a.jpg", b"x");
    write(dir.path(), "a.txt", b"\xef\xbb\xbfPhotography\r\nWinter series\r\n");

    let manifest = FsAssetScanner::new(dir.path(), "assets/projects")
        .load_manifest()
        .unwrap();
    let projects = load_projects(&manifest);
    assert_eq!(projects[0].category(), "Photography");
    assert_eq!(projects[0].description(), "Winter series");
}
