//! Ordering and identity contracts.

use std::fs;
use std::path::Path;

use folio::{load_projects, project_columns, AssetSource, FsAssetScanner, ProjectRecord};
use tempfile::tempdir;

fn touch(root: &Path, rel: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, b"x").unwrap();
}

fn load(root: &Path) -> Vec<ProjectRecord> {
    let manifest = FsAssetScanner::new(root, "assets/projects")
        .load_manifest()
        .unwrap();
    load_projects(&manifest)
}

/// CONTRACT: grouped projects precede flat projects.
#[test]
fn contract_grouped_before_flat() {
    let dir = tempdir().unwrap();
    touch(dir.path(), "aaa.jpg");
    touch(dir.path(), "zzz/cover.jpg");

    let titles: Vec<_> = load(dir.path()).iter().map(|p| p.title().to_string()).collect();
    assert_eq!(titles, ["ZZZ", "AAA"]);
}

/// CONTRACT: ids are 1..=N with no gaps.
#[test]
fn contract_ids_are_dense() {
    let dir = tempdir().unwrap();
    for rel in ["a.jpg", "b/1.png", "b/2.png", "c.webp", "d/x.avif", "e/readme.md", "notes.txt"] {
        touch(dir.path(), rel);
    }

    let ids: Vec<u32> = load(dir.path()).iter().map(|p| p.id().get()).collect();
    assert_eq!(ids, [1, 2, 3, 4]);
}

/// CONTRACT: a grouped project's cover is its lexicographically first image.
#[test]
fn contract_cover_is_first_sorted_image() {
    let dir = tempdir().unwrap();
    for rel in ["set/c.jpg", "set/a.png", "set/b.gif"] {
        touch(dir.path(), rel);
    }

    let projects = load(dir.path());
    assert_eq!(projects.len(), 1);
    assert_eq!(projects[0].cover_image().as_str(), "/assets/projects/set/a.png");
    assert_eq!(projects[0].images().len(), 3);
}

/// CONTRACT: every project lands in exactly one column, in id order.
#[test]
fn contract_columns_partition_projects() {
    let dir = tempdir().unwrap();
    for n in 0..10 {
        touch(dir.path(), &format!("p{:02}.jpg", n));
    }

    let projects = load(dir.path());
    let columns = project_columns(&projects);
    let total: usize = columns.iter().map(Vec::len).sum();
    assert_eq!(total, projects.len());
    assert_eq!(columns.clone().map(|lane| lane.len()), [4, 3, 3]);
    for lane in &columns {
        assert!(lane.windows(2).all(|w| w[0].id() < w[1].id()));
    }
}

/// CONTRACT: nested folders deeper than one level are not projects.
#[test]
fn contract_only_one_level_of_grouping() {
    let dir = tempdir().unwrap();
    touch(dir.path(), "set/inner/deep.jpg");
    touch(dir.path(), "flat.jpg");

    let projects = load(dir.path());
    assert_eq!(projects.len(), 1);
    assert_eq!(projects[0].title(), "FLAT");
}
