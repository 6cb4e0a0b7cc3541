//! Property tests for project loading and column partitioning.

use proptest::prelude::*;

use folio::{load_projects, project_columns, AssetManifest};

const PREFIX: &str = "assets/projects";

fn name() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z][a-z0-9_-]{0,8}").unwrap()
}

fn ext() -> impl Strategy<Value = &'static str> {
    prop_oneof![Just("jpg"), Just("png"), Just("webp"), Just("gif")]
}

/// Raw manifest keys: flat images and images inside a small set of folders
fn image_keys() -> impl Strategy<Value = Vec<String>> {
    let flat = (name(), ext()).prop_map(|(n, e)| format!("{}/{}.{}", PREFIX, n, e));
    let grouped = (prop_oneof![Just("alpha"), Just("beta"), Just("oeuvre")], name(), ext())
        .prop_map(|(f, n, e)| format!("{}/{}/{}.{}", PREFIX, f, n, e));
    proptest::collection::vec(prop_oneof![flat, grouped], 0..24)
}

fn manifest_from(keys: &[String]) -> AssetManifest {
    let mut manifest = AssetManifest::new(PREFIX);
    for key in keys {
        manifest.add_image(key, format!("/{}", key)).unwrap();
    }
    manifest
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: ids run 1..=N in output order.
    #[test]
    fn property_ids_are_dense(keys in image_keys()) {
        let projects = load_projects(&manifest_from(&keys));
        for (i, project) in projects.iter().enumerate() {
            prop_assert_eq!(project.id().get() as usize, i + 1);
        }
    }

    /// PROPERTY: every image appears in exactly one project.
    #[test]
    fn property_images_are_conserved(keys in image_keys()) {
        let manifest = manifest_from(&keys);
        let projects = load_projects(&manifest);
        let total: usize = projects.iter().map(|p| p.images().len()).sum();
        prop_assert_eq!(total, manifest.image_count());
    }

    /// PROPERTY: the cover is the first image and images are sorted.
    #[test]
    fn property_cover_is_first_of_sorted_images(keys in image_keys()) {
        for project in load_projects(&manifest_from(&keys)) {
            prop_assert_eq!(project.cover_image(), &project.images()[0]);
            prop_assert!(project.images().windows(2).all(|w| w[0].as_str() <= w[1].as_str()));
        }
    }

    /// PROPERTY: columns partition the projects, each lane in id order.
    #[test]
    fn property_columns_partition(keys in image_keys()) {
        let projects = load_projects(&manifest_from(&keys));
        let columns = project_columns(&projects);

        let total: usize = columns.iter().map(Vec::len).sum();
        prop_assert_eq!(total, projects.len());
        for (index, lane) in columns.iter().enumerate() {
            for project in lane {
                prop_assert_eq!(project.column().index(), index);
                prop_assert_eq!((project.id().get() as usize - 1) % 3, index);
            }
            prop_assert!(lane.windows(2).all(|w| w[0].id() < w[1].id()));
        }
    }

    /// PROPERTY: loading the same manifest twice gives identical records.
    #[test]
    fn property_load_is_deterministic(keys in image_keys()) {
        let manifest = manifest_from(&keys);
        let first = serde_json::to_string(&load_projects(&manifest)).unwrap();
        let second = serde_json::to_string(&load_projects(&manifest)).unwrap();
        prop_assert_eq!(first, second);
    }

    /// PROPERTY: reordering images inside a folder never changes its cover.
    #[test]
    fn property_cover_ignores_order_within_folder(
        names in proptest::collection::btree_set(name(), 1..8),
    ) {
        let keys: Vec<String> = names.iter().map(|n| format!("{}/set/{}.jpg", PREFIX, n)).collect();
        let mut reversed = keys.clone();
        reversed.reverse();

        let forward = load_projects(&manifest_from(&keys));
        let backward = load_projects(&manifest_from(&reversed));
        prop_assert_eq!(forward[0].cover_image(), backward[0].cover_image());
        prop_assert_eq!(forward[0].images(), backward[0].images());
    }
}
