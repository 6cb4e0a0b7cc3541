#![no_main]

use libfuzzer_sys::fuzz_target;

use folio::domain::value_objects::AssetPath;

fuzz_target!(|data: &[u8]| {
    if let Ok(raw) = std::str::from_utf8(data) {
        // Arbitrary keys either parse or are rejected, and accepted keys
        // always load without panicking
        if AssetPath::parse("assets/projects", raw).is_ok() {
            let mut manifest = folio::AssetManifest::new("assets/projects");
            if manifest.add_image(raw, raw).is_ok() {
                let projects = folio::load_projects(&manifest);
                assert!(projects.len() <= 1);
            }
        }
    }
});
