#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let content = String::from_utf8_lossy(data);
    let parsed = folio::parse_description_file(Some(&content));
    assert!(!parsed.category.is_empty());
});
