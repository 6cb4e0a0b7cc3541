//! Property tests for title derivation and description parsing.

use proptest::prelude::*;

use folio::domain::services::is_trimmed_whitespace;
use folio::{filename_to_title, parse_description_file};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: titles never contain separators or lowercase ASCII.
    #[test]
    fn property_title_has_no_separators(name in "[A-Za-z0-9 _-]{0,40}") {
        let title = filename_to_title(&name);
        prop_assert!(!title.contains('-'));
        prop_assert!(!title.contains('_'));
        prop_assert!(!title.chars().any(|c| c.is_ascii_lowercase()));
    }

    /// PROPERTY: names without "oe" keep their character count.
    #[test]
    fn property_title_preserves_length_without_digraph(name in "[a-df-z0-9 _-]{0,40}") {
        prop_assert_eq!(filename_to_title(&name).chars().count(), name.chars().count());
    }

    /// PROPERTY: `filename_to_title` never panics on arbitrary input.
    #[test]
    fn property_title_never_panics(name in "(?s).{0,64}") {
        let _ = filename_to_title(&name);
    }

    /// PROPERTY: parsed fields are trimmed and the category is never empty.
    #[test]
    fn property_description_fields_are_trimmed(content in "(?s).{0,256}") {
        let parsed = parse_description_file(Some(&content));
        prop_assert!(!parsed.category.is_empty());
        prop_assert_eq!(
            parsed.category.trim_matches(is_trimmed_whitespace),
            parsed.category.as_str()
        );
        prop_assert_eq!(
            parsed.description.trim_matches(is_trimmed_whitespace),
            parsed.description.as_str()
        );
        prop_assert!(!parsed.category.contains('\n'));
    }

    /// PROPERTY: a non-blank first line always becomes the category.
    #[test]
    fn property_first_line_is_category(
        category in "[A-Za-z][A-Za-z0-9 ]{0,20}",
        body in "[A-Za-z0-9 .\n]{0,80}",
    ) {
        let content = format!("{}\n{}", category, body);
        let parsed = parse_description_file(Some(&content));
        prop_assert_eq!(parsed.category, category.trim());
        prop_assert_eq!(parsed.description, body.trim());
    }
}
