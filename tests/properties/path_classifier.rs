//! Property tests for path classification.

use proptest::prelude::*;

use bundlemap::domain::services::path_classifier::{
    classify, file_stem, normalize_separators, strip_extension,
};

fn segment() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9_-]{1,12}").unwrap()
}

fn relative_path() -> impl Strategy<Value = Vec<String>> {
    proptest::collection::vec(segment(), 1..=5)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: classification never panics on arbitrary input.
    #[test]
    fn property_classify_never_panics(s in "(?s).{0,256}") {
        let _ = classify(&s, "Assets");
        let _ = strip_extension(&s);
        let _ = file_stem(&s);
    }

    /// PROPERTY: a path under the marker classifies to marker + suffix,
    /// whatever the prefix and separator style.
    #[test]
    fn property_classify_keeps_suffix_after_marker(
        prefix in relative_path(),
        suffix in relative_path(),
        windows in any::<bool>(),
    ) {
        prop_assume!(!prefix.iter().any(|s| s == "Assets"));

        let sep = if windows { "\\" } else { "/" };
        let path = format!("{}{}Assets{}{}", prefix.join(sep), sep, sep, suffix.join(sep));

        prop_assert_eq!(classify(&path, "Assets"), format!("Assets/{}", suffix.join("/")));
    }

    /// PROPERTY: a path without the marker segment classifies to empty.
    #[test]
    fn property_classify_without_marker_is_empty(path in relative_path()) {
        prop_assume!(!path.iter().any(|s| s == "Assets"));
        prop_assert_eq!(classify(&path.join("/"), "Assets"), "");
    }

    /// PROPERTY: classification output is separator-normalized.
    #[test]
    fn property_classify_output_has_no_backslash(s in "[A-Za-z/\\\\]{0,64}") {
        prop_assert!(!classify(&s, "Assets").contains('\\'));
        prop_assert!(!normalize_separators(&s).contains('\\'));
    }

    /// PROPERTY: stripping an extension only touches the last segment.
    #[test]
    fn property_strip_extension_keeps_directories(
        dirs in relative_path(),
        stem in segment(),
        ext in "[a-z]{1,5}",
    ) {
        let dir = dirs.join("/");
        let path = format!("{}/{}.{}", dir, stem, ext);

        prop_assert_eq!(strip_extension(&path), format!("{}/{}", dir, stem));
        prop_assert_eq!(file_stem(&path), stem.as_str());
    }

    /// PROPERTY: stripping twice removes at most one more extension, never a directory.
    #[test]
    fn property_strip_extension_is_prefix(path in "[A-Za-z0-9./_-]{0,64}") {
        let stripped = strip_extension(&path);
        prop_assert!(path.starts_with(stripped));
        let dir_end = path.rfind('/').map_or(0, |i| i + 1);
        prop_assert!(stripped.len() >= dir_end);
    }
}
