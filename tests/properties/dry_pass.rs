//! Property tests for identifier assignment over generated source trees.

use std::collections::BTreeSet;

use proptest::prelude::*;

use bundlemap::application::BuildContext;
use bundlemap::config::Config;
use bundlemap::presentation::create_build_pipeline;

fn source_tree() -> impl Strategy<Value = BTreeSet<String>> {
    let dir = proptest::sample::select(vec!["Audio", "UI", "Package_Fx", "Models/Props"]);
    let stem = proptest::string::string_regex("[a-z]{1,8}").unwrap();
    let ext = proptest::sample::select(vec!["wav", "prefab", "png"]);
    proptest::collection::btree_set(
        (dir, stem, ext).prop_map(|(d, s, e)| format!("{}/{}.{}", d, s, e)),
        1..12,
    )
}

fn context(root: &std::path::Path) -> BuildContext {
    let mut config = Config::default();
    config.build.platform = "Android".to_string();
    BuildContext::from_config(&config, root)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 24,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: running the dry pass twice assigns the same identifiers and
    /// finds no discrepancies.
    #[test]
    fn property_dry_pass_is_idempotent(files in source_tree()) {
        let dir = tempfile::tempdir().unwrap();
        for rel in &files {
            let path = dir.path().join("Assets/AssetBundles").join(rel);
            std::fs::create_dir_all(path.parent().unwrap()).unwrap();
            std::fs::write(&path, rel.as_bytes()).unwrap();
        }
        let mut ctx = context(dir.path());
        let pipeline = create_build_pipeline(&ctx);

        let first = pipeline.run(&mut ctx, true).unwrap();
        let first_assignments = ctx.assignments.clone();
        let second = pipeline.run(&mut ctx, true).unwrap();

        prop_assert_eq!(&ctx.assignments, &first_assignments);
        prop_assert_eq!(first.assignments, files.len());
        prop_assert_eq!(second.discrepancies, 0);
    }

    /// PROPERTY: identifiers are the lower-cased source paths below the
    /// content root, without extension.
    #[test]
    fn property_identifiers_follow_source_paths(files in source_tree()) {
        let dir = tempfile::tempdir().unwrap();
        for rel in &files {
            let path = dir.path().join("Assets/AssetBundles").join(rel);
            std::fs::create_dir_all(path.parent().unwrap()).unwrap();
            std::fs::write(&path, b"x").unwrap();
        }
        let mut ctx = context(dir.path());

        create_build_pipeline(&ctx).run(&mut ctx, true).unwrap();

        let actual: BTreeSet<String> =
            ctx.assignments.iter().map(|a| a.identifier.clone()).collect();
        let expected: BTreeSet<String> = files
            .iter()
            .map(|rel| rel.rsplit_once('.').unwrap().0.to_lowercase())
            .collect();
        prop_assert_eq!(actual, expected);
    }
}
