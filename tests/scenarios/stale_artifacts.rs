//! Scenario: a source file is deleted between builds
//!
//! The artifact built from it, its sidecar, its descriptor and the
//! descriptor's sidecar all disappear on the next build.

use crate::common::*;

#[test]
fn scenario_removed_source_takes_its_artifact_along() {
    let project = TestProject::with_files(SAMPLE_TREE);
    let mut ctx = project.context();
    project.build(&mut ctx, false);
    assert!(project.output("audio/boom").exists());
    assert!(project.output("audio/boom.manifest").exists());

    std::fs::remove_file(project.path("Assets/AssetBundles/Audio/boom.wav")).unwrap();
    let report = project.build(&mut ctx, false);

    assert!(!project.output("audio/boom").exists());
    assert!(!project.output("audio/boom.manifest").exists());
    assert!(project.output("audio/click").exists());
    let reconciled = report.reconcile.unwrap();
    assert_eq!(reconciled.deleted, vec![project.output("audio/boom")]);
    assert!(reconciled.is_clean());
    assert!(project.asset_manifest().get("boom").is_none());
}

#[test]
fn scenario_obsolete_artifact_and_sidecars_are_removed() {
    let project = TestProject::with_files(SAMPLE_TREE);
    for rel in [
        "obsolete.bundle",
        "obsolete.bundle.meta",
        "obsolete.bundle.manifest",
        "obsolete.bundle.manifest.meta",
    ] {
        project.write(
            &format!("Assets/StreamingAssets/AssetBundles/{}/{}", PLATFORM, rel),
            "old",
        );
    }
    let mut ctx = project.context();

    project.build(&mut ctx, false);

    for rel in [
        "obsolete.bundle",
        "obsolete.bundle.meta",
        "obsolete.bundle.manifest",
        "obsolete.bundle.manifest.meta",
    ] {
        assert!(!project.output(rel).exists(), "{} should be gone", rel);
    }
    assert!(project.output(PLATFORM).exists());
}

#[test]
fn scenario_removed_directory_is_pruned() {
    let project = TestProject::with_files(SAMPLE_TREE);
    let mut ctx = project.context();
    project.build(&mut ctx, false);
    assert!(project.output("ui/button").exists());

    std::fs::remove_dir_all(project.path("Assets/AssetBundles/UI")).unwrap();
    project.build(&mut ctx, false);

    assert!(!project.output("ui").exists());
    assert!(project.asset_manifest().get("UI").is_none());
}
