//! Scenario: a clean project is built twice
//!
//! Both manifests are written, identifiers persist in sidecars and a
//! rebuild produces the same manifests.

use crate::common::*;

#[test]
fn scenario_first_build_writes_both_manifests() {
    let project = TestProject::with_files(SAMPLE_TREE);
    let mut ctx = project.context();

    let report = project.build(&mut ctx, false);

    assert!(!report.dry_run);
    assert_eq!(report.assignments, 3);
    assert!(report.collisions.is_empty());

    let assets = project.asset_manifest();
    let click = &assets["click"];
    assert_eq!(click["identifier"], "audio/click");
    assert_eq!(click["sourcePaths"][0], "assets/assetbundles/audio/click.wav");
    assert_eq!(click["version"], "1.0.0");
    assert_eq!(click["size"], "5");
    assert_eq!(assets["Audio"]["identifier"], "");
    assert_eq!(assets[PLATFORM]["identifier"], PLATFORM);

    let resources = project.resource_manifest();
    assert_eq!(resources["icon"], "icon");
    assert_eq!(resources["artifact_map"], "artifact_map");

    let sidecar = project.read("Assets/AssetBundles/Audio/click.wav.meta");
    assert!(sidecar.contains("audio/click"));
}

#[test]
fn scenario_rebuild_is_stable() {
    let project = TestProject::with_files(SAMPLE_TREE);
    let mut ctx = project.context();

    project.build(&mut ctx, false);
    // The first build's resource manifest joins the resource root it is written to.
    project.build(&mut ctx, false);
    let first_assets = project.asset_manifest();
    let first_resources = project.resource_manifest();
    let report = project.build(&mut ctx, false);

    assert_eq!(project.asset_manifest(), first_assets);
    assert_eq!(project.resource_manifest(), first_resources);
    assert_eq!(report.discrepancies, 0);
    assert!(report.reconcile.unwrap().deleted.is_empty());
}

#[test]
fn scenario_dry_run_leaves_output_alone() {
    let project = TestProject::with_files(SAMPLE_TREE);
    let mut ctx = project.context();

    let report = project.build(&mut ctx, true);

    assert!(report.dry_run);
    assert_eq!(report.assignments, 3);
    assert!(!ctx.paths.output_root.exists());
    assert!(!ctx.paths.asset_manifest.exists());
    assert!(project.path("Assets/AssetBundles/Audio/click.wav.meta").exists());
}
