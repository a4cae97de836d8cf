//! Scenario: a prefab was renamed after it first got an identifier
//!
//! `UI/Button.prefab` still carries `ui/btn` in its sidecar. The build
//! keeps the legacy identifier, records the discrepancy and reconciliation
//! does not delete the artifact.

use crate::common::*;

#[test]
fn scenario_legacy_identifier_is_kept() {
    let project = TestProject::with_files(SAMPLE_TREE);
    project.write(
        "Assets/AssetBundles/UI/Button.prefab.meta",
        "identifier = \"ui/btn\"\nguid = \"5f1c\"\n",
    );
    let mut ctx = project.context();

    let report = project.build(&mut ctx, false);

    assert_eq!(report.discrepancies, 1);
    assert!(project.output("ui/btn").exists());
    assert!(!project.output("ui/button").exists());
    let reconciled = report.reconcile.unwrap();
    assert_eq!(reconciled.kept_by_discrepancy, vec!["/ui/btn".to_string()]);

    let manifest = project.asset_manifest();
    assert_eq!(manifest["Button"]["identifier"], "ui/btn");

    let sidecar = project.read("Assets/AssetBundles/UI/Button.prefab.meta");
    assert!(sidecar.contains("ui/btn"));
    assert!(sidecar.contains("guid"), "other sidecar keys survive: {}", sidecar);
}

#[test]
fn scenario_legacy_identifier_survives_rebuild() {
    let project = TestProject::with_files(SAMPLE_TREE);
    project.write(
        "Assets/AssetBundles/UI/Button.prefab.meta",
        "identifier = \"ui/btn\"\n",
    );
    let mut ctx = project.context();

    project.build(&mut ctx, false);
    let report = project.build(&mut ctx, false);

    assert_eq!(report.discrepancies, 1);
    assert!(project.output("ui/btn").exists());
    assert!(report.reconcile.unwrap().deleted.is_empty());
}
