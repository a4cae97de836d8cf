//! Scenario: two sources whose names differ only in case
//!
//! `Audio/click.wav` and `Audio/Click.wav` share the identifier
//! `audio/click`, but their display names collide. The second one is
//! renamed with a random suffix and the build still succeeds.

use crate::common::*;

#[test]
fn scenario_case_only_duplicate_is_renamed() {
    let project = TestProject::with_files(CASE_COLLISION_TREE);
    let mut ctx = project.context();

    let report = project.build(&mut ctx, false);

    assert_eq!(report.collisions.len(), 1, "report: {:?}", report);
    let collision = &report.collisions[0];
    assert!(collision.renamed_to.to_lowercase().starts_with("click_"));
    assert_ne!(collision.renamed_to, collision.name);

    let manifest = project.asset_manifest();
    let entries = manifest.as_object().unwrap();
    assert!(entries.contains_key(&collision.name));
    assert!(entries.contains_key(&collision.renamed_to));
    assert_eq!(
        entries[&collision.renamed_to]["identifier"],
        entries[&collision.name]["identifier"]
    );
}

#[test]
fn scenario_case_only_duplicates_share_one_artifact() {
    let project = TestProject::with_files(CASE_COLLISION_TREE);
    let mut ctx = project.context();

    project.build(&mut ctx, false);

    let artifact = std::fs::read_to_string(project.output("audio/click")).unwrap();
    assert_eq!(artifact.len(), "lower".len() + "upper".len());
}
