//! End-to-end build scenarios against a real project directory.

mod common;

#[path = "scenarios/case_collision.rs"]
mod case_collision;
#[path = "scenarios/legacy_identifier.rs"]
mod legacy_identifier;
#[path = "scenarios/manifest_round_trip.rs"]
mod manifest_round_trip;
#[path = "scenarios/stale_artifacts.rs"]
mod stale_artifacts;
