//! Application Layer
//!
//! Use cases that orchestrate a build run.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain naming rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `ManifestUseCase` - Dry and commit passes for the asset and resource manifests
//! - `ReconcileUseCase` - Removes stale artifacts from the output root
//! - `BuildPipeline` - Sequences a full run over a `BuildContext`

pub mod context;
pub mod manifest;
pub mod pipeline;
pub mod reconcile;

pub use context::{BuildContext, BuildPaths, BuildSettings};
pub use manifest::ManifestUseCase;
pub use pipeline::{BuildPipeline, BuildReport};
pub use reconcile::{ReconcileFailure, ReconcileResult, ReconcileUseCase};
