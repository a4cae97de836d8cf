//! Bundlemap - artifact naming and output reconciliation for packaged content
//!
//! Bundlemap scans a source content tree, gives every source item a stable
//! artifact identifier, writes a manifest describing the produced artifacts,
//! and removes stale artifacts from a previously built output directory.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{BuildContext, BuildPipeline, BuildReport, ReconcileResult};
pub use config::Config;
pub use error::{BundleError, BundleResult};
