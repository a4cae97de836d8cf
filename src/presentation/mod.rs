//! Presentation Layer
//!
//! This layer handles:
//! - Creating use cases with infrastructure dependencies
//! - Rendering run reports as text
//!
//! ## Structure
//!
//! - `factory` - Creates the build pipeline with proper dependencies (dependency injection)
//! - `output` - Report rendering

pub mod factory;
pub mod output;

pub use factory::{create_build_pipeline, ConcreteBuildPipeline};
pub use output::{render_build_report, render_reconcile_report};
