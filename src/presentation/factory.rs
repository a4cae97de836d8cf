//! Use Case Factory
//!
//! Creates the build pipeline with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use crate::application::{BuildContext, BuildPipeline};
use crate::infrastructure::{
    CopyBundler, FsResourceLocator, JsonManifestRepository, LocalFs, SidecarIdentifierStore,
};

/// Type alias for the concrete BuildPipeline with all dependencies
pub type ConcreteBuildPipeline = BuildPipeline<
    LocalFs,
    SidecarIdentifierStore,
    JsonManifestRepository,
    FsResourceLocator<LocalFs>,
    CopyBundler,
>;

/// Create a build pipeline for the project described by `ctx`
///
/// Identifiers live in `.meta` sidecars under the project root, manifests
/// are JSON, and the reference copy bundler packs the output.
pub fn create_build_pipeline(ctx: &BuildContext) -> ConcreteBuildPipeline {
    let fs = LocalFs::new();
    BuildPipeline::new(
        fs,
        SidecarIdentifierStore::new(&ctx.paths.project_root),
        JsonManifestRepository::new(),
        FsResourceLocator::new(fs, &ctx.paths.asset_dir, ctx.settings.resource_marker.as_str()),
        CopyBundler::new(&ctx.paths.cache_dir),
    )
}
