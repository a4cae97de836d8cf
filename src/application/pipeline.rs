//! Build pipeline
//!
//! Sequences one full run over a `BuildContext`.
//!
//! ## Flow
//!
//! 1. Dry pass: assign identifiers, record discrepancies
//! 2. Create the output root
//! 3. Clear the bundler cache
//! 4. Bundle every assignment
//! 5. Reconcile the output root
//! 6. Commit pass: write the asset and resource manifests

use tracing::info;

use crate::application::context::BuildContext;
use crate::application::manifest::ManifestUseCase;
use crate::application::reconcile::{ReconcileResult, ReconcileUseCase};
use crate::domain::entities::Collision;
use crate::domain::ports::{Bundler, FileSystem, IdentifierStore, ManifestRepository, ResourceLocator};
use crate::domain::value_objects::PassMode;
use crate::error::BundleResult;

/// Summary of one run
#[derive(Debug, Clone, Default)]
pub struct BuildReport {
    /// Only the dry pass ran
    pub dry_run: bool,
    pub assignments: usize,
    pub discrepancies: usize,
    pub collisions: Vec<Collision>,
    /// Absent when reconciliation did not run
    pub reconcile: Option<ReconcileResult>,
    pub asset_entries: usize,
    pub resource_entries: usize,
}

impl BuildReport {
    fn from_context(ctx: &BuildContext, dry_run: bool) -> Self {
        let mut collisions = ctx.registry.collisions().to_vec();
        collisions.extend_from_slice(ctx.resource_names.collisions());
        Self {
            dry_run,
            assignments: ctx.assignments.len(),
            discrepancies: ctx.discrepancies.len(),
            collisions,
            reconcile: None,
            asset_entries: ctx.assets.len(),
            resource_entries: ctx.resources.len(),
        }
    }
}

pub struct BuildPipeline<FS, IS, MR, RL, B>
where
    FS: FileSystem + Clone,
    IS: IdentifierStore,
    MR: ManifestRepository,
    RL: ResourceLocator,
    B: Bundler,
{
    fs: FS,
    manifests: ManifestUseCase<FS, IS, MR, RL>,
    reconcile: ReconcileUseCase<FS>,
    bundler: B,
}

impl<FS, IS, MR, RL, B> BuildPipeline<FS, IS, MR, RL, B>
where
    FS: FileSystem + Clone,
    IS: IdentifierStore,
    MR: ManifestRepository,
    RL: ResourceLocator,
    B: Bundler,
{
    pub fn new(fs: FS, store: IS, repository: MR, locator: RL, bundler: B) -> Self {
        Self {
            manifests: ManifestUseCase::new(fs.clone(), store, repository, locator),
            reconcile: ReconcileUseCase::new(fs.clone()),
            fs,
            bundler,
        }
    }

    /// Run a build. With `dry_only`, stop after identifier assignment.
    pub fn run(&self, ctx: &mut BuildContext, dry_only: bool) -> BundleResult<BuildReport> {
        ctx.reset();
        info!(
            platform = %ctx.settings.platform,
            version = %ctx.settings.version,
            dry_run = dry_only,
            "starting build"
        );

        self.manifests.build_asset_manifest(ctx, PassMode::Dry)?;
        self.manifests.build_resource_manifest(ctx, PassMode::Dry)?;
        if dry_only {
            return Ok(BuildReport::from_context(ctx, true));
        }

        self.fs.create_dir_all(&ctx.paths.output_root)?;
        self.bundler.clear_cache()?;
        self.bundler
            .bundle(&ctx.paths.output_root, &ctx.assignments, &ctx.settings.platform)?;

        let reconciled = self.reconcile.execute(ctx)?;

        self.manifests.build_asset_manifest(ctx, PassMode::Commit)?;
        self.manifests.build_resource_manifest(ctx, PassMode::Commit)?;

        let mut report = BuildReport::from_context(ctx, false);
        report.reconcile = Some(reconciled);
        info!(
            assets = report.asset_entries,
            resources = report.resource_entries,
            "build finished"
        );
        Ok(report)
    }

    /// Dry pass followed by reconciliation, without bundling or writing manifests.
    pub fn reconcile_only(&self, ctx: &mut BuildContext) -> BundleResult<BuildReport> {
        ctx.reset();
        self.manifests.build_asset_manifest(ctx, PassMode::Dry)?;
        let reconciled = self.reconcile.execute(ctx)?;

        let mut report = BuildReport::from_context(ctx, false);
        report.reconcile = Some(reconciled);
        Ok(report)
    }
}
