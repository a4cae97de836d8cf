//! Manifest Use Case
//!
//! Builds the asset and resource manifests for a run. The asset pass runs
//! twice per build: dry (identifiers and discrepancies only) before the
//! bundler, commit (tables and writes) after it.

use std::path::Path;

use tracing::{debug, error, info};

use crate::application::context::BuildContext;
use crate::domain::entities::{ArtifactMapping, SourceItem};
use crate::domain::ports::{
    Assignment, FileSystem, IdentifierStore, ManifestRepository, ResourceLocator,
};
use crate::domain::services::path_classifier::{
    classify, file_stem, group_tag, is_ignored, project_relative, strip_extension,
    SOURCE_IGNORED_SUFFIXES,
};
use crate::domain::services::tree_walker::walk;
use crate::domain::services::NameAssigner;
use crate::domain::value_objects::PassMode;
use crate::error::BundleResult;

/// Manifest use case - walks the content tree and resource roots
pub struct ManifestUseCase<FS, IS, MR, RL>
where
    FS: FileSystem,
    IS: IdentifierStore,
    MR: ManifestRepository,
    RL: ResourceLocator,
{
    fs: FS,
    store: IS,
    repository: MR,
    locator: RL,
}

impl<FS, IS, MR, RL> ManifestUseCase<FS, IS, MR, RL>
where
    FS: FileSystem,
    IS: IdentifierStore,
    MR: ManifestRepository,
    RL: ResourceLocator,
{
    pub fn new(fs: FS, store: IS, repository: MR, locator: RL) -> Self {
        Self {
            fs,
            store,
            repository,
            locator,
        }
    }

    /// Source items under the content root, files first, then directories.
    ///
    /// Returns `None` when the content root does not exist.
    fn scan(&self, ctx: &BuildContext) -> BundleResult<Option<(Vec<SourceItem>, Vec<SourceItem>)>> {
        let root = &ctx.paths.content_root;
        if !self.fs.is_dir(root) {
            debug!(root = %root.display(), "content root missing, nothing to do");
            return Ok(None);
        }

        let (dirs, files): (Vec<SourceItem>, Vec<SourceItem>) = walk(&self.fs, root)?
            .iter()
            .filter(|entry| !is_ignored(&entry.path.to_string_lossy(), SOURCE_IGNORED_SUFFIXES))
            .filter_map(|entry| {
                SourceItem::classify(entry, &ctx.paths.project_root, &ctx.settings.content_marker)
            })
            .partition(SourceItem::is_dir);

        Ok(Some((files, dirs)))
    }

    /// Run the asset manifest pass.
    ///
    /// Dry: assigns identifiers to every file, fills `ctx.discrepancies` and
    /// `ctx.assignments`. Commit: fills `ctx.assets` and writes it.
    pub fn build_asset_manifest(&self, ctx: &mut BuildContext, mode: PassMode) -> BundleResult<()> {
        let Some((files, dirs)) = self.scan(ctx)? else {
            return Ok(());
        };

        let assigner = NameAssigner::new(
            &self.store,
            &self.fs,
            &ctx.paths.content_prefix,
            ctx.settings.append_hash,
        );

        if mode.is_dry() {
            ctx.discrepancies.clear();
            ctx.assignments.clear();
            for item in &files {
                let identifier = assigner.assign(item, Some(&mut ctx.discrepancies))?;
                ctx.assignments
                    .push(Assignment::new(item.path(), item.key(), identifier));
            }
            info!(
                files = files.len(),
                discrepancies = ctx.discrepancies.len(),
                "assigned identifiers"
            );
            return Ok(());
        }

        ctx.registry.clear();
        ctx.assets.clear();

        for item in &files {
            let identifier = assigner.assign(item, None)?;
            let name = ctx.registry.register(item.display_name(), item.key());
            let artifact = ctx.paths.output_root.join(&identifier);

            let mapping = ArtifactMapping::new(
                identifier,
                vec![item.key().to_lowercase()],
                ctx.settings.version.as_str(),
            )
            .with_group(group_tag(item.key(), &ctx.settings.group_marker));
            ctx.assets.insert(name, self.attach_artifact(mapping, &artifact)?);
        }

        for item in &dirs {
            let members = self.member_stems(item.path())?;
            let name = ctx.registry.register(item.display_name(), item.key());
            ctx.assets.insert(
                name,
                ArtifactMapping::new("", members, ctx.settings.version.as_str()),
            );
        }

        let platform = ctx.settings.platform.clone();
        if ctx.registry.contains(&platform) {
            error!(
                platform = %platform,
                "platform manifest name collides with an asset name, skipping its entry"
            );
        } else {
            ctx.registry.register(&platform, &platform);
            let mapping = ArtifactMapping::new(
                platform.as_str(),
                Vec::new(),
                ctx.settings.version.as_str(),
            );
            let artifact = ctx.paths.output_root.join(&platform);
            ctx.assets
                .insert(platform.clone(), self.attach_artifact(mapping, &artifact)?);
        }

        self.repository
            .save_assets(&ctx.assets, &ctx.paths.asset_manifest)?;
        info!(
            entries = ctx.assets.len(),
            collisions = ctx.registry.collisions().len(),
            path = %ctx.paths.asset_manifest.display(),
            "wrote asset manifest"
        );
        Ok(())
    }

    /// Run the resource manifest pass. The dry pass has nothing to do.
    pub fn build_resource_manifest(
        &self,
        ctx: &mut BuildContext,
        mode: PassMode,
    ) -> BundleResult<()> {
        if mode.is_dry() {
            return Ok(());
        }

        ctx.resource_names.clear();
        ctx.resources.clear();
        let marker = ctx.settings.resource_marker.clone();
        let marker_prefix = format!("{}/", marker);

        for root in self.locator.resource_roots()? {
            for entry in walk(&self.fs, &root)? {
                let path = project_relative(&ctx.paths.project_root, &entry.path);
                if entry.is_dir || is_ignored(&path, SOURCE_IGNORED_SUFFIXES) {
                    continue;
                }

                let classified = classify(strip_extension(&path), &marker);
                let Some(relative) = classified.strip_prefix(&marker_prefix) else {
                    continue;
                };

                let name = ctx.resource_names.register(file_stem(&path), &path);
                ctx.resources.insert(name, relative);
            }
        }

        self.repository
            .save_resources(&ctx.resources, &ctx.paths.resource_manifest)?;
        info!(
            entries = ctx.resources.len(),
            path = %ctx.paths.resource_manifest.display(),
            "wrote resource manifest"
        );
        Ok(())
    }

    /// Fill size and hash when the artifact has been produced
    fn attach_artifact(
        &self,
        mapping: ArtifactMapping,
        artifact: &Path,
    ) -> BundleResult<ArtifactMapping> {
        if !self.fs.exists(artifact) || self.fs.is_dir(artifact) {
            debug!(artifact = %artifact.display(), "artifact not produced yet");
            return Ok(mapping);
        }
        let size = self.fs.size(artifact)?;
        let hash = self.fs.hash(artifact)?;
        Ok(mapping.with_artifact(size, &hash))
    }

    /// Stems of the files directly inside `dir`
    fn member_stems(&self, dir: &Path) -> BundleResult<Vec<String>> {
        Ok(self
            .fs
            .list_dir(dir)?
            .into_iter()
            .filter(|entry| !entry.is_dir)
            .map(|entry| entry.name())
            .filter(|name| !is_ignored(name, SOURCE_IGNORED_SUFFIXES))
            .map(|name| file_stem(&name).to_string())
            .collect())
    }
}
