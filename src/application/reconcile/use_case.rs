//! Reconcile Use Case
//!
//! Diffs the produced output tree against the set of paths the current
//! source tree expects and removes what is left over.

use std::collections::HashSet;
use std::path::Path;

use tracing::{debug, info, warn};

use crate::application::context::BuildContext;
use crate::domain::ports::{DirEntry, FileSystem};
use crate::domain::services::path_classifier::{
    is_ignored, strip_extension, with_suffix, DESCRIPTOR_SUFFIX, META_SUFFIX,
    OUTPUT_IGNORED_SUFFIXES, SOURCE_IGNORED_SUFFIXES,
};
use crate::domain::services::tree_walker::{relative_key, walk};
use crate::error::BundleResult;

use super::result::ReconcileResult;

/// Reconcile use case - removes stale artifacts from the output root
pub struct ReconcileUseCase<FS>
where
    FS: FileSystem,
{
    fs: FS,
}

impl<FS> ReconcileUseCase<FS>
where
    FS: FileSystem,
{
    pub fn new(fs: FS) -> Self {
        Self { fs }
    }

    /// Lower-cased `/`-prefixed paths the output root may contain.
    ///
    /// Directories keep their name, files lose their extension (and gain the
    /// content hash suffix in hash mode). Includes the platform manifest.
    pub fn expected_paths(&self, ctx: &BuildContext) -> BundleResult<HashSet<String>> {
        let root = &ctx.paths.content_root;
        self.fs.create_dir_all(root)?;

        let mut expected = HashSet::new();
        for entry in walk(&self.fs, root)? {
            let key = relative_key(root, &entry.path);
            if entry.is_dir {
                expected.insert(key.to_lowercase());
                continue;
            }
            if is_ignored(&key, SOURCE_IGNORED_SUFFIXES) {
                continue;
            }

            let mut path = strip_extension(&key).to_lowercase();
            if ctx.settings.append_hash {
                path.push('_');
                path.push_str(self.fs.hash(&entry.path)?.hex());
            }
            expected.insert(path);
        }

        expected.insert(format!("/{}", ctx.settings.platform.to_lowercase()));
        Ok(expected)
    }

    /// Every produced entry with its lower-cased `/`-prefixed key, sidecars excluded.
    pub fn produced_paths(&self, ctx: &BuildContext) -> BundleResult<Vec<(String, DirEntry)>> {
        let root = &ctx.paths.output_root;
        self.fs.create_dir_all(root)?;

        Ok(walk(&self.fs, root)?
            .into_iter()
            .map(|entry| (relative_key(root, &entry.path).to_lowercase(), entry))
            .filter(|(key, entry)| entry.is_dir || !is_ignored(key, OUTPUT_IGNORED_SUFFIXES))
            .collect())
    }

    /// Delete every produced entry that is neither expected nor kept alive
    /// by a discrepancy whose canonical path is expected.
    pub fn execute(&self, ctx: &BuildContext) -> BundleResult<ReconcileResult> {
        let expected = self.expected_paths(ctx)?;
        let produced = self.produced_paths(ctx)?;
        let mut result = ReconcileResult::new();

        for (key, entry) in produced {
            if expected.contains(&key) {
                continue;
            }

            if let Some(canonical) = ctx.discrepancies.get(&key) {
                if expected.contains(canonical) {
                    debug!(path = %key, canonical, "kept by legacy identifier");
                    result.kept_by_discrepancy.push(key);
                    continue;
                }
            }

            if !self.fs.exists(&entry.path) {
                debug!(path = %entry.path.display(), "already removed");
                continue;
            }

            if entry.is_dir {
                self.delete_dir(&entry.path, &mut result);
            } else {
                self.delete_file(&entry.path, &mut result);
            }
        }

        info!(
            deleted = result.deleted.len(),
            kept = result.kept_by_discrepancy.len(),
            failed = result.failures.len(),
            "reconciled output"
        );
        Ok(result)
    }

    /// Artifact, its sidecar, its descriptor and the descriptor's sidecar
    fn delete_file(&self, path: &Path, result: &mut ReconcileResult) {
        match self.fs.remove(path) {
            Ok(()) => {
                info!(path = %path.display(), "removed stale artifact");
                result.deleted.push(path.to_path_buf());
                self.remove_if_exists(&with_suffix(path, META_SUFFIX), result);
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "failed to remove stale artifact");
                result.record_failure(path.to_path_buf(), e.to_string());
            }
        }

        let descriptor = with_suffix(path, DESCRIPTOR_SUFFIX);
        if self.remove_if_exists(&descriptor, result) {
            self.remove_if_exists(&with_suffix(&descriptor, META_SUFFIX), result);
        }
    }

    fn delete_dir(&self, path: &Path, result: &mut ReconcileResult) {
        match self.fs.remove_dir_all(path) {
            Ok(()) => {
                info!(path = %path.display(), "removed stale directory");
                result.deleted.push(path.to_path_buf());
                self.remove_if_exists(&with_suffix(path, META_SUFFIX), result);
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "failed to remove stale directory");
                result.record_failure(path.to_path_buf(), e.to_string());
            }
        }
    }

    /// Returns whether `path` existed and was removed
    fn remove_if_exists(&self, path: &Path, result: &mut ReconcileResult) -> bool {
        if !self.fs.exists(path) {
            return false;
        }
        match self.fs.remove(path) {
            Ok(()) => true,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "failed to remove sidecar");
                result.record_failure(path.to_path_buf(), e.to_string());
                false
            }
        }
    }
}
