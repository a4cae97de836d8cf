//! Filesystem Resource Locator
//!
//! Finds every directory named after the resource marker (`Resources`)
//! below a search root, using the same explicit-stack walk as the rest of
//! the crate.

use std::path::PathBuf;

use crate::domain::ports::{FileSystem, ResourceLocator};
use crate::domain::services::tree_walker::walk;
use crate::error::BundleResult;

pub struct FsResourceLocator<FS: FileSystem> {
    fs: FS,
    search_root: PathBuf,
    marker: String,
}

impl<FS: FileSystem> FsResourceLocator<FS> {
    pub fn new(fs: FS, search_root: impl Into<PathBuf>, marker: impl Into<String>) -> Self {
        Self {
            fs,
            search_root: search_root.into(),
            marker: marker.into(),
        }
    }
}

impl<FS: FileSystem> ResourceLocator for FsResourceLocator<FS> {
    fn resource_roots(&self) -> BundleResult<Vec<PathBuf>> {
        if !self.fs.is_dir(&self.search_root) {
            return Ok(Vec::new());
        }

        let mut roots: Vec<PathBuf> = walk(&self.fs, &self.search_root)?
            .into_iter()
            .filter(|entry| entry.is_dir && entry.name() == self.marker)
            .map(|entry| entry.path)
            .collect();
        roots.sort();
        Ok(roots)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::fs::LocalFs;
    use tempfile::tempdir;

    #[test]
    fn finds_nested_resource_roots() {
        let dir = tempdir().unwrap();
        let assets = dir.path().join("Assets");
        std::fs::create_dir_all(assets.join("Resources")).unwrap();
        std::fs::create_dir_all(assets.join("Plugins/Lib/Resources")).unwrap();
        std::fs::create_dir_all(assets.join("Textures")).unwrap();

        let locator = FsResourceLocator::new(LocalFs::new(), &assets, "Resources");
        let roots = locator.resource_roots().unwrap();

        assert_eq!(
            roots,
            vec![
                assets.join("Plugins/Lib/Resources"),
                assets.join("Resources"),
            ]
        );
    }

    #[test]
    fn missing_search_root_yields_nothing() {
        let dir = tempdir().unwrap();
        let locator = FsResourceLocator::new(LocalFs::new(), dir.path().join("nope"), "Resources");

        assert!(locator.resource_roots().unwrap().is_empty());
    }

    #[test]
    fn files_named_like_the_marker_are_ignored() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("Resources"), "not a dir").unwrap();

        let locator = FsResourceLocator::new(LocalFs::new(), dir.path(), "Resources");

        assert!(locator.resource_roots().unwrap().is_empty());
    }
}
