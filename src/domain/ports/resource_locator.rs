//! ResourceLocator port - discovery of resource roots

use std::path::PathBuf;

use crate::error::BundleResult;

/// Finds every directory playing the "resources" role under a project
pub trait ResourceLocator {
    /// Absolute paths of all resource roots, in a stable order
    fn resource_roots(&self) -> BundleResult<Vec<PathBuf>>;
}
