//! ManifestRepository port - abstraction for manifest persistence
//!
//! This trait allows the build pipeline to load/save manifests
//! without knowing about JSON serialization details.

use std::path::Path;

use crate::domain::entities::{AssetManifest, ResourceManifest};
use crate::error::BundleResult;

/// Abstract repository for the two durable manifests
pub trait ManifestRepository {
    /// Load an asset manifest; a missing file yields an empty manifest
    fn load_assets(&self, path: &Path) -> BundleResult<AssetManifest>;

    /// Replace the asset manifest at `path`
    fn save_assets(&self, manifest: &AssetManifest, path: &Path) -> BundleResult<()>;

    /// Load a resource manifest; a missing file yields an empty manifest
    fn load_resources(&self, path: &Path) -> BundleResult<ResourceManifest>;

    /// Replace the resource manifest at `path`
    fn save_resources(&self, manifest: &ResourceManifest, path: &Path) -> BundleResult<()>;
}
