//! JSON Manifest Repository
//!
//! Implements the ManifestRepository port with pretty-printed JSON objects:
//!
//! ```json
//! {
//!   "click": {
//!     "identifier": "audio/click",
//!     "sourcePaths": ["assets/assetbundles/audio/click.wav"],
//!     "version": "1.0.0",
//!     "size": "2048",
//!     "hash": "9f86d0…",
//!     "group": "",
//!     "extra": ""
//!   }
//! }
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::entities::{ArtifactMapping, AssetManifest, ResourceManifest};
use crate::domain::ports::{FileSystem, ManifestRepository};
use crate::domain::services::path_classifier::{with_suffix, META_SUFFIX};
use crate::error::{BundleError, BundleResult};
use crate::infrastructure::fs::LocalFs;

/// JSON-based manifest repository
pub struct JsonManifestRepository {
    fs: LocalFs,
}

impl JsonManifestRepository {
    /// Create a new repository with the default file system
    pub fn new() -> Self {
        Self { fs: LocalFs::new() }
    }

    /// Create with a custom file system
    pub fn with_fs(fs: LocalFs) -> Self {
        Self { fs }
    }

    /// Delete a previous manifest and its sidecar so stale content never survives
    fn remove_stale(&self, path: &Path) -> BundleResult<()> {
        for stale in [path.to_path_buf(), with_suffix(path, META_SUFFIX)] {
            if self.fs.exists(&stale) {
                debug!(path = %stale.display(), "removing stale manifest file");
                self.fs.remove(&stale)?;
            }
        }
        Ok(())
    }

    fn write_json<T: Serialize>(&self, value: &T, path: &Path) -> BundleResult<()> {
        let content = serde_json::to_vec_pretty(value).map_err(|source| BundleError::Manifest {
            path: path.to_path_buf(),
            source,
        })?;
        self.remove_stale(path)?;
        self.fs.write(path, &content)?;
        Ok(())
    }

    fn read_json<T: for<'de> Deserialize<'de> + Default>(&self, path: &Path) -> BundleResult<T> {
        if !self.fs.exists(path) {
            return Ok(T::default());
        }
        let content = self.fs.read(path)?;
        serde_json::from_slice(&content).map_err(|source| BundleError::Manifest {
            path: path.to_path_buf(),
            source,
        })
    }
}

impl Default for JsonManifestRepository {
    fn default() -> Self {
        Self::new()
    }
}

/// JSON representation of an artifact mapping (field order is the wire order)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct JsonArtifactRecord {
    identifier: String,
    source_paths: Vec<String>,
    version: String,
    size: String,
    hash: String,
    group: String,
    extra: String,
}

impl From<&ArtifactMapping> for JsonArtifactRecord {
    fn from(mapping: &ArtifactMapping) -> Self {
        Self {
            identifier: mapping.identifier().to_string(),
            source_paths: mapping.source_paths().to_vec(),
            version: mapping.version().to_string(),
            size: mapping.size().to_string(),
            hash: mapping.hash().to_string(),
            group: mapping.group().to_string(),
            extra: mapping.extra().to_string(),
        }
    }
}

impl From<JsonArtifactRecord> for ArtifactMapping {
    fn from(record: JsonArtifactRecord) -> Self {
        ArtifactMapping::from_parts(
            record.identifier,
            record.source_paths,
            record.version,
            record.size,
            record.hash,
            record.group,
            record.extra,
        )
    }
}

impl ManifestRepository for JsonManifestRepository {
    fn load_assets(&self, path: &Path) -> BundleResult<AssetManifest> {
        let records: BTreeMap<String, JsonArtifactRecord> = self.read_json(path)?;
        let mut manifest = AssetManifest::new();
        for (name, record) in records {
            manifest.insert(name, record.into());
        }
        Ok(manifest)
    }

    fn save_assets(&self, manifest: &AssetManifest, path: &Path) -> BundleResult<()> {
        let records: BTreeMap<&str, JsonArtifactRecord> = manifest
            .entries()
            .map(|(name, mapping)| (name, JsonArtifactRecord::from(mapping)))
            .collect();
        self.write_json(&records, path)
    }

    fn load_resources(&self, path: &Path) -> BundleResult<ResourceManifest> {
        let records: BTreeMap<String, String> = self.read_json(path)?;
        let mut manifest = ResourceManifest::new();
        for (name, resource_path) in records {
            manifest.insert(name, resource_path);
        }
        Ok(manifest)
    }

    fn save_resources(&self, manifest: &ResourceManifest, path: &Path) -> BundleResult<()> {
        let records: BTreeMap<&str, &str> = manifest.entries().collect();
        self.write_json(&records, path)
    }
}
