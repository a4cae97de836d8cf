//! Sidecar Identifier Store
//!
//! Implements the IdentifierStore port with one TOML sidecar per source item:
//! `Assets/AssetBundles/Audio/click.wav` keeps its identifier in
//! `Assets/AssetBundles/Audio/click.wav.meta`:
//!
//! ```toml
//! identifier = "audio/click"
//! ```
//!
//! Other keys already present in a sidecar are preserved on update.

use std::path::{Path, PathBuf};

use crate::domain::ports::{FileSystem, IdentifierStore};
use crate::domain::services::path_classifier::{with_suffix, META_SUFFIX};
use crate::error::{BundleError, BundleResult};
use crate::infrastructure::fs::LocalFs;

const IDENTIFIER_FIELD: &str = "identifier";

/// Identifier store backed by per-item `.meta` sidecars under a project root
pub struct SidecarIdentifierStore {
    fs: LocalFs,
    project_root: PathBuf,
}

impl SidecarIdentifierStore {
    /// Create a store resolving keys against `project_root`
    pub fn new(project_root: impl Into<PathBuf>) -> Self {
        Self::with_fs(LocalFs::new(), project_root)
    }

    /// Create with a custom file system
    pub fn with_fs(fs: LocalFs, project_root: impl Into<PathBuf>) -> Self {
        Self {
            fs,
            project_root: project_root.into(),
        }
    }

    /// Sidecar file holding the identifier of `key`
    pub fn sidecar_path(&self, key: &str) -> PathBuf {
        with_suffix(&self.project_root.join(key), META_SUFFIX)
    }

    fn read_table(&self, path: &Path) -> BundleResult<Option<toml::Table>> {
        if !self.fs.exists(path) {
            return Ok(None);
        }
        let bytes = self.fs.read(path)?;
        let content = String::from_utf8_lossy(&bytes);
        let table = content
            .parse::<toml::Table>()
            .map_err(|e| BundleError::InvalidSidecar {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;
        Ok(Some(table))
    }
}

impl IdentifierStore for SidecarIdentifierStore {
    fn get(&self, key: &str) -> BundleResult<Option<String>> {
        let path = self.sidecar_path(key);
        Ok(self.read_table(&path)?.and_then(|table| {
            table
                .get(IDENTIFIER_FIELD)
                .and_then(|value| value.as_str())
                .map(str::to_string)
        }))
    }

    fn set(&self, key: &str, identifier: &str) -> BundleResult<()> {
        let path = self.sidecar_path(key);
        let mut table = self.read_table(&path)?.unwrap_or_default();
        table.insert(
            IDENTIFIER_FIELD.to_string(),
            toml::Value::String(identifier.to_string()),
        );

        let content = toml::to_string(&table).map_err(|e| BundleError::InvalidSidecar {
            path: path.clone(),
            message: e.to_string(),
        })?;
        self.fs.write(&path, content.as_bytes())?;
        Ok(())
    }
}
