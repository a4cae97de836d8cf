//! Build Context
//!
//! Everything one build run owns: resolved paths, settings, and the
//! transient tables (name registry, discrepancies, assignments, manifests).
//! A context is reset at the start of every run; nothing in it outlives the
//! run except what the manifest repository writes to disk.

use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::domain::entities::{AssetManifest, DiscrepancyTable, NameRegistry, ResourceManifest};
use crate::domain::ports::Assignment;
use crate::domain::services::path_classifier::{classify, normalize_separators, project_relative};

/// Absolute locations used by a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildPaths {
    pub project_root: PathBuf,
    /// Source tree to bundle
    pub content_root: PathBuf,
    /// Classified form of `content_root` plus `/`, stripped from keys to form identifiers
    pub content_prefix: String,
    /// Per-platform output directory (`<output_dir>/<platform>`)
    pub output_root: PathBuf,
    pub asset_manifest: PathBuf,
    pub resource_manifest: PathBuf,
    /// Search root for resource directories
    pub asset_dir: PathBuf,
    pub cache_dir: PathBuf,
}

impl BuildPaths {
    pub fn resolve(config: &Config, project_root: &Path) -> Self {
        let layout = &config.layout;
        let content_root = project_root.join(&layout.content_dir);
        let manifest_dir = project_root.join(&layout.manifest_dir);

        let classified = classify(
            &project_relative(project_root, &content_root),
            &layout.content_marker,
        );
        let content_prefix = if classified.is_empty() {
            String::new()
        } else {
            format!("{}/", normalize_separators(&classified).trim_end_matches('/'))
        };

        Self {
            project_root: project_root.to_path_buf(),
            content_root,
            content_prefix,
            output_root: project_root
                .join(&layout.output_dir)
                .join(&config.build.platform),
            asset_manifest: manifest_dir.join(&layout.asset_manifest),
            resource_manifest: manifest_dir.join(&layout.resource_manifest),
            asset_dir: project_root.join(&layout.asset_dir),
            cache_dir: project_root.join(&layout.cache_dir),
        }
    }
}

/// Per-run knobs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildSettings {
    pub platform: String,
    pub version: String,
    pub append_hash: bool,
    pub content_marker: String,
    pub resource_marker: String,
    pub group_marker: String,
}

impl BuildSettings {
    pub fn from_config(config: &Config) -> Self {
        Self {
            platform: config.build.platform.clone(),
            version: config.build.version.clone(),
            append_hash: config.build.append_hash,
            content_marker: config.layout.content_marker.clone(),
            resource_marker: config.layout.resource_marker.clone(),
            group_marker: config.build.group_marker.clone(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct BuildContext {
    pub paths: BuildPaths,
    pub settings: BuildSettings,
    pub registry: NameRegistry,
    /// Separate guard for resource names
    pub resource_names: NameRegistry,
    pub discrepancies: DiscrepancyTable,
    /// Identifiers handed to the bundler, filled by the dry pass
    pub assignments: Vec<Assignment>,
    pub assets: AssetManifest,
    pub resources: ResourceManifest,
}

impl BuildContext {
    pub fn new(paths: BuildPaths, settings: BuildSettings) -> Self {
        Self {
            paths,
            settings,
            registry: NameRegistry::new(),
            resource_names: NameRegistry::new(),
            discrepancies: DiscrepancyTable::new(),
            assignments: Vec::new(),
            assets: AssetManifest::new(),
            resources: ResourceManifest::new(),
        }
    }

    pub fn from_config(config: &Config, project_root: &Path) -> Self {
        Self::new(
            BuildPaths::resolve(config, project_root),
            BuildSettings::from_config(config),
        )
    }

    /// Drop all per-run state, keeping paths and settings
    pub fn reset(&mut self) {
        self.registry.clear();
        self.resource_names.clear();
        self.discrepancies.clear();
        self.assignments.clear();
        self.assets.clear();
        self.resources.clear();
    }
}
