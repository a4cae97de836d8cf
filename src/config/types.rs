//! Configuration type definitions

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::BundleResult;

use super::loader;

/// Where things live, relative to the project root
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutConfig {
    /// Root segment that canonical source keys start at
    #[serde(default = "default_content_marker")]
    pub content_marker: String,

    /// Source tree to bundle; must start with `content_marker`
    #[serde(default = "default_content_dir")]
    pub content_dir: String,

    /// Parent of the per-platform output directories
    #[serde(default = "default_output_dir")]
    pub output_dir: String,

    /// Directory receiving both manifests
    #[serde(default = "default_manifest_dir")]
    pub manifest_dir: String,

    #[serde(default = "default_asset_manifest")]
    pub asset_manifest: String,

    #[serde(default = "default_resource_manifest")]
    pub resource_manifest: String,

    /// Directory searched for resource roots
    #[serde(default = "default_asset_dir")]
    pub asset_dir: String,

    /// Directory name marking a resource root
    #[serde(default = "default_resource_marker")]
    pub resource_marker: String,

    #[serde(default = "default_cache_dir")]
    pub cache_dir: String,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            content_marker: default_content_marker(),
            content_dir: default_content_dir(),
            output_dir: default_output_dir(),
            manifest_dir: default_manifest_dir(),
            asset_manifest: default_asset_manifest(),
            resource_manifest: default_resource_manifest(),
            asset_dir: default_asset_dir(),
            resource_marker: default_resource_marker(),
            cache_dir: default_cache_dir(),
        }
    }
}

fn default_content_marker() -> String {
    "Assets".to_string()
}

fn default_content_dir() -> String {
    "Assets/AssetBundles".to_string()
}

fn default_output_dir() -> String {
    "Assets/StreamingAssets/AssetBundles".to_string()
}

fn default_manifest_dir() -> String {
    "Assets/AssetMap/Resources".to_string()
}

fn default_asset_manifest() -> String {
    "artifact_map.json".to_string()
}

fn default_resource_manifest() -> String {
    "resource_map.json".to_string()
}

fn default_asset_dir() -> String {
    "Assets".to_string()
}

fn default_resource_marker() -> String {
    "Resources".to_string()
}

fn default_cache_dir() -> String {
    "Library/BundleCache".to_string()
}

/// Per-run build settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildConfig {
    /// Platform name; names the output subdirectory and the platform manifest artifact
    #[serde(default = "default_platform")]
    pub platform: String,

    /// Version stamped on every manifest record
    #[serde(default = "default_version")]
    pub version: String,

    /// Suffix identifiers with the source content hash
    #[serde(default)]
    pub append_hash: bool,

    /// Path segment marker introducing a group tag (`Package_Audio` -> `Audio`)
    #[serde(default = "default_group_marker")]
    pub group_marker: String,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            platform: default_platform(),
            version: default_version(),
            append_hash: false,
            group_marker: default_group_marker(),
        }
    }
}

fn default_platform() -> String {
    std::env::consts::OS.to_string()
}

fn default_version() -> String {
    "1.0.0".to_string()
}

fn default_group_marker() -> String {
    "Package_".to_string()
}

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub layout: LayoutConfig,

    #[serde(default)]
    pub build: BuildConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> BundleResult<Self> {
        loader::load_with_warnings(path).map(|(config, _)| config)
    }
}
