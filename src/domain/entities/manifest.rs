//! Manifest entities - the two durable outputs of a build
//!
//! - `AssetManifest` maps display names to `ArtifactMapping` records
//! - `ResourceManifest` maps resource names to resource-root-relative paths
//!
//! These are pure data structures; persistence lives in ManifestRepository.

use std::collections::BTreeMap;

use crate::domain::value_objects::ContentHash;

/// Metadata recorded for one display name
///
/// `size` and `hash` stay empty until the bundler has produced the artifact.
/// Directory entries have no artifact of their own: their identifier is empty
/// and `source_paths` lists the names of their member files.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArtifactMapping {
    identifier: String,
    source_paths: Vec<String>,
    version: String,
    size: String,
    hash: String,
    group: String,
    extra: String,
}

impl ArtifactMapping {
    pub fn new(
        identifier: impl Into<String>,
        source_paths: Vec<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            identifier: identifier.into(),
            source_paths,
            version: version.into(),
            ..Self::default()
        }
    }

    /// Rebuild a mapping from stored fields
    pub fn from_parts(
        identifier: String,
        source_paths: Vec<String>,
        version: String,
        size: String,
        hash: String,
        group: String,
        extra: String,
    ) -> Self {
        Self {
            identifier,
            source_paths,
            version,
            size,
            hash,
            group,
            extra,
        }
    }

    /// Attach the produced artifact's size and digest
    pub fn with_artifact(mut self, size: u64, hash: &ContentHash) -> Self {
        self.size = size.to_string();
        self.hash = hash.hex().to_string();
        self
    }

    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.group = group.into();
        self
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn source_paths(&self) -> &[String] {
        &self.source_paths
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn size(&self) -> &str {
        &self.size
    }

    pub fn hash(&self) -> &str {
        &self.hash
    }

    pub fn group(&self) -> &str {
        &self.group
    }

    pub fn extra(&self) -> &str {
        &self.extra
    }

    /// Whether the artifact had been produced when the mapping was built
    pub fn is_built(&self) -> bool {
        !self.size.is_empty() && !self.hash.is_empty()
    }
}

/// Display name -> artifact metadata
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssetManifest {
    entries: BTreeMap<String, ArtifactMapping>,
}

impl AssetManifest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn get(&self, name: &str) -> Option<&ArtifactMapping> {
        self.entries.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Insert a mapping, returning the one it replaced
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        mapping: ArtifactMapping,
    ) -> Option<ArtifactMapping> {
        self.entries.insert(name.into(), mapping)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(|s| s.as_str())
    }

    pub fn entries(&self) -> impl Iterator<Item = (&str, &ArtifactMapping)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

/// Resource name -> resource-root-relative path (no extension)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResourceManifest {
    entries: BTreeMap<String, String>,
}

impl ResourceManifest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(|s| s.as_str())
    }

    pub fn insert(&mut self, name: impl Into<String>, path: impl Into<String>) -> Option<String> {
        self.entries.insert(name.into(), path.into())
    }

    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests;
