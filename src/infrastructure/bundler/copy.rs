//! Copy Bundler
//!
//! A reference Bundler that packs each identifier's sources into a single
//! artifact by concatenation. For every artifact it writes a
//! `<identifier>.manifest` descriptor; it also writes the platform-wide
//! manifest artifact listing every identifier.
//!
//! Input stamps are kept in a cache directory so repeated `bundle` calls
//! leave unchanged artifacts untouched; `clear_cache` forces a full rebuild.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info};

use crate::domain::ports::{Assignment, Bundler, FileSystem};
use crate::domain::services::path_classifier::{with_suffix, DESCRIPTOR_SUFFIX};
use crate::domain::value_objects::ContentHash;
use crate::error::{BundleError, BundleResult};
use crate::infrastructure::fs::LocalFs;

const STAMP_SUFFIX: &str = ".stamp";

/// Descriptor written next to every artifact
#[derive(Debug, Serialize)]
struct Descriptor<'a> {
    identifier: &'a str,
    hash: &'a str,
    sources: Vec<&'a str>,
}

/// Body of the platform-wide manifest artifact
#[derive(Debug, Serialize)]
struct PlatformManifest<'a> {
    platform: &'a str,
    artifacts: Vec<&'a str>,
}

pub struct CopyBundler {
    fs: LocalFs,
    cache_dir: PathBuf,
}

impl CopyBundler {
    pub fn new(cache_dir: impl Into<PathBuf>) -> Self {
        Self {
            fs: LocalFs::new(),
            cache_dir: cache_dir.into(),
        }
    }

    fn write_descriptor(&self, artifact: &Path, descriptor: &Descriptor<'_>) -> BundleResult<()> {
        let content =
            toml::to_string(descriptor).map_err(|e| BundleError::Bundler(e.to_string()))?;
        self.fs
            .write(&with_suffix(artifact, DESCRIPTOR_SUFFIX), content.as_bytes())?;
        Ok(())
    }

    /// Whether the cached stamp says `artifact` already holds `hash`
    fn is_fresh(&self, identifier: &str, artifact: &Path, hash: &ContentHash) -> bool {
        let stamp = with_suffix(&self.cache_dir.join(identifier), STAMP_SUFFIX);
        self.fs.exists(artifact)
            && self
                .fs
                .read(&stamp)
                .map(|bytes| bytes == hash.hex().as_bytes())
                .unwrap_or(false)
    }

    fn write_stamp(&self, identifier: &str, hash: &ContentHash) -> BundleResult<()> {
        let stamp = with_suffix(&self.cache_dir.join(identifier), STAMP_SUFFIX);
        self.fs.write(&stamp, hash.hex().as_bytes())?;
        Ok(())
    }
}

impl Bundler for CopyBundler {
    fn clear_cache(&self) -> BundleResult<()> {
        if self.fs.exists(&self.cache_dir) {
            debug!(cache = %self.cache_dir.display(), "clearing bundle cache");
            self.fs.remove_dir_all(&self.cache_dir)?;
        }
        Ok(())
    }

    fn bundle(
        &self,
        output_dir: &Path,
        assignments: &[Assignment],
        platform: &str,
    ) -> BundleResult<()> {
        self.fs.create_dir_all(output_dir)?;

        let mut by_identifier: BTreeMap<&str, Vec<&Assignment>> = BTreeMap::new();
        for assignment in assignments {
            by_identifier
                .entry(assignment.identifier.as_str())
                .or_default()
                .push(assignment);
        }

        let mut written = 0usize;
        for (&identifier, members) in by_identifier.iter_mut() {
            members.sort_by(|a, b| a.key.cmp(&b.key));

            let mut content = Vec::new();
            for member in members.iter() {
                content.extend(self.fs.read(&member.source)?);
            }
            let hash = ContentHash::from_bytes(&content);
            let artifact = output_dir.join(identifier);

            if self.is_fresh(identifier, &artifact, &hash) {
                debug!(identifier, "artifact unchanged");
                continue;
            }

            self.fs.write(&artifact, &content)?;
            self.write_descriptor(
                &artifact,
                &Descriptor {
                    identifier,
                    hash: hash.hex(),
                    sources: members.iter().map(|m| m.key.as_str()).collect(),
                },
            )?;
            self.write_stamp(identifier, &hash)?;
            written += 1;
        }

        let platform_manifest = PlatformManifest {
            platform,
            artifacts: by_identifier.keys().copied().collect(),
        };
        let content = serde_json::to_vec_pretty(&platform_manifest).map_err(|source| {
            BundleError::Manifest {
                path: output_dir.join(platform),
                source,
            }
        })?;
        let platform_artifact = output_dir.join(platform);
        self.fs.write(&platform_artifact, &content)?;
        self.write_descriptor(
            &platform_artifact,
            &Descriptor {
                identifier: platform,
                hash: ContentHash::from_bytes(&content).hex(),
                sources: Vec::new(),
            },
        )?;

        info!(
            artifacts = by_identifier.len(),
            written,
            output = %output_dir.display(),
            "bundled artifacts"
        );
        Ok(())
    }
}
