//! Bundler port - the external content packer
//!
//! The bundler runs between the dry pass and the commit pass. It turns each
//! assigned source item into one artifact named after its identifier and
//! writes descriptor/metadata sidecars next to it.

use std::path::{Path, PathBuf};

use crate::error::BundleResult;

/// One source item and the identifier it must be bundled under
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    /// Absolute path of the source file
    pub source: PathBuf,
    /// Canonical source key (identifier store key)
    pub key: String,
    /// Artifact identifier, relative to the output root
    pub identifier: String,
}

impl Assignment {
    pub fn new(source: impl Into<PathBuf>, key: impl Into<String>, identifier: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            key: key.into(),
            identifier: identifier.into(),
        }
    }
}

/// Abstract content bundler
pub trait Bundler {
    /// Drop any cached build state; called once per run before `bundle`
    fn clear_cache(&self) -> BundleResult<()>;

    /// Produce one artifact per distinct identifier under `output_dir`,
    /// plus the platform-wide manifest artifact named `platform`
    fn bundle(&self, output_dir: &Path, assignments: &[Assignment], platform: &str)
        -> BundleResult<()>;
}
