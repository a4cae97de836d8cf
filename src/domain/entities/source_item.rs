//! Source item entity - a file or directory under the content root

use std::path::{Path, PathBuf};

use crate::domain::ports::DirEntry;
use crate::domain::services::path_classifier::{classify, file_stem, project_relative};

/// A file or directory discovered by a content tree scan.
///
/// Items are rediscovered on every run and never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceItem {
    /// Absolute filesystem path
    path: PathBuf,
    /// Canonical path rooted at the content marker (`Assets/...`), relative to the project root
    key: String,
    is_dir: bool,
}

impl SourceItem {
    /// Build an item from a walked entry; `None` when the path is not under `marker`.
    ///
    /// The marker is searched below `project_root` only, so an ancestor of the
    /// project that happens to carry the marker name never leaks into the key.
    pub fn classify(entry: &DirEntry, project_root: &Path, marker: &str) -> Option<Self> {
        let key = classify(&project_relative(project_root, &entry.path), marker);
        if key.is_empty() {
            return None;
        }
        Some(Self {
            path: entry.path.clone(),
            key,
            is_dir: entry.is_dir,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Canonical source key, also the identifier store key
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn is_dir(&self) -> bool {
        self.is_dir
    }

    /// Display name: the last segment without extension
    pub fn display_name(&self) -> &str {
        file_stem(&self.key)
    }
}
