//! Name registry - case-insensitive duplicate guard for display names
//!
//! Display names must be unique within a manifest. A second item whose name
//! matches an earlier one (ignoring case) is logged and renamed with a random
//! suffix; the run always continues.

use std::collections::HashSet;

use tracing::error;
use uuid::Uuid;

/// A display name that had to be renamed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collision {
    /// The name as requested
    pub name: String,
    /// The name actually registered
    pub renamed_to: String,
    /// Source path of the item that lost the name
    pub path: String,
}

/// Display names seen during the current run
#[derive(Debug, Clone, Default)]
pub struct NameRegistry {
    seen: HashSet<String>,
    collisions: Vec<Collision>,
}

impl NameRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `name` (ignoring case) is already taken
    pub fn contains(&self, name: &str) -> bool {
        self.seen.contains(&name.to_lowercase())
    }

    /// Register `name` for the item at `path`, returning the name to use.
    pub fn register(&mut self, name: &str, path: &str) -> String {
        if self.seen.insert(name.to_lowercase()) {
            return name.to_string();
        }

        let renamed = loop {
            let candidate = format!("{}_{}", name, Uuid::new_v4().simple());
            if !self.contains(&candidate) {
                break candidate;
            }
        };
        error!(
            name,
            renamed = %renamed,
            path,
            "duplicate name (case-insensitive), check the source path"
        );

        self.seen.insert(renamed.to_lowercase());
        self.collisions.push(Collision {
            name: name.to_string(),
            renamed_to: renamed.clone(),
            path: path.to_string(),
        });
        renamed
    }

    /// Collisions recorded since the last `clear`
    pub fn collisions(&self) -> &[Collision] {
        &self.collisions
    }

    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }

    pub fn clear(&mut self) {
        self.seen.clear();
        self.collisions.clear();
    }
}
