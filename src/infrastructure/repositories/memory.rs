//! In-memory Identifier Store
//!
//! Process-local identifier store. Used by dry scans that must not touch
//! sidecars and by tests.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::domain::ports::IdentifierStore;
use crate::error::BundleResult;

/// Identifier store kept in a shared map
///
/// Uses `Arc<Mutex<>>` internally so it can be cloned and shared.
#[derive(Debug, Clone, Default)]
pub struct InMemoryIdentifierStore {
    identifiers: Arc<Mutex<HashMap<String, String>>>,
}

impl InMemoryIdentifierStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of items with an identifier
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
        // A poisoned map is still a consistent map of strings.
        self.identifiers
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl IdentifierStore for InMemoryIdentifierStore {
    fn get(&self, key: &str) -> BundleResult<Option<String>> {
        Ok(self.lock().get(key).cloned())
    }

    fn set(&self, key: &str, identifier: &str) -> BundleResult<()> {
        self.lock()
            .insert(key.to_string(), identifier.to_string());
        Ok(())
    }
}
