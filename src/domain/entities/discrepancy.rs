//! Discrepancy table - legacy identifier to canonical identifier
//!
//! Populated by the dry pass, consumed by the same run's reconciliation and
//! then dropped. Keys and values are `/`-prefixed and lower-cased so they
//! compare directly against reconciliation paths.

use std::collections::HashMap;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiscrepancyTable {
    entries: HashMap<String, String>,
}

impl DiscrepancyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that an artifact stored as `previous` is now canonically `canonical`
    pub fn record(&mut self, previous: &str, canonical: &str) {
        self.entries.insert(
            format!("/{}", previous.to_lowercase()),
            format!("/{}", canonical.to_lowercase()),
        );
    }

    /// Canonical path recorded for a legacy path
    pub fn get(&self, legacy_path: &str) -> Option<&str> {
        self.entries.get(legacy_path).map(|s| s.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}
