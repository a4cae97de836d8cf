//! Reconcile result types

use std::path::PathBuf;

/// A delete that did not go through
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReconcileFailure {
    pub path: PathBuf,
    pub message: String,
}

/// Result of a reconcile operation
#[derive(Debug, Clone, Default)]
pub struct ReconcileResult {
    /// Artifacts and directories removed (sidecars not listed)
    pub deleted: Vec<PathBuf>,
    /// Produced paths kept alive by a discrepancy entry
    pub kept_by_discrepancy: Vec<String>,
    pub failures: Vec<ReconcileFailure>,
}

impl ReconcileResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn record_failure(&mut self, path: PathBuf, message: impl Into<String>) {
        self.failures.push(ReconcileFailure {
            path,
            message: message.into(),
        });
    }
}
