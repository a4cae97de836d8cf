//! Pass Mode Value Object

/// Which half of a build run a manifest pass belongs to.
///
/// - `Dry`: assigns identifiers and records discrepancies, writes nothing
/// - `Commit`: builds the manifest tables from produced output and writes them
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PassMode {
    #[default]
    Dry,
    Commit,
}

impl PassMode {
    pub fn from_write_flag(write: bool) -> Self {
        if write {
            PassMode::Commit
        } else {
            PassMode::Dry
        }
    }

    pub fn is_dry(self) -> bool {
        self == PassMode::Dry
    }
}

impl std::fmt::Display for PassMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PassMode::Dry => write!(f, "dry"),
            PassMode::Commit => write!(f, "commit"),
        }
    }
}
