//! Content hash of a source file or produced artifact.

use std::fmt;

use sha2::{Digest, Sha256};

/// Lower-case hex SHA-256 digest.
///
/// Appears in manifests (`hash` field), in hash-suffixed identifiers
/// (`audio/click_<hex>`) and in bundler cache stamps.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContentHash(String);

impl ContentHash {
    pub fn from_bytes(content: &[u8]) -> Self {
        Self(format!("{:x}", Sha256::digest(content)))
    }

    /// Wrap a digest computed elsewhere (e.g. streamed from disk)
    pub fn from_hex(hex: &str) -> Self {
        Self(hex.to_ascii_lowercase())
    }

    pub fn hex(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContentHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
