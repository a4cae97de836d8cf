//! IdentifierStore port - stable per-source-item identifiers
//!
//! Every source file carries the identifier it was first bundled under.
//! The store is keyed by the item's canonical source path
//! (e.g. `Assets/AssetBundles/Audio/click.wav`).

use crate::error::BundleResult;

/// Key-value store of assigned artifact identifiers
///
/// Implementations:
/// - `SidecarIdentifierStore` - one `<source>.meta` TOML sidecar per item
/// - `InMemoryIdentifierStore` - process-local map, for dry runs and tests
pub trait IdentifierStore {
    /// Identifier previously assigned to the item, if any
    fn get(&self, key: &str) -> BundleResult<Option<String>>;

    /// Assign an identifier to the item
    fn set(&self, key: &str, identifier: &str) -> BundleResult<()>;
}

impl<T: IdentifierStore + ?Sized> IdentifierStore for &T {
    fn get(&self, key: &str) -> BundleResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, identifier: &str) -> BundleResult<()> {
        (**self).set(key, identifier)
    }
}
