//! Name Assigner Domain Service
//!
//! Computes the canonical artifact identifier of a source file and reconciles
//! it with the identifier the item was already bundled under.
//!
//! A stored identifier always wins. When it no longer matches the canonical
//! one, the divergence goes into the [`DiscrepancyTable`] so reconciliation
//! can still recognise the artifact under its legacy name.

use tracing::debug;

use crate::domain::entities::{DiscrepancyTable, SourceItem};
use crate::domain::ports::{FileSystem, IdentifierStore};
use crate::domain::services::path_classifier::strip_extension;
use crate::error::BundleResult;

/// Identifier assignment for one build run
pub struct NameAssigner<'a, IS, FS>
where
    IS: IdentifierStore + ?Sized,
    FS: FileSystem + ?Sized,
{
    store: &'a IS,
    fs: &'a FS,
    /// Source key prefix removed from identifiers (`Assets/AssetBundles/`)
    content_prefix: &'a str,
    append_hash: bool,
}

impl<'a, IS, FS> NameAssigner<'a, IS, FS>
where
    IS: IdentifierStore + ?Sized,
    FS: FileSystem + ?Sized,
{
    pub fn new(store: &'a IS, fs: &'a FS, content_prefix: &'a str, append_hash: bool) -> Self {
        Self {
            store,
            fs,
            content_prefix,
            append_hash,
        }
    }

    /// Identifier derived from the item's current source path (and content)
    pub fn canonical_identifier(&self, item: &SourceItem) -> BundleResult<String> {
        let stripped = strip_extension(item.key());
        let relative = stripped
            .strip_prefix(self.content_prefix)
            .unwrap_or(stripped);

        let mut canonical = relative.to_lowercase();
        if self.append_hash {
            let hash = self.fs.hash(item.path())?;
            canonical.push('_');
            canonical.push_str(hash.hex());
        }
        Ok(canonical)
    }

    /// Identifier the item must be bundled under, always lower-cased.
    ///
    /// Stores the canonical identifier for items that have none yet. When
    /// `discrepancies` is given, a diverging stored identifier is recorded
    /// there; the stored identifier is returned either way.
    pub fn assign(
        &self,
        item: &SourceItem,
        discrepancies: Option<&mut DiscrepancyTable>,
    ) -> BundleResult<String> {
        let canonical = self.canonical_identifier(item)?;
        let previous = self
            .store
            .get(item.key())?
            .filter(|identifier| !identifier.is_empty())
            .map(|identifier| identifier.to_lowercase());

        match previous {
            None => {
                debug!(key = item.key(), identifier = %canonical, "assigned identifier");
                self.store.set(item.key(), &canonical)?;
                Ok(canonical)
            }
            Some(previous) if previous == canonical => Ok(previous),
            Some(previous) => {
                if let Some(table) = discrepancies {
                    debug!(
                        key = item.key(),
                        legacy = %previous,
                        canonical = %canonical,
                        "identifier diverges from source path"
                    );
                    table.record(&previous, &canonical);
                }
                Ok(previous)
            }
        }
    }
}
