//! Domain Entities
//!
//! Core domain entities of a build run.
//! - `SourceItem` - A file or directory under the content root
//! - `AssetManifest` / `ArtifactMapping` - Display name to artifact metadata
//! - `ResourceManifest` - Resource name to resource path
//! - `DiscrepancyTable` - Legacy identifier to canonical identifier
//! - `NameRegistry` - Case-insensitive display name guard

mod discrepancy;
mod manifest;
mod registry;
mod source_item;

pub use discrepancy::DiscrepancyTable;
pub use manifest::{ArtifactMapping, AssetManifest, ResourceManifest};
pub use registry::{Collision, NameRegistry};
pub use source_item::SourceItem;
