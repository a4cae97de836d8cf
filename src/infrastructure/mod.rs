//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - File system implementation (Local)
//! - `repositories/` - Identifier stores and the manifest repository
//! - `bundler/` - Reference bundler
//! - `resources/` - Resource root discovery

pub mod bundler;
pub mod fs;
pub mod repositories;
pub mod resources;

// Re-export for convenience
pub use bundler::CopyBundler;
pub use fs::LocalFs;
pub use repositories::{InMemoryIdentifierStore, JsonManifestRepository, SidecarIdentifierStore};
pub use resources::FsResourceLocator;
