//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod bundler;
pub mod file_system;
pub mod identifier_store;
pub mod manifest_repository;
pub mod resource_locator;

pub use bundler::{Assignment, Bundler};
pub use file_system::{DirEntry, FileSystem, FsError, FsResult};
pub use identifier_store::IdentifierStore;
pub use manifest_repository::ManifestRepository;
pub use resource_locator::ResourceLocator;
