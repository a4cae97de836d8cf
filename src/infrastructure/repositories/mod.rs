//! Repository Implementations
//!
//! Concrete implementations of domain repository ports.

mod identifier_sidecar;
mod manifest;
mod memory;

pub use identifier_sidecar::SidecarIdentifierStore;
pub use manifest::JsonManifestRepository;
pub use memory::InMemoryIdentifierStore;
