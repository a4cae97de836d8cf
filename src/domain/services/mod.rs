//! Domain Services
//!
//! Stateless services holding the naming and traversal rules.
//!
//! - `path_classifier` - canonical path extraction and normalization
//! - `tree_walker` - explicit-stack directory traversal
//! - `NameAssigner` - identifier assignment and discrepancy detection

pub mod path_classifier;
pub mod tree_walker;

mod name_assigner;

pub use name_assigner::NameAssigner;
