//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod config_warning;
mod hash;
mod pass_mode;

pub use config_warning::ConfigWarning;
pub use hash::ContentHash;
pub use pass_mode::PassMode;
