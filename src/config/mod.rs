//! Configuration module for bundlemap
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (BUNDLEMAP_*)
//! 3. Project config (`bundlemap.toml` at the project root)
//! 4. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use crate::domain::value_objects::ConfigWarning;

pub use loader::{
    apply_overrides, load_or_default, load_with_warnings, with_env_overrides, CONFIG_FILE_NAME,
};
pub use types::{BuildConfig, Config, LayoutConfig};
