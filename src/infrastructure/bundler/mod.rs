//! Bundler Implementations
//!
//! Concrete implementations of the Bundler port.

mod copy;

pub use copy::CopyBundler;
