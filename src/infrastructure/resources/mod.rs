//! Resource Locator Implementations

mod locator;

pub use locator::FsResourceLocator;
