//! Manifest Use Case
//!
//! Builds the two durable outputs of a run:
//! - the asset manifest (display name -> artifact metadata)
//! - the resource manifest (resource name -> resource path)

mod use_case;


pub use use_case::ManifestUseCase;
