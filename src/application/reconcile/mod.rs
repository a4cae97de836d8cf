//! Reconcile Use Case
//!
//! Deletes produced artifacts that no current source item (or live legacy
//! identifier) accounts for.

mod result;
mod use_case;


pub use result::{ReconcileFailure, ReconcileResult};
pub use use_case::ReconcileUseCase;
