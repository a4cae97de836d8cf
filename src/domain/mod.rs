//! Domain Layer
//!
//! The naming, mapping and reconciliation rules of bundlemap.
//!
//! ## Structure
//!
//! - `entities/` - Core domain entities (SourceItem, manifests, DiscrepancyTable)
//! - `value_objects/` - Immutable value types (ContentHash, PassMode)
//! - `services/` - Domain services (path classification, tree walk, NameAssigner)
//! - `ports/` - Interface definitions for infrastructure
//!
//! ## Design Principles
//!
//! 1. **Ports & Adapters** - All I/O goes through trait-defined ports
//! 2. **No globals** - Per-run state lives in `application::BuildContext`
//! 3. **No recursion** - Directory walks use an explicit stack

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
