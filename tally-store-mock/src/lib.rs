//! In-memory backend for tests and local development
//!
//! Implements the store gateway and identity contracts over guarded maps,
//! enforcing the same uniqueness keys the hosted store declares, so the
//! client layer can be exercised end to end without a live backend.

pub mod identity;
pub mod store;

// Re-exports
pub use identity::MockIdentity;
pub use store::{MemoryStore, WriteCounters};
