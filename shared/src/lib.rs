//! Shared types for the tally back-office suite
//!
//! Entity models, the remote-store and identity-service contracts, and the
//! pure derivation logic shared between the client layer and store backends.

pub mod error;
pub mod gateway;
pub mod identity;
pub mod models;
pub mod util;

// Re-exports
pub use error::{StoreError, StoreResult};
pub use gateway::StoreGateway;
pub use identity::{AuthUser, IdentityService, Session};
pub use serde::{Deserialize, Serialize};
