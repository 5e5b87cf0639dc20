//! Back-office data layer for the tally suite
//!
//! Repositories and state stores over the remote store gateway: monthly
//! record resolution, collection/expense/product-sale aggregation, salary
//! derivation, and the composed monthly summary. One [`AppSession`] per
//! application session wires the whole layer together.

pub mod config;
pub mod repository;
pub mod session;
pub mod stores;

// Re-exports
pub use config::Config;
pub use repository::{RepoError, RepoResult};
pub use session::AppSession;
