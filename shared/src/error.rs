//! Store error types
//!
//! A zero-row single-row lookup is not an error anywhere in the system:
//! gateway lookups return `Option` and creation paths take over from there.
//! These variants cover everything else the hosted backend can report.

use thiserror::Error;

/// Remote store failure
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    /// A write violated a declared uniqueness constraint
    #[error("Unique constraint violation: {0}")]
    Conflict(String),

    /// The store rejected or failed the query
    #[error("Query failed: {0}")]
    Query(String),

    /// The store could not be reached
    #[error("Connection failed: {0}")]
    Connection(String),

    /// The identity backend rejected the credentials or session
    #[error("Authentication failed: {0}")]
    Auth(String),
}

/// Result type for store gateway operations
pub type StoreResult<T> = Result<T, StoreError>;
