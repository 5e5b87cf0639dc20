//! Identity service contract
//!
//! Authentication is provided by the hosted backend; only this surface is
//! consumed. Session changes are pushed through a watch channel so cached
//! auth state can be re-derived without polling.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::sync::watch;

use crate::error::StoreResult;

/// Authenticated user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthUser {
    pub id: String,
    pub email: String,
}

/// Active session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub user: AuthUser,
    pub access_token: String,
    /// Expiry (unix seconds), if the backend reports one
    pub expires_at: Option<i64>,
}

#[async_trait]
pub trait IdentityService: Send + Sync {
    /// Password sign-in; fails with `StoreError::Auth` on bad credentials
    async fn sign_in(&self, email: &str, password: &str) -> StoreResult<Session>;

    async fn sign_out(&self) -> StoreResult<()>;

    /// Current session, if one is active
    async fn get_session(&self) -> StoreResult<Option<Session>>;

    /// Session-change notifications; the receiver always holds the latest
    /// session state
    fn subscribe(&self) -> watch::Receiver<Option<Session>>;
}
