//! Auth Store
//!
//! Caches the identity backend's session so `is_authenticated` and the
//! current user are synchronous reads. The backend pushes session changes
//! through a watch channel; [`AuthStore::sync`] adopts the latest value.

use std::sync::Arc;

use shared::{AuthUser, IdentityService, Session, StoreResult};
use tokio::sync::watch;

pub struct AuthStore {
    identity: Arc<dyn IdentityService>,
    session: Option<Session>,
    changes: watch::Receiver<Option<Session>>,
}

impl AuthStore {
    pub fn new(identity: Arc<dyn IdentityService>) -> Self {
        let changes = identity.subscribe();
        Self {
            identity,
            session: None,
            changes,
        }
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn user(&self) -> Option<&AuthUser> {
        self.session.as_ref().map(|s| &s.user)
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    /// Password sign-in; caches the session on success
    pub async fn login(&mut self, email: &str, password: &str) -> StoreResult<()> {
        let session = self.identity.sign_in(email, password).await.map_err(|e| {
            tracing::error!(email, error = %e, "Login failed");
            e
        })?;
        tracing::info!(email, "Logged in");
        self.session = Some(session);
        Ok(())
    }

    /// Sign out and clear the cached session
    pub async fn logout(&mut self) -> StoreResult<()> {
        self.identity.sign_out().await.map_err(|e| {
            tracing::error!(error = %e, "Logout failed");
            e
        })?;
        self.session = None;
        Ok(())
    }

    /// Pull the backend's current session, e.g. at application start
    pub async fn restore(&mut self) -> StoreResult<()> {
        self.session = self.identity.get_session().await?;
        Ok(())
    }

    /// Adopt any session change the backend has pushed since the last call
    pub fn sync(&mut self) {
        if self.changes.has_changed().unwrap_or(false) {
            self.session = self.changes.borrow_and_update().clone();
        }
    }
}
