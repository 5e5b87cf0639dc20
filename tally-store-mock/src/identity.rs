//! Mock identity service
//!
//! One fixed credential pair; the active session lives in the watch
//! channel so subscribers and `get_session` always agree.

use shared::identity::{AuthUser, IdentityService, Session};
use shared::{StoreError, StoreResult};
use tokio::sync::watch;

pub struct MockIdentity {
    email: String,
    password: String,
    sessions: watch::Sender<Option<Session>>,
}

impl MockIdentity {
    pub fn new(email: &str, password: &str) -> Self {
        let (sessions, _) = watch::channel(None);
        Self {
            email: email.to_string(),
            password: password.to_string(),
            sessions,
        }
    }
}

#[async_trait::async_trait]
impl IdentityService for MockIdentity {
    async fn sign_in(&self, email: &str, password: &str) -> StoreResult<Session> {
        if email != self.email || password != self.password {
            return Err(StoreError::Auth("invalid credentials".to_string()));
        }

        let session = Session {
            user: AuthUser {
                id: uuid::Uuid::new_v4().to_string(),
                email: email.to_string(),
            },
            access_token: uuid::Uuid::new_v4().to_string(),
            expires_at: None,
        };
        self.sessions.send_replace(Some(session.clone()));
        Ok(session)
    }

    async fn sign_out(&self) -> StoreResult<()> {
        self.sessions.send_replace(None);
        Ok(())
    }

    async fn get_session(&self) -> StoreResult<Option<Session>> {
        Ok(self.sessions.borrow().clone())
    }

    fn subscribe(&self) -> watch::Receiver<Option<Session>> {
        self.sessions.subscribe()
    }
}
