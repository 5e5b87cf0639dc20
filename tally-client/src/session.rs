//! Application session
//!
//! One [`AppSession`] per running application: it owns every store,
//! constructed explicitly from the gateway handles and passed to whatever
//! layer needs them. No store is reachable globally.

use std::sync::Arc;

use shared::{IdentityService, StoreGateway};

use crate::config::Config;
use crate::stores::{AuthStore, StaffStore, SummaryStore};

pub struct AppSession {
    config: Config,
    auth: AuthStore,
    staff: StaffStore,
    summary: SummaryStore,
}

impl AppSession {
    pub fn new(
        config: Config,
        store: Arc<dyn StoreGateway>,
        identity: Arc<dyn IdentityService>,
    ) -> Self {
        Self {
            config,
            auth: AuthStore::new(identity),
            staff: StaffStore::new(store.clone()),
            summary: SummaryStore::new(store),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn auth(&self) -> &AuthStore {
        &self.auth
    }

    pub fn auth_mut(&mut self) -> &mut AuthStore {
        &mut self.auth
    }

    pub fn staff(&self) -> &StaffStore {
        &self.staff
    }

    pub fn staff_mut(&mut self) -> &mut StaffStore {
        &mut self.staff
    }

    pub fn summary(&self) -> &SummaryStore {
        &self.summary
    }

    pub fn summary_mut(&mut self) -> &mut SummaryStore {
        &mut self.summary
    }
}
