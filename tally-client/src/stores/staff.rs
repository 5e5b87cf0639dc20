//! Staff Store

use std::sync::Arc;

use shared::models::{Staff, StaffUpdate};
use shared::StoreGateway;

use crate::repository::{RepoError, RepoResult, StaffRepository};

/// Staff roster state
pub struct StaffStore {
    repo: StaffRepository,
    staff: Vec<Staff>,
    loading: bool,
    error: Option<RepoError>,
}

impl StaffStore {
    pub fn new(store: Arc<dyn StoreGateway>) -> Self {
        Self {
            repo: StaffRepository::new(store),
            staff: Vec::new(),
            loading: false,
            error: None,
        }
    }

    pub fn staff(&self) -> &[Staff] {
        &self.staff
    }

    /// The aggregation population: active, trackable members
    pub fn trackable(&self) -> Vec<&Staff> {
        self.staff.iter().filter(|s| s.is_tracked()).collect()
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&RepoError> {
        self.error.as_ref()
    }

    /// Fetch the full roster; on failure the previous snapshot stays
    pub async fn fetch_all(&mut self) {
        self.loading = true;
        self.error = None;
        match self.repo.find_all().await {
            Ok(rows) => self.staff = rows,
            Err(e) => self.error = Some(e),
        }
        self.loading = false;
    }

    /// Update a member and replace them in the local roster
    pub async fn update(&mut self, id: &str, update: StaffUpdate) -> RepoResult<()> {
        self.loading = true;
        self.error = None;
        let result = self.repo.update(id, update).await;
        self.loading = false;
        match result {
            Ok(updated) => {
                if let Some(existing) = self.staff.iter_mut().find(|s| s.id == id) {
                    *existing = updated;
                }
                Ok(())
            }
            Err(e) => {
                self.error = Some(e.clone());
                Err(e)
            }
        }
    }
}
