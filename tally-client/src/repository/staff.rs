//! Staff Repository

use std::sync::Arc;

use shared::models::{Staff, StaffUpdate};
use shared::StoreGateway;

use super::{BaseRepository, RepoError, RepoResult};

#[derive(Clone)]
pub struct StaffRepository {
    base: BaseRepository,
}

impl StaffRepository {
    pub fn new(store: Arc<dyn StoreGateway>) -> Self {
        Self {
            base: BaseRepository::new(store),
        }
    }

    /// All staff, ordered by name
    pub async fn find_all(&self) -> RepoResult<Vec<Staff>> {
        self.base.store().select_staff().await.map_err(|e| {
            tracing::error!(error = %e, "Failed to fetch staff");
            e.into()
        })
    }

    /// Active, trackable members only — the aggregation population
    pub async fn find_trackable(&self) -> RepoResult<Vec<Staff>> {
        let staff = self.find_all().await?;
        Ok(staff.into_iter().filter(Staff::is_tracked).collect())
    }

    pub async fn find_by_id(&self, id: &str) -> RepoResult<Staff> {
        self.base
            .store()
            .find_staff(id)
            .await
            .map_err(|e| {
                tracing::error!(id, error = %e, "Failed to fetch staff member");
                RepoError::from(e)
            })?
            .ok_or_else(|| RepoError::NotFound(format!("Staff {id} not found")))
    }

    /// Apply the set fields and return the merged row
    pub async fn update(&self, id: &str, update: StaffUpdate) -> RepoResult<Staff> {
        self.base.store().update_staff(id, update).await.map_err(|e| {
            tracing::error!(id, error = %e, "Failed to update staff member");
            e.into()
        })
    }
}
