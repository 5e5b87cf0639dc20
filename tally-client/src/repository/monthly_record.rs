//! Monthly Record Repository
//!
//! Get-or-create resolution for the month anchor record. All financial
//! rows for a month hang off this one entity, created lazily on the first
//! operation that needs it.

use std::sync::Arc;

use shared::models::{MonthStatus, MonthlyRecord, MonthlyRecordCreate};
use shared::{StoreError, StoreGateway};

use super::{month_range, BaseRepository, RepoError, RepoResult};

#[derive(Clone)]
pub struct MonthlyRecordRepository {
    base: BaseRepository,
}

impl MonthlyRecordRepository {
    pub fn new(store: Arc<dyn StoreGateway>) -> Self {
        Self {
            base: BaseRepository::new(store),
        }
    }

    /// Resolve the anchor record for `(year, month)`, creating it on first
    /// use.
    ///
    /// Lookup-then-create is not atomic across clients; the store's unique
    /// key on `(year, month)` turns a lost creation race into a `Conflict`,
    /// which is resolved by re-fetching the row the other writer created.
    pub async fn resolve(&self, year: i32, month: u32) -> RepoResult<MonthlyRecord> {
        month_range(year, month)?;

        let existing = self
            .base
            .store()
            .find_monthly_record(year, month)
            .await
            .map_err(|e| {
                tracing::error!(year, month, error = %e, "Failed to fetch monthly record");
                e
            })?;
        if let Some(record) = existing {
            return Ok(record);
        }

        let create = MonthlyRecordCreate {
            year,
            month,
            status: MonthStatus::Draft,
        };
        match self.base.store().insert_monthly_record(create).await {
            Ok(created) => {
                tracing::info!(year, month, id = %created.id, "Created monthly record");
                Ok(created)
            }
            Err(StoreError::Conflict(_)) => {
                // Lost the creation race; adopt the winner's row
                tracing::debug!(year, month, "Monthly record created concurrently, re-fetching");
                self.base
                    .store()
                    .find_monthly_record(year, month)
                    .await?
                    .ok_or_else(|| {
                        RepoError::NotFound(format!(
                            "Monthly record {year}-{month:02} missing after creation conflict"
                        ))
                    })
            }
            Err(e) => {
                tracing::error!(year, month, error = %e, "Failed to create monthly record");
                Err(e.into())
            }
        }
    }
}
