//! Salary Repository

use std::sync::Arc;

use shared::models::{derive_salaries, DailyCollection, MonthlyRecord, Salary, Staff};
use shared::StoreGateway;

use super::{BaseRepository, MonthlyRecordRepository, RepoResult};

#[derive(Clone)]
pub struct SalaryRepository {
    base: BaseRepository,
    records: MonthlyRecordRepository,
}

impl SalaryRepository {
    pub fn new(store: Arc<dyn StoreGateway>) -> Self {
        Self {
            base: BaseRepository::new(store.clone()),
            records: MonthlyRecordRepository::new(store),
        }
    }

    /// Salaries for the month, resolved through the anchor record
    pub async fn find_by_month(&self, year: i32, month: u32) -> RepoResult<Vec<Salary>> {
        let record = self.records.resolve(year, month).await?;
        self.base
            .store()
            .select_salaries(&record.id)
            .await
            .map_err(|e| {
                tracing::error!(year, month, error = %e, "Failed to fetch salaries");
                e.into()
            })
    }

    /// Recompute every listed staff member's share from the month's
    /// collections and overwrite the persisted rows.
    ///
    /// Full recompute-and-replace, upserted on `(monthly_record_id,
    /// staff_id)`. Correct only when `collections` is the complete
    /// persisted set for the month — the save flow guarantees that by
    /// re-reading the month before calling this.
    pub async fn recompute(
        &self,
        record: &MonthlyRecord,
        staff: &[Staff],
        collections: &[DailyCollection],
    ) -> RepoResult<Vec<Salary>> {
        let rows = derive_salaries(&record.id, staff, collections);
        if rows.is_empty() {
            tracing::debug!(record = %record.id, "No staff to pay, skipping salary upsert");
            return Ok(Vec::new());
        }

        let count = rows.len();
        let saved = self.base.store().upsert_salaries(rows).await.map_err(|e| {
            tracing::error!(record = %record.id, error = %e, "Failed to upsert salaries");
            e
        })?;
        tracing::info!(record = %record.id, count, "Recomputed salaries");
        Ok(saved)
    }
}
