//! Daily Collection Repository

use std::sync::Arc;

use chrono::NaiveDate;
use shared::models::{CollectionEntry, DailyCollection, DailyCollectionUpsert, MonthlyRecord};
use shared::StoreGateway;

use super::{month_range, BaseRepository, MonthlyRecordRepository, RepoError, RepoResult};

/// Result of a month save: the resolved anchor record, whether any rows
/// were written, and the re-read month.
#[derive(Debug, Clone)]
pub struct SaveOutcome {
    pub record: MonthlyRecord,
    /// False when every entry was filtered out and the upsert was skipped
    pub saved: bool,
    /// The month's persisted rows, re-fetched after the write
    pub rows: Vec<DailyCollection>,
}

#[derive(Clone)]
pub struct CollectionRepository {
    base: BaseRepository,
    records: MonthlyRecordRepository,
}

impl CollectionRepository {
    pub fn new(store: Arc<dyn StoreGateway>) -> Self {
        Self {
            base: BaseRepository::new(store.clone()),
            records: MonthlyRecordRepository::new(store),
        }
    }

    /// All collection rows inside the calendar month, trackable staff only
    pub async fn find_by_month(&self, year: i32, month: u32) -> RepoResult<Vec<DailyCollection>> {
        let (start, end) = month_range(year, month)?;
        self.base
            .store()
            .select_collections(start, end)
            .await
            .map_err(|e| {
                tracing::error!(year, month, error = %e, "Failed to fetch collections");
                e.into()
            })
    }

    /// Persist a month grid of entries.
    ///
    /// Entries with a non-positive amount are dropped before persistence;
    /// when nothing remains the save is skipped entirely. Remaining rows
    /// are upserted on `(monthly_record_id, staff_id, date)`, then the
    /// month is re-read so callers observe persisted truth rather than the
    /// client-side echo of the upsert.
    pub async fn save_month(
        &self,
        year: i32,
        month: u32,
        entries: &[CollectionEntry],
    ) -> RepoResult<SaveOutcome> {
        let record = self.records.resolve(year, month).await?;

        let mut rows = Vec::with_capacity(entries.len());
        for entry in entries.iter().filter(|e| e.amount > 0.0) {
            let date = NaiveDate::from_ymd_opt(year, month, entry.day).ok_or_else(|| {
                RepoError::Validation(format!(
                    "Invalid day {} for {year}-{month:02}",
                    entry.day
                ))
            })?;
            rows.push(DailyCollectionUpsert {
                monthly_record_id: record.id.clone(),
                date,
                staff_id: entry.staff_id.clone(),
                amount: entry.amount,
            });
        }

        if rows.is_empty() {
            tracing::debug!(year, month, "No positive collection entries, skipping save");
            let current = self.find_by_month(year, month).await?;
            return Ok(SaveOutcome {
                record,
                saved: false,
                rows: current,
            });
        }

        let count = rows.len();
        self.base
            .store()
            .upsert_collections(rows)
            .await
            .map_err(|e| {
                tracing::error!(year, month, error = %e, "Failed to save collections");
                e
            })?;
        tracing::info!(year, month, count, "Saved collections");

        let refreshed = self.find_by_month(year, month).await?;
        Ok(SaveOutcome {
            record,
            saved: true,
            rows: refreshed,
        })
    }
}
