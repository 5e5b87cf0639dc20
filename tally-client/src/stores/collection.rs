//! Collection Store

use std::sync::Arc;

use shared::models::{CollectionEntry, DailyCollection};
use shared::StoreGateway;

use crate::repository::{CollectionRepository, RepoError, RepoResult, SaveOutcome};

/// Daily collection state for the month in view
pub struct CollectionStore {
    repo: CollectionRepository,
    collections: Vec<DailyCollection>,
    loading: bool,
    error: Option<RepoError>,
}

impl CollectionStore {
    pub fn new(store: Arc<dyn StoreGateway>) -> Self {
        Self {
            repo: CollectionRepository::new(store),
            collections: Vec::new(),
            loading: false,
            error: None,
        }
    }

    pub fn collections(&self) -> &[DailyCollection] {
        &self.collections
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&RepoError> {
        self.error.as_ref()
    }

    /// Fetch the month's rows; on failure the previous snapshot stays
    pub async fn fetch(&mut self, year: i32, month: u32) {
        self.loading = true;
        self.error = None;
        match self.repo.find_by_month(year, month).await {
            Ok(rows) => self.collections = rows,
            Err(e) => self.error = Some(e),
        }
        self.loading = false;
    }

    /// Persist the month grid and adopt the re-fetched persisted rows
    pub async fn save_month(
        &mut self,
        year: i32,
        month: u32,
        entries: &[CollectionEntry],
    ) -> RepoResult<SaveOutcome> {
        self.loading = true;
        self.error = None;
        let result = self.repo.save_month(year, month, entries).await;
        self.loading = false;
        match result {
            Ok(outcome) => {
                self.collections = outcome.rows.clone();
                Ok(outcome)
            }
            Err(e) => {
                self.error = Some(e.clone());
                Err(e)
            }
        }
    }
}
