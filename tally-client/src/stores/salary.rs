//! Salary Store

use std::sync::Arc;

use shared::models::{DailyCollection, MonthlyRecord, Salary, Staff};
use shared::StoreGateway;

use crate::repository::{RepoError, RepoResult, SalaryRepository};

/// Salary state for the month in view
pub struct SalaryStore {
    repo: SalaryRepository,
    salaries: Vec<Salary>,
    loading: bool,
    error: Option<RepoError>,
}

impl SalaryStore {
    pub fn new(store: Arc<dyn StoreGateway>) -> Self {
        Self {
            repo: SalaryRepository::new(store),
            salaries: Vec::new(),
            loading: false,
            error: None,
        }
    }

    pub fn salaries(&self) -> &[Salary] {
        &self.salaries
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&RepoError> {
        self.error.as_ref()
    }

    /// Fetch the month's salary rows; on failure the previous snapshot stays
    pub async fn fetch(&mut self, year: i32, month: u32) {
        self.loading = true;
        self.error = None;
        match self.repo.find_by_month(year, month).await {
            Ok(rows) => self.salaries = rows,
            Err(e) => self.error = Some(e),
        }
        self.loading = false;
    }

    /// Recompute and persist the month's shares, adopting the rows the
    /// upsert returns
    pub async fn recompute(
        &mut self,
        record: &MonthlyRecord,
        staff: &[Staff],
        collections: &[DailyCollection],
    ) -> RepoResult<()> {
        self.loading = true;
        self.error = None;
        let result = self.repo.recompute(record, staff, collections).await;
        self.loading = false;
        match result {
            Ok(rows) => {
                self.salaries = rows;
                Ok(())
            }
            Err(e) => {
                self.error = Some(e.clone());
                Err(e)
            }
        }
    }
}
