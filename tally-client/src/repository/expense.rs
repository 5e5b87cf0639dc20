//! Expense Repository

use std::sync::Arc;

use chrono::Datelike;
use shared::models::{Expense, ExpenseCategory, ExpenseCreate, ExpenseUpdate};
use shared::StoreGateway;

use super::{month_range, BaseRepository, MonthlyRecordRepository, RepoResult};

#[derive(Clone)]
pub struct ExpenseRepository {
    base: BaseRepository,
    records: MonthlyRecordRepository,
}

impl ExpenseRepository {
    pub fn new(store: Arc<dyn StoreGateway>) -> Self {
        Self {
            base: BaseRepository::new(store.clone()),
            records: MonthlyRecordRepository::new(store),
        }
    }

    /// Month's expenses joined with category names, newest first
    pub async fn find_by_month(&self, year: i32, month: u32) -> RepoResult<Vec<Expense>> {
        let (start, end) = month_range(year, month)?;
        self.base
            .store()
            .select_expenses(start, end)
            .await
            .map_err(|e| {
                tracing::error!(year, month, error = %e, "Failed to fetch expenses");
                e.into()
            })
    }

    /// Active categories, name ascending
    pub async fn categories(&self) -> RepoResult<Vec<ExpenseCategory>> {
        self.base
            .store()
            .select_active_categories()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Failed to fetch expense categories");
                e.into()
            })
    }

    /// Create an expense under the monthly record its date belongs to,
    /// resolving (or lazily creating) that record first
    pub async fn create(&self, expense: ExpenseCreate) -> RepoResult<Expense> {
        let record = self
            .records
            .resolve(expense.date.year(), expense.date.month())
            .await?;
        self.base
            .store()
            .insert_expense(&record.id, expense)
            .await
            .map_err(|e| {
                tracing::error!(record = %record.id, error = %e, "Failed to create expense");
                e.into()
            })
    }

    /// Apply the set fields and return the merged row
    pub async fn update(&self, id: &str, update: ExpenseUpdate) -> RepoResult<Expense> {
        self.base
            .store()
            .update_expense(id, update)
            .await
            .map_err(|e| {
                tracing::error!(id, error = %e, "Failed to update expense");
                e.into()
            })
    }

    pub async fn delete(&self, id: &str) -> RepoResult<()> {
        self.base.store().delete_expense(id).await.map_err(|e| {
            tracing::error!(id, error = %e, "Failed to delete expense");
            e.into()
        })
    }
}
