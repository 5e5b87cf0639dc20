//! Expense Store

use std::sync::Arc;

use shared::models::{Expense, ExpenseCategory, ExpenseCreate, ExpenseUpdate};
use shared::StoreGateway;

use crate::repository::{ExpenseRepository, RepoError, RepoResult};

/// Expense and category state for the month in view
pub struct ExpenseStore {
    repo: ExpenseRepository,
    expenses: Vec<Expense>,
    categories: Vec<ExpenseCategory>,
    loading: bool,
    error: Option<RepoError>,
}

impl ExpenseStore {
    pub fn new(store: Arc<dyn StoreGateway>) -> Self {
        Self {
            repo: ExpenseRepository::new(store),
            expenses: Vec::new(),
            categories: Vec::new(),
            loading: false,
            error: None,
        }
    }

    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    pub fn categories(&self) -> &[ExpenseCategory] {
        &self.categories
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&RepoError> {
        self.error.as_ref()
    }

    /// Fetch the month's expenses; on failure the previous snapshot stays
    pub async fn fetch(&mut self, year: i32, month: u32) {
        self.loading = true;
        self.error = None;
        match self.repo.find_by_month(year, month).await {
            Ok(rows) => self.expenses = rows,
            Err(e) => self.error = Some(e),
        }
        self.loading = false;
    }

    /// Background category refresh: a failure is logged and the previous
    /// list kept, so a dead category query never blocks expense display
    pub async fn fetch_categories(&mut self) {
        match self.repo.categories().await {
            Ok(rows) => self.categories = rows,
            Err(e) => {
                tracing::warn!(error = %e, "Category refresh failed, keeping stale list");
            }
        }
    }

    /// Category refresh plus expense fetch, as one month-view unit
    pub async fn fetch_month(&mut self, year: i32, month: u32) {
        self.fetch_categories().await;
        self.fetch(year, month).await;
    }

    /// Create an expense and append it to the local list
    pub async fn add(&mut self, expense: ExpenseCreate) -> RepoResult<()> {
        self.loading = true;
        self.error = None;
        let result = self.repo.create(expense).await;
        self.loading = false;
        match result {
            Ok(created) => {
                self.expenses.push(created);
                Ok(())
            }
            Err(e) => {
                self.error = Some(e.clone());
                Err(e)
            }
        }
    }

    /// Update an expense and replace it in the local list
    pub async fn update(&mut self, id: &str, update: ExpenseUpdate) -> RepoResult<()> {
        self.loading = true;
        self.error = None;
        let result = self.repo.update(id, update).await;
        self.loading = false;
        match result {
            Ok(updated) => {
                if let Some(existing) = self.expenses.iter_mut().find(|e| e.id == id) {
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

    /// Delete an expense and drop it from the local list
    pub async fn remove(&mut self, id: &str) -> RepoResult<()> {
        self.loading = true;
        self.error = None;
        let result = self.repo.delete(id).await;
        self.loading = false;
        match result {
            Ok(()) => {
                self.expenses.retain(|e| e.id != id);
                Ok(())
            }
            Err(e) => {
                self.error = Some(e.clone());
                Err(e)
            }
        }
    }
}
