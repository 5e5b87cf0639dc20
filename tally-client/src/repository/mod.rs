//! Repository Module
//!
//! Month-scoped data access over the remote store gateway. Every failure
//! is logged with context and propagated; a zero-row lookup is handled by
//! the caller's creation path, never re-raised as an error.

pub mod collection;
pub mod expense;
pub mod monthly_record;
pub mod product_sale;
pub mod salary;
pub mod staff;

// Re-exports
pub use collection::{CollectionRepository, SaveOutcome};
pub use expense::ExpenseRepository;
pub use monthly_record::MonthlyRecordRepository;
pub use product_sale::ProductSaleRepository;
pub use salary::SalaryRepository;
pub use staff::StaffRepository;

use std::sync::Arc;

use chrono::NaiveDate;
use shared::{StoreError, StoreGateway};
use thiserror::Error;

/// Repository error types
#[derive(Debug, Clone, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

/// Base repository with store gateway handle
#[derive(Clone)]
pub struct BaseRepository {
    store: Arc<dyn StoreGateway>,
}

impl BaseRepository {
    pub fn new(store: Arc<dyn StoreGateway>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &dyn StoreGateway {
        self.store.as_ref()
    }
}

/// Inclusive calendar bounds of `(year, month)`; month is 1-indexed
pub(crate) fn month_range(year: i32, month: u32) -> RepoResult<(NaiveDate, NaiveDate)> {
    shared::util::month_bounds(year, month)
        .ok_or_else(|| RepoError::Validation(format!("Invalid month: {year}-{month:02}")))
}
