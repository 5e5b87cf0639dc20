//! Remote store contract
//!
//! The hosted relational store is an external collaborator; this trait is
//! the exact surface the data layer consumes from it, one typed operation
//! set per table. Single-row lookups return `Ok(None)` for "no matching
//! row" — that outcome is never an error. Implementations live outside
//! this crate (`tally-store-mock` provides the in-memory one).

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::error::StoreResult;
use crate::models::{
    DailyCollection, DailyCollectionUpsert, Expense, ExpenseCategory, ExpenseCreate,
    ExpenseUpdate, MonthlyRecord, MonthlyRecordCreate, ProductSale, ProductSaleCreate,
    ProductSaleUpdate, Salary, SalaryUpsert, Staff, StaffUpdate,
};

#[async_trait]
pub trait StoreGateway: Send + Sync {
    // ========== monthly_records ==========

    async fn find_monthly_record(
        &self,
        year: i32,
        month: u32,
    ) -> StoreResult<Option<MonthlyRecord>>;

    /// Fails with `StoreError::Conflict` when a row for the same
    /// `(year, month)` already exists
    async fn insert_monthly_record(
        &self,
        record: MonthlyRecordCreate,
    ) -> StoreResult<MonthlyRecord>;

    // ========== staff ==========

    /// All staff rows, ordered by name
    async fn select_staff(&self) -> StoreResult<Vec<Staff>>;

    async fn find_staff(&self, id: &str) -> StoreResult<Option<Staff>>;

    /// Applies the set fields and returns the merged row
    async fn update_staff(&self, id: &str, update: StaffUpdate) -> StoreResult<Staff>;

    // ========== daily_collections ==========

    /// Collection rows with `date` in the inclusive range, restricted to
    /// trackable staff
    async fn select_collections(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> StoreResult<Vec<DailyCollection>>;

    /// Upsert on `(monthly_record_id, staff_id, date)`; returns the
    /// affected rows
    async fn upsert_collections(
        &self,
        rows: Vec<DailyCollectionUpsert>,
    ) -> StoreResult<Vec<DailyCollection>>;

    // ========== salaries ==========

    /// Salary rows for one monthly record, joined with the staff name
    async fn select_salaries(&self, monthly_record_id: &str) -> StoreResult<Vec<Salary>>;

    /// Upsert on `(monthly_record_id, staff_id)`; returns the affected rows
    async fn upsert_salaries(&self, rows: Vec<SalaryUpsert>) -> StoreResult<Vec<Salary>>;

    // ========== expenses ==========

    /// Expenses with `date` in the inclusive range, joined with the
    /// category name, ordered by date descending
    async fn select_expenses(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> StoreResult<Vec<Expense>>;

    async fn insert_expense(
        &self,
        monthly_record_id: &str,
        expense: ExpenseCreate,
    ) -> StoreResult<Expense>;

    /// Applies the set fields and returns the merged row
    async fn update_expense(&self, id: &str, update: ExpenseUpdate) -> StoreResult<Expense>;

    async fn delete_expense(&self, id: &str) -> StoreResult<()>;

    // ========== expense_categories ==========

    /// Active categories only, ordered by name ascending
    async fn select_active_categories(&self) -> StoreResult<Vec<ExpenseCategory>>;

    // ========== product_sales ==========

    /// Product sales with `date` in the inclusive range, ordered by date
    /// descending
    async fn select_product_sales(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> StoreResult<Vec<ProductSale>>;

    async fn insert_product_sale(
        &self,
        monthly_record_id: &str,
        sale: ProductSaleCreate,
    ) -> StoreResult<ProductSale>;

    /// Applies the set fields and returns the merged row
    async fn update_product_sale(
        &self,
        id: &str,
        update: ProductSaleUpdate,
    ) -> StoreResult<ProductSale>;

    async fn delete_product_sale(&self, id: &str) -> StoreResult<()>;
}
