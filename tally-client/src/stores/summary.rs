//! Summary Store
//!
//! Composes the month view: owns the collection, expense, salary and
//! product-sale stores, refreshes them concurrently, and derives the
//! financial summary from whatever their snapshots currently hold. The
//! derived figures are recomputed on demand — nothing here is persisted.

use std::sync::Arc;

use shared::models::{CollectionEntry, MonthlySummary};
use shared::StoreGateway;

use crate::repository::{RepoError, RepoResult, StaffRepository};
use crate::stores::{CollectionStore, ExpenseStore, ProductSaleStore, SalaryStore};

/// Month-view lifecycle. A refresh or save enters `Loading`; `Errored`
/// retains the first sub-fetch failure (later ones are logged only).
#[derive(Debug, Clone, Default)]
pub enum ViewPhase {
    #[default]
    Idle,
    Loading,
    Ready,
    Errored(RepoError),
}

pub struct SummaryStore {
    collections: CollectionStore,
    expenses: ExpenseStore,
    salaries: SalaryStore,
    product_sales: ProductSaleStore,
    staff_repo: StaffRepository,
    phase: ViewPhase,
}

impl SummaryStore {
    pub fn new(store: Arc<dyn StoreGateway>) -> Self {
        Self {
            collections: CollectionStore::new(store.clone()),
            expenses: ExpenseStore::new(store.clone()),
            salaries: SalaryStore::new(store.clone()),
            product_sales: ProductSaleStore::new(store.clone()),
            staff_repo: StaffRepository::new(store),
            phase: ViewPhase::Idle,
        }
    }

    pub fn phase(&self) -> &ViewPhase {
        &self.phase
    }

    pub fn collections(&self) -> &CollectionStore {
        &self.collections
    }

    pub fn collections_mut(&mut self) -> &mut CollectionStore {
        &mut self.collections
    }

    pub fn expenses(&self) -> &ExpenseStore {
        &self.expenses
    }

    pub fn expenses_mut(&mut self) -> &mut ExpenseStore {
        &mut self.expenses
    }

    pub fn salaries(&self) -> &SalaryStore {
        &self.salaries
    }

    pub fn product_sales(&self) -> &ProductSaleStore {
        &self.product_sales
    }

    pub fn product_sales_mut(&mut self) -> &mut ProductSaleStore {
        &mut self.product_sales
    }

    /// Derive the summary from the current snapshots
    pub fn summary(&self) -> MonthlySummary {
        MonthlySummary::derive(
            self.collections.collections(),
            self.expenses.expenses(),
            self.expenses.categories(),
            self.salaries.salaries(),
            self.product_sales.sales(),
        )
    }

    /// Re-trigger the independent month fetches concurrently and settle the
    /// view phase once all of them have resolved.
    pub async fn refresh(&mut self, year: i32, month: u32) {
        self.phase = ViewPhase::Loading;

        let Self {
            collections,
            expenses,
            salaries,
            product_sales,
            ..
        } = self;
        tokio::join!(
            collections.fetch(year, month),
            expenses.fetch_month(year, month),
            salaries.fetch(year, month),
            product_sales.fetch(year, month),
        );

        self.settle_phase();
    }

    /// Commit the month grid: upsert the collection rows, then recompute
    /// and persist every trackable staff member's salary from the re-read
    /// month. Steps are strictly ordered; a failure aborts the remaining
    /// steps and leaves already committed writes in place.
    pub async fn save_month(
        &mut self,
        year: i32,
        month: u32,
        entries: &[CollectionEntry],
    ) -> RepoResult<()> {
        self.phase = ViewPhase::Loading;
        let result = self.save_month_inner(year, month, entries).await;
        match result {
            Ok(()) => {
                self.phase = ViewPhase::Ready;
                Ok(())
            }
            Err(e) => {
                self.phase = ViewPhase::Errored(e.clone());
                Err(e)
            }
        }
    }

    async fn save_month_inner(
        &mut self,
        year: i32,
        month: u32,
        entries: &[CollectionEntry],
    ) -> RepoResult<()> {
        let outcome = self.collections.save_month(year, month, entries).await?;
        if !outcome.saved {
            tracing::debug!(year, month, "Nothing saved, salaries left untouched");
            return Ok(());
        }

        let staff = self.staff_repo.find_trackable().await?;
        self.salaries
            .recompute(&outcome.record, &staff, &outcome.rows)
            .await
    }

    /// First sub-fetch error wins; the inspection order is fixed
    fn settle_phase(&mut self) {
        let first_error = self
            .collections
            .error()
            .or_else(|| self.expenses.error())
            .or_else(|| self.salaries.error())
            .or_else(|| self.product_sales.error());
        self.phase = match first_error {
            Some(e) => ViewPhase::Errored(e.clone()),
            None => ViewPhase::Ready,
        };
    }
}
