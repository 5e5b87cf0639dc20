//! Product Sale Repository

use std::sync::Arc;

use chrono::Datelike;
use shared::models::{ProductSale, ProductSaleCreate, ProductSaleUpdate};
use shared::StoreGateway;

use super::{month_range, BaseRepository, MonthlyRecordRepository, RepoResult};

#[derive(Clone)]
pub struct ProductSaleRepository {
    base: BaseRepository,
    records: MonthlyRecordRepository,
}

impl ProductSaleRepository {
    pub fn new(store: Arc<dyn StoreGateway>) -> Self {
        Self {
            base: BaseRepository::new(store.clone()),
            records: MonthlyRecordRepository::new(store),
        }
    }

    /// Month's product sales, newest first
    pub async fn find_by_month(&self, year: i32, month: u32) -> RepoResult<Vec<ProductSale>> {
        let (start, end) = month_range(year, month)?;
        self.base
            .store()
            .select_product_sales(start, end)
            .await
            .map_err(|e| {
                tracing::error!(year, month, error = %e, "Failed to fetch product sales");
                e.into()
            })
    }

    /// Create a sale under the monthly record its date belongs to
    pub async fn create(&self, sale: ProductSaleCreate) -> RepoResult<ProductSale> {
        let record = self
            .records
            .resolve(sale.date.year(), sale.date.month())
            .await?;
        self.base
            .store()
            .insert_product_sale(&record.id, sale)
            .await
            .map_err(|e| {
                tracing::error!(record = %record.id, error = %e, "Failed to create product sale");
                e.into()
            })
    }

    /// Apply the set fields and return the merged row
    pub async fn update(&self, id: &str, update: ProductSaleUpdate) -> RepoResult<ProductSale> {
        self.base
            .store()
            .update_product_sale(id, update)
            .await
            .map_err(|e| {
                tracing::error!(id, error = %e, "Failed to update product sale");
                e.into()
            })
    }

    pub async fn delete(&self, id: &str) -> RepoResult<()> {
        self.base
            .store()
            .delete_product_sale(id)
            .await
            .map_err(|e| {
                tracing::error!(id, error = %e, "Failed to delete product sale");
                e.into()
            })
    }
}
