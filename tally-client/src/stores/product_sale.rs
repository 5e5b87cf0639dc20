//! Product Sale Store

use std::sync::Arc;

use shared::models::{ProductSale, ProductSaleCreate, ProductSaleUpdate};
use shared::StoreGateway;

use crate::repository::{ProductSaleRepository, RepoError, RepoResult};

/// Product sale state for the month in view
pub struct ProductSaleStore {
    repo: ProductSaleRepository,
    sales: Vec<ProductSale>,
    loading: bool,
    error: Option<RepoError>,
}

impl ProductSaleStore {
    pub fn new(store: Arc<dyn StoreGateway>) -> Self {
        Self {
            repo: ProductSaleRepository::new(store),
            sales: Vec::new(),
            loading: false,
            error: None,
        }
    }

    pub fn sales(&self) -> &[ProductSale] {
        &self.sales
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&RepoError> {
        self.error.as_ref()
    }

    /// Fetch the month's sales; on failure the previous snapshot stays
    pub async fn fetch(&mut self, year: i32, month: u32) {
        self.loading = true;
        self.error = None;
        match self.repo.find_by_month(year, month).await {
            Ok(rows) => self.sales = rows,
            Err(e) => self.error = Some(e),
        }
        self.loading = false;
    }

    /// Create a sale and prepend it (the list is newest-first)
    pub async fn add(&mut self, sale: ProductSaleCreate) -> RepoResult<()> {
        self.loading = true;
        self.error = None;
        let result = self.repo.create(sale).await;
        self.loading = false;
        match result {
            Ok(created) => {
                self.sales.insert(0, created);
                Ok(())
            }
            Err(e) => {
                self.error = Some(e.clone());
                Err(e)
            }
        }
    }

    /// Update a sale and replace it in the local list
    pub async fn update(&mut self, id: &str, update: ProductSaleUpdate) -> RepoResult<()> {
        self.loading = true;
        self.error = None;
        let result = self.repo.update(id, update).await;
        self.loading = false;
        match result {
            Ok(updated) => {
                if let Some(existing) = self.sales.iter_mut().find(|s| s.id == id) {
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

    /// Delete a sale and drop it from the local list
    pub async fn remove(&mut self, id: &str) -> RepoResult<()> {
        self.loading = true;
        self.error = None;
        let result = self.repo.delete(id).await;
        self.loading = false;
        match result {
            Ok(()) => {
                self.sales.retain(|s| s.id != id);
                Ok(())
            }
            Err(e) => {
                self.error = Some(e.clone());
                Err(e)
            }
        }
    }
}
