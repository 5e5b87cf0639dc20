//! Product Sale Model (non-collection income)

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Product sale entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductSale {
    pub id: String,
    pub monthly_record_id: String,
    pub name: String,
    pub description: Option<String>,
    pub amount: f64,
    pub date: NaiveDate,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

/// Create product sale payload; the owning monthly record is resolved from
/// the sale date
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductSaleCreate {
    pub name: String,
    pub description: Option<String>,
    pub amount: f64,
    pub date: NaiveDate,
}

/// Update product sale payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductSaleUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub amount: Option<f64>,
    pub date: Option<NaiveDate>,
}
