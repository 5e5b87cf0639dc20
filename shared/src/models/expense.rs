//! Expense Model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::staff::default_true;

/// Expense category
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpenseCategory {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    #[serde(default)]
    pub is_default: bool,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

/// Expense entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Expense {
    pub id: String,
    pub monthly_record_id: String,
    pub category_id: String,
    pub date: NaiveDate,
    pub description: Option<String>,
    pub amount: f64,
    /// Staff member who entered the expense
    pub created_by: String,
    /// Joined category name, when the query fetches it
    pub category_name: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

/// Create expense payload
///
/// The owning monthly record is not part of the payload; the create path
/// resolves it from the expense date.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpenseCreate {
    pub category_id: String,
    pub date: NaiveDate,
    pub description: Option<String>,
    pub amount: f64,
    pub created_by: String,
}

/// Update expense payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExpenseUpdate {
    pub category_id: Option<String>,
    pub date: Option<NaiveDate>,
    pub description: Option<String>,
    pub amount: Option<f64>,
}
