//! Staff Model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Staff role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StaffRole {
    #[serde(rename = "admin")]
    Admin,
    #[serde(rename = "manager")]
    Manager,
    #[serde(rename = "staff")]
    Staff,
}

impl Default for StaffRole {
    fn default() -> Self {
        Self::Staff
    }
}

/// Staff member
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Staff {
    pub id: String,
    /// Linked auth user account, if any
    pub user_id: Option<String>,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub hire_date: NaiveDate,
    #[serde(default)]
    pub role: StaffRole,
    #[serde(default = "default_true")]
    pub is_active: bool,
    /// Whether this member's collections participate in aggregation and
    /// salary computation
    #[serde(default = "default_true")]
    pub is_trackable: bool,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

impl Staff {
    /// Included in collection queries and salary recomputation
    pub fn is_tracked(&self) -> bool {
        self.is_active && self.is_trackable
    }
}

/// Update staff payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StaffUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub role: Option<StaffRole>,
    pub is_active: Option<bool>,
    pub is_trackable: Option<bool>,
}

pub(crate) fn default_true() -> bool {
    true
}
