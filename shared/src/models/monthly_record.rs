//! Monthly Record Model
//!
//! The anchor entity tying all financial activity to one calendar month.
//! At most one row exists per `(year, month)` pair; the store declares the
//! uniqueness constraint and the resolver enforces get-or-create access.

use serde::{Deserialize, Serialize};

/// Month lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MonthStatus {
    #[serde(rename = "draft")]
    Draft,
    #[serde(rename = "completed")]
    Completed,
    #[serde(rename = "locked")]
    Locked,
}

impl Default for MonthStatus {
    fn default() -> Self {
        Self::Draft
    }
}

/// Monthly record entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlyRecord {
    pub id: String,
    pub year: i32,
    /// Calendar month, 1-indexed
    pub month: u32,
    #[serde(default)]
    pub status: MonthStatus,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

/// Create monthly record payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlyRecordCreate {
    pub year: i32,
    pub month: u32,
    #[serde(default)]
    pub status: MonthStatus,
}
