//! Daily Collection Model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One staff member's cash collection for one calendar date.
///
/// Unique per `(monthly_record_id, staff_id, date)`; the upsert path uses
/// that triple as its conflict key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyCollection {
    pub id: String,
    pub monthly_record_id: String,
    pub date: NaiveDate,
    pub staff_id: String,
    pub amount: f64,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

/// Collection upsert payload, keyed on `(monthly_record_id, staff_id, date)`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyCollectionUpsert {
    pub monthly_record_id: String,
    pub date: NaiveDate,
    pub staff_id: String,
    pub amount: f64,
}

/// One editable cell of the month grid: a staff member's take for one day.
///
/// `day` is the day of month; the save path builds the full calendar date
/// from the month in view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollectionEntry {
    pub staff_id: String,
    pub day: u32,
    pub amount: f64,
}
