//! Salary Model
//!
//! Derived entity: one row per `(monthly_record, staff)`, always a
//! deterministic function of that month's collection rows. Rows are
//! recomputed and overwritten as a whole, never patched incrementally.

use serde::{Deserialize, Serialize};

use super::collection::DailyCollection;
use super::staff::Staff;

/// Fixed payable-share rule: staff take home half of what they collect.
pub const PAYABLE_SHARE: f64 = 0.5;

/// Salary row
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Salary {
    pub id: String,
    pub monthly_record_id: String,
    pub staff_id: String,
    /// Joined staff name, when the query fetches it
    pub staff_name: Option<String>,
    /// Sum of the member's collections for the month
    pub full_amount: f64,
    /// Payable share (half of `full_amount`)
    pub half_amount: f64,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

/// Salary upsert payload, keyed on `(monthly_record_id, staff_id)`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalaryUpsert {
    pub monthly_record_id: String,
    pub staff_id: String,
    pub full_amount: f64,
    pub half_amount: f64,
}

/// Derive one salary candidate per staff member from the month's
/// collections.
///
/// `staff` is expected to be pre-filtered to tracked members; every member
/// gets a row even when their sum is zero, so each month carries a complete
/// salary set.
pub fn derive_salaries(
    monthly_record_id: &str,
    staff: &[Staff],
    collections: &[DailyCollection],
) -> Vec<SalaryUpsert> {
    staff
        .iter()
        .map(|member| {
            let full_amount: f64 = collections
                .iter()
                .filter(|c| c.staff_id == member.id)
                .map(|c| c.amount)
                .sum();
            SalaryUpsert {
                monthly_record_id: monthly_record_id.to_string(),
                staff_id: member.id.clone(),
                full_amount,
                half_amount: full_amount * PAYABLE_SHARE,
            }
        })
        .collect()
}
