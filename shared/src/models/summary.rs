//! Monthly Summary (derived view)
//!
//! Read-side projection over one month's fetched snapshots. Never persisted
//! and never a source of truth; recomputed on demand after each fetch.

use std::collections::HashMap;

use serde::Serialize;

use super::collection::DailyCollection;
use super::expense::{Expense, ExpenseCategory};
use super::product_sale::ProductSale;
use super::salary::Salary;

/// Label used when an expense references a category missing from the
/// active list (retired or deleted after the expense was recorded)
pub const UNCATEGORIZED: &str = "Uncategorized";

/// One row of the per-category expense breakdown
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryTotal {
    pub category_id: String,
    pub name: String,
    pub total: f64,
}

/// Derived monthly financial summary
#[derive(Debug, Clone, Default, Serialize)]
pub struct MonthlySummary {
    pub total_collection: f64,
    pub total_expenses: f64,
    pub total_salary: f64,
    pub total_product_sales: f64,
    /// Per-category expense totals, descending by total
    pub expenses_by_category: Vec<CategoryTotal>,
    /// (collections + product sales) - (expenses + salary payable)
    pub final_balance: f64,
}

impl MonthlySummary {
    /// Derive the summary from the month's fetched snapshots.
    pub fn derive(
        collections: &[DailyCollection],
        expenses: &[Expense],
        categories: &[ExpenseCategory],
        salaries: &[Salary],
        product_sales: &[ProductSale],
    ) -> Self {
        let total_collection: f64 = collections.iter().map(|c| c.amount).sum();
        let total_expenses: f64 = expenses.iter().map(|e| e.amount).sum();
        let total_salary: f64 = salaries.iter().map(|s| s.half_amount).sum();
        let total_product_sales: f64 = product_sales.iter().map(|s| s.amount).sum();

        let total_income = total_collection + total_product_sales;
        let total_deductions = total_expenses + total_salary;

        Self {
            total_collection,
            total_expenses,
            total_salary,
            total_product_sales,
            expenses_by_category: expenses_by_category(expenses, categories),
            final_balance: total_income - total_deductions,
        }
    }
}

/// Group expenses by category id, labeling ids absent from the active list
/// as [`UNCATEGORIZED`]. Sorted descending by total; ties keep their
/// insertion order.
fn expenses_by_category(
    expenses: &[Expense],
    categories: &[ExpenseCategory],
) -> Vec<CategoryTotal> {
    let mut totals: Vec<CategoryTotal> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for expense in expenses {
        if let Some(&i) = index.get(expense.category_id.as_str()) {
            totals[i].total += expense.amount;
            continue;
        }
        let name = categories
            .iter()
            .find(|c| c.id == expense.category_id)
            .map(|c| c.name.clone())
            .unwrap_or_else(|| UNCATEGORIZED.to_string());
        index.insert(expense.category_id.as_str(), totals.len());
        totals.push(CategoryTotal {
            category_id: expense.category_id.clone(),
            name,
            total: expense.amount,
        });
    }

    totals.sort_by(|a, b| b.total.partial_cmp(&a.total).unwrap_or(std::cmp::Ordering::Equal));
    totals
}
