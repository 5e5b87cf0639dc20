//! In-memory store gateway

use chrono::NaiveDate;
use parking_lot::RwLock;
use shared::gateway::StoreGateway;
use shared::models::{
    DailyCollection, DailyCollectionUpsert, Expense, ExpenseCategory, ExpenseCreate,
    ExpenseUpdate, MonthlyRecord, MonthlyRecordCreate, ProductSale, ProductSaleCreate,
    ProductSaleUpdate, Salary, SalaryUpsert, Staff, StaffRole, StaffUpdate,
};
use shared::util::now_iso;
use shared::{StoreError, StoreResult};

#[derive(Default)]
struct Tables {
    monthly_records: Vec<MonthlyRecord>,
    staff: Vec<Staff>,
    collections: Vec<DailyCollection>,
    salaries: Vec<Salary>,
    expenses: Vec<Expense>,
    categories: Vec<ExpenseCategory>,
    product_sales: Vec<ProductSale>,
}

/// Write-operation counters, for call-level assertions in tests
#[derive(Debug, Default, Clone)]
pub struct WriteCounters {
    pub monthly_record_inserts: u64,
    pub collection_upserts: u64,
    pub salary_upserts: u64,
}

/// In-memory [`StoreGateway`] implementation.
///
/// Uniqueness keys match the hosted schema: `(year, month)` on monthly
/// records, `(monthly_record_id, staff_id, date)` on collections,
/// `(monthly_record_id, staff_id)` on salaries.
#[derive(Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
    counters: RwLock<WriteCounters>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the write counters
    pub fn counters(&self) -> WriteCounters {
        self.counters.read().clone()
    }

    /// Seed a staff row (active; trackable as given)
    pub fn seed_staff(&self, name: &str, is_trackable: bool) -> Staff {
        let staff = Staff {
            id: new_id(),
            user_id: None,
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
            phone: None,
            hire_date: NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
            role: StaffRole::Staff,
            is_active: true,
            is_trackable,
            created_at: Some(now_iso()),
            updated_at: Some(now_iso()),
        };
        self.tables.write().staff.push(staff.clone());
        staff
    }

    /// Seed an expense category
    pub fn seed_category(&self, name: &str, is_active: bool) -> ExpenseCategory {
        let category = ExpenseCategory {
            id: new_id(),
            name: name.to_string(),
            description: None,
            is_default: false,
            is_active,
        };
        self.tables.write().categories.push(category.clone());
        category
    }
}

fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

#[async_trait::async_trait]
impl StoreGateway for MemoryStore {
    async fn find_monthly_record(
        &self,
        year: i32,
        month: u32,
    ) -> StoreResult<Option<MonthlyRecord>> {
        let tables = self.tables.read();
        Ok(tables
            .monthly_records
            .iter()
            .find(|r| r.year == year && r.month == month)
            .cloned())
    }

    async fn insert_monthly_record(
        &self,
        record: MonthlyRecordCreate,
    ) -> StoreResult<MonthlyRecord> {
        let mut tables = self.tables.write();
        if tables
            .monthly_records
            .iter()
            .any(|r| r.year == record.year && r.month == record.month)
        {
            return Err(StoreError::Conflict(format!(
                "monthly_records ({}, {})",
                record.year, record.month
            )));
        }

        let row = MonthlyRecord {
            id: new_id(),
            year: record.year,
            month: record.month,
            status: record.status,
            created_at: Some(now_iso()),
            updated_at: Some(now_iso()),
        };
        tables.monthly_records.push(row.clone());
        self.counters.write().monthly_record_inserts += 1;
        Ok(row)
    }

    async fn select_staff(&self) -> StoreResult<Vec<Staff>> {
        let tables = self.tables.read();
        let mut staff = tables.staff.clone();
        staff.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(staff)
    }

    async fn find_staff(&self, id: &str) -> StoreResult<Option<Staff>> {
        let tables = self.tables.read();
        Ok(tables.staff.iter().find(|s| s.id == id).cloned())
    }

    async fn update_staff(&self, id: &str, update: StaffUpdate) -> StoreResult<Staff> {
        let mut tables = self.tables.write();
        let staff = tables
            .staff
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or_else(|| StoreError::Query(format!("staff {id} not found")))?;

        if let Some(name) = update.name {
            staff.name = name;
        }
        if let Some(email) = update.email {
            staff.email = email;
        }
        if update.phone.is_some() {
            staff.phone = update.phone;
        }
        if let Some(role) = update.role {
            staff.role = role;
        }
        if let Some(is_active) = update.is_active {
            staff.is_active = is_active;
        }
        if let Some(is_trackable) = update.is_trackable {
            staff.is_trackable = is_trackable;
        }
        staff.updated_at = Some(now_iso());
        Ok(staff.clone())
    }

    async fn select_collections(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> StoreResult<Vec<DailyCollection>> {
        let tables = self.tables.read();
        let mut rows: Vec<DailyCollection> = tables
            .collections
            .iter()
            .filter(|c| c.date >= start && c.date <= end)
            .filter(|c| {
                tables
                    .staff
                    .iter()
                    .any(|s| s.id == c.staff_id && s.is_tracked())
            })
            .cloned()
            .collect();
        rows.sort_by(|a, b| (a.date, &a.staff_id).cmp(&(b.date, &b.staff_id)));
        Ok(rows)
    }

    async fn upsert_collections(
        &self,
        rows: Vec<DailyCollectionUpsert>,
    ) -> StoreResult<Vec<DailyCollection>> {
        let mut tables = self.tables.write();
        self.counters.write().collection_upserts += 1;

        let mut affected = Vec::with_capacity(rows.len());
        for row in rows {
            let position = tables.collections.iter().position(|c| {
                c.monthly_record_id == row.monthly_record_id
                    && c.staff_id == row.staff_id
                    && c.date == row.date
            });
            if let Some(i) = position {
                let existing = &mut tables.collections[i];
                existing.amount = row.amount;
                existing.updated_at = Some(now_iso());
                affected.push(existing.clone());
            } else {
                let created = DailyCollection {
                    id: new_id(),
                    monthly_record_id: row.monthly_record_id,
                    date: row.date,
                    staff_id: row.staff_id,
                    amount: row.amount,
                    created_at: Some(now_iso()),
                    updated_at: Some(now_iso()),
                };
                tables.collections.push(created.clone());
                affected.push(created);
            }
        }
        Ok(affected)
    }

    async fn select_salaries(&self, monthly_record_id: &str) -> StoreResult<Vec<Salary>> {
        let tables = self.tables.read();
        Ok(tables
            .salaries
            .iter()
            .filter(|s| s.monthly_record_id == monthly_record_id)
            .map(|s| join_staff_name(s.clone(), &tables.staff))
            .collect())
    }

    async fn upsert_salaries(&self, rows: Vec<SalaryUpsert>) -> StoreResult<Vec<Salary>> {
        let mut tables = self.tables.write();
        self.counters.write().salary_upserts += 1;

        let mut affected = Vec::with_capacity(rows.len());
        for row in rows {
            let position = tables.salaries.iter().position(|s| {
                s.monthly_record_id == row.monthly_record_id && s.staff_id == row.staff_id
            });
            if let Some(i) = position {
                let existing = &mut tables.salaries[i];
                existing.full_amount = row.full_amount;
                existing.half_amount = row.half_amount;
                existing.updated_at = Some(now_iso());
                affected.push(existing.clone());
            } else {
                let created = Salary {
                    id: new_id(),
                    monthly_record_id: row.monthly_record_id,
                    staff_id: row.staff_id,
                    staff_name: None,
                    full_amount: row.full_amount,
                    half_amount: row.half_amount,
                    created_at: Some(now_iso()),
                    updated_at: Some(now_iso()),
                };
                tables.salaries.push(created.clone());
                affected.push(created);
            }
        }
        let affected = affected
            .into_iter()
            .map(|s| join_staff_name(s, &tables.staff))
            .collect();
        Ok(affected)
    }

    async fn select_expenses(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> StoreResult<Vec<Expense>> {
        let tables = self.tables.read();
        let mut rows: Vec<Expense> = tables
            .expenses
            .iter()
            .filter(|e| e.date >= start && e.date <= end)
            .map(|e| join_category_name(e.clone(), &tables.categories))
            .collect();
        rows.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(rows)
    }

    async fn insert_expense(
        &self,
        monthly_record_id: &str,
        expense: ExpenseCreate,
    ) -> StoreResult<Expense> {
        let mut tables = self.tables.write();
        let row = Expense {
            id: new_id(),
            monthly_record_id: monthly_record_id.to_string(),
            category_id: expense.category_id,
            date: expense.date,
            description: expense.description,
            amount: expense.amount,
            created_by: expense.created_by,
            category_name: None,
            created_at: Some(now_iso()),
            updated_at: Some(now_iso()),
        };
        tables.expenses.push(row.clone());
        Ok(join_category_name(row, &tables.categories))
    }

    async fn update_expense(&self, id: &str, update: ExpenseUpdate) -> StoreResult<Expense> {
        let mut tables = self.tables.write();
        let Tables {
            expenses,
            categories,
            ..
        } = &mut *tables;
        let expense = expenses
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| StoreError::Query(format!("expense {id} not found")))?;

        if let Some(category_id) = update.category_id {
            expense.category_id = category_id;
        }
        if let Some(date) = update.date {
            expense.date = date;
        }
        if update.description.is_some() {
            expense.description = update.description;
        }
        if let Some(amount) = update.amount {
            expense.amount = amount;
        }
        expense.updated_at = Some(now_iso());
        Ok(join_category_name(expense.clone(), categories))
    }

    async fn delete_expense(&self, id: &str) -> StoreResult<()> {
        let mut tables = self.tables.write();
        let before = tables.expenses.len();
        tables.expenses.retain(|e| e.id != id);
        if tables.expenses.len() == before {
            return Err(StoreError::Query(format!("expense {id} not found")));
        }
        Ok(())
    }

    async fn select_active_categories(&self) -> StoreResult<Vec<ExpenseCategory>> {
        let tables = self.tables.read();
        let mut rows: Vec<ExpenseCategory> = tables
            .categories
            .iter()
            .filter(|c| c.is_active)
            .cloned()
            .collect();
        rows.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(rows)
    }

    async fn select_product_sales(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> StoreResult<Vec<ProductSale>> {
        let tables = self.tables.read();
        let mut rows: Vec<ProductSale> = tables
            .product_sales
            .iter()
            .filter(|s| s.date >= start && s.date <= end)
            .cloned()
            .collect();
        rows.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(rows)
    }

    async fn insert_product_sale(
        &self,
        monthly_record_id: &str,
        sale: ProductSaleCreate,
    ) -> StoreResult<ProductSale> {
        let mut tables = self.tables.write();
        let row = ProductSale {
            id: new_id(),
            monthly_record_id: monthly_record_id.to_string(),
            name: sale.name,
            description: sale.description,
            amount: sale.amount,
            date: sale.date,
            created_at: Some(now_iso()),
            updated_at: Some(now_iso()),
        };
        tables.product_sales.push(row.clone());
        Ok(row)
    }

    async fn update_product_sale(
        &self,
        id: &str,
        update: ProductSaleUpdate,
    ) -> StoreResult<ProductSale> {
        let mut tables = self.tables.write();
        let sale = tables
            .product_sales
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or_else(|| StoreError::Query(format!("product sale {id} not found")))?;

        if let Some(name) = update.name {
            sale.name = name;
        }
        if update.description.is_some() {
            sale.description = update.description;
        }
        if let Some(amount) = update.amount {
            sale.amount = amount;
        }
        if let Some(date) = update.date {
            sale.date = date;
        }
        sale.updated_at = Some(now_iso());
        Ok(sale.clone())
    }

    async fn delete_product_sale(&self, id: &str) -> StoreResult<()> {
        let mut tables = self.tables.write();
        let before = tables.product_sales.len();
        tables.product_sales.retain(|s| s.id != id);
        if tables.product_sales.len() == before {
            return Err(StoreError::Query(format!("product sale {id} not found")));
        }
        Ok(())
    }
}

fn join_staff_name(mut salary: Salary, staff: &[Staff]) -> Salary {
    salary.staff_name = staff
        .iter()
        .find(|s| s.id == salary.staff_id)
        .map(|s| s.name.clone());
    salary
}

fn join_category_name(mut expense: Expense, categories: &[ExpenseCategory]) -> Expense {
    expense.category_name = categories
        .iter()
        .find(|c| c.id == expense.category_id)
        .map(|c| c.name.clone());
    expense
}
