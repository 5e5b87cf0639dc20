//! End-to-end flows against the in-memory backend: monthly record
//! resolution, the save-month read-modify-write chain, and the composed
//! summary view.

use std::sync::Arc;

use shared::models::{CollectionEntry, ExpenseCreate, ProductSaleCreate};
use shared::{StoreError, StoreGateway};
use tally_client::repository::{MonthlyRecordRepository, RepoError};
use tally_client::stores::{AuthStore, ExpenseStore, SummaryStore, ViewPhase};
use tally_client::{AppSession, Config};
use tally_store_mock::{MemoryStore, MockIdentity};

const YEAR: i32 = 2024;
const MONTH: u32 = 3;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .try_init();
}

fn setup() -> (Arc<MemoryStore>, Arc<dyn StoreGateway>) {
    init_tracing();
    let store = Arc::new(MemoryStore::new());
    let gateway: Arc<dyn StoreGateway> = store.clone();
    (store, gateway)
}

fn entry(staff_id: &str, day: u32, amount: f64) -> CollectionEntry {
    CollectionEntry {
        staff_id: staff_id.to_string(),
        day,
        amount,
    }
}

fn date(day: u32) -> chrono::NaiveDate {
    chrono::NaiveDate::from_ymd_opt(YEAR, MONTH, day).unwrap()
}

// ========================================================================
// Monthly record resolution
// ========================================================================

#[tokio::test]
async fn test_resolver_is_idempotent() {
    let (store, gateway) = setup();
    let repo = MonthlyRecordRepository::new(gateway);

    let first = repo.resolve(YEAR, MONTH).await.unwrap();
    let second = repo.resolve(YEAR, MONTH).await.unwrap();

    assert_eq!(first.id, second.id);
    assert_eq!(store.counters().monthly_record_inserts, 1);
}

#[tokio::test]
async fn test_store_rejects_duplicate_monthly_record() {
    let (_, gateway) = setup();
    let repo = MonthlyRecordRepository::new(gateway.clone());
    let record = repo.resolve(YEAR, MONTH).await.unwrap();

    let duplicate = gateway
        .insert_monthly_record(shared::models::MonthlyRecordCreate {
            year: YEAR,
            month: MONTH,
            status: Default::default(),
        })
        .await;
    assert!(matches!(duplicate, Err(StoreError::Conflict(_))));

    // Resolution still lands on the original row
    let resolved = repo.resolve(YEAR, MONTH).await.unwrap();
    assert_eq!(resolved.id, record.id);
}

#[tokio::test]
async fn test_resolver_rejects_invalid_month() {
    let (_, gateway) = setup();
    let repo = MonthlyRecordRepository::new(gateway);

    let result = repo.resolve(YEAR, 13).await;
    assert!(matches!(result, Err(RepoError::Validation(_))));
}

// ========================================================================
// Save month: filtering, upsert key, re-fetch
// ========================================================================

#[tokio::test]
async fn test_save_month_filters_and_round_trips() {
    let (store, gateway) = setup();
    let ann = store.seed_staff("Ann", true);
    let bob = store.seed_staff("Bob", true);

    let mut summary = SummaryStore::new(gateway);
    summary
        .save_month(
            YEAR,
            MONTH,
            &[
                entry(&ann.id, 1, 100.0),
                entry(&ann.id, 2, 50.0),
                entry(&bob.id, 1, 200.0),
                entry(&bob.id, 2, 0.0),
                entry(&bob.id, 3, -25.0),
            ],
        )
        .await
        .unwrap();

    // Zero and negative entries were never persisted
    let rows = summary.collections().collections();
    assert_eq!(rows.len(), 3);
    assert!(rows.iter().all(|r| r.amount > 0.0));

    // Round-trip: the fetched rows carry exactly the saved cells
    let ann_day1 = rows
        .iter()
        .find(|r| r.staff_id == ann.id && r.date == date(1))
        .unwrap();
    assert_eq!(ann_day1.amount, 100.0);
    let bob_day1 = rows
        .iter()
        .find(|r| r.staff_id == bob.id && r.date == date(1))
        .unwrap();
    assert_eq!(bob_day1.amount, 200.0);
    assert!(matches!(summary.phase(), ViewPhase::Ready));
}

#[tokio::test]
async fn test_empty_save_is_a_no_op() {
    let (store, gateway) = setup();
    let ann = store.seed_staff("Ann", true);

    let mut summary = SummaryStore::new(gateway);
    let result = summary
        .save_month(
            YEAR,
            MONTH,
            &[entry(&ann.id, 1, 0.0), entry(&ann.id, 2, -10.0)],
        )
        .await;

    assert!(result.is_ok());
    let counters = store.counters();
    assert_eq!(counters.collection_upserts, 0);
    assert_eq!(counters.salary_upserts, 0);
}

#[tokio::test]
async fn test_upsert_overwrites_on_conflict_key() {
    let (store, gateway) = setup();
    let ann = store.seed_staff("Ann", true);

    let mut summary = SummaryStore::new(gateway);
    summary
        .save_month(YEAR, MONTH, &[entry(&ann.id, 5, 40.0)])
        .await
        .unwrap();
    summary
        .save_month(YEAR, MONTH, &[entry(&ann.id, 5, 75.0)])
        .await
        .unwrap();

    let rows = summary.collections().collections();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].amount, 75.0);
    assert_eq!(rows[0].date, date(5));
}

#[tokio::test]
async fn test_save_rejects_invalid_day() {
    let (store, gateway) = setup();
    let ann = store.seed_staff("Ann", true);

    let mut summary = SummaryStore::new(gateway);
    // February 2023 has no day 31
    let result = summary
        .save_month(2023, 2, &[entry(&ann.id, 31, 10.0)])
        .await;
    assert!(matches!(result, Err(RepoError::Validation(_))));
    assert_eq!(store.counters().collection_upserts, 0);
}

// ========================================================================
// Salary derivation through the save flow
// ========================================================================

#[tokio::test]
async fn test_save_recomputes_salaries() {
    let (store, gateway) = setup();
    let ann = store.seed_staff("Ann", true);
    let bob = store.seed_staff("Bob", true);

    let mut summary = SummaryStore::new(gateway);
    summary
        .save_month(
            YEAR,
            MONTH,
            &[
                entry(&ann.id, 1, 100.0),
                entry(&ann.id, 2, 50.0),
                entry(&bob.id, 1, 200.0),
            ],
        )
        .await
        .unwrap();

    let salaries = summary.salaries().salaries();
    assert_eq!(salaries.len(), 2);

    let ann_salary = salaries.iter().find(|s| s.staff_id == ann.id).unwrap();
    assert_eq!(ann_salary.full_amount, 150.0);
    assert_eq!(ann_salary.half_amount, 75.0);
    assert_eq!(ann_salary.staff_name.as_deref(), Some("Ann"));

    let bob_salary = salaries.iter().find(|s| s.staff_id == bob.id).unwrap();
    assert_eq!(bob_salary.full_amount, 200.0);
    assert_eq!(bob_salary.half_amount, 100.0);
}

#[tokio::test]
async fn test_staff_without_collections_still_gets_salary_row() {
    let (store, gateway) = setup();
    let ann = store.seed_staff("Ann", true);
    let idle = store.seed_staff("Idle", true);

    let mut summary = SummaryStore::new(gateway);
    summary
        .save_month(YEAR, MONTH, &[entry(&ann.id, 1, 80.0)])
        .await
        .unwrap();

    let salaries = summary.salaries().salaries();
    let idle_salary = salaries.iter().find(|s| s.staff_id == idle.id).unwrap();
    assert_eq!(idle_salary.full_amount, 0.0);
    assert_eq!(idle_salary.half_amount, 0.0);
}

#[tokio::test]
async fn test_untrackable_staff_excluded_everywhere() {
    let (store, gateway) = setup();
    let ann = store.seed_staff("Ann", true);
    let ghost = store.seed_staff("Ghost", false);

    let mut summary = SummaryStore::new(gateway);
    summary
        .save_month(
            YEAR,
            MONTH,
            &[entry(&ann.id, 1, 100.0), entry(&ghost.id, 1, 500.0)],
        )
        .await
        .unwrap();

    // Month fetches are restricted to trackable staff
    let rows = summary.collections().collections();
    assert!(rows.iter().all(|r| r.staff_id == ann.id));

    // And so is the salary population
    let salaries = summary.salaries().salaries();
    assert_eq!(salaries.len(), 1);
    assert_eq!(salaries[0].staff_id, ann.id);
}

#[tokio::test]
async fn test_resave_shrinks_salary_back() {
    let (store, gateway) = setup();
    let ann = store.seed_staff("Ann", true);

    let mut summary = SummaryStore::new(gateway);
    summary
        .save_month(YEAR, MONTH, &[entry(&ann.id, 1, 100.0)])
        .await
        .unwrap();
    // Overwrite the same day with a smaller take: recompute-and-replace
    // must shrink the persisted share, not accumulate
    summary
        .save_month(YEAR, MONTH, &[entry(&ann.id, 1, 60.0)])
        .await
        .unwrap();

    let salaries = summary.salaries().salaries();
    assert_eq!(salaries.len(), 1);
    assert_eq!(salaries[0].full_amount, 60.0);
    assert_eq!(salaries[0].half_amount, 30.0);
}

// ========================================================================
// Expenses and the composed summary
// ========================================================================

#[tokio::test]
async fn test_expense_create_resolves_owning_record() {
    let (store, gateway) = setup();
    let ann = store.seed_staff("Ann", true);
    let food = store.seed_category("Food", true);

    let mut expenses = ExpenseStore::new(gateway.clone());
    expenses
        .add(ExpenseCreate {
            category_id: food.id.clone(),
            date: date(10),
            description: Some("supplies".to_string()),
            amount: 42.0,
            created_by: ann.id.clone(),
        })
        .await
        .unwrap();

    // The owning monthly record was created lazily from the expense date
    let record = gateway.find_monthly_record(YEAR, MONTH).await.unwrap();
    let record = record.expect("record should exist");
    assert_eq!(expenses.expenses().len(), 1);
    assert_eq!(expenses.expenses()[0].monthly_record_id, record.id);
    assert_eq!(expenses.expenses()[0].category_name.as_deref(), Some("Food"));
}

#[tokio::test]
async fn test_expense_update_and_remove_maintain_local_state() {
    let (store, gateway) = setup();
    let ann = store.seed_staff("Ann", true);
    let food = store.seed_category("Food", true);

    let mut expenses = ExpenseStore::new(gateway);
    expenses
        .add(ExpenseCreate {
            category_id: food.id.clone(),
            date: date(3),
            description: None,
            amount: 10.0,
            created_by: ann.id.clone(),
        })
        .await
        .unwrap();
    let id = expenses.expenses()[0].id.clone();

    expenses
        .update(
            &id,
            shared::models::ExpenseUpdate {
                amount: Some(25.0),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(expenses.expenses()[0].amount, 25.0);

    expenses.remove(&id).await.unwrap();
    assert!(expenses.expenses().is_empty());

    // Removing again is a hard failure, surfaced to the caller
    let result = expenses.remove(&id).await;
    assert!(matches!(result, Err(RepoError::Store(_))));
    assert!(expenses.error().is_some());
}

#[tokio::test]
async fn test_summary_arithmetic_over_full_month() {
    let (store, gateway) = setup();
    let ann = store.seed_staff("Ann", true);
    let bob = store.seed_staff("Bob", true);
    let food = store.seed_category("Food", true);

    let mut session = AppSession::new(
        Config::from_env(),
        gateway,
        Arc::new(MockIdentity::new("owner@example.com", "secret")),
    );

    let summary = session.summary_mut();
    summary
        .save_month(
            YEAR,
            MONTH,
            &[entry(&ann.id, 1, 300.0), entry(&bob.id, 1, 200.0)],
        )
        .await
        .unwrap();
    summary
        .expenses_mut()
        .add(ExpenseCreate {
            category_id: food.id.clone(),
            date: date(8),
            description: None,
            amount: 200.0,
            created_by: ann.id.clone(),
        })
        .await
        .unwrap();
    summary
        .product_sales_mut()
        .add(ProductSaleCreate {
            name: "Gift cards".to_string(),
            description: None,
            amount: 100.0,
            date: date(12),
        })
        .await
        .unwrap();

    summary.refresh(YEAR, MONTH).await;
    assert!(matches!(summary.phase(), ViewPhase::Ready));

    let view = summary.summary();
    assert_eq!(view.total_collection, 500.0);
    assert_eq!(view.total_product_sales, 100.0);
    assert_eq!(view.total_expenses, 200.0);
    assert_eq!(view.total_salary, 250.0);
    // (500 + 100) - (200 + 250)
    assert_eq!(view.final_balance, 150.0);
}

#[tokio::test]
async fn test_category_breakdown_fallback_and_order() {
    let (store, gateway) = setup();
    let ann = store.seed_staff("Ann", true);
    let food = store.seed_category("Food", true);
    let travel = store.seed_category("Travel", true);
    let retired = store.seed_category("Retired", false);

    let mut summary = SummaryStore::new(gateway);
    let expenses = summary.expenses_mut();
    for (category_id, amount) in [
        (food.id.as_str(), 50.0),
        (travel.id.as_str(), 200.0),
        (retired.id.as_str(), 10.0),
    ] {
        expenses
            .add(ExpenseCreate {
                category_id: category_id.to_string(),
                date: date(15),
                description: None,
                amount,
                created_by: ann.id.clone(),
            })
            .await
            .unwrap();
    }

    summary.refresh(YEAR, MONTH).await;
    let view = summary.summary();

    // Inactive category is not in the active list, so its expenses group
    // under the fallback label instead of being dropped
    let labels: Vec<&str> = view
        .expenses_by_category
        .iter()
        .map(|c| c.name.as_str())
        .collect();
    assert_eq!(labels, vec!["Travel", "Food", shared::models::UNCATEGORIZED]);
    assert_eq!(view.expenses_by_category[0].total, 200.0);
}

// ========================================================================
// Staff roster and product sales
// ========================================================================

#[tokio::test]
async fn test_staff_roster_update() {
    let (store, gateway) = setup();
    store.seed_staff("Ann", true);
    let bob = store.seed_staff("Bob", true);

    let mut session = AppSession::new(
        Config::from_env(),
        gateway,
        Arc::new(MockIdentity::new("owner@example.com", "secret")),
    );
    let staff = session.staff_mut();
    staff.fetch_all().await;
    assert_eq!(staff.staff().len(), 2);
    assert_eq!(staff.trackable().len(), 2);

    staff
        .update(
            &bob.id,
            shared::models::StaffUpdate {
                is_trackable: Some(false),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(staff.trackable().len(), 1);
    let bob_row = staff.staff().iter().find(|s| s.id == bob.id).unwrap();
    assert!(!bob_row.is_trackable);
    assert!(bob_row.updated_at.is_some());
}

#[tokio::test]
async fn test_product_sale_lifecycle() {
    let (_, gateway) = setup();
    let mut summary = SummaryStore::new(gateway);

    let sales = summary.product_sales_mut();
    sales
        .add(ProductSaleCreate {
            name: "Soap batch".to_string(),
            description: None,
            amount: 60.0,
            date: date(4),
        })
        .await
        .unwrap();
    sales
        .add(ProductSaleCreate {
            name: "Gift cards".to_string(),
            description: None,
            amount: 40.0,
            date: date(9),
        })
        .await
        .unwrap();
    // Newest entry sits on top of the local list
    assert_eq!(sales.sales()[0].name, "Gift cards");

    let id = sales.sales()[0].id.clone();
    sales
        .update(
            &id,
            shared::models::ProductSaleUpdate {
                amount: Some(45.0),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(sales.sales()[0].amount, 45.0);

    sales.remove(&id).await.unwrap();
    assert_eq!(sales.sales().len(), 1);

    summary.refresh(YEAR, MONTH).await;
    assert_eq!(summary.summary().total_product_sales, 60.0);
}

// ========================================================================
// Auth
// ========================================================================

#[tokio::test]
async fn test_auth_login_logout_cycle() {
    init_tracing();
    let identity = Arc::new(MockIdentity::new("owner@example.com", "secret"));
    let mut auth = AuthStore::new(identity.clone());

    let rejected = auth.login("owner@example.com", "wrong").await;
    assert!(matches!(rejected, Err(StoreError::Auth(_))));
    assert!(!auth.is_authenticated());

    auth.login("owner@example.com", "secret").await.unwrap();
    assert!(auth.is_authenticated());
    assert_eq!(auth.user().unwrap().email, "owner@example.com");

    auth.logout().await.unwrap();
    assert!(!auth.is_authenticated());
}

#[tokio::test]
async fn test_auth_restore_and_change_notifications() {
    init_tracing();
    let identity = Arc::new(MockIdentity::new("owner@example.com", "secret"));

    // A session established elsewhere is visible through restore()
    use shared::IdentityService;
    identity.sign_in("owner@example.com", "secret").await.unwrap();
    let mut auth = AuthStore::new(identity.clone());
    assert!(!auth.is_authenticated());
    auth.restore().await.unwrap();
    assert!(auth.is_authenticated());

    // A sign-out pushed by the backend is adopted via sync()
    identity.sign_out().await.unwrap();
    auth.sync();
    assert!(!auth.is_authenticated());
}
