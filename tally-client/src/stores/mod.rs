//! State stores
//!
//! One instance of each store per application session, constructed
//! explicitly and handed to the presentation layer. Each action sets its
//! store's `loading`/`error` fields around its own execution; fetch
//! failures leave the previously fetched data in place (stale but
//! present), mutations also propagate their error to the caller.

pub mod auth;
pub mod collection;
pub mod expense;
pub mod product_sale;
pub mod salary;
pub mod staff;
pub mod summary;

// Re-exports
pub use auth::AuthStore;
pub use collection::CollectionStore;
pub use expense::ExpenseStore;
pub use product_sale::ProductSaleStore;
pub use salary::SalaryStore;
pub use staff::StaffStore;
pub use summary::{SummaryStore, ViewPhase};
