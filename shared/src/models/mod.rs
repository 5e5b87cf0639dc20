//! Data models
//!
//! Row types for the hosted store's tables, plus the derived monthly
//! summary. Payload structs (`*Create` / `*Update` / `*Upsert`) live next
//! to the entity they feed.

pub mod collection;
pub mod expense;
pub mod monthly_record;
pub mod product_sale;
pub mod salary;
pub mod staff;
pub mod summary;

// Re-exports
pub use collection::*;
pub use expense::*;
pub use monthly_record::*;
pub use product_sale::*;
pub use salary::*;
pub use staff::*;
pub use summary::*;
