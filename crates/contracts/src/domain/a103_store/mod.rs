pub mod aggregate;
pub mod query;
pub mod seed;
pub mod stats;

pub use aggregate::{Store, StoreStatus};
pub use query::{filter_stores, store_categories, StoreQuery};
pub use stats::StoreStats;
