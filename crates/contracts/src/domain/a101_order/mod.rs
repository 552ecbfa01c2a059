pub mod aggregate;
pub mod query;
pub mod seed;

pub use aggregate::{Order, OrderPriority, OrderStatus};
pub use query::{filter_orders, OrderQuery};
