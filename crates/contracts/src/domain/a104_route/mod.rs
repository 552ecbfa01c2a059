pub mod aggregate;
pub mod seed;
pub mod selection;

pub use aggregate::{RouteStatus, RouteStop, StaffRoute, StopStatus};
pub use selection::RouteSelection;
