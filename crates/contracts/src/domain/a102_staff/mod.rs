pub mod aggregate;
pub mod seed;
pub mod stats;

pub use aggregate::{StaffMember, StaffRole, StaffStatus};
pub use stats::StaffStats;
