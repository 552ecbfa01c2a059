//! Данные и расчёты главного дашборда

pub mod cutoff;
pub mod quick_actions;
pub mod staff_overview;
pub mod summary;
pub mod today_orders;

pub use cutoff::{cutoff_countdown, CutoffCountdown};
pub use quick_actions::{quick_actions, ActionEmphasis, QuickAction};
pub use staff_overview::{staff_snapshots, SnapshotStatus, StaffOverviewStats, StaffSnapshot};
pub use summary::{SummaryFigures, SUMMARY};
pub use today_orders::{today_orders, TodayOrder, TodayOrderStatus};
