mod cutoff_timer;
mod dashboard;
mod quick_actions;
mod staff_overview;
mod today_orders;

pub use dashboard::OperationsDashboard;
