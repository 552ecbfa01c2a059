use super::cutoff_timer::CutoffTimer;
use super::quick_actions::QuickActions;
use super::staff_overview::StaffOverview;
use super::today_orders::TodayOrders;
use crate::layout::global_context::use_app_config;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::stat_card::StatCard;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;
use contracts::dashboards::d100_operations::SUMMARY;
use contracts::shared::display::Tone;
use leptos::prelude::*;

#[component]
pub fn OperationsDashboard() -> impl IntoView {
    let config = use_app_config();
    let s = SUMMARY;

    view! {
        <PageFrame page_id="d100_operations--dashboard" category=PAGE_CAT_DASHBOARD>
            <PageHeader
                title="Dashboard"
                subtitle=format!("{} - Daily procurement overview", config.app.date_label)
            />

            <div class="page__content">
                <div class="stat-grid">
                    <StatCard
                        label="Total Orders"
                        icon_name="shopping-cart"
                        value=s.total_orders.to_string()
                        subtitle="Today"
                        trend=s.orders_trend
                        tone=Tone::Primary
                    />
                    <StatCard
                        label="Stores to Visit"
                        icon_name="store"
                        value=s.stores_to_visit.to_string()
                        subtitle=format!("Across {} districts", s.districts)
                    />
                    <StatCard
                        label="Active Staff"
                        icon_name="users"
                        value=s.active_staff.to_string()
                        subtitle=format!("of {} assigned", s.assigned_staff)
                    />
                    <StatCard
                        label="Completed"
                        icon_name="check-circle"
                        value=format!("{}%", s.completion_percent())
                        subtitle=format!("{} of {} items", s.completed_items, s.total_orders)
                        trend=s.completion_trend
                        tone=Tone::Success
                    />
                </div>

                <div class="stat-grid stat-grid--three">
                    <StatCard
                        label="Pending Assignment"
                        icon_name="clock"
                        value=s.pending_assignment.to_string()
                        tone=Tone::Warning
                    />
                    <StatCard
                        label="In Progress"
                        icon_name="shopping-cart"
                        value=s.in_progress.to_string()
                        tone=Tone::Primary
                    />
                    <StatCard
                        label="Failed / Issues"
                        icon_name="alert-triangle"
                        value=s.failed.to_string()
                        tone=Tone::Error
                    />
                </div>

                <div class="dashboard-grid">
                    <div class="dashboard-grid__main">
                        <TodayOrders />
                    </div>
                    <div class="dashboard-grid__side">
                        <CutoffTimer />
                        <QuickActions />
                        <StaffOverview />
                    </div>
                </div>
            </div>
        </PageFrame>
    }
}
