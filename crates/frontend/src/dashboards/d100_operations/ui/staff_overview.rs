use crate::shared::icons::icon;
use contracts::dashboards::d100_operations::{staff_snapshots, StaffOverviewStats, StaffSnapshot};
use contracts::shared::display::CodedEnum;
use leptos::prelude::*;

fn snapshot_row(snapshot: &'static StaffSnapshot) -> impl IntoView {
    let code = snapshot.status.code();
    let location = snapshot.current_location.clone();

    view! {
        <div class="staff-row">
            <div class="avatar avatar--primary avatar--with-dot">
                {snapshot.avatar.clone()}
                <span class=format!("status-dot status-dot--{code}")></span>
            </div>
            <div class="staff-row__info">
                <div class="staff-row__title">
                    <span class="staff-row__name">{snapshot.name.clone()}</span>
                    <span class="chip">{snapshot.status.label()}</span>
                </div>
                {location.map(|location| view! {
                    <div class="staff-row__location">{icon("map-pin")}<span>{location}</span></div>
                })}
            </div>
            <div class="staff-row__figures">
                <span>{icon("package")}{snapshot.assigned_orders}</span>
                <span>{icon("map-pin")}{snapshot.assigned_stores}</span>
            </div>
        </div>
    }
}

#[component]
pub fn StaffOverview() -> impl IntoView {
    let snapshots = staff_snapshots();
    let active = StaffOverviewStats::active_today(snapshots);

    view! {
        <div class="card widget">
            <div class="widget__header">
                <h3 class="widget__title">"Staff Status"</h3>
                <p class="widget__subtitle">{format!("{active} active today")}</p>
            </div>
            <div class="widget__body widget__body--divided">
                {snapshots.iter().map(snapshot_row).collect_view()}
            </div>
        </div>
    }
}
