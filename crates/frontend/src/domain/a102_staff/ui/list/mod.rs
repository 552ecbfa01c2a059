use crate::shared::components::page_header::PageHeader;
use crate::shared::components::stat_card::StatCard;
use crate::shared::components::ui::{Badge, Button, StatusBadge};
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a102_staff::seed::staff;
use contracts::domain::a102_staff::{StaffMember, StaffStats};
use contracts::shared::display::{CodedEnum, Tone};
use leptos::prelude::*;

#[component]
fn StaffCard(member: StaffMember) -> impl IntoView {
    let current_location = member.current_location.clone();

    view! {
        <div class="card staff-card">
            <div class="staff-card__header">
                <div class="avatar">{member.avatar.clone()}</div>
                <div class="staff-card__identity">
                    <div class="staff-card__name">{member.name.clone()}</div>
                    <Badge tone=member.role.tone()>{member.role.label()}</Badge>
                </div>
                <StatusBadge meta=member.status.meta() />
            </div>

            <div class="staff-card__contacts">
                <div class="staff-card__contact">{icon("mail")}<span>{member.email.clone()}</span></div>
                <div class="staff-card__contact">{icon("phone")}<span>{member.phone.clone()}</span></div>
            </div>

            <div class="staff-card__figures">
                <div class="figure">
                    <span class="figure__value">{member.assigned_orders}</span>
                    <span class="figure__label">"Orders"</span>
                </div>
                <div class="figure">
                    <span class="figure__value">{member.assigned_stores}</span>
                    <span class="figure__label">"Stores"</span>
                </div>
                <div class="figure">
                    <span class="figure__value">{member.completed_today}</span>
                    <span class="figure__label">"Done"</span>
                </div>
            </div>

            <div class="staff-card__locations">
                <div class="staff-card__location">
                    {icon("map-pin")}
                    <span>"Start: "{member.start_location.clone()}</span>
                </div>
                {current_location.map(|location| view! {
                    <div class="staff-card__location staff-card__location--current">
                        {icon("navigation")}
                        <span>"Now: "{location}</span>
                    </div>
                })}
            </div>

            <div class="staff-card__actions">
                <Button variant="outline" size="sm">"View Route"</Button>
                <Button variant="secondary" size="sm">"Assign Orders"</Button>
            </div>
        </div>
    }
}

#[component]
pub fn StaffList() -> impl IntoView {
    let stats = StaffStats::compute(staff());
    log::debug!("staff: {} members, {} active today", stats.total, stats.active_today);

    view! {
        <PageFrame page_id="a102_staff--list" category=PAGE_CAT_LIST>
            <PageHeader title="Staff Management" subtitle="Manage buyers and view assignments">
                <Button variant="primary">{icon("user-plus")}" Add Staff"</Button>
            </PageHeader>

            <div class="page__content">
                <div class="stat-grid">
                    <StatCard label="Total Staff" icon_name="users" value=stats.total.to_string() />
                    <StatCard
                        label="Active Today"
                        icon_name="check-circle"
                        value=stats.active_today.to_string()
                        tone=Tone::Success
                    />
                    <StatCard
                        label="En Route"
                        icon_name="navigation"
                        value=stats.en_route.to_string()
                        tone=Tone::Primary
                    />
                    <StatCard
                        label="Completed Today"
                        icon_name="package"
                        value=stats.completed_orders.to_string()
                    />
                </div>

                <div class="card-grid">
                    {staff()
                        .iter()
                        .cloned()
                        .map(|member| view! { <StaffCard member=member /> })
                        .collect_view()}
                </div>
            </div>
        </PageFrame>
    }
}
