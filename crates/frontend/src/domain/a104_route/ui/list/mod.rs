mod state;

use self::state::create_state;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::ui::{Button, StatusBadge};
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a104_route::seed::routes;
use contracts::domain::a104_route::{RouteSelection, RouteStop, StaffRoute};
use contracts::shared::display::CodedEnum;
use leptos::prelude::*;
use thaw::{Flex, FlexGap};

#[component]
fn RouteCard(route: StaffRoute, selection: RwSignal<RouteSelection>) -> impl IntoView {
    let id = StoredValue::new(route.id.clone());

    view! {
        <button
            class="route-card"
            class:route-card--selected=move || selection.with(|s| s.is_selected(&id.get_value()))
            on:click=move |_| {
                let id = id.get_value();
                log::debug!("routes: selected '{id}'");
                selection.update(|s| s.select(id));
            }
        >
            <div class="route-card__header">
                <div class="avatar avatar--primary">{route.staff_avatar.clone()}</div>
                <div class="route-card__identity">
                    <p class="route-card__name">{route.staff_name.clone()}</p>
                    <StatusBadge meta=route.status.meta() />
                </div>
                {icon("chevron-right")}
            </div>
            <div class="route-card__figures">
                <div class="figure">
                    <span class="figure__value">{route.total_stops}</span>
                    <span class="figure__label">"Stops"</span>
                </div>
                <div class="figure figure--success">
                    <span class="figure__value">{route.completed_stops}</span>
                    <span class="figure__label">"Done"</span>
                </div>
                <div class="figure">
                    <span class="figure__value">{route.estimated_duration.clone()}</span>
                    <span class="figure__label">"Est."</span>
                </div>
            </div>
        </button>
    }
}

#[component]
fn MapPlaceholder() -> impl IntoView {
    view! {
        <div class="card map-placeholder">
            <div class="map-placeholder__icon">{icon("navigation")}</div>
            <p class="map-placeholder__title">"Map View"</p>
            <p class="map-placeholder__text">"Connect to mapping service for live routes"</p>
        </div>
    }
}

#[component]
fn StopRow(number: usize, stop: RouteStop) -> impl IntoView {
    let code = stop.status.code();

    view! {
        <div class=format!("route-stop route-stop--{code}")>
            <div class=format!("route-stop__number route-stop__number--{code}")>{number}</div>
            <div class="route-stop__info">
                <p class="route-stop__name">{stop.store_name.clone()}</p>
                <div class="route-stop__meta">
                    <span>{icon("map-pin")}{stop.address.clone()}</span>
                    <span>{icon("clock")}{stop.estimated_time.clone()}</span>
                </div>
            </div>
            <div class="route-stop__orders">
                <p class="route-stop__orders-value">{stop.orders}</p>
                <p class="route-stop__orders-label">"orders"</p>
            </div>
        </div>
    }
}

#[component]
fn StopList(route: StaffRoute) -> impl IntoView {
    view! {
        <div class="card route-stops">
            <h3 class="card__title">{format!("Route for {}", route.staff_name)}</h3>
            <div class="route-stops__list">
                {route
                    .stops
                    .into_iter()
                    .enumerate()
                    .map(|(index, stop)| view! { <StopRow number=index + 1 stop=stop /> })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
pub fn RoutesList() -> impl IntoView {
    let selection = create_state();
    let active = Memo::new(move |_| selection.with(|s| s.active(routes()).cloned()));

    view! {
        <PageFrame page_id="a104_route--list" category=PAGE_CAT_LIST>
            <PageHeader title="Route Planning" subtitle="Optimize and track staff routes">
                <Flex gap=FlexGap::Small>
                    <Button variant="primary">{icon("refresh")}" Regenerate All Routes"</Button>
                    <Button variant="secondary">{icon("play")}" Start All Routes"</Button>
                </Flex>
            </PageHeader>

            <div class="page__content routes-layout">
                <div class="routes-layout__list">
                    <h3 class="section-title">"Today's Routes"</h3>
                    {routes()
                        .iter()
                        .cloned()
                        .map(|route| view! { <RouteCard route=route selection=selection /> })
                        .collect_view()}
                </div>

                <div class="routes-layout__detail">
                    <MapPlaceholder />
                    {move || active.get().map(|route| view! { <StopList route=route /> })}
                </div>
            </div>
        </PageFrame>
    }
}
