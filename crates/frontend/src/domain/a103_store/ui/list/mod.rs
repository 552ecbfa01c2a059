mod state;

use self::state::create_state;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::stat_card::StatCard;
use crate::shared::components::ui::{Button, SearchInput, Select, StatusBadge};
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a103_store::seed::stores;
use contracts::domain::a103_store::{filter_stores, store_categories, Store, StoreStats};
use contracts::shared::display::{CodedEnum, Tone};
use contracts::shared::filter::{SelectFilter, ALL_CODE};
use leptos::prelude::*;
use thaw::{Flex, FlexAlign, FlexGap, FlexJustify};

/// Unlisted categories fall back to the neutral chip.
fn category_class(category: &str) -> &'static str {
    match category {
        "Electronics" => "chip chip--blue",
        "Food & Beverage" => "chip chip--green",
        "Home & Lifestyle" => "chip chip--amber",
        "Fashion" => "chip chip--pink",
        "Stationery" => "chip chip--violet",
        _ => "chip",
    }
}

fn category_options(categories: &[String]) -> Vec<(String, String)> {
    std::iter::once((ALL_CODE.to_string(), "All Categories".to_string()))
        .chain(categories.iter().map(|c| (c.clone(), c.clone())))
        .collect()
}

fn directory_subtitle(count: usize) -> String {
    format!("{count} stores across Tokyo")
}

#[component]
fn StoreCard(store: Store) -> impl IntoView {
    let orders_today = store.orders_today;

    view! {
        <div class="card store-card">
            <div class="store-card__header">
                <div class="store-card__title">
                    <h3 class="store-card__name">{store.name.clone()}</h3>
                    <div class="store-card__district">
                        {icon("map-pin")}
                        <span>{store.district.clone()}</span>
                    </div>
                </div>
                <StatusBadge meta=store.status.meta() />
            </div>

            <span class=category_class(&store.category)>{store.category.clone()}</span>

            <div class="store-card__details">
                <div class="store-card__detail">{icon("clock")}<span>{store.operating_hours.clone()}</span></div>
                <div class="store-card__detail">{icon("map-pin")}<span>{format!("{} from office", store.distance)}</span></div>
                <div class="store-card__detail">{icon("star")}<span>{format!("Priority: {}", store.priority)}</span></div>
            </div>

            {store.has_orders_today().then(|| view! {
                <div class="store-card__orders">
                    <span>{format!("{orders_today} orders today")}</span>
                    <Button variant="ghost" size="sm">"View"</Button>
                </div>
            })}
        </div>
    }
}

#[component]
pub fn StoresList() -> impl IntoView {
    let state = create_state();
    let stats = StoreStats::compute(stores());
    let categories = store_categories(stores());
    let options = category_options(&categories);

    let filtered = Memo::new(move |_| state.with(|s| filter_stores(stores(), &s.query())));

    let on_search = Callback::new(move |value: String| {
        log::debug!("stores: search '{value}'");
        state.update(|s| s.search_query = value);
    });

    let on_category = Callback::new(move |code: String| {
        let filter = match SelectFilter::<String>::parse(&code) {
            Ok(filter) => filter,
            Err(e) => match e {},
        };
        log::debug!("stores: category filter '{}'", filter.code());
        state.update(|s| s.category_filter = filter);
    });

    view! {
        <PageFrame page_id="a103_store--list" category=PAGE_CAT_LIST>
            <PageHeader title="Store Directory" subtitle=directory_subtitle(stores().len()) />

            <div class="page__content">
                <div class="stat-grid">
                    <StatCard label="Total Stores" icon_name="store" value=stats.total.to_string() />
                    <StatCard
                        label="Open Now"
                        icon_name="clock"
                        value=stats.open_now.to_string()
                        tone=Tone::Success
                    />
                    <StatCard
                        label="To Visit Today"
                        icon_name="map-pin"
                        value=stats.to_visit_today.to_string()
                        tone=Tone::Primary
                    />
                    <StatCard
                        label="Total Orders"
                        icon_name="shopping-cart"
                        value=stats.total_orders.to_string()
                    />
                </div>

                <Flex class="toolbar" justify=FlexJustify::SpaceBetween align=FlexAlign::Center gap=FlexGap::Medium>
                    <SearchInput
                        value=Signal::derive(move || state.with(|s| s.search_query.clone()))
                        on_input=on_search
                        placeholder="Search stores or districts..."
                        class="toolbar__search"
                    />
                    <Flex gap=FlexGap::Small align=FlexAlign::Center>
                        <Select
                            value=Signal::derive(move || state.with(|s| s.category_filter.code()))
                            on_change=on_category
                            options=options
                        />
                        <Button variant="outline">{icon("filter")}" More Filters"</Button>
                        <Button variant="primary">{icon("plus")}" Add Store"</Button>
                    </Flex>
                </Flex>

                <div class="card-grid">
                    <For
                        each=move || filtered.get()
                        key=|store| store.id.clone()
                        children=move |store: Store| view! { <StoreCard store=store /> }
                    />
                </div>
                <Show when=move || filtered.with(|rows| rows.is_empty())>
                    <div class="table-empty">"No stores match the current filters"</div>
                </Show>
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_options_start_with_all() {
        let options = category_options(&store_categories(stores()));
        assert_eq!(options[0], ("all".to_string(), "All Categories".to_string()));
        assert_eq!(options[1].0, "Electronics");
        assert_eq!(options.len(), 6);
    }

    #[test]
    fn test_directory_subtitle_counts_every_store() {
        assert_eq!(directory_subtitle(stores().len()), "8 stores across Tokyo");
    }

    #[test]
    fn test_unknown_category_gets_plain_chip() {
        assert_eq!(category_class("Garden"), "chip");
        assert_eq!(category_class("Fashion"), "chip chip--pink");
    }
}
