use contracts::domain::a103_store::StoreQuery;
use contracts::shared::filter::SelectFilter;
use leptos::prelude::*;

#[derive(Clone, Debug, Default)]
pub struct StoresListState {
    pub search_query: String,
    pub category_filter: SelectFilter<String>,
}

impl StoresListState {
    pub fn query(&self) -> StoreQuery {
        StoreQuery::new(self.search_query.clone(), self.category_filter.clone())
    }
}

pub fn create_state() -> RwSignal<StoresListState> {
    RwSignal::new(StoresListState::default())
}
