use contracts::domain::a101_order::{OrderQuery, OrderStatus};
use contracts::shared::filter::SelectFilter;
use leptos::prelude::*;

#[derive(Clone, Debug, Default)]
pub struct OrdersListState {
    pub search_query: String,
    pub status_filter: SelectFilter<OrderStatus>,
}

impl OrdersListState {
    pub fn query(&self) -> OrderQuery {
        OrderQuery::new(self.search_query.clone(), self.status_filter.clone())
    }
}

pub fn create_state() -> RwSignal<OrdersListState> {
    RwSignal::new(OrdersListState::default())
}
