use contracts::domain::a104_route::seed::routes;
use contracts::domain::a104_route::RouteSelection;
use leptos::prelude::*;

/// Starts on the first route of the day.
pub fn create_state() -> RwSignal<RouteSelection> {
    RwSignal::new(RouteSelection::first_of(routes()))
}
