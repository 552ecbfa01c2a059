use crate::dashboards::d100_operations::ui::OperationsDashboard;
use crate::domain::a101_order::ui::list::OrdersList;
use crate::domain::a102_staff::ui::list::StaffList;
use crate::domain::a103_store::ui::list::StoresList;
use crate::domain::a104_route::ui::list::RoutesList;
use crate::layout::left::sidebar::Sidebar;
use crate::layout::Shell;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_CUSTOM;
use crate::system::settings::ui::SettingsPage;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes, A};
use leptos_router::path;

/// Top-level screens reachable from the sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Dashboard,
    Orders,
    Staff,
    Stores,
    Routes,
    Settings,
}

impl Page {
    pub fn all() -> &'static [Page] {
        &[
            Page::Dashboard,
            Page::Orders,
            Page::Staff,
            Page::Stores,
            Page::Routes,
            Page::Settings,
        ]
    }

    pub fn path(&self) -> &'static str {
        match self {
            Page::Dashboard => "/",
            Page::Orders => "/orders",
            Page::Staff => "/staff",
            Page::Stores => "/stores",
            Page::Routes => "/routes",
            Page::Settings => "/settings",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Page::Dashboard => "Dashboard",
            Page::Orders => "Orders",
            Page::Staff => "Staff",
            Page::Stores => "Stores",
            Page::Routes => "Routes",
            Page::Settings => "Settings",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Page::Dashboard => "layout-dashboard",
            Page::Orders => "shopping-cart",
            Page::Staff => "users",
            Page::Stores => "store",
            Page::Routes => "route",
            Page::Settings => "settings",
        }
    }

    /// Exact match only; anything else is the not-found page.
    pub fn from_path(path: &str) -> Option<Page> {
        Page::all().iter().copied().find(|p| p.path() == path)
    }
}

#[component]
fn NotFound() -> impl IntoView {
    let location = leptos_router::hooks::use_location();
    log::warn!("no page for path '{}'", location.pathname.get_untracked());

    view! {
        <PageFrame page_id="not_found--custom" category=PAGE_CAT_CUSTOM>
            <div class="not-found">
                <h1 class="not-found__code">"404"</h1>
                <p class="not-found__text">"Page not found"</p>
                <A href=Page::Dashboard.path()>
                    <span class="button button--secondary">"Back to Dashboard"</span>
                </A>
            </div>
        </PageFrame>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Shell left=|| view! { <Sidebar /> }.into_any()>
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=OperationsDashboard />
                    <Route path=path!("/orders") view=OrdersList />
                    <Route path=path!("/staff") view=StaffList />
                    <Route path=path!("/stores") view=StoresList />
                    <Route path=path!("/routes") view=RoutesList />
                    <Route path=path!("/settings") view=SettingsPage />
                </Routes>
            </Shell>
        </Router>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_from_path_is_exact() {
        assert_eq!(Page::from_path("/"), Some(Page::Dashboard));
        assert_eq!(Page::from_path("/orders"), Some(Page::Orders));
        assert_eq!(Page::from_path("/settings"), Some(Page::Settings));
        assert_eq!(Page::from_path("/orders/"), None);
        assert_eq!(Page::from_path("/Orders"), None);
        assert_eq!(Page::from_path("/unknown"), None);
    }

    #[test]
    fn test_every_page_round_trips_through_its_path() {
        for page in Page::all() {
            assert_eq!(Page::from_path(page.path()), Some(*page));
        }
    }

    #[test]
    fn test_paths_and_labels_are_unique() {
        let paths: HashSet<_> = Page::all().iter().map(Page::path).collect();
        let labels: HashSet<_> = Page::all().iter().map(Page::label).collect();
        assert_eq!(paths.len(), Page::all().len());
        assert_eq!(labels.len(), Page::all().len());
    }
}
