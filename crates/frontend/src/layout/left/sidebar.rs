//! Sidebar: brand, one link per page, collapse and expand buttons.
//! Collapsed state lives in the component and resets on reload.

use crate::layout::global_context::use_app_config;
use crate::routes::routes::Page;
use crate::shared::icons::icon;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

#[component]
pub fn Sidebar() -> impl IntoView {
    let location = use_location();
    let pathname = location.pathname;
    let collapsed = RwSignal::new(false);
    let title = use_app_config().app.title;

    let set_collapsed = move |value: bool| {
        collapsed.set(value);
        log::debug!("sidebar collapsed: {value}");
    };

    view! {
        <aside class="app-sidebar" class:app-sidebar--collapsed=move || collapsed.get()>
            <div class="app-sidebar__brand">
                <div class="app-sidebar__logo">{icon("package")}</div>
                <Show when=move || !collapsed.get()>
                    <div class="app-sidebar__brand-text">
                        <span class="app-sidebar__brand-title">{title.clone()}</span>
                        <span class="app-sidebar__brand-subtitle">"Operations Hub"</span>
                    </div>
                    <button
                        class="app-sidebar__toggle"
                        title="Collapse sidebar"
                        on:click=move |_| set_collapsed(true)
                    >
                        {icon("chevron-left")}
                    </button>
                </Show>
            </div>

            <Show when=move || collapsed.get()>
                <div class="app-sidebar__expand">
                    <button
                        class="app-sidebar__toggle"
                        title="Expand sidebar"
                        on:click=move |_| set_collapsed(false)
                    >
                        {icon("chevron-right")}
                    </button>
                </div>
            </Show>

            <nav class="app-sidebar__content">
                {Page::all().iter().map(|page| {
                    let page = *page;
                    view! {
                        <A href=page.path()>
                            <div
                                class="app-sidebar__item"
                                class:app-sidebar__item--active=move || pathname.get() == page.path()
                                title=page.label()
                            >
                                <div class="app-sidebar__item-content">
                                    {icon(page.icon())}
                                    <Show when=move || !collapsed.get()>
                                        <span>{page.label()}</span>
                                    </Show>
                                </div>
                            </div>
                        </A>
                    }
                }).collect_view()}
            </nav>
        </aside>
    }
}
