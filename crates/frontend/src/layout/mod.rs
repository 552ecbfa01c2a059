pub mod global_context;
pub mod left;

use leptos::prelude::*;

/// Main application shell.
///
/// ```text
/// +-----------+------------------------------+
/// |  Sidebar  |           Content            |
/// |   (Left)  |   (routed page, scrolls)     |
/// +-----------+------------------------------+
/// ```
#[component]
pub fn Shell<L>(left: L, children: Children) -> impl IntoView
where
    L: Fn() -> AnyView + 'static + Send,
{
    view! {
        <div class="app-layout">
            {left()}
            <main class="app-main">
                {children()}
            </main>
        </div>
    }
}
