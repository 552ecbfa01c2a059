use crate::shared::components::ui::Button;
use crate::shared::icons::icon;
use contracts::dashboards::d100_operations::{quick_actions, ActionEmphasis};
use leptos::prelude::*;

#[component]
pub fn QuickActions() -> impl IntoView {
    view! {
        <div class="card widget">
            <h3 class="widget__title">"Quick Actions"</h3>
            <div class="quick-actions">
                {quick_actions().iter().map(|action| {
                    let variant = match action.emphasis {
                        ActionEmphasis::Primary => "primary",
                        ActionEmphasis::Secondary => "secondary",
                    };
                    view! {
                        <Button variant=variant class="quick-actions__item">
                            {icon(action.icon)}
                            <div class="quick-actions__text">
                                <p class="quick-actions__label">{action.label}</p>
                                <p class="quick-actions__description">{action.description}</p>
                            </div>
                        </Button>
                    }
                }).collect_view()}
            </div>
        </div>
    }
}
