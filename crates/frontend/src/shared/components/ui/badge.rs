use contracts::shared::display::{StatusMeta, Tone};
use leptos::prelude::*;

fn tone_class(tone: Tone) -> &'static str {
    match tone {
        Tone::Primary => "badge--primary",
        Tone::Success => "badge--success",
        Tone::Warning => "badge--warning",
        Tone::Error => "badge--error",
        Tone::Neutral => "badge--neutral",
    }
}

/// Badge component with different tones
#[component]
pub fn Badge(
    /// Neutral by default
    #[prop(optional)]
    tone: Tone,
    /// Badge content
    children: Children,
) -> impl IntoView {
    view! {
        <span class=format!("badge {}", tone_class(tone))>
            {children()}
        </span>
    }
}

/// Status badge: label and tone come from the status display table
#[component]
pub fn StatusBadge(meta: StatusMeta) -> impl IntoView {
    view! {
        <span class=format!("badge badge--status {}", tone_class(meta.tone))>
            {meta.label}
        </span>
    }
}
