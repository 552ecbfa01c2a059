use crate::shared::icons::icon;
use contracts::shared::display::Tone;
use leptos::prelude::*;

fn tone_class(tone: Tone) -> &'static str {
    match tone {
        Tone::Success => "stat-card stat-card--success",
        Tone::Warning => "stat-card stat-card--warning",
        Tone::Error => "stat-card stat-card--error",
        Tone::Primary => "stat-card stat-card--primary",
        Tone::Neutral => "stat-card",
    }
}

fn trend_view(trend: i32) -> impl IntoView {
    let (arrow, cls) = if trend > 0 {
        ("\u{2191}", "stat-card__change stat-card__change--up")
    } else if trend < 0 {
        ("\u{2193}", "stat-card__change stat-card__change--down")
    } else {
        ("", "stat-card__change stat-card__change--flat")
    };
    view! { <span class=cls>{format!("{}{}%", arrow, trend.abs())}</span> }
}

#[component]
pub fn StatCard(
    /// Label displayed above the value
    #[prop(into)]
    label: String,
    /// Icon name from the icon() helper
    icon_name: &'static str,
    /// Already formatted value
    #[prop(into)]
    value: Signal<String>,
    #[prop(optional)]
    tone: Tone,
    /// Change % relative to the previous period
    #[prop(optional)]
    trend: Option<i32>,
    /// Optional subtitle below the value
    #[prop(optional, into)]
    subtitle: MaybeProp<String>,
) -> impl IntoView {
    view! {
        <div class=tone_class(tone)>
            <div class="stat-card__icon">
                {icon(icon_name)}
            </div>
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">
                    {move || value.get()}
                    {trend.map(trend_view)}
                </div>
                {move || subtitle.get().map(|s| view! {
                    <div class="stat-card__subtitle">{s}</div>
                })}
            </div>
        </div>
    }
}
