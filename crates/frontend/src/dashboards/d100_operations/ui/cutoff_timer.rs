use crate::layout::global_context::use_app_config;
use crate::shared::icons::icon;
use chrono::NaiveTime;
use contracts::dashboards::d100_operations::cutoff_countdown;
use leptos::prelude::*;
use std::time::Duration;

/// Browser wall clock, local time zone.
fn local_time() -> NaiveTime {
    let now = js_sys::Date::new_0();
    NaiveTime::from_hms_opt(now.get_hours(), now.get_minutes(), now.get_seconds())
        .unwrap_or_default()
}

#[component]
pub fn CutoffTimer() -> impl IntoView {
    let cutoff = match use_app_config().cutoff_time() {
        Ok(cutoff) => cutoff,
        Err(e) => {
            log::error!("cutoff timer: {e:#}");
            return view! {
                <div class="card widget cutoff-timer">
                    <h3 class="widget__title">"Daily Cutoff"</h3>
                    <p class="widget__subtitle">"Cutoff time is not configured"</p>
                </div>
            }
            .into_any();
        }
    };

    let now = RwSignal::new(local_time());
    match set_interval_with_handle(move || now.set(local_time()), Duration::from_secs(1)) {
        Ok(handle) => on_cleanup(move || handle.clear()),
        Err(e) => log::warn!("cutoff timer: interval not started: {e:?}"),
    }

    let countdown = Memo::new(move |_| cutoff_countdown(now.get(), cutoff));

    view! {
        <div class=move || format!("card widget cutoff-timer cutoff-timer--{}", countdown.get().tone().code())>
            <div class="cutoff-timer__header">
                {icon("clock")}
                <h3 class="widget__title">"Daily Cutoff"</h3>
            </div>
            <p class="widget__subtitle">{format!("Orders close at {}", cutoff.format("%H:%M"))}</p>
            <div class="cutoff-timer__remaining">{move || countdown.get().remaining_hms()}</div>
            <p class="cutoff-timer__note">
                {move || if countdown.get().is_passed() {
                    "Cutoff passed, orders roll to the next business day"
                } else {
                    "left until today's cutoff"
                }}
            </p>
        </div>
    }
    .into_any()
}
