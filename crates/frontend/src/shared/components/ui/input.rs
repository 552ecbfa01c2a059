use crate::shared::icons::icon;
use leptos::prelude::*;

/// Text input with a leading search icon
#[component]
pub fn SearchInput(
    /// Input value
    #[prop(into)]
    value: Signal<String>,
    /// Called with the raw text on every keystroke
    #[prop(optional)]
    on_input: Option<Callback<String>>,
    /// Placeholder text
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
) -> impl IntoView {
    let input_placeholder = move || placeholder.get().unwrap_or_default();
    let additional_class = move || class.get().unwrap_or_default();

    view! {
        <div class=move || format!("search-input {}", additional_class())>
            <span class="search-input__icon">{icon("search")}</span>
            <input
                class="form__input search-input__field"
                type="text"
                prop:value=move || value.get()
                placeholder=input_placeholder
                on:input=move |ev| {
                    if let Some(handler) = on_input {
                        handler.run(event_target_value(&ev));
                    }
                }
            />
        </div>
    }
}
