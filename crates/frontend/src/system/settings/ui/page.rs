//! Settings screen. Values come from the loaded configuration; controls are
//! display-only and nothing is written back.

use crate::layout::global_context::use_app_config;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::ui::Button;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_SYSTEM;
use contracts::system::settings::{settings_sections, Setting, SettingSection, SettingValue};
use leptos::prelude::*;

/// Options paired with whether each one is the current value.
fn marked_options(options: Vec<String>, selected: &str) -> Vec<(String, bool)> {
    options
        .into_iter()
        .map(|option| {
            let is_selected = option == selected;
            (option, is_selected)
        })
        .collect()
}

fn setting_control(value: SettingValue) -> AnyView {
    match value {
        SettingValue::Text(text) => view! {
            <input class="form__input settings__text" type="text" value=text />
        }
        .into_any(),
        SettingValue::Toggle(on) => view! {
            <button
                type="button"
                role="switch"
                aria-checked=on.to_string()
                class="toggle"
                class:toggle--on=on
            >
                <span class="toggle__thumb"></span>
            </button>
        }
        .into_any(),
        SettingValue::Select { options, selected } => view! {
            <select class="form__select settings__select">
                {marked_options(options, &selected)
                    .into_iter()
                    .map(|(option, is_selected)| {
                        let value = option.clone();
                        view! { <option value=value selected=is_selected>{option}</option> }
                    })
                    .collect_view()}
            </select>
        }
        .into_any(),
    }
}

fn setting_row(setting: Setting) -> impl IntoView {
    view! {
        <div class="settings__row">
            <div class="settings__text-block">
                <p class="settings__label">{setting.label}</p>
                <p class="settings__description">{setting.description}</p>
            </div>
            {setting_control(setting.value)}
        </div>
    }
}

fn section_card(section: SettingSection) -> impl IntoView {
    view! {
        <div class="card settings__section">
            <div class="settings__section-header">
                <div class="settings__icon">{icon(section.icon)}</div>
                <div>
                    <h3 class="card__title">{section.title}</h3>
                    <p class="settings__description">{section.description}</p>
                </div>
            </div>
            <div class="settings__rows">
                {section.settings.into_iter().map(setting_row).collect_view()}
            </div>
        </div>
    }
}

#[component]
pub fn SettingsPage() -> impl IntoView {
    let sections = settings_sections(&use_app_config());

    view! {
        <PageFrame page_id="settings--system" category=PAGE_CAT_SYSTEM>
            <PageHeader title="Settings" subtitle="Configure system preferences and defaults" />

            <div class="page__content settings">
                {sections.into_iter().map(section_card).collect_view()}

                <div class="card settings__section">
                    <div class="settings__section-header">
                        <div class="settings__icon">{icon("database")}</div>
                        <div>
                            <h3 class="card__title">"Data Management"</h3>
                            <p class="settings__description">"Import, export, and manage data"</p>
                        </div>
                    </div>
                    <div class="settings__actions">
                        <Button variant="outline">"Import Stores"</Button>
                        <Button variant="outline">"Export Orders"</Button>
                        <Button variant="outline">"Backup Data"</Button>
                    </div>
                </div>

                <div class="settings__footer">
                    <Button variant="outline">"Cancel"</Button>
                    <Button variant="primary">{icon("save")}" Save Changes"</Button>
                </div>
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::system::config::AppConfig;

    #[test]
    fn test_marked_options_flag_only_the_current_value() {
        let options = vec!["Speed".to_string(), "Distance".to_string(), "Cost".to_string()];
        assert_eq!(
            marked_options(options, "Distance"),
            vec![
                ("Speed".to_string(), false),
                ("Distance".to_string(), true),
                ("Cost".to_string(), false),
            ]
        );
    }

    #[test]
    fn test_priority_select_marks_configured_priority() {
        let sections = settings_sections(&AppConfig::default());
        let SettingValue::Select { options, selected } = sections[2].settings[0].value.clone() else {
            panic!("optimization priority should be a select");
        };
        let marked = marked_options(options, &selected);
        assert_eq!(marked.iter().filter(|(_, is_selected)| *is_selected).count(), 1);
        assert_eq!(marked[0], ("Speed".to_string(), true));
    }
}
