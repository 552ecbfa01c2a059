//! Описание экрана настроек, построенное из конфигурации

use super::config::{AppConfig, OptimizationPriority};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingValue {
    Text(String),
    Toggle(bool),
    Select {
        options: Vec<String>,
        selected: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Setting {
    pub label: &'static str,
    pub description: &'static str,
    pub value: SettingValue,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingSection {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub settings: Vec<Setting>,
}

fn setting(label: &'static str, description: &'static str, value: SettingValue) -> Setting {
    Setting {
        label,
        description,
        value,
    }
}

fn text(value: impl ToString) -> SettingValue {
    SettingValue::Text(value.to_string())
}

/// Sections of the Settings screen, in display order.
pub fn settings_sections(config: &AppConfig) -> Vec<SettingSection> {
    vec![
        SettingSection {
            title: "Order Cutoff",
            description: "Configure daily order processing times",
            icon: "clock",
            settings: vec![
                setting(
                    "Daily Cutoff Time",
                    "Orders after this time go to next business day",
                    text(&config.cutoff.daily_cutoff),
                ),
                setting(
                    "Weekend Processing",
                    "Allow order processing on weekends",
                    SettingValue::Toggle(config.cutoff.weekend_processing),
                ),
                setting(
                    "Holiday Override",
                    "Enable processing during busy periods",
                    SettingValue::Toggle(config.cutoff.holiday_override),
                ),
            ],
        },
        SettingSection {
            title: "Staff Defaults",
            description: "Default settings for staff assignments",
            icon: "users",
            settings: vec![
                setting(
                    "Default Start Location",
                    "Where staff routes begin",
                    text(&config.staff.default_start_location),
                ),
                setting(
                    "Max Orders per Staff",
                    "Maximum orders assigned to one person",
                    text(config.staff.max_orders_per_staff),
                ),
                setting(
                    "Auto-Assignment",
                    "Automatically assign orders to available staff",
                    SettingValue::Toggle(config.staff.auto_assignment),
                ),
            ],
        },
        SettingSection {
            title: "Route Optimization",
            description: "Configure route generation preferences",
            icon: "map-pin",
            settings: vec![
                setting(
                    "Optimization Priority",
                    "How routes are optimized",
                    SettingValue::Select {
                        options: OptimizationPriority::all()
                            .iter()
                            .map(|p| p.label().to_string())
                            .collect(),
                        selected: config.routing.optimization_priority.label().to_string(),
                    },
                ),
                setting(
                    "Max Route Duration",
                    "Maximum time for a single route",
                    text(&config.routing.max_route_duration),
                ),
                setting(
                    "Include Return Trip",
                    "Calculate time to return to start",
                    SettingValue::Toggle(config.routing.include_return_trip),
                ),
            ],
        },
        SettingSection {
            title: "Notifications",
            description: "Configure alerts and notifications",
            icon: "bell",
            settings: vec![
                setting(
                    "Cutoff Warning",
                    "Alert before daily cutoff time",
                    SettingValue::Toggle(config.notifications.cutoff_warning),
                ),
                setting(
                    "Order Failure Alerts",
                    "Notify when purchases fail",
                    SettingValue::Toggle(config.notifications.order_failure_alerts),
                ),
                setting(
                    "Route Completion",
                    "Notify when staff complete routes",
                    SettingValue::Toggle(config.notifications.route_completion),
                ),
            ],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sections_follow_config() {
        let sections = settings_sections(&AppConfig::default());
        let titles: Vec<&str> = sections.iter().map(|s| s.title).collect();
        assert_eq!(
            titles,
            vec!["Order Cutoff", "Staff Defaults", "Route Optimization", "Notifications"]
        );
        assert_eq!(sections[0].settings[0].value, SettingValue::Text("13:10".to_string()));
        assert_eq!(sections[1].settings[1].value, SettingValue::Text("20".to_string()));
        assert_eq!(sections[3].settings[2].value, SettingValue::Toggle(false));
    }

    #[test]
    fn test_priority_select_lists_every_option() {
        let sections = settings_sections(&AppConfig::default());
        match &sections[2].settings[0].value {
            SettingValue::Select { options, selected } => {
                assert_eq!(options, &vec!["Speed", "Distance", "Cost", "Balanced"]);
                assert_eq!(selected, "Speed");
            }
            other => panic!("expected select, got {other:?}"),
        }
    }
}
