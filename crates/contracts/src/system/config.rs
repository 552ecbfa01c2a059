use chrono::NaiveTime;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    pub app: AppSection,
    pub cutoff: CutoffConfig,
    pub staff: StaffDefaults,
    pub routing: RoutingConfig,
    pub notifications: NotificationConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppSection {
    pub title: String,
    /// Shown under the dashboard title
    pub date_label: String,
    /// One of the `log` crate level names
    pub log_level: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct CutoffConfig {
    /// "HH:MM", local time
    pub daily_cutoff: String,
    pub weekend_processing: bool,
    pub holiday_override: bool,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct StaffDefaults {
    pub default_start_location: String,
    pub max_orders_per_staff: u32,
    pub auto_assignment: bool,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum OptimizationPriority {
    Speed,
    Distance,
    Cost,
    Balanced,
}

impl OptimizationPriority {
    pub fn label(&self) -> &'static str {
        match self {
            OptimizationPriority::Speed => "Speed",
            OptimizationPriority::Distance => "Distance",
            OptimizationPriority::Cost => "Cost",
            OptimizationPriority::Balanced => "Balanced",
        }
    }

    pub fn all() -> &'static [OptimizationPriority] {
        &[
            OptimizationPriority::Speed,
            OptimizationPriority::Distance,
            OptimizationPriority::Cost,
            OptimizationPriority::Balanced,
        ]
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct RoutingConfig {
    pub optimization_priority: OptimizationPriority,
    pub max_route_duration: String,
    pub include_return_trip: bool,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct NotificationConfig {
    pub cutoff_warning: bool,
    pub order_failure_alerts: bool,
    pub route_completion: bool,
}

/// Default configuration embedded in the binary
pub const DEFAULT_CONFIG: &str = r#"
[app]
title = "ProcureFlow"
date_label = "December 17, 2024"
log_level = "debug"

[cutoff]
daily_cutoff = "13:10"
weekend_processing = false
holiday_override = true

[staff]
default_start_location = "Office (Roppongi)"
max_orders_per_staff = 20
auto_assignment = true

[routing]
optimization_priority = "Speed"
max_route_duration = "4 hours"
include_return_trip = true

[notifications]
cutoff_warning = true
order_failure_alerts = true
route_completion = false
"#;

/// Parse configuration from TOML text
pub fn parse_config(contents: &str) -> anyhow::Result<AppConfig> {
    let config: AppConfig = toml::from_str(contents)?;
    config.cutoff_time()?;
    Ok(config)
}

/// Load the embedded configuration
pub fn load_config() -> anyhow::Result<AppConfig> {
    log::info!("Using default embedded configuration");
    parse_config(DEFAULT_CONFIG)
}

impl AppConfig {
    pub fn cutoff_time(&self) -> anyhow::Result<NaiveTime> {
        NaiveTime::parse_from_str(&self.cutoff.daily_cutoff, "%H:%M").map_err(|e| {
            anyhow::anyhow!("invalid daily_cutoff '{}': {}", self.cutoff.daily_cutoff, e)
        })
    }

    pub fn log_level(&self) -> log::Level {
        self.app.log_level.parse().unwrap_or(log::Level::Debug)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            app: AppSection {
                title: "ProcureFlow".to_string(),
                date_label: "December 17, 2024".to_string(),
                log_level: "debug".to_string(),
            },
            cutoff: CutoffConfig {
                daily_cutoff: "13:10".to_string(),
                weekend_processing: false,
                holiday_override: true,
            },
            staff: StaffDefaults {
                default_start_location: "Office (Roppongi)".to_string(),
                max_orders_per_staff: 20,
                auto_assignment: true,
            },
            routing: RoutingConfig {
                optimization_priority: OptimizationPriority::Speed,
                max_route_duration: "4 hours".to_string(),
                include_return_trip: true,
            },
            notifications: NotificationConfig {
                cutoff_warning: true,
                order_failure_alerts: true,
                route_completion: false,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = load_config();
        assert!(config.is_ok());
        let config = config.unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.cutoff_time().unwrap(), NaiveTime::from_hms_opt(13, 10, 0).unwrap());
        assert_eq!(config.log_level(), log::Level::Debug);
    }

    #[test]
    fn test_bad_cutoff_is_rejected() {
        let broken = DEFAULT_CONFIG.replace("\"13:10\"", "\"lunchtime\"");
        let err = parse_config(&broken).unwrap_err();
        assert!(err.to_string().contains("lunchtime"));
    }

    #[test]
    fn test_missing_section_is_rejected() {
        assert!(parse_config("[app]\ntitle = \"x\"").is_err());
    }

    #[test]
    fn test_unknown_log_level_falls_back() {
        let mut config = AppConfig::default();
        config.app.log_level = "chatty".to_string();
        assert_eq!(config.log_level(), log::Level::Debug);
        config.app.log_level = "warn".to_string();
        assert_eq!(config.log_level(), log::Level::Warn);
    }
}
