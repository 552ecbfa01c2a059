use contracts::system::config::AppConfig;
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub config: StoredValue<AppConfig>,
}

impl AppGlobalContext {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config: StoredValue::new(config),
        }
    }

    pub fn config(&self) -> AppConfig {
        self.config.get_value()
    }
}

pub fn use_app_config() -> AppConfig {
    use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found")
        .config()
}
