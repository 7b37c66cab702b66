//! App settings persisted in `localStorage`.

use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

const SETTINGS_KEY: &str = "settings";

pub const DEFAULT_CURRENCY: &str = "CHF";

fn default_api_base_url() -> String {
    option_env!("EXPENSES_API_BASE_URL")
        .unwrap_or("")
        .trim_end_matches('/')
        .to_string()
}

fn default_currency() -> String {
    DEFAULT_CURRENCY.to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AppSettings {
    /// Prefix for every `/api/...` path. Empty means same origin.
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    #[serde(default = "default_currency")]
    pub currency_code: String,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            currency_code: default_currency(),
            log_level: default_log_level(),
        }
    }
}

impl AppSettings {
    /// Reads stored settings; anything unreadable falls back to defaults.
    pub fn parse(raw: &str) -> AppSettings {
        match serde_json::from_str::<AppSettings>(raw) {
            Ok(mut settings) => {
                settings.api_base_url = settings.api_base_url.trim_end_matches('/').to_string();
                settings
            }
            Err(err) => {
                log::warn!("ignoring stored settings: {}", err);
                AppSettings::default()
            }
        }
    }

    pub fn log_level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }
}

pub fn load_settings() -> AppSettings {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(raw)) = storage.get_item(SETTINGS_KEY) {
                return AppSettings::parse(&raw);
            }
        }
    }
    AppSettings::default()
}
