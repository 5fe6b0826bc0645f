//! Application configuration.
//!
//! Aggregates the per-concern settings from `studentdesk-config`. Values
//! come from the environment (after `.env` is loaded) and fall back to
//! defaults.

use studentdesk_config::{ApiConfig, ListConfig, LogConfig, UploadConfig};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub upload: UploadConfig,
    pub list: ListConfig,
    pub log: LogConfig,
}

impl AppConfig {
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            api: ApiConfig::from_env(),
            upload: UploadConfig::from_env(),
            list: ListConfig::from_env(),
            log: LogConfig::from_env(),
        }
    }
}
