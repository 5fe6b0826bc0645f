use std::env;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LogConfig {
    /// Console level used when `RUST_LOG` is not set.
    pub level: String,
    pub dir: String,
    pub file_enabled: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            dir: "storage/logs".to_string(),
            file_enabled: true,
        }
    }
}

impl LogConfig {
    /// # Environment Variables
    ///
    /// - `LOG_LEVEL`: Default `warn`
    /// - `LOG_DIR`: Default `storage/logs`
    /// - `LOG_FILE_ENABLED`: Default true
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            level: env::var("LOG_LEVEL").unwrap_or(defaults.level),
            dir: env::var("LOG_DIR").unwrap_or(defaults.dir),
            file_enabled: crate::env_parse("LOG_FILE_ENABLED").unwrap_or(defaults.file_enabled),
        }
    }
}
