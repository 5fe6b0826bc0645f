use std::env;
use std::time::Duration;

/// Location of the external student data service.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    /// Base URL without trailing slash, e.g. `http://localhost:3001`.
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3001".to_string(),
            timeout_secs: 10,
        }
    }
}

impl ApiConfig {
    /// # Environment Variables
    ///
    /// - `STUDENTDESK_API_URL`: Default `http://localhost:3001`
    /// - `STUDENTDESK_API_TIMEOUT_SECS`: Default 10
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            base_url: env::var("STUDENTDESK_API_URL")
                .map(|v| v.trim().trim_end_matches('/').to_string())
                .ok()
                .filter(|v| !v.is_empty())
                .unwrap_or(defaults.base_url),
            timeout_secs: crate::env_parse("STUDENTDESK_API_TIMEOUT_SECS")
                .unwrap_or(defaults.timeout_secs),
        }
    }

    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Joins `path` onto the base URL.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}
