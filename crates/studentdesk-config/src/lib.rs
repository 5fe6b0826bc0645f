//! # studentdesk Config
//!
//! Configuration structures loaded from environment variables:
//!
//! - [`api`]: Student data service endpoint
//! - [`upload`]: Media upload service for avatars
//! - [`list`]: List page-size choices
//! - [`log`]: Console and file logging
//!
//! Every struct has a `Default` and a `from_env()` that falls back to the
//! default for variables that are unset or cannot be parsed.
//!
//! # Example
//!
//! ```ignore
//! use studentdesk_config::{ApiConfig, ListConfig};
//!
//! let api = ApiConfig::from_env();
//! let list = ListConfig::from_env();
//! println!("{} ({} per page)", api.base_url, list.default_per_page);
//! ```

pub mod api;
pub mod list;
pub mod log;
pub mod upload;

// Re-export commonly used types at crate root
pub use api::ApiConfig;
pub use list::ListConfig;
pub use log::LogConfig;
pub use upload::UploadConfig;

pub(crate) fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    std::env::var(key).ok().and_then(|v| v.trim().parse().ok())
}
