//! Media upload service configuration.
//!
//! Avatars are posted as multipart forms to a hosted image service. The
//! upload preset identifies the unsigned upload profile on that service.

use std::env;

/// Default maximum avatar size (5 MiB).
pub const DEFAULT_MAX_FILE_SIZE: usize = 5 * 1024 * 1024;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UploadConfig {
    pub endpoint: String,
    pub upload_preset: String,
    pub max_file_size: usize,
    pub allowed_mime_types: Vec<String>,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://api.cloudinary.com/v1_1/demo/image/upload".to_string(),
            upload_preset: "studentdesk".to_string(),
            max_file_size: DEFAULT_MAX_FILE_SIZE,
            allowed_mime_types: vec![
                "image/png".to_string(),
                "image/jpeg".to_string(),
                "image/webp".to_string(),
                "image/gif".to_string(),
            ],
        }
    }
}

impl UploadConfig {
    /// # Environment Variables
    ///
    /// - `MEDIA_UPLOAD_URL`: Upload endpoint
    /// - `MEDIA_UPLOAD_PRESET`: Default `studentdesk`
    /// - `MEDIA_MAX_FILE_SIZE`: Bytes, default 5 MiB
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            endpoint: env::var("MEDIA_UPLOAD_URL").unwrap_or(defaults.endpoint),
            upload_preset: env::var("MEDIA_UPLOAD_PRESET").unwrap_or(defaults.upload_preset),
            max_file_size: crate::env_parse("MEDIA_MAX_FILE_SIZE")
                .unwrap_or(defaults.max_file_size),
            allowed_mime_types: defaults.allowed_mime_types,
        }
    }

    #[must_use]
    pub fn allows(&self, mime_type: &str) -> bool {
        self.allowed_mime_types.iter().any(|m| m == mime_type)
    }
}
