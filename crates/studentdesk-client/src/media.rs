//! Avatar uploads.
//!
//! Images are validated against [`UploadConfig`] before anything is sent,
//! then posted as a multipart form (`file`, `upload_preset`). The hosted
//! service answers with the public URL of the stored image.

use reqwest::Client;
use reqwest::multipart::{Form, Part};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;
use studentdesk_config::UploadConfig;
use tokio::sync::RwLock;
use tracing::{debug, info};
use uuid::Uuid;

use crate::BoxFuture;
use crate::error::ServiceError;
use crate::http::{build_client, check};

/// An image picked by the operator.
#[derive(Clone, PartialEq, Eq)]
pub struct ImageUpload {
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl std::fmt::Debug for ImageUpload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageUpload")
            .field("file_name", &self.file_name)
            .field("mime_type", &self.mime_type)
            .field("size", &self.bytes.len())
            .finish()
    }
}

impl ImageUpload {
    pub fn new(
        file_name: impl Into<String>,
        mime_type: impl Into<String>,
        bytes: impl Into<Vec<u8>>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            mime_type: mime_type.into(),
            bytes: bytes.into(),
        }
    }

    /// Reads an image from disk, guessing the MIME type from the extension.
    pub async fn from_path(path: impl AsRef<Path>) -> Result<Self, ServiceError> {
        let path = path.as_ref();
        let bytes = tokio::fs::read(path).await?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "avatar".to_string());
        Ok(Self::new(file_name, mime_from_path(path), bytes))
    }

    pub fn size(&self) -> usize {
        self.bytes.len()
    }

    pub fn validate(&self, config: &UploadConfig) -> Result<(), ServiceError> {
        if self.bytes.len() > config.max_file_size {
            return Err(ServiceError::InvalidFileSize {
                max_bytes: config.max_file_size,
            });
        }
        if !config.allows(&self.mime_type) {
            return Err(ServiceError::InvalidMimeType {
                received: self.mime_type.clone(),
                allowed: config.allowed_mime_types.clone(),
            });
        }
        Ok(())
    }
}

fn mime_from_path(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_ascii_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "webp" => "image/webp",
        "gif" => "image/gif",
        "svg" => "image/svg+xml",
        _ => "application/octet-stream",
    }
}

/// Stores an image and returns its public URL.
pub trait MediaUploader: Send + Sync {
    fn upload<'a>(&'a self, image: &'a ImageUpload) -> BoxFuture<'a, Result<String, ServiceError>>;
}

#[derive(Debug, Deserialize)]
struct UploadResponse {
    secure_url: Option<String>,
    url: Option<String>,
}

/// [`MediaUploader`] posting to the hosted image service.
#[derive(Clone, Debug)]
pub struct HttpMediaUploader {
    client: Client,
    config: UploadConfig,
}

impl HttpMediaUploader {
    pub fn new(config: UploadConfig, timeout: std::time::Duration) -> Result<Self, ServiceError> {
        Ok(Self {
            client: build_client(timeout)?,
            config,
        })
    }
}

impl MediaUploader for HttpMediaUploader {
    fn upload<'a>(&'a self, image: &'a ImageUpload) -> BoxFuture<'a, Result<String, ServiceError>> {
        Box::pin(async move {
            image.validate(&self.config)?;

            let part = Part::bytes(image.bytes.clone())
                .file_name(image.file_name.clone())
                .mime_str(&image.mime_type)?;
            let form = Form::new()
                .part("file", part)
                .text("upload_preset", self.config.upload_preset.clone());

            debug!(file = %image.file_name, size = image.size(), "Uploading avatar");
            let response = self
                .client
                .post(&self.config.endpoint)
                .multipart(form)
                .send()
                .await?;
            let body: UploadResponse = check(response).await?.json().await?;

            let url = body
                .secure_url
                .or(body.url)
                .ok_or_else(|| ServiceError::Decode("response has no image URL".to_string()))?;
            info!(%url, "Avatar uploaded");
            Ok(url)
        })
    }
}

/// In-process [`MediaUploader`] keeping images in a map.
#[derive(Clone, Debug, Default)]
pub struct MemoryMediaUploader {
    config: UploadConfig,
    images: Arc<RwLock<HashMap<String, ImageUpload>>>,
}

impl MemoryMediaUploader {
    pub fn new(config: UploadConfig) -> Self {
        Self {
            config,
            images: Arc::default(),
        }
    }

    pub async fn get(&self, url: &str) -> Option<ImageUpload> {
        self.images.read().await.get(url).cloned()
    }

    pub async fn len(&self) -> usize {
        self.images.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.images.read().await.is_empty()
    }
}

impl MediaUploader for MemoryMediaUploader {
    fn upload<'a>(&'a self, image: &'a ImageUpload) -> BoxFuture<'a, Result<String, ServiceError>> {
        Box::pin(async move {
            image.validate(&self.config)?;
            let url = format!("memory://avatars/{}-{}", Uuid::new_v4(), image.file_name);
            self.images.write().await.insert(url.clone(), image.clone());
            Ok(url)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn png(size: usize) -> ImageUpload {
        ImageUpload::new("me.png", "image/png", vec![0u8; size])
    }

    #[test]
    fn test_validate_size_limit() {
        let config = UploadConfig {
            max_file_size: 10,
            ..UploadConfig::default()
        };
        assert!(png(10).validate(&config).is_ok());
        assert!(matches!(
            png(11).validate(&config),
            Err(ServiceError::InvalidFileSize { max_bytes: 10 })
        ));
    }

    #[test]
    fn test_validate_mime_type() {
        let image = ImageUpload::new("notes.pdf", "application/pdf", vec![1, 2, 3]);
        let err = image.validate(&UploadConfig::default()).unwrap_err();
        assert!(matches!(err, ServiceError::InvalidMimeType { .. }));
    }

    #[test]
    fn test_mime_from_path() {
        assert_eq!(mime_from_path(Path::new("a/b/photo.JPG")), "image/jpeg");
        assert_eq!(mime_from_path(Path::new("avatar.webp")), "image/webp");
        assert_eq!(
            mime_from_path(Path::new("README")),
            "application/octet-stream"
        );
    }

    #[test]
    fn test_debug_omits_bytes() {
        let debug = format!("{:?}", png(3));
        assert!(debug.contains("size: 3"));
        assert!(!debug.contains("bytes"));
    }

    #[tokio::test]
    async fn test_memory_uploader_stores_image() {
        let uploader = MemoryMediaUploader::new(UploadConfig::default());
        let url = uploader.upload(&png(4)).await.unwrap();
        assert!(url.starts_with("memory://avatars/"));
        assert!(url.ends_with("-me.png"));
        assert_eq!(uploader.get(&url).await, Some(png(4)));
    }

    #[tokio::test]
    async fn test_memory_uploader_rejects_invalid() {
        let uploader = MemoryMediaUploader::new(UploadConfig::default());
        let image = ImageUpload::new("a.txt", "text/plain", vec![1]);
        assert!(uploader.upload(&image).await.is_err());
        assert!(uploader.is_empty().await);
    }
}
