use std::sync::Arc;
use studentdesk_client::{
    HttpMediaUploader, HttpStudentStore, HttpUserDirectory, MediaUploader, MemoryMediaUploader,
    MemoryStudentStore, MemoryUserDirectory, StudentStore, UserDirectory,
};
use studentdesk_core::AppError;

use crate::config::AppConfig;
use crate::utils::errors::service_error;
use crate::utils::in_flight::InFlight;
use crate::utils::loading::LoadingTracker;
use crate::utils::notifications::Notifier;

/// Everything a command needs, passed down explicitly.
#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub students: Arc<dyn StudentStore>,
    pub media: Arc<dyn MediaUploader>,
    pub users: Arc<dyn UserDirectory>,
    pub notifier: Notifier,
    pub loading: LoadingTracker,
    pub saves: InFlight,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("config", &self.config)
            .field("loading", &self.loading)
            .finish_non_exhaustive()
    }
}

impl AppState {
    pub fn new(
        config: AppConfig,
        students: Arc<dyn StudentStore>,
        media: Arc<dyn MediaUploader>,
        users: Arc<dyn UserDirectory>,
    ) -> Self {
        Self {
            config,
            students,
            media,
            users,
            notifier: Notifier::new(),
            loading: LoadingTracker::new(),
            saves: InFlight::new(),
        }
    }

    /// State talking to the configured HTTP services.
    pub fn http(config: AppConfig) -> Result<Self, AppError> {
        let students = HttpStudentStore::new(&config.api).map_err(service_error)?;
        let users = HttpUserDirectory::new(&config.api).map_err(service_error)?;
        let media = HttpMediaUploader::new(config.upload.clone(), config.api.timeout())
            .map_err(service_error)?;

        Ok(Self::new(
            config,
            Arc::new(students),
            Arc::new(media),
            Arc::new(users),
        ))
    }

    /// State backed by in-process collaborators.
    pub fn in_memory(
        config: AppConfig,
        students: MemoryStudentStore,
        users: MemoryUserDirectory,
    ) -> Self {
        let media = MemoryMediaUploader::new(config.upload.clone());
        Self::new(config, Arc::new(students), Arc::new(media), Arc::new(users))
    }
}
