//! # studentdesk Client
//!
//! The external collaborators of the administration console, each behind a
//! trait so that the HTTP implementation can be swapped for the in-memory
//! one in tests and offline demos:
//!
//! - [`students`]: [`StudentStore`], the REST data service
//!   (`GET/POST /students`, `GET/PUT/DELETE /students/{id}`)
//! - [`media`]: [`MediaUploader`], multipart avatar uploads
//! - [`users`]: [`UserDirectory`], operator account lookup
//!
//! The traits return boxed futures so they can be used as trait objects
//! (`Arc<dyn StudentStore>`).
//!
//! # Example
//!
//! ```ignore
//! use studentdesk_client::{HttpStudentStore, StudentStore};
//! use studentdesk_config::ApiConfig;
//!
//! let store = HttpStudentStore::new(&ApiConfig::from_env())?;
//! let students = store.get_all().await?;
//! ```

pub mod error;
pub mod media;
pub mod students;
pub mod users;

mod http;

use std::future::Future;
use std::pin::Pin;

pub use error::ServiceError;
pub use media::{HttpMediaUploader, ImageUpload, MediaUploader, MemoryMediaUploader};
pub use students::{HttpStudentStore, MemoryStudentStore, StudentStore};
pub use users::{HttpUserDirectory, MemoryUserDirectory, UserDirectory};

/// Future returned by the collaborator traits.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;
