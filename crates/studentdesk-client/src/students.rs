//! The student data service.
//!
//! The service is a plain JSON REST resource:
//!
//! | Method | Path             | Body      | Response       |
//! |--------|------------------|-----------|----------------|
//! | GET    | `/students`      |           | `[Student]`    |
//! | GET    | `/students/{id}` |           | `Student`      |
//! | POST   | `/students`      | `Student` | `Student`      |
//! | PUT    | `/students/{id}` | `Student` | `Student`      |
//! | DELETE | `/students/{id}` |           | anything       |

use reqwest::Client;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use studentdesk_config::ApiConfig;
use studentdesk_models::{Student, StudentId};
use tokio::sync::RwLock;
use tracing::debug;

use crate::BoxFuture;
use crate::error::ServiceError;
use crate::http::{build_client, check};

/// Remote collection of student records.
pub trait StudentStore: Send + Sync {
    fn get_all(&self) -> BoxFuture<'_, Result<Vec<Student>, ServiceError>>;

    fn get_by_id<'a>(&'a self, id: &'a StudentId)
    -> BoxFuture<'a, Result<Student, ServiceError>>;

    fn create<'a>(&'a self, student: &'a Student) -> BoxFuture<'a, Result<Student, ServiceError>>;

    fn update<'a>(&'a self, student: &'a Student) -> BoxFuture<'a, Result<Student, ServiceError>>;

    fn delete<'a>(&'a self, id: &'a StudentId) -> BoxFuture<'a, Result<(), ServiceError>>;
}

/// [`StudentStore`] backed by the REST data service.
#[derive(Clone, Debug)]
pub struct HttpStudentStore {
    client: Client,
    base_url: String,
}

impl HttpStudentStore {
    pub fn new(config: &ApiConfig) -> Result<Self, ServiceError> {
        Ok(Self {
            client: build_client(config.timeout())?,
            base_url: config.url("students"),
        })
    }

    fn record_url(&self, id: &StudentId) -> String {
        format!("{}/{}", self.base_url, id)
    }
}

impl StudentStore for HttpStudentStore {
    fn get_all(&self) -> BoxFuture<'_, Result<Vec<Student>, ServiceError>> {
        Box::pin(async move {
            let response = self.client.get(&self.base_url).send().await?;
            let students: Vec<Student> = check(response).await?.json().await?;
            debug!(count = students.len(), "Fetched students");
            Ok(students)
        })
    }

    fn get_by_id<'a>(
        &'a self,
        id: &'a StudentId,
    ) -> BoxFuture<'a, Result<Student, ServiceError>> {
        Box::pin(async move {
            let response = self.client.get(self.record_url(id)).send().await?;
            Ok(check(response).await?.json().await?)
        })
    }

    fn create<'a>(&'a self, student: &'a Student) -> BoxFuture<'a, Result<Student, ServiceError>> {
        Box::pin(async move {
            let response = self.client.post(&self.base_url).json(student).send().await?;
            let created: Student = check(response).await?.json().await?;
            debug!(id = %created.id, "Created student");
            Ok(created)
        })
    }

    fn update<'a>(&'a self, student: &'a Student) -> BoxFuture<'a, Result<Student, ServiceError>> {
        Box::pin(async move {
            let response = self
                .client
                .put(self.record_url(&student.id))
                .json(student)
                .send()
                .await?;
            let updated: Student = check(response).await?.json().await?;
            debug!(id = %updated.id, "Updated student");
            Ok(updated)
        })
    }

    fn delete<'a>(&'a self, id: &'a StudentId) -> BoxFuture<'a, Result<(), ServiceError>> {
        Box::pin(async move {
            let response = self.client.delete(self.record_url(id)).send().await?;
            check(response).await?;
            debug!(%id, "Deleted student");
            Ok(())
        })
    }
}

/// In-process [`StudentStore`] used for offline runs and tests.
///
/// Records keep insertion order, matching what the REST service returns.
#[derive(Clone, Debug, Default)]
pub struct MemoryStudentStore {
    records: Arc<RwLock<Vec<Student>>>,
    unavailable: Arc<AtomicBool>,
}

impl MemoryStudentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(records: Vec<Student>) -> Self {
        Self {
            records: Arc::new(RwLock::new(records)),
            ..Self::default()
        }
    }

    /// Makes every subsequent call fail with [`ServiceError::Unavailable`].
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }

    fn ensure_available(&self) -> Result<(), ServiceError> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(ServiceError::Unavailable);
        }
        Ok(())
    }
}

impl StudentStore for MemoryStudentStore {
    fn get_all(&self) -> BoxFuture<'_, Result<Vec<Student>, ServiceError>> {
        Box::pin(async move {
            self.ensure_available()?;
            Ok(self.records.read().await.clone())
        })
    }

    fn get_by_id<'a>(
        &'a self,
        id: &'a StudentId,
    ) -> BoxFuture<'a, Result<Student, ServiceError>> {
        Box::pin(async move {
            self.ensure_available()?;
            self.records
                .read()
                .await
                .iter()
                .find(|s| &s.id == id)
                .cloned()
                .ok_or(ServiceError::NotFound)
        })
    }

    fn create<'a>(&'a self, student: &'a Student) -> BoxFuture<'a, Result<Student, ServiceError>> {
        Box::pin(async move {
            self.ensure_available()?;
            let mut records = self.records.write().await;
            if records.iter().any(|s| s.id == student.id) {
                return Err(ServiceError::Status {
                    status: 409,
                    body: format!("Student {} already exists", student.id),
                });
            }
            records.push(student.clone());
            Ok(student.clone())
        })
    }

    fn update<'a>(&'a self, student: &'a Student) -> BoxFuture<'a, Result<Student, ServiceError>> {
        Box::pin(async move {
            self.ensure_available()?;
            let mut records = self.records.write().await;
            let slot = records
                .iter_mut()
                .find(|s| s.id == student.id)
                .ok_or(ServiceError::NotFound)?;
            *slot = student.clone();
            Ok(student.clone())
        })
    }

    fn delete<'a>(&'a self, id: &'a StudentId) -> BoxFuture<'a, Result<(), ServiceError>> {
        Box::pin(async move {
            self.ensure_available()?;
            let mut records = self.records.write().await;
            let before = records.len();
            records.retain(|s| &s.id != id);
            if records.len() == before {
                return Err(ServiceError::NotFound);
            }
            Ok(())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn student(id: &str, name: &str) -> Student {
        Student {
            id: StudentId::new(id),
            name: name.to_string(),
            email: format!("{}@school.test", id),
            phone_num: "5551234567".to_string(),
            enroll_num: "EN0000001".to_string(),
            date_admission: "1-Jan, 2020".to_string(),
            avatar: None,
        }
    }

    #[tokio::test]
    async fn test_memory_store_crud() {
        let store = MemoryStudentStore::new();
        store.create(&student("1", "Ann")).await.unwrap();
        store.create(&student("2", "Bob")).await.unwrap();
        assert_eq!(store.len().await, 2);

        let mut bob = store.get_by_id(&StudentId::new("2")).await.unwrap();
        bob.name = "Robert".to_string();
        store.update(&bob).await.unwrap();

        let all = store.get_all().await.unwrap();
        assert_eq!(all[1].name, "Robert");

        store.delete(&StudentId::new("1")).await.unwrap();
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_memory_store_missing_records() {
        let store = MemoryStudentStore::new();
        let id = StudentId::new("missing");
        assert!(store.get_by_id(&id).await.unwrap_err().is_not_found());
        assert!(store.delete(&id).await.unwrap_err().is_not_found());
        assert!(store.update(&student("missing", "X")).await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn test_memory_store_rejects_duplicate_id() {
        let store = MemoryStudentStore::with_records(vec![student("1", "Ann")]);
        let err = store.create(&student("1", "Again")).await.unwrap_err();
        assert!(matches!(err, ServiceError::Status { status: 409, .. }));
    }

    #[tokio::test]
    async fn test_memory_store_unavailable() {
        let store = MemoryStudentStore::with_records(vec![student("1", "Ann")]);
        store.set_unavailable(true);
        assert!(matches!(
            store.get_all().await,
            Err(ServiceError::Unavailable)
        ));
        store.set_unavailable(false);
        assert_eq!(store.get_all().await.unwrap().len(), 1);
    }

    #[test]
    fn test_http_store_urls() {
        let config = ApiConfig {
            base_url: "http://api.test".to_string(),
            timeout_secs: 1,
        };
        let store = HttpStudentStore::new(&config).unwrap();
        assert_eq!(store.base_url, "http://api.test/students");
        assert_eq!(
            store.record_url(&StudentId::new("42")),
            "http://api.test/students/42"
        );
    }
}
