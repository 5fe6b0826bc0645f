#![allow(dead_code)]

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::{Value, json};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use studentdesk::config::AppConfig;
use studentdesk::state::AppState;
use studentdesk_client::{
    BoxFuture, MemoryStudentStore, MemoryUserDirectory, ServiceError, StudentStore,
};
use studentdesk_core::hash_password;
use studentdesk_models::{Student, StudentId, UserId, UserRecord};
use uuid::Uuid;

pub const ADMIN_EMAIL: &str = "admin@school.test";
pub const ADMIN_PASSWORD: &str = "testpass123";

pub fn student(id: &str, name: &str, email: &str, enroll_num: &str, date: &str) -> Student {
    Student {
        id: StudentId::new(id),
        name: name.to_string(),
        email: email.to_string(),
        phone_num: "5551234567".to_string(),
        enroll_num: enroll_num.to_string(),
        date_admission: date.to_string(),
        avatar: None,
    }
}

const ONES: [&str; 20] = [
    "", "One", "Two", "Three", "Four", "Five", "Six", "Seven", "Eight", "Nine", "Ten",
    "Eleven", "Twelve", "Thirteen", "Fourteen", "Fifteen", "Sixteen", "Seventeen",
    "Eighteen", "Nineteen",
];
const TENS: [&str; 10] = [
    "", "", "Twenty", "Thirty", "Forty", "Fifty", "Sixty", "Seventy", "Eighty", "Ninety",
];

/// `n` spelled out in words, for `1..100`.
pub fn spelled(n: usize) -> String {
    match n {
        1..=19 => ONES[n].to_string(),
        20..=99 if n % 10 == 0 => TENS[n / 10].to_string(),
        20..=99 => format!("{} {}", TENS[n / 10], ONES[n % 10]),
        _ => panic!("no spelling for {n}"),
    }
}

/// `count` valid students named `Student One`, `Student Two`, ...
pub fn numbered_students(count: usize) -> Vec<Student> {
    (1..=count)
        .map(|i| {
            student(
                &i.to_string(),
                &format!("Student {}", spelled(i)),
                &format!("student{}@example.com", i),
                &format!("EN{:07}", i),
                "1-Sep, 2022",
            )
        })
        .collect()
}

pub fn generate_unique_email() -> String {
    format!("test-{}@example.com", Uuid::new_v4())
}

pub fn admin_user() -> UserRecord {
    UserRecord {
        id: UserId::new("1"),
        name: "Test Admin".to_string(),
        email: ADMIN_EMAIL.to_string(),
        password: hash_password(ADMIN_PASSWORD).unwrap(),
    }
}

/// State backed by in-memory collaborators.
pub fn memory_state(students: Vec<Student>) -> (AppState, MemoryStudentStore) {
    let store = MemoryStudentStore::with_records(students);
    let users = MemoryUserDirectory::new(vec![admin_user()]);
    let state = AppState::in_memory(AppConfig::default(), store.clone(), users);
    (state, store)
}

/// A store that yields to the scheduler before every call, so concurrent
/// operations actually interleave.
#[derive(Clone, Debug, Default)]
pub struct YieldingStore {
    pub inner: MemoryStudentStore,
    pub creates: Arc<AtomicUsize>,
}

impl YieldingStore {
    pub fn new(inner: MemoryStudentStore) -> Self {
        Self {
            inner,
            creates: Arc::default(),
        }
    }
}

impl StudentStore for YieldingStore {
    fn get_all(&self) -> BoxFuture<'_, Result<Vec<Student>, ServiceError>> {
        Box::pin(async move {
            tokio::task::yield_now().await;
            self.inner.get_all().await
        })
    }

    fn get_by_id<'a>(
        &'a self,
        id: &'a StudentId,
    ) -> BoxFuture<'a, Result<Student, ServiceError>> {
        Box::pin(async move {
            tokio::task::yield_now().await;
            self.inner.get_by_id(id).await
        })
    }

    fn create<'a>(&'a self, student: &'a Student) -> BoxFuture<'a, Result<Student, ServiceError>> {
        Box::pin(async move {
            tokio::task::yield_now().await;
            self.creates.fetch_add(1, Ordering::SeqCst);
            self.inner.create(student).await
        })
    }

    fn update<'a>(&'a self, student: &'a Student) -> BoxFuture<'a, Result<Student, ServiceError>> {
        Box::pin(async move {
            tokio::task::yield_now().await;
            self.inner.update(student).await
        })
    }

    fn delete<'a>(&'a self, id: &'a StudentId) -> BoxFuture<'a, Result<(), ServiceError>> {
        Box::pin(async move {
            tokio::task::yield_now().await;
            self.inner.delete(id).await
        })
    }
}

/// Shared data behind the mock REST service.
#[derive(Clone, Default)]
pub struct MockData {
    pub students: Arc<Mutex<Vec<Student>>>,
    pub users: Arc<Mutex<Vec<UserRecord>>>,
    pub uploads: Arc<AtomicUsize>,
    pub failing: Arc<AtomicBool>,
}

impl MockData {
    pub fn students(&self) -> Vec<Student> {
        self.students.lock().unwrap().clone()
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }
}

pub struct MockServer {
    pub base_url: String,
    pub data: MockData,
}

impl MockServer {
    /// Application config pointing at this server.
    pub fn config(&self) -> AppConfig {
        let mut config = AppConfig::default();
        config.api.base_url = self.base_url.clone();
        config.upload.endpoint = format!("{}/upload", self.base_url);
        config
    }

    pub fn state(&self) -> AppState {
        AppState::http(self.config()).unwrap()
    }
}

type ApiResult = Result<(StatusCode, Json<Value>), StatusCode>;

fn check_available(data: &MockData) -> Result<(), StatusCode> {
    if data.failing.load(Ordering::SeqCst) {
        Err(StatusCode::INTERNAL_SERVER_ERROR)
    } else {
        Ok(())
    }
}

async fn list_students(State(data): State<MockData>) -> ApiResult {
    check_available(&data)?;
    Ok((StatusCode::OK, Json(json!(data.students()))))
}

async fn create_student(State(data): State<MockData>, Json(student): Json<Student>) -> ApiResult {
    check_available(&data)?;
    let mut students = data.students.lock().unwrap();
    if students.iter().any(|s| s.id == student.id) {
        return Err(StatusCode::CONFLICT);
    }
    students.push(student.clone());
    Ok((StatusCode::CREATED, Json(json!(student))))
}

async fn get_student(State(data): State<MockData>, Path(id): Path<String>) -> ApiResult {
    check_available(&data)?;
    data.students()
        .into_iter()
        .find(|s| s.id == id.as_str())
        .map(|s| (StatusCode::OK, Json(json!(s))))
        .ok_or(StatusCode::NOT_FOUND)
}

async fn update_student(
    State(data): State<MockData>,
    Path(id): Path<String>,
    Json(student): Json<Student>,
) -> ApiResult {
    check_available(&data)?;
    let mut students = data.students.lock().unwrap();
    let slot = students
        .iter_mut()
        .find(|s| s.id == id.as_str())
        .ok_or(StatusCode::NOT_FOUND)?;
    *slot = student.clone();
    Ok((StatusCode::OK, Json(json!(student))))
}

async fn delete_student(State(data): State<MockData>, Path(id): Path<String>) -> ApiResult {
    check_available(&data)?;
    let mut students = data.students.lock().unwrap();
    let before = students.len();
    students.retain(|s| s.id != id.as_str());
    if students.len() == before {
        return Err(StatusCode::NOT_FOUND);
    }
    Ok((StatusCode::OK, Json(json!({}))))
}

#[derive(Deserialize)]
struct EmailQuery {
    email: Option<String>,
}

async fn list_users(State(data): State<MockData>, Query(query): Query<EmailQuery>) -> ApiResult {
    let users: Vec<UserRecord> = data
        .users
        .lock()
        .unwrap()
        .iter()
        .filter(|u| match &query.email {
            // Case-insensitive substring filter.
            Some(email) => u.email.to_lowercase().contains(&email.to_lowercase()),
            None => true,
        })
        .cloned()
        .collect();
    Ok((StatusCode::OK, Json(json!(users))))
}

async fn create_user(State(data): State<MockData>, Json(user): Json<UserRecord>) -> ApiResult {
    data.users.lock().unwrap().push(user.clone());
    Ok((StatusCode::CREATED, Json(json!(user))))
}

async fn upload(State(data): State<MockData>) -> ApiResult {
    let n = data.uploads.fetch_add(1, Ordering::SeqCst) + 1;
    Ok((
        StatusCode::OK,
        Json(json!({ "secure_url": format!("https://media.test/avatars/{}.png", n) })),
    ))
}

/// Starts a mock of the student data service and the media upload service
/// on an ephemeral port.
pub async fn spawn_mock_server(students: Vec<Student>, users: Vec<UserRecord>) -> MockServer {
    let data = MockData::default();
    *data.students.lock().unwrap() = students;
    *data.users.lock().unwrap() = users;

    let app = Router::new()
        .route("/students", get(list_students).post(create_student))
        .route(
            "/students/{id}",
            get(get_student).put(update_student).delete(delete_student),
        )
        .route("/users", get(list_users).post(create_user))
        .route("/upload", post(upload))
        .with_state(data.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    MockServer {
        base_url: format!("http://{}", addr),
        data,
    }
}
