mod common;

use common::{admin_user, numbered_students, spawn_mock_server, student};
use studentdesk::modules::students::{StudentListController, StudentService};
use studentdesk::utils::notifications::NotificationLevel;
use studentdesk_client::{HttpStudentStore, ServiceError, StudentStore};
use studentdesk_core::ErrorKind;
use studentdesk_models::{SortConfig, SortOrder, StudentField, StudentId};

#[tokio::test]
async fn test_http_store_crud() {
    let server = spawn_mock_server(Vec::new(), Vec::new()).await;
    let store = HttpStudentStore::new(&server.config().api).unwrap();

    let jane = student("s-1", "Jane Smith", "jane@x.com", "EN0001234", "8-Dec, 2021");
    let created = store.create(&jane).await.unwrap();
    assert_eq!(created, jane);

    let all = store.get_all().await.unwrap();
    assert_eq!(all.len(), 1);

    let mut renamed = jane.clone();
    renamed.name = "Jane Doe".to_string();
    store.update(&renamed).await.unwrap();
    assert_eq!(store.get_by_id(&jane.id).await.unwrap().name, "Jane Doe");

    store.delete(&jane.id).await.unwrap();
    assert!(server.data.students().is_empty());
}

#[tokio::test]
async fn test_http_store_missing_record_is_not_found() {
    let server = spawn_mock_server(Vec::new(), Vec::new()).await;
    let store = HttpStudentStore::new(&server.config().api).unwrap();

    let err = store.get_by_id(&StudentId::new("nope")).await.unwrap_err();
    assert!(err.is_not_found(), "unexpected error: {err}");
}

#[tokio::test]
async fn test_http_store_server_error_is_status() {
    let server = spawn_mock_server(Vec::new(), Vec::new()).await;
    server.data.set_failing(true);
    let store = HttpStudentStore::new(&server.config().api).unwrap();

    match store.get_all().await {
        Err(ServiceError::Status { status, .. }) => assert_eq!(status, 500),
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_refresh_loads_records_into_controller() {
    let server = spawn_mock_server(numbered_students(12), vec![admin_user()]).await;
    let state = server.state();
    let mut controller = StudentListController::new(&state.config.list);

    assert!(StudentService::refresh(&state, &mut controller).await);

    let view = controller.view();
    assert!(view.loaded);
    assert_eq!(view.total_items, 12);
    assert_eq!(view.items.len(), state.config.list.default_per_page.min(12));
    assert!(!state.loading.is_loading());
}

#[tokio::test]
async fn test_failed_refresh_keeps_current_page() {
    let server = spawn_mock_server(numbered_students(12), Vec::new()).await;
    let state = server.state();
    let mut controller = StudentListController::new(&state.config.list);

    StudentService::refresh(&state, &mut controller).await;
    controller.on_page_change(3, 5);
    let before: Vec<StudentId> = controller.displayed().iter().map(|s| s.id.clone()).collect();
    state.notifier.drain();

    server.data.set_failing(true);
    assert!(!StudentService::refresh(&state, &mut controller).await);

    let after: Vec<StudentId> = controller.displayed().iter().map(|s| s.id.clone()).collect();
    assert_eq!(before, after);
    assert_eq!(controller.pagination().current_page(), 3);

    let note = state.notifier.latest().unwrap();
    assert_eq!(note.level, NotificationLevel::Error);
}

#[tokio::test]
async fn test_remove_deletes_and_reloads() {
    let server = spawn_mock_server(numbered_students(3), Vec::new()).await;
    let state = server.state();
    let mut controller = StudentListController::default();
    StudentService::refresh(&state, &mut controller).await;

    StudentService::remove(&state, &mut controller, &StudentId::new("2"))
        .await
        .unwrap();

    assert_eq!(controller.records().len(), 2);
    assert!(controller.find(&StudentId::new("2")).is_none());
    assert_eq!(server.data.students().len(), 2);

    let note = state.notifier.latest().unwrap();
    assert_eq!(note.level, NotificationLevel::Success);
    assert_eq!(note.message, "Student deleted successfully");
}

#[tokio::test]
async fn test_remove_missing_record_reports_not_found() {
    let server = spawn_mock_server(numbered_students(1), Vec::new()).await;
    let state = server.state();
    let mut controller = StudentListController::default();
    StudentService::refresh(&state, &mut controller).await;

    let err = StudentService::remove(&state, &mut controller, &StudentId::new("99"))
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::NotFound);
    assert_eq!(controller.records().len(), 1);
    assert_eq!(
        state.notifier.latest().unwrap().level,
        NotificationLevel::Error
    );
}

#[tokio::test]
async fn test_sorted_search_over_http_records() {
    let records = vec![
        student("1", "Zoe Adams", "zoe@x.com", "EN0000001", "3-Mar, 2020"),
        student("2", "adam Brown", "adam@x.com", "EN0000002", "1-Jan, 2023"),
        student("3", "Mia Clark", "mia@y.org", "EN0000003", "15-Jul, 2021"),
    ];
    let server = spawn_mock_server(records, Vec::new()).await;
    let state = server.state();
    let mut controller = StudentListController::default();
    StudentService::refresh(&state, &mut controller).await;

    controller.on_sort_change(SortConfig::new(StudentField::DateAdmission, SortOrder::Desc));
    let ids: Vec<&str> = controller.displayed().iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, vec!["2", "3", "1"]);

    controller.on_search("x.com");
    let ids: Vec<&str> = controller.displayed().iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, vec!["2", "1"]);
}
