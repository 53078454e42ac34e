use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use serde_json::{Value, json};
use storage::{
    MemoryStore, WorkoutStore,
    dto::workout::TableDataResponse,
    error::{Result as StorageResult, StorageError},
    models::{NewWorkout, Workout},
};
use tower::ServiceExt;
use web::{AppState, app};

fn test_app() -> Router {
    app(AppState::new(Arc::new(MemoryStore::new())))
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, String) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn table_data(app: &Router, request: Request<Body>) -> Vec<Workout> {
    let (status, body) = send(app, request).await;
    assert_eq!(status, StatusCode::OK, "body: {body}");
    let response: TableDataResponse = serde_json::from_str(&body).unwrap();
    response.workouts().unwrap()
}

async fn create(app: &Router, body: Value) -> Workout {
    let mut rows = table_data(app, post_json("/", body)).await;
    assert_eq!(rows.len(), 1);
    rows.remove(0)
}

#[tokio::test]
async fn test_fill_on_empty_table() {
    let app = test_app();
    let (status, body) = send(&app, get("/fill")).await;

    assert_eq!(status, StatusCode::OK);
    let body: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(body, json!({"tableData": "[]"}));
}

#[tokio::test]
async fn test_create_workout() {
    let app = test_app();
    let created = create(
        &app,
        json!({"name": "Squat", "reps": 5, "weight": 200, "lbs": true, "date": "2024-01-01"}),
    )
    .await;

    assert_eq!(created.name, "Squat");
    assert_eq!(created.reps, Some(5));
    assert_eq!(created.weight, Some(200));
    assert_eq!(created.lbs, Some(true));
    assert_eq!(
        created.date.map(|d| d.to_string()),
        Some("2024-01-01".to_string())
    );

    let all = table_data(&app, get("/fill")).await;
    assert_eq!(all, vec![created]);
}

#[tokio::test]
async fn test_create_from_form_strings() {
    let app = test_app();
    let created = create(
        &app,
        json!({"name": "Bench", "reps": "8", "weight": "", "lbs": "0", "date": ""}),
    )
    .await;

    assert_eq!(created.reps, Some(8));
    assert_eq!(created.weight, None);
    assert_eq!(created.lbs, Some(false));
    assert_eq!(created.date, None);
}

#[tokio::test]
async fn test_create_without_name_returns_message() {
    let app = test_app();
    let (status, body) = send(&app, post_json("/", json!({"name": "", "reps": 5}))).await;

    assert_eq!(status, StatusCode::OK);
    let body: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(body["errMsg"], "You must enter a name for the workout.");
    assert!(body.get("tableData").is_none());

    assert!(table_data(&app, get("/fill")).await.is_empty());
}

#[tokio::test]
async fn test_create_rejects_unparseable_input() {
    let app = test_app();
    let (status, _) = send(&app, post_json("/", json!({"name": "Squat", "reps": "lots"}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(
        &app,
        post_json("/", json!({"name": "Squat", "date": "01-01-2024"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = send(&app, post_json("/", json!({"name": "x".repeat(256)}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.contains("Validation failed"));

    assert!(table_data(&app, get("/fill")).await.is_empty());
}

#[tokio::test]
async fn test_ids_are_never_reused() {
    let app = test_app();
    let first = create(&app, json!({"name": "Squat"})).await;
    let second = create(&app, json!({"name": "Bench"})).await;
    table_data(&app, post_json("/del", json!({"id": second.id}))).await;
    let third = create(&app, json!({"name": "Row"})).await;

    assert_ne!(third.id, first.id);
    assert_ne!(third.id, second.id);
}

#[tokio::test]
async fn test_update_keeps_omitted_fields() {
    let app = test_app();
    let row = create(&app, json!({"name": "Row", "reps": 8, "weight": 100})).await;

    let rows = table_data(&app, post_json("/update", json!({"id": row.id, "reps": 12}))).await;

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].reps, Some(12));
    assert_eq!(rows[0].name, "Row");
    assert_eq!(rows[0].weight, Some(100));
}

#[tokio::test]
async fn test_update_from_row_editor_payload() {
    let app = test_app();
    let row = create(
        &app,
        json!({"name": "Row", "reps": 8, "weight": 100, "lbs": true, "date": "2024-03-05"}),
    )
    .await;

    let rows = table_data(
        &app,
        post_json(
            "/update",
            json!({
                "id": row.id.to_string(),
                "name": "Pendlay Row",
                "reps": "",
                "weight": "110",
                "lbs": "0",
                "date": "2024-03-06"
            }),
        ),
    )
    .await;

    assert_eq!(rows[0].name, "Pendlay Row");
    assert_eq!(rows[0].reps, Some(8));
    assert_eq!(rows[0].weight, Some(110));
    assert_eq!(rows[0].lbs, Some(false));
    assert_eq!(
        rows[0].date.map(|d| d.to_string()),
        Some("2024-03-06".to_string())
    );
}

#[tokio::test]
async fn test_update_unknown_id_is_empty() {
    let app = test_app();
    create(&app, json!({"name": "Row"})).await;

    let rows = table_data(&app, post_json("/update", json!({"id": 42, "reps": 3}))).await;
    assert!(rows.is_empty());
    assert_eq!(table_data(&app, get("/fill")).await.len(), 1);
}

#[tokio::test]
async fn test_delete_is_idempotent() {
    let app = test_app();
    let row = create(&app, json!({"name": "Row"})).await;

    assert!(table_data(&app, post_json("/del", json!({"id": row.id}))).await.is_empty());
    assert!(table_data(&app, post_json("/del", json!({"id": row.id}))).await.is_empty());
    assert!(table_data(&app, get("/fill")).await.is_empty());
}

#[tokio::test]
async fn test_delete_requires_id() {
    let app = test_app();
    let (status, _) = send(&app, post_json("/del", json!({}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_page_renders_rows() {
    let app = test_app();
    create(
        &app,
        json!({"name": "Deadlift", "reps": 3, "weight": 180, "lbs": false, "date": "2024-03-05"}),
    )
    .await;

    let (status, body) = send(&app, get("/")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("<td>Deadlift</td>"));
    assert!(body.contains("<td>kgs</td>"));
    assert!(body.contains("<td>03-05-2024</td>"));
}

#[tokio::test]
async fn test_row_fragments() {
    let app = test_app();
    let row = create(&app, json!({"name": "Squat", "lbs": true, "date": "2024-03-05"})).await;
    create(&app, json!({"name": "Bench"})).await;

    let (status, body) = send(&app, get("/rows")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.matches("<tr ").count(), 2);

    let (status, body) = send(&app, get(&format!("/rows/{}", row.id))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.matches("<tr ").count(), 1);
    assert!(body.contains(r#"value="Edit""#));

    let (status, body) = send(&app, get(&format!("/rows/{}/edit", row.id))).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains(r#"data-state="editing""#));
    assert!(body.contains(r#"<option value="1" selected>lbs</option>"#));
    assert!(body.contains(r#"value="2024-03-05""#));

    let (status, _) = send(&app, get("/rows/999/edit")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_init_table_disabled_by_default() {
    let app = test_app();
    create(&app, json!({"name": "Row"})).await;

    let (status, body) = send(&app, get("/init-table")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, send(&app, get("/nowhere")).await.1);
    assert!(body.contains("404 - Not Found"));
    assert_eq!(table_data(&app, get("/fill")).await.len(), 1);
}

#[tokio::test]
async fn test_init_table_when_enabled() {
    let app = app(AppState::new(Arc::new(MemoryStore::new())).with_table_reset(true));
    create(&app, json!({"name": "Row"})).await;

    let (status, body) = send(&app, get("/init-table")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Table reset"));
    assert!(table_data(&app, get("/fill")).await.is_empty());
}

#[tokio::test]
async fn test_unknown_route_is_404_page() {
    let app = test_app();
    let (status, body) = send(&app, get("/nowhere")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.contains("404"));
}

#[tokio::test]
async fn test_openapi_document() {
    let app = test_app();
    let (status, body) = send(&app, get("/api-docs/openapi.json")).await;

    assert_eq!(status, StatusCode::OK);
    let doc: Value = serde_json::from_str(&body).unwrap();
    assert!(doc["paths"]["/fill"].is_object());
    assert!(doc["paths"]["/update"].is_object());
}

struct UnreachableStore;

#[async_trait]
impl WorkoutStore for UnreachableStore {
    async fn list(&self) -> StorageResult<Vec<Workout>> {
        Err(StorageError::Database(sqlx::Error::PoolTimedOut))
    }

    async fn find_by_id(&self, _id: i32) -> StorageResult<Option<Workout>> {
        Err(StorageError::Database(sqlx::Error::PoolTimedOut))
    }

    async fn create(&self, _workout: &NewWorkout) -> StorageResult<i32> {
        Err(StorageError::Database(sqlx::Error::PoolTimedOut))
    }

    async fn update(&self, _workout: &Workout) -> StorageResult<u64> {
        Err(StorageError::Database(sqlx::Error::PoolTimedOut))
    }

    async fn delete(&self, _id: i32) -> StorageResult<u64> {
        Err(StorageError::Database(sqlx::Error::PoolTimedOut))
    }

    async fn reset(&self) -> StorageResult<()> {
        Err(StorageError::Database(sqlx::Error::PoolTimedOut))
    }
}

#[tokio::test]
async fn test_store_failure_is_generic_500() {
    let app = app(AppState::new(Arc::new(UnreachableStore)));

    for request in [
        get("/fill"),
        post_json("/", json!({"name": "Squat"})),
        post_json("/update", json!({"id": 1})),
        post_json("/del", json!({"id": 1})),
    ] {
        let (status, body) = send(&app, request).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body.contains("An internal error occurred"));
        assert!(!body.contains("pool"));
    }
}
