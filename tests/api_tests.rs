//! Black-box API tests.
//!
//! Each test spawns the real router on an ephemeral port, backed by the
//! in-memory store, and exercises it over HTTP exactly as a client would.
//! Tests run in parallel since every spawn gets its own port and store.

use std::sync::Arc;

use assignment_api::config::{AppConfig, Environment, HEALTH_MESSAGE, MSG_STORE_FAILURE};
use assignment_api::routes::create_router;
use assignment_api::state::AppState;
use assignment_api::store::MemoryStore;
use serde_json::{json, Value};

/// A running server instance plus handles for driving it.
struct TestApp {
    base_url: String,
    client: reqwest::Client,
    store: MemoryStore,
}

impl TestApp {
    /// Spawn the application on an ephemeral port with a fresh in-memory store.
    async fn spawn(environment: Environment) -> Self {
        let config = AppConfig {
            environment,
            ..AppConfig::default()
        };

        let store = MemoryStore::new();
        let state = AppState::new(config, Arc::new(store.clone()));
        let app = create_router(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind ephemeral port");
        let addr = listener.local_addr().expect("listener address");
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("server task");
        });

        Self {
            base_url: format!("http://{}", addr),
            client: reqwest::Client::new(),
            store,
        }
    }

    async fn spawn_production() -> Self {
        Self::spawn(Environment::Production).await
    }

    async fn get_health(&self) -> reqwest::Response {
        self.client
            .get(format!("{}/test", self.base_url))
            .send()
            .await
            .expect("health request")
    }

    async fn post_assignment(&self, body: &Value) -> reqwest::Response {
        self.client
            .post(format!("{}/assignments", self.base_url))
            .json(body)
            .send()
            .await
            .expect("create request")
    }
}

#[tokio::test]
async fn health_returns_fixed_payload() {
    let app = TestApp::spawn_production().await;

    let response = app.get_health().await;
    assert_eq!(response.status(), 200);
    assert_eq!(
        response.headers().get("cache-control").unwrap(),
        "no-store"
    );

    let body: String = response.json().await.unwrap();
    assert_eq!(body, HEALTH_MESSAGE);
}

#[tokio::test]
async fn health_ignores_request_headers() {
    let app = TestApp::spawn_production().await;

    let response = app
        .client
        .get(format!("{}/test", app.base_url))
        .header("x-anything", "ignored")
        .header("accept", "text/plain")
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    let body: String = response.json().await.unwrap();
    assert_eq!(body, HEALTH_MESSAGE);
}

#[tokio::test]
async fn create_returns_persisted_row() {
    let app = TestApp::spawn_production().await;

    let response = app
        .post_assignment(&json!({"title": "HW1", "content": "Do exercises 1-5"}))
        .await;
    assert_eq!(response.status(), 201);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["message"], "Assignment created successfully");

    let data = &body["data"];
    assert_eq!(data["id"], 1);
    assert_eq!(data["user_id"], 1);
    assert_eq!(data["title"], "HW1");
    assert_eq!(data["content"], "Do exercises 1-5");
    assert_eq!(data["status"], "draft");
    assert_eq!(data["category"], Value::Null);
    assert_eq!(data["length"], Value::Null);

    // All three timestamps are stamped with the same instant.
    assert_eq!(data["created_at"], data["updated_at"]);
    assert_eq!(data["created_at"], data["published_at"]);

    assert_eq!(app.store.len(), 1);
}

#[tokio::test]
async fn create_preserves_optional_fields() {
    let app = TestApp::spawn_production().await;

    let response = app
        .post_assignment(&json!({
            "title": "HW2",
            "content": "Read chapter 3",
            "category": "reading",
            "length": 45,
            "status": "published"
        }))
        .await;
    assert_eq!(response.status(), 201);

    let body: Value = response.json().await.unwrap();
    let data = &body["data"];
    assert_eq!(data["category"], "reading");
    assert_eq!(data["length"], 45);
    assert_eq!(data["status"], "published");
}

#[tokio::test]
async fn missing_title_flags_title_only() {
    let app = TestApp::spawn_production().await;

    let response = app.post_assignment(&json!({"content": "x"})).await;
    assert_eq!(response.status(), 400);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["message"], "Validation failed");
    assert_eq!(body["errors"]["title"], "title is required");
    assert!(body["errors"].get("content").is_none());

    assert!(app.store.is_empty());
}

#[tokio::test]
async fn missing_content_flags_content_only() {
    let app = TestApp::spawn_production().await;

    let response = app.post_assignment(&json!({"title": "HW1"})).await;
    assert_eq!(response.status(), 400);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["errors"]["content"], "content is required");
    assert!(body["errors"].get("title").is_none());
}

#[tokio::test]
async fn empty_object_flags_both_fields() {
    let app = TestApp::spawn_production().await;

    let response = app.post_assignment(&json!({})).await;
    assert_eq!(response.status(), 400);

    let body: Value = response.json().await.unwrap();
    let errors = body["errors"].as_object().unwrap();
    assert_eq!(errors.len(), 2);
    assert_eq!(errors["title"], "title is required");
    assert_eq!(errors["content"], "content is required");
}

#[tokio::test]
async fn empty_strings_count_as_missing() {
    let app = TestApp::spawn_production().await;

    let response = app
        .post_assignment(&json!({"title": "", "content": ""}))
        .await;
    assert_eq!(response.status(), 400);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["errors"]["title"], "title is required");
    assert_eq!(body["errors"]["content"], "content is required");
}

#[tokio::test]
async fn store_failure_returns_generic_500_in_production() {
    let app = TestApp::spawn_production().await;
    app.store.set_failing(true);

    let response = app
        .post_assignment(&json!({"title": "HW1", "content": "x"}))
        .await;
    assert_eq!(response.status(), 500);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["message"], MSG_STORE_FAILURE);
    assert!(body.get("error").is_none(), "production must withhold detail");
}

#[tokio::test]
async fn store_failure_exposes_detail_in_development() {
    let app = TestApp::spawn(Environment::Development).await;
    app.store.set_failing(true);

    let response = app
        .post_assignment(&json!({"title": "HW1", "content": "x"}))
        .await;
    assert_eq!(response.status(), 500);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["message"], MSG_STORE_FAILURE);
    let detail = body["error"].as_str().expect("development includes detail");
    assert!(detail.contains("injected store failure"));
}

#[tokio::test]
async fn sequential_creates_get_sequential_ids() {
    let app = TestApp::spawn_production().await;

    let first = app
        .post_assignment(&json!({"title": "HW1", "content": "a"}))
        .await;
    let second = app
        .post_assignment(&json!({"title": "HW2", "content": "b"}))
        .await;

    let first: Value = first.json().await.unwrap();
    let second: Value = second.json().await.unwrap();
    assert_eq!(first["data"]["id"], 1);
    assert_eq!(second["data"]["id"], 2);
    assert_eq!(app.store.len(), 2);
}
