/// Common test utilities and fixtures
use anyhow::Result;
use axum::{
    body::Body,
    http::{header, Method, Request, Response},
};
use roster_server::{create_router, state::AppState};
use roster_storage::Database;
use tempfile::TempDir;

/// Test application backed by a throwaway SQLite file
pub struct TestApp {
    pub router: axum::Router,
    pub db: Database,
    _temp_dir: TempDir,
}

/// Create a test app with migrations applied
///
/// Uses a real file rather than `:memory:` so every pooled connection sees
/// the same database.
pub async fn create_test_app() -> Result<TestApp> {
    let temp_dir = TempDir::new()?;
    let db_url = format!("sqlite://{}", temp_dir.path().join("test.db").display());
    let db = Database::connect(&db_url, 5).await?;

    let router = create_router(AppState::new(db.clone()));

    Ok(TestApp {
        router,
        db,
        _temp_dir: temp_dir,
    })
}

pub fn json_request(method: Method, uri: &str, body: &serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_vec(body).unwrap()))
        .unwrap()
}

pub fn empty_request(method: Method, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body_bytes).unwrap()
}

/// Request payload fixtures
pub mod fixtures {
    use serde_json::{json, Value};

    pub fn create_body(username: &str) -> Value {
        json!({
            "username": username,
            "firstname": "John",
            "lastname": "Doe",
            "age": 42,
        })
    }

    pub fn update_body() -> Value {
        json!({
            "firstname": "Jane",
            "lastname": "Roe",
            "age": 24,
        })
    }
}
