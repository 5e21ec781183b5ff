/// Common test utilities for integration tests
///
/// Builds the real router over a fresh in-memory database, and wraps the
/// request/response plumbing so tests read as scenario scripts.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::{json, Value};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;
use tower::Service as _;

use taskboard_api::app::{build_router, AppState};
use taskboard_api::config::{ApiConfig, Config, DatabaseConfig};
use taskboard_shared::db::migrations::run_migrations;

/// Test context containing the migrated database and the router
pub struct TestContext {
    pub db: SqlitePool,
    pub app: axum::Router,
}

impl TestContext {
    /// Creates a new test context with a fresh in-memory database
    ///
    /// A single pool connection keeps every query on the same in-memory
    /// instance.
    pub async fn new() -> anyhow::Result<Self> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")?.foreign_keys(true);

        let db = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await?;

        run_migrations(&db).await?;

        let config = Config {
            api: ApiConfig {
                host: "127.0.0.1".to_string(),
                port: 0,
            },
            database: DatabaseConfig {
                url: "sqlite::memory:".to_string(),
                max_connections: 1,
            },
        };

        let app = build_router(AppState::new(db.clone(), config));

        Ok(TestContext { db, app })
    }

    /// Sends one request and returns (status, parsed JSON body)
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(path);

        let request = match body {
            Some(body) => builder
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.app.clone().call(request).await.unwrap();
        let status = response.status();

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };

        (status, value)
    }

    pub async fn get(&self, path: &str) -> (StatusCode, Value) {
        self.request("GET", path, None).await
    }

    pub async fn post(&self, path: &str, body: Value) -> (StatusCode, Value) {
        self.request("POST", path, Some(body)).await
    }

    pub async fn put(&self, path: &str, body: Value) -> (StatusCode, Value) {
        self.request("PUT", path, Some(body)).await
    }

    pub async fn delete(&self, path: &str) -> (StatusCode, Value) {
        self.request("DELETE", path, None).await
    }

    /// Registers a user and returns the response's `user` object
    pub async fn register_user(&self, first_name: &str, email: &str) -> Value {
        let (status, body) = self
            .post(
                "/auth/register",
                json!({
                    "firstName": first_name,
                    "lastName": "Tester",
                    "email": email,
                    "password": "longenough1",
                    "confirmPassword": "longenough1",
                }),
            )
            .await;

        assert_eq!(status, StatusCode::CREATED, "register failed: {body}");
        body["user"].clone()
    }

    /// Creates a board owned by the given user and returns the `board`
    pub async fn create_board(&self, user_id: &str, title: &str) -> Value {
        let (status, body) = self
            .post(
                "/boards",
                json!({
                    "title": title,
                    "description": "integration test board",
                    "userId": user_id,
                }),
            )
            .await;

        assert_eq!(status, StatusCode::CREATED, "create board failed: {body}");
        body["board"].clone()
    }
}

/// Finds a column object by title within a board response
pub fn column_by_title<'a>(board: &'a Value, title: &str) -> &'a Value {
    board["columns"]
        .as_array()
        .expect("board has columns")
        .iter()
        .find(|c| c["title"] == title)
        .unwrap_or_else(|| panic!("no column titled {title}"))
}

/// Extracts an id string from a JSON object
pub fn id_of(value: &Value) -> &str {
    value["id"].as_str().expect("object has an id")
}
