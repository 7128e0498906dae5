//! Common test utilities for training-service integration tests.

#![allow(dead_code)]

use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::Value;
use service_core::config::Config as CommonConfig;
use std::sync::{Arc, Once};
use tempfile::TempDir;
use tower::util::ServiceExt;
use training_service::config::{
    DatabaseConfig, Environment, SwaggerConfig, SwaggerMode, TrainingConfig,
};
use training_service::services::Database;
use training_service::{build_router, AppState};

static INIT: Once = Once::new();

/// Initialize tracing for tests (only once).
pub fn init_tracing() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter("info,training_service=debug,sqlx=warn")
            .with_test_writer()
            .try_init()
            .ok();
    });
}

/// Configuration pointing at a SQLite file inside `dir`, listening on a random port.
pub fn test_config(dir: &TempDir) -> TrainingConfig {
    TrainingConfig {
        common: CommonConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
        environment: Environment::Dev,
        service_name: "training-service-test".to_string(),
        service_version: "test".to_string(),
        log_level: "debug".to_string(),
        otlp_endpoint: None,
        database: DatabaseConfig {
            url: format!("sqlite://{}", dir.path().join("training.db").display()),
            max_connections: 2,
            min_connections: 1,
        },
        swagger: SwaggerConfig {
            enabled: SwaggerMode::Public,
        },
    }
}

/// A router over a fresh database. The directory lives as long as the app.
pub struct TestApp {
    pub router: Router,
    pub db: Arc<Database>,
    _dir: TempDir,
}

impl TestApp {
    pub async fn spawn() -> Self {
        Self::spawn_with(|_| {}).await
    }

    pub async fn spawn_with(customize: impl FnOnce(&mut TrainingConfig)) -> Self {
        init_tracing();

        let dir = TempDir::new().expect("Failed to create temp dir");
        let mut config = test_config(&dir);
        customize(&mut config);

        let db = Database::new(
            &config.database.url,
            config.database.max_connections,
            config.database.min_connections,
        )
        .await
        .expect("Failed to open test database");
        db.init_schema().await.expect("Failed to create schema");
        let db = Arc::new(db);

        let router = build_router(AppState {
            config,
            db: db.clone(),
        });

        Self {
            router,
            db,
            _dir: dir,
        }
    }

    /// Send a request and return status plus the body parsed as JSON
    /// (`Value::Null` when the body is not JSON).
    pub async fn request(
        &self,
        method: Method,
        uri: &str,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(json) => builder
                .header("content-type", "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, value)
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.request(Method::GET, uri, None).await
    }

    pub async fn post(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.request(Method::POST, uri, Some(body)).await
    }

    pub async fn delete(&self, uri: &str) -> (StatusCode, Value) {
        self.request(Method::DELETE, uri, None).await
    }

    /// Create a person and return its id.
    pub async fn create_person(&self, name: &str) -> i64 {
        let (status, body) = self
            .post("/person", serde_json::json!({ "name": name }))
            .await;
        assert_eq!(status, StatusCode::OK, "create person failed: {body}");
        body["id"].as_i64().expect("id should be an integer")
    }

    /// Create a training and return its id.
    pub async fn create_training(&self, title: &str, person_id: i64) -> i64 {
        let (status, body) = self
            .post(
                "/training",
                serde_json::json!({ "title": title, "person_id": person_id }),
            )
            .await;
        assert_eq!(status, StatusCode::OK, "create training failed: {body}");
        body["id"].as_i64().expect("id should be an integer")
    }
}
