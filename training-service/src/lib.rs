//! Training Service - person and training records over HTTP.

pub mod config;
pub mod dtos;
pub mod handlers;
pub mod models;
pub mod services;
pub mod startup;

use axum::{
    http::Request,
    middleware::from_fn,
    routing::{delete, get, post},
    Json, Router,
};
use service_core::middleware::{metrics_middleware, request_id_middleware, REQUEST_ID_HEADER};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::config::TrainingConfig;
use crate::services::Database;

pub const OPENAPI_PATH: &str = "/.well-known/openapi.json";

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::health::health_check,
        handlers::person::create_person,
        handlers::person::delete_person,
        handlers::training::create_training,
        handlers::training::delete_training,
        handlers::training::get_training,
        handlers::training::list_trainings_for_person,
    ),
    components(
        schemas(
            dtos::ErrorResponse,
            dtos::CreatedResponse,
            dtos::DeletedResponse,
            dtos::person::CreatePersonRequest,
            dtos::training::CreateTrainingRequest,
            dtos::training::TrainingResponse,
            dtos::training::TrainingSummary,
            dtos::training::TrainingListResponse,
        )
    ),
    tags(
        (name = "Person", description = "People who attend trainings"),
        (name = "Training", description = "Training records and per-person listings"),
        (name = "Observability", description = "Service health and monitoring"),
    )
)]
pub struct ApiDoc;

/// Shared application state. Cloned per request; the pool is shared.
#[derive(Clone)]
pub struct AppState {
    pub config: TrainingConfig,
    pub db: Arc<Database>,
}

pub fn build_router(state: AppState) -> Router {
    // The request middleware records through the global recorder.
    services::init_metrics();

    let mut app = Router::new()
        .route("/health", get(handlers::health::health_check))
        .route("/ready", get(handlers::health::readiness_check))
        .route("/metrics", get(handlers::health::metrics));

    if state.config.swagger_ui_enabled() {
        app = app.merge(SwaggerUi::new("/docs").url(OPENAPI_PATH, ApiDoc::openapi()));
    } else {
        // Without the UI, the document is still published for tooling.
        app = app.route(OPENAPI_PATH, get(|| async { Json(ApiDoc::openapi()) }));
    }

    app.route("/person", post(handlers::person::create_person))
        .route("/person/:id", delete(handlers::person::delete_person))
        .route(
            "/person/:id/trainings",
            get(handlers::training::list_trainings_for_person),
        )
        .route("/training", post(handlers::training::create_training))
        .route(
            "/training/:id",
            get(handlers::training::get_training).delete(handlers::training::delete_training),
        )
        .with_state(state)
        .layer(from_fn(metrics_middleware))
        .layer(TraceLayer::new_for_http().make_span_with(
            |request: &Request<_>| {
                let request_id = request
                    .headers()
                    .get(REQUEST_ID_HEADER)
                    .and_then(|value| value.to_str().ok())
                    .unwrap_or("-");

                tracing::info_span!(
                    "http_request",
                    request_id = %request_id,
                    method = %request.method(),
                    uri = %request.uri(),
                    version = ?request.version(),
                )
            },
        ))
        .layer(from_fn(request_id_middleware))
}
