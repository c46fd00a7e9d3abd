//! medscribe-api - HTTP API server for medscribe
//!
//! Routes:
//! - `GET /` liveness placeholder (empty body)
//! - `POST /api/medicine_description` multipart image upload, returns `{"description": ...}`
//! - `GET /api-docs/openapi.json` OpenAPI document

pub mod config;
pub mod error;
pub mod handlers;
pub mod logging;
pub mod openapi;
pub mod request_id;

use axum::body::Body;
use axum::extract::DefaultBodyLimit;
use axum::http::Request;
use axum::routing::{get, post};
use axum::Router;
use tower_http::request_id::{PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

use medscribe_inference::MedicineDescriber;

pub use error::ApiError;
use request_id::{MakeRequestUuidV7, REQUEST_ID_HEADER};

/// Application state shared across handlers.
///
/// Immutable after startup; the describer's HTTP client is shared by all
/// requests.
#[derive(Clone)]
pub struct AppState {
    pub describer: MedicineDescriber,
}

impl AppState {
    pub fn new(describer: MedicineDescriber) -> Self {
        Self { describer }
    }
}

/// Build the application router with middleware.
///
/// `max_upload_bytes` replaces axum's 2 MiB default body limit. The limit is
/// enforced while the multipart stream is read, so oversized uploads come
/// back as a JSON 413 that still carries the request id.
pub fn router(state: AppState, max_upload_bytes: usize) -> Router {
    let request_id_header = axum::http::HeaderName::from_static(REQUEST_ID_HEADER);

    Router::new()
        .route("/", get(handlers::root))
        .route("/api/medicine_description", post(handlers::describe_medicine))
        .route("/api-docs/openapi.json", get(openapi::openapi_json))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
                let request_id = request
                    .headers()
                    .get(REQUEST_ID_HEADER)
                    .and_then(|v| v.to_str().ok())
                    .unwrap_or("-");
                tracing::info_span!(
                    "http_request",
                    method = %request.method(),
                    uri = %request.uri(),
                    request_id = %request_id,
                )
            }),
        )
        .layer(PropagateRequestIdLayer::new(request_id_header.clone()))
        .layer(SetRequestIdLayer::new(request_id_header, MakeRequestUuidV7))
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .with_state(state)
}
