mod brands;

use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, HeaderName, Method, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use brandai_generator::{Backend, BackendSelector};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::middleware::{request_id, REQUEST_ID_HEADER};
use crate::store::BrandStore;

pub use brands::BRAND_ID_HEADER;

#[derive(Clone)]
pub struct AppState {
    pub selector: Arc<BackendSelector>,
    pub store: Arc<dyn BrandStore>,
}

#[derive(Debug, Serialize)]
pub struct ResponseMeta {
    pub request_id: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: ErrorBody,
    pub meta: ResponseMeta,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

#[derive(Debug, Serialize)]
struct HealthData {
    status: &'static str,
    ai_service: Backend,
    timestamp: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
struct ServiceInfo {
    message: &'static str,
    version: &'static str,
    status: &'static str,
    ai_service: Backend,
}

impl ResponseMeta {
    pub(super) fn new(request_id: String) -> Self {
        Self {
            request_id,
            timestamp: Utc::now(),
        }
    }
}

impl ApiError {
    pub fn new(
        request_id: impl Into<String>,
        code: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            error: ErrorBody {
                code: code.into(),
                message: message.into(),
            },
            meta: ResponseMeta::new(request_id.into()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = match self.error.code.as_str() {
            "not_found" => StatusCode::NOT_FOUND,
            "validation_error" => StatusCode::UNPROCESSABLE_ENTITY,
            "bad_request" => StatusCode::BAD_REQUEST,
            "unsupported_media_type" => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(self)).into_response()
    }
}

fn build_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([
            header::CONTENT_TYPE,
            HeaderName::from_static(REQUEST_ID_HEADER),
        ])
        .expose_headers([
            HeaderName::from_static(REQUEST_ID_HEADER),
            HeaderName::from_static(BRAND_ID_HEADER),
        ])
}

pub fn build_app(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/api/health", get(health))
        .route("/api/generate-brand", post(brands::generate_brand))
        .route("/api/brands/{id}", get(brands::get_brand))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(build_cors())
                .layer(axum::middleware::from_fn(request_id)),
        )
        .with_state(state)
}

async fn root(State(state): State<AppState>) -> impl IntoResponse {
    Json(ServiceInfo {
        message: "BrandAI API - Gerador de Identidades Visuais",
        version: env!("CARGO_PKG_VERSION"),
        status: "operational",
        ai_service: state.selector.preferred_backend(),
    })
}

async fn health(State(state): State<AppState>) -> impl IntoResponse {
    Json(HealthData {
        status: "healthy",
        ai_service: state.selector.preferred_backend(),
        timestamp: Utc::now(),
    })
}

#[cfg(test)]
#[path = "api_test.rs"]
mod tests;
