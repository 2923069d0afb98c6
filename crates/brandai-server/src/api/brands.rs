//! Identity generation and stored-record lookup.

use std::time::Instant;

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::HeaderName,
    response::IntoResponse,
    Extension, Json,
};
use brandai_core::BrandBrief;
use chrono::Utc;
use uuid::Uuid;

use crate::middleware::RequestId;
use crate::store::{BrandRecord, StoreError};

use super::{ApiError, AppState};

/// Response header naming the stored record for a generated identity.
pub const BRAND_ID_HEADER: &str = "x-brand-id";

fn map_json_rejection(request_id: String, rejection: &JsonRejection) -> ApiError {
    let code = match rejection {
        JsonRejection::JsonDataError(_) | JsonRejection::JsonSyntaxError(_) => "validation_error",
        JsonRejection::MissingJsonContentType(_) => "unsupported_media_type",
        _ => "bad_request",
    };
    ApiError::new(request_id, code, rejection.body_text())
}

pub(super) async fn generate_brand(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    body: Result<Json<BrandBrief>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(brief) = body.map_err(|rejection| map_json_rejection(req_id.0.clone(), &rejection))?;
    let brief = brief
        .into_validated()
        .map_err(|e| ApiError::new(req_id.0.clone(), "validation_error", e.to_string()))?;

    tracing::info!(
        brand = %brief.nome,
        segmento = %brief.segmento,
        estilo = %brief.estilo,
        backend = %state.selector.preferred_backend(),
        "generating brand identity"
    );

    let started = Instant::now();
    let generated = state.selector.generate(&brief).await.map_err(|e| {
        tracing::error!(brand = %brief.nome, error = %e, "brand identity generation failed");
        ApiError::new(
            req_id.0.clone(),
            "internal_error",
            format!("Erro interno ao gerar identidade visual: {e}"),
        )
    })?;
    let processing_time_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);

    tracing::info!(
        brand = %brief.nome,
        backend = %generated.backend,
        slogan = %generated.identity.slogan,
        primary = %generated.identity.color_palette.primary,
        processing_time_ms,
        "brand identity generated"
    );

    let id = Uuid::new_v4();
    let identity = generated.identity;
    state.store.insert(BrandRecord {
        id,
        request: brief,
        response: identity.clone(),
        backend: generated.backend,
        created_at: Utc::now(),
        processing_time_ms,
    });

    Ok((
        [(HeaderName::from_static(BRAND_ID_HEADER), id.to_string())],
        Json(identity),
    ))
}

pub(super) async fn get_brand(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    id: Result<Path<Uuid>, PathRejection>,
) -> Result<Json<BrandRecord>, ApiError> {
    let Path(id) = id.map_err(|_| ApiError::new(req_id.0.clone(), "not_found", "brand not found"))?;

    state
        .store
        .get(id)
        .map(Json)
        .map_err(|e: StoreError| ApiError::new(req_id.0, "not_found", e.to_string()))
}
