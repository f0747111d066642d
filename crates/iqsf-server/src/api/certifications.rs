//! Certification applications and review updates.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use iqsf_metrics::record_entity_created;
use iqsf_model::{Certification, CertificationUpdate, NewCertification};
use tracing::info;

use super::extract::ApiJson;
use crate::error::ApiError;
use crate::state::AppState;

pub(crate) async fn list_certifications(
    State(state): State<AppState>,
) -> Result<Json<Vec<Certification>>, ApiError> {
    state
        .store
        .all_certifications()
        .await
        .map(Json)
        .map_err(|e| ApiError::internal("Failed to fetch certifications", e))
}

pub(crate) async fn get_certification(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Certification>, ApiError> {
    state
        .store
        .get_certification(&id)
        .await
        .map_err(|e| ApiError::internal("Failed to fetch certification", e))?
        .map(Json)
        .ok_or(ApiError::NotFound("Certification not found"))
}

pub(crate) async fn create_certification(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<NewCertification>,
) -> Result<(StatusCode, Json<Certification>), ApiError> {
    let certification = state
        .store
        .create_certification(payload)
        .await
        .map_err(|e| {
            ApiError::store(
                e,
                "Invalid certification data",
                "Failed to create certification",
            )
        })?;

    record_entity_created("certification");
    info!(
        certification_id = %certification.id,
        verification_id = %certification.verification_id,
        "certification application received"
    );
    Ok((StatusCode::CREATED, Json(certification)))
}

pub(crate) async fn update_certification(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiJson(update): ApiJson<CertificationUpdate>,
) -> Result<Json<Certification>, ApiError> {
    let certification = state
        .store
        .update_certification_status(&id, update.status, update.level)
        .await
        .map_err(|e| ApiError::internal("Failed to update certification", e))?
        .ok_or(ApiError::NotFound("Certification not found"))?;

    info!(
        certification_id = %certification.id,
        status = %certification.status,
        level = %certification.level,
        "certification updated"
    );
    Ok(Json(certification))
}
