//! Membership subscriptions.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use iqsf_metrics::record_entity_created;
use iqsf_model::{Membership, NewMembership, Validate};
use tracing::info;

use super::extract::ApiJson;
use crate::error::ApiError;
use crate::state::AppState;

const INVALID_MEMBERSHIP: &str = "Invalid membership data";

pub(crate) async fn create_membership(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<NewMembership>,
) -> Result<(StatusCode, Json<Membership>), ApiError> {
    payload.validate().map_err(|errors| ApiError::Validation {
        message: INVALID_MEMBERSHIP,
        errors,
    })?;

    state
        .store
        .get_user(&payload.user_id)
        .await
        .map_err(|e| ApiError::internal("Failed to create membership", e))?
        .ok_or(ApiError::NotFound("User not found"))?;

    let membership = state
        .store
        .create_membership(payload)
        .await
        .map_err(|e| ApiError::store(e, INVALID_MEMBERSHIP, "Failed to create membership"))?;

    record_entity_created("membership");
    info!(
        membership_id = %membership.id,
        user_id = %membership.user_id,
        plan = %membership.plan,
        "membership created"
    );
    Ok((StatusCode::CREATED, Json(membership)))
}

/// The user's active membership.
pub(crate) async fn get_membership(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<Membership>, ApiError> {
    state
        .store
        .membership_by_user(&user_id)
        .await
        .map_err(|e| ApiError::internal("Failed to fetch membership", e))?
        .map(Json)
        .ok_or(ApiError::NotFound("Membership not found"))
}
