//! Account registration.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use iqsf_metrics::{record_entity_created, record_registration_rejected};
use iqsf_model::{NewUser, UserSummary, Validate};
use iqsf_store::StoreError;
use tracing::{debug, info};

use super::extract::ApiJson;
use crate::error::ApiError;
use crate::state::AppState;

const INVALID_USER: &str = "Invalid user data";
const USER_EXISTS: &str = "User already exists";

/// Register a user. Duplicates are a 400, not a 409, and the response
/// carries only the id, email and tier.
pub(crate) async fn register(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<NewUser>,
) -> Result<(StatusCode, Json<UserSummary>), ApiError> {
    if let Err(errors) = payload.validate() {
        record_registration_rejected("validation");
        return Err(ApiError::Validation {
            message: INVALID_USER,
            errors,
        });
    }

    let existing = state
        .store
        .get_user_by_email(&payload.email)
        .await
        .map_err(|e| ApiError::internal("Failed to register user", e))?;
    if existing.is_some() {
        record_registration_rejected("duplicate");
        debug!("registration rejected, email taken");
        return Err(ApiError::BadRequest(USER_EXISTS.into()));
    }

    let user = match state.store.create_user(payload).await {
        Ok(user) => user,
        Err(StoreError::Conflict { field, .. }) => {
            record_registration_rejected("duplicate");
            debug!(field, "registration rejected, unique field taken");
            return Err(ApiError::BadRequest(USER_EXISTS.into()));
        }
        Err(e) => return Err(ApiError::store(e, INVALID_USER, "Failed to register user")),
    };

    record_entity_created("user");
    info!(user_id = %user.id, tier = %user.membership_tier, "user registered");
    Ok((StatusCode::CREATED, Json(user.summary())))
}
