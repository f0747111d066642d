//! Country listing, lookup and creation.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use iqsf_metrics::{record_country_stored, record_entity_created};
use iqsf_model::{Country, MapMarker, NewCountry, Region};
use serde::Deserialize;
use tracing::{debug, info};

use super::extract::{ApiJson, ApiQuery};
use crate::error::ApiError;
use crate::state::AppState;

/// Query parameters for the country listing.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CountryQuery {
    /// Region name, or `all` for no filter.
    region: Option<String>,
    /// Inclusive lower bound on the safety score.
    min_score: Option<String>,
}

/// Region filter from the query: `None` when absent, empty or `all`.
fn parse_region(raw: Option<&str>) -> Result<Option<Region>, ApiError> {
    match raw.map(str::trim) {
        None | Some("") | Some("all") => Ok(None),
        Some(name) => name
            .parse::<Region>()
            .map(Some)
            .map_err(|e| ApiError::BadRequest(e.to_string())),
    }
}

fn parse_min_score(raw: Option<&str>) -> Result<Option<i64>, ApiError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value.parse().map(Some).map_err(|_| {
            ApiError::BadRequest(format!("minScore must be an integer, got {value:?}"))
        }),
    }
}

pub(crate) async fn list_countries(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<CountryQuery>,
) -> Result<Json<Vec<Country>>, ApiError> {
    let region = parse_region(query.region.as_deref())?;
    let min_score = parse_min_score(query.min_score.as_deref())?;

    let result = match region {
        Some(region) => state.store.countries_by_region(region).await,
        None => state.store.all_countries().await,
    };
    let mut countries =
        result.map_err(|e| ApiError::internal("Failed to fetch countries", e))?;

    if let Some(min) = min_score {
        countries.retain(|c| i64::from(c.safety_score) >= min);
    }
    debug!(?region, ?min_score, count = countries.len(), "countries listed");
    Ok(Json(countries))
}

pub(crate) async fn get_country(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Country>, ApiError> {
    state
        .store
        .get_country(&id)
        .await
        .map_err(|e| ApiError::internal("Failed to fetch country", e))?
        .map(Json)
        .ok_or(ApiError::NotFound("Country not found"))
}

pub(crate) async fn create_country(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<NewCountry>,
) -> Result<(StatusCode, Json<Country>), ApiError> {
    let country = state
        .store
        .create_country(payload)
        .await
        .map_err(|e| ApiError::store(e, "Invalid country data", "Failed to create country"))?;

    record_entity_created("country");
    record_country_stored();
    info!(country_id = %country.id, code = %country.code, "country created");
    Ok((StatusCode::CREATED, Json(country)))
}

/// Marker data for every country that has coordinates.
pub(crate) async fn map_markers(
    State(state): State<AppState>,
) -> Result<Json<Vec<MapMarker>>, ApiError> {
    let countries = state
        .store
        .all_countries()
        .await
        .map_err(|e| ApiError::internal("Failed to fetch map markers", e))?;
    Ok(Json(countries.iter().filter_map(Country::marker).collect()))
}
