//! Aggregate figures for the landing page.

use axum::Json;
use axum::extract::State;
use iqsf_core::defaults::{DATA_POINTS_PER_COUNTRY, TOP_RATED_SCORE};
use iqsf_model::{Country, Trend};
use serde::Serialize;

use crate::error::ApiError;
use crate::state::AppState;

/// Statistics over the stored countries.
///
/// `data_points` is a simulated figure, a fixed multiple of the country count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    pub total_countries: usize,
    pub improving_trend_percentage: u32,
    pub top_rated_count: usize,
    pub average_score: u32,
    pub data_points: u64,
}

impl Statistics {
    /// Compute statistics; an empty slice yields all zeros.
    pub fn from_countries(countries: &[Country]) -> Self {
        let total = countries.len();
        if total == 0 {
            return Self {
                total_countries: 0,
                improving_trend_percentage: 0,
                top_rated_count: 0,
                average_score: 0,
                data_points: 0,
            };
        }

        let improving = countries
            .iter()
            .filter(|c| c.trend == Trend::Improving)
            .count();
        let top_rated = countries
            .iter()
            .filter(|c| c.safety_score >= TOP_RATED_SCORE)
            .count();
        let score_sum: u64 = countries.iter().map(|c| u64::from(c.safety_score)).sum();

        Self {
            total_countries: total,
            improving_trend_percentage: (improving as f64 * 100.0 / total as f64).round() as u32,
            top_rated_count: top_rated,
            average_score: (score_sum as f64 / total as f64).round() as u32,
            data_points: total as u64 * DATA_POINTS_PER_COUNTRY,
        }
    }
}

pub(crate) async fn get_statistics(
    State(state): State<AppState>,
) -> Result<Json<Statistics>, ApiError> {
    let countries = state
        .store
        .all_countries()
        .await
        .map_err(|e| ApiError::internal("Failed to fetch statistics", e))?;
    Ok(Json(Statistics::from_countries(&countries)))
}
