//! Report listing, generation and download.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use chrono::Utc;
use iqsf_core::defaults::ANONYMOUS_AUTHOR;
use iqsf_metrics::{record_entity_created, record_report_generated};
use iqsf_model::{NewReport, Report, ReportFormat, ReportType};
use serde::Deserialize;
use tracing::{debug, info};

use super::extract::{ApiJson, ApiQuery};
use crate::error::ApiError;
use crate::report::{attachment_filename, default_title, snapshot_content};
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ReportQuery {
    /// Only reports generated by this user.
    user_id: Option<String>,
}

/// Body of `POST /api/reports/generate`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GenerateReport {
    #[serde(rename = "type")]
    report_type: ReportType,
    #[serde(default)]
    countries: Vec<String>,
    format: ReportFormat,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    user_id: Option<String>,
}

/// `Some` only for non-blank values.
fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

pub(crate) async fn list_reports(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<ReportQuery>,
) -> Result<Json<Vec<Report>>, ApiError> {
    let result = match non_blank(query.user_id) {
        Some(user_id) => state.store.reports_by_user(&user_id).await,
        None => state.store.all_reports().await,
    };
    result
        .map(Json)
        .map_err(|e| ApiError::internal("Failed to fetch reports", e))
}

pub(crate) async fn generate_report(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<GenerateReport>,
) -> Result<(StatusCode, Json<Report>), ApiError> {
    let now = Utc::now();
    let snapshot = state
        .store
        .all_countries()
        .await
        .map_err(|e| ApiError::internal("Failed to generate report", e))?;

    let new_report = NewReport {
        title: non_blank(request.title)
            .unwrap_or_else(|| default_title(request.report_type, now)),
        report_type: request.report_type,
        countries: request.countries,
        format: request.format,
        content: Some(snapshot_content(&snapshot, now)),
        generated_by: Some(
            non_blank(request.user_id).unwrap_or_else(|| ANONYMOUS_AUTHOR.to_string()),
        ),
    };

    let report = state
        .store
        .create_report(new_report)
        .await
        .map_err(|e| ApiError::store(e, "Invalid report data", "Failed to generate report"))?;

    record_entity_created("report");
    record_report_generated(report.format.as_str());
    info!(
        report_id = %report.id,
        report_type = %report.report_type,
        format = %report.format,
        countries = snapshot.len(),
        "report generated"
    );
    Ok((StatusCode::CREATED, Json(report)))
}

/// Stored content as a JSON attachment.
pub(crate) async fn download_report(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    let report = state
        .store
        .get_report(&id)
        .await
        .map_err(|e| ApiError::internal("Failed to download report", e))?
        .ok_or(ApiError::NotFound("Report not found"))?;

    let body = serde_json::to_vec(&report.content)
        .map_err(|e| ApiError::internal("Failed to download report", e))?;
    let disposition = format!(
        "attachment; filename=\"{}\"",
        attachment_filename(&report.title)
    );
    debug!(report_id = %report.id, bytes = body.len(), "report downloaded");

    Ok((
        [
            (header::CONTENT_TYPE, "application/json".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        body,
    )
        .into_response())
}
