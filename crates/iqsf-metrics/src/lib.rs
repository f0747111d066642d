//! Metrics collection and Prometheus exporter for the IQSF service.
//!
//! Handlers record request counts by route, error counts by type and entity
//! creations. Nothing is recorded anywhere unless a recorder is installed,
//! so tests and embedded use pay no cost.

use std::net::SocketAddr;

use metrics::{counter, gauge, histogram};
use metrics_exporter_prometheus::PrometheusBuilder;

/// Initialize Prometheus metrics exporter.
///
/// Starts an HTTP server on the given address to expose metrics.
/// Returns an error message if binding fails.
pub fn init_prometheus(listen: &str) -> Result<(), String> {
    let addr: SocketAddr = listen
        .parse()
        .map_err(|e| format!("invalid metrics listen address: {}", e))?;

    PrometheusBuilder::new()
        .with_http_listener(addr)
        .install()
        .map_err(|e| format!("failed to install prometheus exporter: {}", e))?;

    Ok(())
}

// ============================================================================
// Metric Names
// ============================================================================

/// Total number of API requests by route template.
pub const HTTP_REQUESTS_TOTAL: &str = "iqsf_http_requests_total";
/// Request handling time histogram (seconds).
pub const HTTP_REQUEST_DURATION_SECONDS: &str = "iqsf_http_request_duration_seconds";
/// Total number of error responses by type.
pub const HTTP_ERRORS_TOTAL: &str = "iqsf_http_errors_total";
/// Total number of stored entities by kind.
pub const ENTITIES_CREATED_TOTAL: &str = "iqsf_entities_created_total";
/// Total number of generated reports by format.
pub const REPORTS_GENERATED_TOTAL: &str = "iqsf_reports_generated_total";
/// Total number of rejected registrations by reason.
pub const REGISTRATIONS_REJECTED_TOTAL: &str = "iqsf_registrations_rejected_total";
/// Number of countries currently stored.
pub const COUNTRIES_STORED: &str = "iqsf_countries_stored";

// ============================================================================
// Metric Recording Functions
// ============================================================================

/// Record a handled request and its duration.
/// `route` is the matched route template (e.g. `/api/countries/{id}`), never the raw path.
#[inline]
pub fn record_request(route: &str, duration_secs: f64) {
    counter!(HTTP_REQUESTS_TOTAL, "route" => route.to_owned()).increment(1);
    histogram!(HTTP_REQUEST_DURATION_SECONDS, "route" => route.to_owned()).record(duration_secs);
}

/// Record an error response by type.
#[inline]
pub fn record_error(error_type: &'static str) {
    counter!(HTTP_ERRORS_TOTAL, "type" => error_type).increment(1);
}

/// Record a stored entity ("user", "country", "certification", "report", "membership").
#[inline]
pub fn record_entity_created(entity: &'static str) {
    counter!(ENTITIES_CREATED_TOTAL, "entity" => entity).increment(1);
}

/// Record a generated report.
#[inline]
pub fn record_report_generated(format: &'static str) {
    counter!(REPORTS_GENERATED_TOTAL, "format" => format).increment(1);
}

/// Record a rejected registration (reason: "validation", "duplicate").
#[inline]
pub fn record_registration_rejected(reason: &'static str) {
    counter!(REGISTRATIONS_REJECTED_TOTAL, "reason" => reason).increment(1);
}

/// Set the stored country count gauge.
#[inline]
pub fn set_countries_stored(count: usize) {
    gauge!(COUNTRIES_STORED).set(count as f64);
}

/// Record one more stored country.
#[inline]
pub fn record_country_stored() {
    gauge!(COUNTRIES_STORED).increment(1.0);
}

// ============================================================================
// Error Type Constants (re-exported from iqsf-core)
// ============================================================================

pub use iqsf_core::{
    ERROR_BAD_REQUEST, ERROR_CONFIG, ERROR_CONFLICT, ERROR_INTERNAL, ERROR_IO, ERROR_NOT_FOUND,
    ERROR_VALIDATION,
};
