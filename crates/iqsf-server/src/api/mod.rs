//! HTTP routes.
//!
//! All JSON routes live under `/api`. Handlers take [`AppState`] and return
//! `Result<_, ApiError>`; nothing here holds state of its own.

mod certifications;
mod countries;
mod extract;
mod memberships;
mod reports;
mod statistics;
mod users;

use axum::extract::{DefaultBodyLimit, MatchedPath, Request};
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::routing::{get, post};
use axum::Router;
use iqsf_config::ServerConfig;
use iqsf_metrics::record_request;
use tokio::time::Instant;
use tower_http::cors::{Any, CorsLayer};
use tracing::debug;

use crate::state::AppState;

pub use statistics::Statistics;

/// Build the application router over `state`.
pub fn build_router(state: AppState, config: &ServerConfig) -> Router {
    let api = Router::new()
        .route(
            "/api/countries",
            get(countries::list_countries).post(countries::create_country),
        )
        .route("/api/countries/{id}", get(countries::get_country))
        .route("/api/map/markers", get(countries::map_markers))
        .route("/api/statistics", get(statistics::get_statistics))
        .route(
            "/api/certifications",
            get(certifications::list_certifications).post(certifications::create_certification),
        )
        .route(
            "/api/certifications/{id}",
            get(certifications::get_certification).patch(certifications::update_certification),
        )
        .route("/api/reports", get(reports::list_reports))
        .route("/api/reports/generate", post(reports::generate_report))
        .route("/api/reports/{id}/download", get(reports::download_report))
        .route("/api/users/register", post(users::register))
        .route("/api/users/{id}/membership", get(memberships::get_membership))
        .route("/api/memberships", post(memberships::create_membership))
        .route("/health", get(health))
        .route_layer(middleware::from_fn(track_requests))
        .layer(DefaultBodyLimit::max(config.max_body_bytes))
        .with_state(state);

    if config.cors_allow_any {
        api.layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
    } else {
        api
    }
}

async fn health() -> &'static str {
    "ok"
}

async fn track_requests(req: Request, next: Next) -> Response {
    let route = req
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_owned())
        .unwrap_or_default();
    let method = req.method().clone();
    let start = Instant::now();

    let response = next.run(req).await;

    let elapsed = start.elapsed();
    debug!(
        %method,
        route = %route,
        status = response.status().as_u16(),
        elapsed_ms = elapsed.as_millis() as u64,
        "request handled"
    );
    record_request(&route, elapsed.as_secs_f64());
    response
}
