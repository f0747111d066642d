//! End-to-end API tests.
//!
//! Each test builds the router over its own store and drives it in-process
//! through `tower::ServiceExt::oneshot`, so no sockets are opened.

use std::sync::Arc;

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Method, Request, StatusCode, header};
use iqsf_config::ServerConfig;
use iqsf_server::{AppState, build_router};
use iqsf_store::MemoryStore;
use serde_json::{Value, json};
use tower::ServiceExt;

// ============================================================================
// Helpers
// ============================================================================

fn app_with(store: MemoryStore) -> Router {
    build_router(AppState::new(Arc::new(store)), &ServerConfig::default())
}

fn app() -> Router {
    app_with(MemoryStore::seeded())
}

struct Reply {
    status: StatusCode,
    headers: axum::http::HeaderMap,
    bytes: Vec<u8>,
}

impl Reply {
    fn json(&self) -> Value {
        serde_json::from_slice(&self.bytes).expect("response is not JSON")
    }
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> Reply {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string())),
        None => builder.body(Body::empty()),
    }
    .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec();
    Reply {
        status,
        headers,
        bytes,
    }
}

async fn get(app: &Router, uri: &str) -> Reply {
    send(app, Method::GET, uri, None).await
}

async fn post(app: &Router, uri: &str, body: Value) -> Reply {
    send(app, Method::POST, uri, Some(body)).await
}

fn certification_body() -> Value {
    json!({
        "organizationName": "Open Harbor",
        "contactEmail": "hello@openharbor.org",
        "country": "Canada",
        "organizationSize": "50-249",
    })
}

fn is_verification_id(id: &str) -> bool {
    let parts: Vec<&str> = id.split('-').collect();
    parts.len() == 3
        && parts[0] == "IQSF"
        && parts[1].len() == 4
        && parts[2].len() == 4
        && parts[1..].iter().all(|p| p.bytes().all(|b| b.is_ascii_digit()))
}

// ============================================================================
// Countries
// ============================================================================

#[tokio::test]
async fn list_all_countries() {
    let app = app();
    let reply = get(&app, "/api/countries").await;
    assert_eq!(reply.status, StatusCode::OK);
    let names: Vec<_> = reply.json().as_array().unwrap().iter().map(|c| c["name"].clone()).collect();
    assert_eq!(names, ["Canada", "Netherlands", "Sweden", "Germany"]);

    let all = get(&app, "/api/countries?region=all").await;
    assert_eq!(all.json().as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn region_filter_returns_only_that_region() {
    let app = app();
    let reply = get(&app, "/api/countries?region=Europe").await;
    assert_eq!(reply.status, StatusCode::OK);
    let countries = reply.json();
    let countries = countries.as_array().unwrap();
    assert_eq!(countries.len(), 3);
    assert!(countries.iter().all(|c| c["region"] == "Europe"));

    let none = get(&app, "/api/countries?region=Oceania").await;
    assert_eq!(none.json(), json!([]));
}

#[tokio::test]
async fn min_score_filter_is_inclusive_subset() {
    let app = app();
    let all = get(&app, "/api/countries").await.json();
    let reply = get(&app, "/api/countries?minScore=85").await;
    assert_eq!(reply.status, StatusCode::OK);
    let filtered = reply.json();
    let filtered = filtered.as_array().unwrap();
    assert_eq!(filtered.len(), 3);
    for country in filtered {
        assert!(country["safetyScore"].as_u64().unwrap() >= 85);
        assert!(all.as_array().unwrap().contains(country));
    }

    let combined = get(&app, "/api/countries?region=Europe&minScore=80").await.json();
    let codes: Vec<_> = combined.as_array().unwrap().iter().map(|c| c["code"].clone()).collect();
    assert_eq!(codes, ["NL", "SE"]);
}

#[tokio::test]
async fn bad_country_filters_are_400() {
    let app = app();
    let reply = get(&app, "/api/countries?region=Atlantis").await;
    assert_eq!(reply.status, StatusCode::BAD_REQUEST);
    assert!(reply.json()["error"].as_str().unwrap().contains("Atlantis"));

    let reply = get(&app, "/api/countries?minScore=high").await;
    assert_eq!(reply.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn country_lookup_and_404() {
    let app = app();
    let first = get(&app, "/api/countries").await.json()[0].clone();
    let id = first["id"].as_str().unwrap();

    let reply = get(&app, &format!("/api/countries/{id}")).await;
    assert_eq!(reply.status, StatusCode::OK);
    assert_eq!(reply.json(), first);

    let missing = get(&app, "/api/countries/nope").await;
    assert_eq!(missing.status, StatusCode::NOT_FOUND);
    assert_eq!(missing.json(), json!({ "error": "Country not found" }));
}

#[tokio::test]
async fn create_country_validates_and_rejects_duplicates() {
    let app = app();
    let body = json!({
        "name": "Japan",
        "code": "jp",
        "region": "Asia",
        "safetyScore": 88,
        "trend": "improving",
        "latitude": 36.204824,
        "longitude": 138.252924,
    });
    let reply = post(&app, "/api/countries", body.clone()).await;
    assert_eq!(reply.status, StatusCode::CREATED);
    let created = reply.json();
    assert_eq!(created["code"], "JP");
    assert!(created["lastUpdated"].is_string());

    let dup = post(&app, "/api/countries", body).await;
    assert_eq!(dup.status, StatusCode::CONFLICT);

    let out_of_range = post(
        &app,
        "/api/countries",
        json!({ "name": "Nowhere", "code": "NW", "region": "Asia", "safetyScore": 101, "trend": "stable" }),
    )
    .await;
    assert_eq!(out_of_range.status, StatusCode::BAD_REQUEST);
    let fields = out_of_range.json()["fields"].clone();
    assert_eq!(fields[0]["field"], "safetyScore");

    let bad_region = post(
        &app,
        "/api/countries",
        json!({ "name": "Nowhere", "code": "NW", "region": "Antarctica", "safetyScore": 50, "trend": "stable" }),
    )
    .await;
    assert_eq!(bad_region.status, StatusCode::BAD_REQUEST);
    assert!(bad_region.json()["error"].is_string());

    assert_eq!(get(&app, "/api/countries").await.json().as_array().unwrap().len(), 5);
}

#[tokio::test]
async fn map_markers_cover_countries_with_coordinates() {
    let app = app();
    post(
        &app,
        "/api/countries",
        json!({ "name": "Chile", "code": "CL", "region": "Americas", "safetyScore": 70, "trend": "declining" }),
    )
    .await;
    let reply = get(&app, "/api/map/markers").await;
    assert_eq!(reply.status, StatusCode::OK);
    let markers = reply.json();
    let markers = markers.as_array().unwrap();
    assert_eq!(markers.len(), 4);
    assert_eq!(
        markers[0],
        json!({
            "name": "Canada",
            "latitude": 56.130366,
            "longitude": -106.346771,
            "safetyScore": 85,
            "trend": "stable",
            "region": "Americas",
        })
    );
}

// ============================================================================
// Statistics
// ============================================================================

#[tokio::test]
async fn statistics_over_seed() {
    let reply = get(&app(), "/api/statistics").await;
    assert_eq!(reply.status, StatusCode::OK);
    assert_eq!(
        reply.json(),
        json!({
            "totalCountries": 4,
            "improvingTrendPercentage": 50,
            "topRatedCount": 3,
            "averageScore": 86,
            "dataPoints": 600,
        })
    );
}

#[tokio::test]
async fn statistics_over_empty_store() {
    let reply = get(&app_with(MemoryStore::new()), "/api/statistics").await;
    assert_eq!(reply.status, StatusCode::OK);
    assert_eq!(reply.json()["totalCountries"], 0);
    assert_eq!(reply.json()["averageScore"], 0);
}

// ============================================================================
// Certifications
// ============================================================================

#[tokio::test]
async fn certification_starts_pending_with_verification_id() {
    let app = app();
    let mut body = certification_body();
    body["status"] = json!("approved");
    body["verificationId"] = json!("IQSF-0000-1999");

    let reply = post(&app, "/api/certifications", body).await;
    assert_eq!(reply.status, StatusCode::CREATED);
    let cert = reply.json();
    assert_eq!(cert["status"], "pending");
    assert_eq!(cert["level"], "bronze");
    let verification_id = cert["verificationId"].as_str().unwrap();
    assert!(is_verification_id(verification_id), "{verification_id}");
    assert_ne!(verification_id, "IQSF-0000-1999");

    let list = get(&app, "/api/certifications").await.json();
    assert_eq!(list.as_array().unwrap().len(), 1);
    assert_eq!(list[0], cert);
}

#[tokio::test]
async fn certification_verification_ids_are_unique() {
    let app = app();
    let mut seen = std::collections::HashSet::new();
    for _ in 0..20 {
        let cert = post(&app, "/api/certifications", certification_body()).await.json();
        assert!(seen.insert(cert["verificationId"].as_str().unwrap().to_string()));
    }
}

#[tokio::test]
async fn invalid_certification_is_400() {
    let app = app();
    let reply = post(
        &app,
        "/api/certifications",
        json!({ "organizationName": "", "contactEmail": "nobody", "country": "Canada", "organizationSize": "1-49" }),
    )
    .await;
    assert_eq!(reply.status, StatusCode::BAD_REQUEST);
    let body = reply.json();
    assert_eq!(body["error"], "Invalid certification data");
    assert_eq!(body["fields"].as_array().unwrap().len(), 2);

    let missing = post(&app, "/api/certifications", json!({ "organizationName": "A" })).await;
    assert_eq!(missing.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn certification_review_update() {
    let app = app();
    let cert = post(&app, "/api/certifications", certification_body()).await.json();
    let id = cert["id"].as_str().unwrap();

    let reply = send(
        &app,
        Method::PATCH,
        &format!("/api/certifications/{id}"),
        Some(json!({ "status": "approved", "level": "gold" })),
    )
    .await;
    assert_eq!(reply.status, StatusCode::OK);
    let updated = reply.json();
    assert_eq!(updated["status"], "approved");
    assert_eq!(updated["level"], "gold");
    assert_eq!(updated["verificationId"], cert["verificationId"]);

    let fetched = get(&app, &format!("/api/certifications/{id}")).await.json();
    assert_eq!(fetched, updated);

    let missing = send(
        &app,
        Method::PATCH,
        "/api/certifications/nope",
        Some(json!({ "status": "rejected" })),
    )
    .await;
    assert_eq!(missing.status, StatusCode::NOT_FOUND);

    let bad_status = send(
        &app,
        Method::PATCH,
        &format!("/api/certifications/{id}"),
        Some(json!({ "status": "maybe" })),
    )
    .await;
    assert_eq!(bad_status.status, StatusCode::BAD_REQUEST);
}

// ============================================================================
// Reports
// ============================================================================

#[tokio::test]
async fn generate_report_defaults() {
    let app = app();
    let reply = post(
        &app,
        "/api/reports/generate",
        json!({ "type": "regional", "format": "json", "countries": ["Sweden", "Germany"] }),
    )
    .await;
    assert_eq!(reply.status, StatusCode::CREATED);
    let report = reply.json();
    let id = report["id"].as_str().unwrap();

    assert!(report["title"].as_str().unwrap().starts_with("regional Report - "));
    assert_eq!(report["type"], "regional");
    assert_eq!(report["countries"], json!(["Sweden", "Germany"]));
    assert_eq!(report["generatedBy"], "anonymous");
    assert_eq!(report["downloadUrl"], format!("/api/reports/{id}/download"));
    assert_eq!(
        report["content"]["summary"],
        iqsf_server::REPORT_SUMMARY
    );
    assert_eq!(report["content"]["metrics"].as_array().unwrap().len(), 4);
    assert!(report["content"]["generated"].is_string());
}

#[tokio::test]
async fn generate_then_download_is_identical() {
    let app = app();
    let report = post(
        &app,
        "/api/reports/generate",
        json!({ "type": "global", "format": "pdf", "title": "Annual \"Safety\"", "userId": "u-1" }),
    )
    .await
    .json();
    assert_eq!(report["title"], "Annual \"Safety\"");
    assert_eq!(report["generatedBy"], "u-1");

    let download = get(&app, report["downloadUrl"].as_str().unwrap()).await;
    assert_eq!(download.status, StatusCode::OK);
    assert_eq!(
        download.headers[header::CONTENT_TYPE],
        "application/json"
    );
    assert_eq!(
        download.headers[header::CONTENT_DISPOSITION],
        "attachment; filename=\"Annual _Safety_.json\""
    );
    assert_eq!(
        download.bytes,
        serde_json::to_vec(&report["content"]).unwrap()
    );
}

#[tokio::test]
async fn reports_list_newest_first_and_by_user() {
    let app = app();
    for (title, user) in [("first", "alice"), ("second", "bob"), ("third", "alice")] {
        let reply = post(
            &app,
            "/api/reports/generate",
            json!({ "type": "country", "format": "excel", "title": title, "userId": user }),
        )
        .await;
        assert_eq!(reply.status, StatusCode::CREATED);
    }

    let titles = |v: Value| -> Vec<Value> {
        v.as_array().unwrap().iter().map(|r| r["title"].clone()).collect()
    };
    let all = get(&app, "/api/reports").await;
    assert_eq!(all.status, StatusCode::OK);
    assert_eq!(titles(all.json()), ["third", "second", "first"]);

    let alice = get(&app, "/api/reports?userId=alice").await.json();
    assert_eq!(titles(alice), ["third", "first"]);
}

#[tokio::test]
async fn invalid_report_request_is_400() {
    let app = app();
    let reply = post(
        &app,
        "/api/reports/generate",
        json!({ "type": "weekly", "format": "json" }),
    )
    .await;
    assert_eq!(reply.status, StatusCode::BAD_REQUEST);

    let reply = post(
        &app,
        "/api/reports/generate",
        json!({ "type": "custom", "format": "docx" }),
    )
    .await;
    assert_eq!(reply.status, StatusCode::BAD_REQUEST);
    assert!(get(&app, "/api/reports").await.json().as_array().unwrap().is_empty());
}

#[tokio::test]
async fn unknown_report_download_is_404() {
    let reply = get(&app(), "/api/reports/missing/download").await;
    assert_eq!(reply.status, StatusCode::NOT_FOUND);
    assert_eq!(reply.json(), json!({ "error": "Report not found" }));
}

// ============================================================================
// Users and memberships
// ============================================================================

#[tokio::test]
async fn register_returns_summary_without_password() {
    let app = app();
    let reply = post(
        &app,
        "/api/users/register",
        json!({ "username": "ada", "email": "ada@example.org", "password": "correct horse" }),
    )
    .await;
    assert_eq!(reply.status, StatusCode::CREATED);
    let body = reply.json();
    let keys: Vec<_> = body.as_object().unwrap().keys().cloned().collect();
    assert_eq!(keys.len(), 3);
    assert_eq!(body["email"], "ada@example.org");
    assert_eq!(body["membershipTier"], "Community");
    assert!(body["id"].is_string());
    let raw = String::from_utf8(reply.bytes).unwrap();
    assert!(!raw.contains("password"));
    assert!(!raw.contains("correct horse"));
}

#[tokio::test]
async fn double_registration_is_400() {
    let app = app();
    let body = json!({ "username": "ada", "email": "ada@example.org", "password": "correct horse" });
    assert_eq!(post(&app, "/api/users/register", body).await.status, StatusCode::CREATED);

    let again = post(
        &app,
        "/api/users/register",
        json!({ "username": "ada2", "email": "ADA@example.org", "password": "another one" }),
    )
    .await;
    assert_eq!(again.status, StatusCode::BAD_REQUEST);
    assert_eq!(again.json(), json!({ "error": "User already exists" }));

    let same_username = post(
        &app,
        "/api/users/register",
        json!({ "username": "ada", "email": "lovelace@example.org", "password": "another one" }),
    )
    .await;
    assert_eq!(same_username.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn invalid_registration_lists_fields() {
    let reply = post(
        &app(),
        "/api/users/register",
        json!({ "username": " ", "email": "not-an-email", "password": "short" }),
    )
    .await;
    assert_eq!(reply.status, StatusCode::BAD_REQUEST);
    let body = reply.json();
    assert_eq!(body["error"], "Invalid user data");
    let fields: Vec<_> = body["fields"]
        .as_array()
        .unwrap()
        .iter()
        .map(|f| f["field"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(fields, ["username", "email", "password"]);
}

#[tokio::test]
async fn membership_lifecycle() {
    let app = app();
    let user = post(
        &app,
        "/api/users/register",
        json!({ "username": "grace", "email": "grace@example.org", "password": "hopper1906" }),
    )
    .await
    .json();
    let user_id = user["id"].as_str().unwrap();

    let none = get(&app, &format!("/api/users/{user_id}/membership")).await;
    assert_eq!(none.status, StatusCode::NOT_FOUND);

    let reply = post(
        &app,
        "/api/memberships",
        json!({ "userId": user_id, "plan": "Partner" }),
    )
    .await;
    assert_eq!(reply.status, StatusCode::CREATED);
    let membership = reply.json();
    assert_eq!(membership["status"], "active");
    assert_eq!(membership["plan"], "Partner");

    let fetched = get(&app, &format!("/api/users/{user_id}/membership")).await;
    assert_eq!(fetched.status, StatusCode::OK);
    assert_eq!(fetched.json(), membership);

    let unknown = post(
        &app,
        "/api/memberships",
        json!({ "userId": "ghost", "plan": "Advocate" }),
    )
    .await;
    assert_eq!(unknown.status, StatusCode::NOT_FOUND);
}

// ============================================================================
// Transport
// ============================================================================

#[tokio::test]
async fn malformed_json_is_400() {
    let app = app();
    let request = Request::post("/api/certifications")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn health_is_ok() {
    let reply = get(&app(), "/health").await;
    assert_eq!(reply.status, StatusCode::OK);
    assert_eq!(reply.bytes, b"ok");
}
