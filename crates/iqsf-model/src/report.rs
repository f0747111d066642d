//! Generated reports.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::enums::{ReportFormat, ReportType};
use crate::validate::{Checker, Validate, ValidationError};

/// A generated report. Immutable once stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub id: String,
    pub title: String,
    #[serde(rename = "type")]
    pub report_type: ReportType,
    pub countries: Vec<String>,
    pub format: ReportFormat,
    pub content: Option<Value>,
    /// Always [`download_url`] of `id`.
    pub download_url: String,
    pub generated_by: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Download path served for a report id.
pub fn download_url(id: &str) -> String {
    format!("/api/reports/{id}/download")
}

/// Report insert shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewReport {
    pub title: String,
    #[serde(rename = "type")]
    pub report_type: ReportType,
    #[serde(default)]
    pub countries: Vec<String>,
    pub format: ReportFormat,
    #[serde(default)]
    pub content: Option<Value>,
    #[serde(default)]
    pub generated_by: Option<String>,
}

impl Validate for NewReport {
    fn validate(&self) -> Result<(), ValidationError> {
        let mut c = Checker::new();
        c.required("title", &self.title);
        if self.countries.iter().any(|name| name.trim().is_empty()) {
            c.fail("countries", "must not contain empty names");
        }
        c.finish()
    }
}
