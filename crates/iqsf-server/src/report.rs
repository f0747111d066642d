//! Placeholder report generation.
//!
//! A generated report is a timestamped snapshot of the country table. There
//! is no analysis behind the summary line.

use chrono::{DateTime, SecondsFormat, Utc};
use iqsf_model::{Country, ReportType};
use serde_json::{Value, json};

/// Summary line written into every generated report.
pub const REPORT_SUMMARY: &str = "AI-generated safety analysis based on current data";

/// `"{type} Report - {YYYY-MM-DD}"`, using the wire name of the type.
pub fn default_title(report_type: ReportType, now: DateTime<Utc>) -> String {
    format!("{} Report - {}", report_type, now.format("%Y-%m-%d"))
}

/// Report body: summary, the full country list and the generation time.
pub fn snapshot_content(countries: &[Country], now: DateTime<Utc>) -> Value {
    json!({
        "summary": REPORT_SUMMARY,
        "metrics": countries,
        "generated": now.to_rfc3339_opts(SecondsFormat::Millis, true),
    })
}

/// File name offered in `Content-Disposition` for a report title.
///
/// Quotes, backslashes, control and non-ASCII characters become `_` so the
/// header value stays a valid quoted string.
pub fn attachment_filename(title: &str) -> String {
    let stem: String = title
        .chars()
        .map(|c| match c {
            '"' | '\\' => '_',
            c if c.is_ascii_control() || !c.is_ascii() => '_',
            c => c,
        })
        .collect();
    format!("{stem}.json")
}
