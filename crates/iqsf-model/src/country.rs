//! Countries and their safety scores.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use iqsf_core::{MAX_SAFETY_SCORE, MIN_SAFETY_SCORE};

use crate::enums::{Region, Trend};
use crate::validate::{Checker, Validate, ValidationError};

/// A tracked country.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Country {
    pub id: String,
    pub name: String,
    /// ISO-style code, uppercase.
    pub code: String,
    pub region: Region,
    /// Always within 0..=100.
    pub safety_score: u8,
    pub trend: Trend,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub last_updated: DateTime<Utc>,
}

impl Country {
    /// Marker for the map renderer, if the country has coordinates.
    pub fn marker(&self) -> Option<MapMarker> {
        Some(MapMarker {
            name: self.name.clone(),
            latitude: self.latitude?,
            longitude: self.longitude?,
            safety_score: self.safety_score,
            trend: self.trend,
            region: self.region,
        })
    }
}

/// The per-country data a map collaborator needs to place a marker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapMarker {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub safety_score: u8,
    pub trend: Trend,
    pub region: Region,
}

/// Country insert shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCountry {
    pub name: String,
    pub code: String,
    pub region: Region,
    pub safety_score: u8,
    pub trend: Trend,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
}

impl NewCountry {
    /// Trim the name and uppercase the code.
    pub fn normalized(mut self) -> Self {
        self.name = self.name.trim().to_string();
        self.code = self.code.trim().to_ascii_uppercase();
        self
    }
}

impl Validate for NewCountry {
    fn validate(&self) -> Result<(), ValidationError> {
        let mut c = Checker::new();
        c.required("name", &self.name);
        let code = self.code.trim();
        if !(2..=3).contains(&code.len()) || !code.bytes().all(|b| b.is_ascii_uppercase()) {
            c.fail("code", "must be 2-3 uppercase ASCII letters");
        }
        if !(MIN_SAFETY_SCORE..=MAX_SAFETY_SCORE).contains(&self.safety_score) {
            c.fail(
                "safetyScore",
                format!("must be within [{MIN_SAFETY_SCORE}, {MAX_SAFETY_SCORE}]"),
            );
        }
        if let Some(lat) = self.latitude {
            c.range("latitude", lat, -90.0, 90.0);
        }
        if let Some(lng) = self.longitude {
            c.range("longitude", lng, -180.0, 180.0);
        }
        c.finish()
    }
}
