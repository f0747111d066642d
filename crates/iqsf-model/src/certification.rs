//! Certification applications.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::enums::{CertificationLevel, CertificationStatus, OrganizationSize};
use crate::validate::{Checker, Validate, ValidationError};

/// A submitted certification application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Certification {
    pub id: String,
    pub organization_name: String,
    pub contact_email: String,
    pub country: String,
    pub organization_size: OrganizationSize,
    pub status: CertificationStatus,
    pub level: CertificationLevel,
    /// Issued by the store, `IQSF-NNNN-YYYY`.
    pub verification_id: String,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Application payload.
///
/// There is no status field: every application starts as pending, and a
/// `status` key in the request body is ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCertification {
    pub organization_name: String,
    pub contact_email: String,
    pub country: String,
    pub organization_size: OrganizationSize,
    #[serde(default)]
    pub level: Option<CertificationLevel>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl Validate for NewCertification {
    fn validate(&self) -> Result<(), ValidationError> {
        let mut c = Checker::new();
        c.required("organizationName", &self.organization_name);
        c.email("contactEmail", &self.contact_email);
        c.required("country", &self.country);
        c.finish()
    }
}

/// Review decision applied to an existing application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CertificationUpdate {
    pub status: CertificationStatus,
    #[serde(default)]
    pub level: Option<CertificationLevel>,
}
