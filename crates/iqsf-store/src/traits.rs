//! Storage trait.

use std::sync::Arc;

use async_trait::async_trait;
use iqsf_model::{
    Certification, CertificationLevel, CertificationStatus, Country, Membership, NewCertification,
    NewCountry, NewMembership, NewReport, NewUser, Region, Report, User,
};

use crate::error::StoreError;

/// Repository for every entity family.
///
/// Implementations must be thread-safe (`Send + Sync`) as they are shared by
/// all request handlers. Lookups return `Ok(None)` when nothing matches;
/// creates assign the id, timestamps and derived fields.
#[async_trait]
pub trait Storage: Send + Sync {
    // Users

    async fn get_user(&self, id: &str) -> Result<Option<User>, StoreError>;

    /// Case-insensitive email lookup.
    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>, StoreError>;

    /// Fails with [`StoreError::Conflict`] if the email or username is taken.
    async fn create_user(&self, user: NewUser) -> Result<User, StoreError>;

    // Countries

    async fn all_countries(&self) -> Result<Vec<Country>, StoreError>;

    async fn countries_by_region(&self, region: Region) -> Result<Vec<Country>, StoreError>;

    /// Countries with `safety_score >= min_score`.
    async fn countries_by_score(&self, min_score: u8) -> Result<Vec<Country>, StoreError>;

    async fn get_country(&self, id: &str) -> Result<Option<Country>, StoreError>;

    /// Fails with [`StoreError::Conflict`] if the name or code is taken.
    async fn create_country(&self, country: NewCountry) -> Result<Country, StoreError>;

    // Certifications

    async fn get_certification(&self, id: &str) -> Result<Option<Certification>, StoreError>;

    async fn all_certifications(&self) -> Result<Vec<Certification>, StoreError>;

    /// Stores a pending application and issues its verification id.
    async fn create_certification(
        &self,
        certification: NewCertification,
    ) -> Result<Certification, StoreError>;

    /// Set the status, and the level when given.
    async fn update_certification_status(
        &self,
        id: &str,
        status: CertificationStatus,
        level: Option<CertificationLevel>,
    ) -> Result<Option<Certification>, StoreError>;

    // Reports

    async fn get_report(&self, id: &str) -> Result<Option<Report>, StoreError>;

    /// All reports, newest first.
    async fn all_reports(&self) -> Result<Vec<Report>, StoreError>;

    /// Reports generated by `user_id`, newest first.
    async fn reports_by_user(&self, user_id: &str) -> Result<Vec<Report>, StoreError>;

    async fn create_report(&self, report: NewReport) -> Result<Report, StoreError>;

    // Memberships

    /// The active membership of `user_id`, if any.
    async fn membership_by_user(&self, user_id: &str) -> Result<Option<Membership>, StoreError>;

    async fn create_membership(&self, membership: NewMembership)
    -> Result<Membership, StoreError>;
}

/// Blanket implementation for `Arc<S>` where `S: Storage`.
///
/// This allows passing `Arc<MemoryStore>` directly to functions expecting `impl Storage`.
#[async_trait]
impl<S: Storage + ?Sized> Storage for Arc<S> {
    async fn get_user(&self, id: &str) -> Result<Option<User>, StoreError> {
        (**self).get_user(id).await
    }

    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        (**self).get_user_by_email(email).await
    }

    async fn create_user(&self, user: NewUser) -> Result<User, StoreError> {
        (**self).create_user(user).await
    }

    async fn all_countries(&self) -> Result<Vec<Country>, StoreError> {
        (**self).all_countries().await
    }

    async fn countries_by_region(&self, region: Region) -> Result<Vec<Country>, StoreError> {
        (**self).countries_by_region(region).await
    }

    async fn countries_by_score(&self, min_score: u8) -> Result<Vec<Country>, StoreError> {
        (**self).countries_by_score(min_score).await
    }

    async fn get_country(&self, id: &str) -> Result<Option<Country>, StoreError> {
        (**self).get_country(id).await
    }

    async fn create_country(&self, country: NewCountry) -> Result<Country, StoreError> {
        (**self).create_country(country).await
    }

    async fn get_certification(&self, id: &str) -> Result<Option<Certification>, StoreError> {
        (**self).get_certification(id).await
    }

    async fn all_certifications(&self) -> Result<Vec<Certification>, StoreError> {
        (**self).all_certifications().await
    }

    async fn create_certification(
        &self,
        certification: NewCertification,
    ) -> Result<Certification, StoreError> {
        (**self).create_certification(certification).await
    }

    async fn update_certification_status(
        &self,
        id: &str,
        status: CertificationStatus,
        level: Option<CertificationLevel>,
    ) -> Result<Option<Certification>, StoreError> {
        (**self).update_certification_status(id, status, level).await
    }

    async fn get_report(&self, id: &str) -> Result<Option<Report>, StoreError> {
        (**self).get_report(id).await
    }

    async fn all_reports(&self) -> Result<Vec<Report>, StoreError> {
        (**self).all_reports().await
    }

    async fn reports_by_user(&self, user_id: &str) -> Result<Vec<Report>, StoreError> {
        (**self).reports_by_user(user_id).await
    }

    async fn create_report(&self, report: NewReport) -> Result<Report, StoreError> {
        (**self).create_report(report).await
    }

    async fn membership_by_user(&self, user_id: &str) -> Result<Option<Membership>, StoreError> {
        (**self).membership_by_user(user_id).await
    }

    async fn create_membership(
        &self,
        membership: NewMembership,
    ) -> Result<Membership, StoreError> {
        (**self).create_membership(membership).await
    }
}
