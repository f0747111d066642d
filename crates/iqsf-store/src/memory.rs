//! In-memory storage backend.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Datelike, Utc};
use iqsf_model::{
    Certification, CertificationLevel, CertificationStatus, Country, Membership, NewCertification,
    NewCountry, NewMembership, NewReport, NewUser, Region, Report, User, Validate, download_url,
};
use parking_lot::RwLock;
use tracing::{debug, info};
use uuid::Uuid;

use crate::error::StoreError;
use crate::hash::password_digest;
use crate::seed::sample_countries;
use crate::traits::Storage;
use crate::verification::verification_id;

/// Process-lifetime store keeping every entity family in memory.
///
/// All tables sit behind one `parking_lot::RwLock`, so a uniqueness check and
/// the insert it guards happen under the same write guard. Nothing is
/// persisted; dropping the store drops the data.
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

/// Append-only tables plus the uniqueness indexes that guard them.
#[derive(Debug, Default)]
struct Tables {
    users: HashMap<String, User>,
    /// Lowercased email -> user id.
    user_emails: HashMap<String, String>,
    /// Username -> user id.
    usernames: HashMap<String, String>,

    /// Insertion order is the listing order.
    countries: Vec<Country>,
    country_positions: HashMap<String, usize>,
    /// Lowercased name -> country id.
    country_names: HashMap<String, String>,
    /// Uppercase code -> country id.
    country_codes: HashMap<String, String>,

    certifications: Vec<Certification>,
    certification_positions: HashMap<String, usize>,
    verification_ids: HashMap<String, String>,

    /// Oldest first; listings iterate in reverse.
    reports: Vec<Report>,
    report_positions: HashMap<String, usize>,

    memberships: Vec<Membership>,
}

impl MemoryStore {
    /// Create an empty store.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding the sample countries.
    pub fn seeded() -> Self {
        let store = Self::new();
        {
            let mut tables = store.tables.write();
            for country in sample_countries() {
                // Samples are valid and distinct.
                if let Err(e) = tables.insert_country(country) {
                    tracing::warn!(error = %e, "skipping sample country");
                }
            }
            info!(countries = tables.countries.len(), "store seeded with sample countries");
        }
        store
    }

    /// Number of stored countries.
    pub fn country_count(&self) -> usize {
        self.tables.read().countries.len()
    }

    /// Number of registered users.
    pub fn user_count(&self) -> usize {
        self.tables.read().users.len()
    }
}

fn new_id() -> String {
    Uuid::new_v4().to_string()
}

impl Tables {
    fn insert_user(&mut self, user: NewUser) -> Result<User, StoreError> {
        user.validate()?;
        let email = user.email.trim().to_string();
        let email_key = email.to_lowercase();
        let username = user.username.trim().to_string();
        if self.user_emails.contains_key(&email_key) {
            return Err(StoreError::conflict("user", "email"));
        }
        if self.usernames.contains_key(&username) {
            return Err(StoreError::conflict("user", "username"));
        }

        let id = new_id();
        let user = User {
            password_hash: password_digest(&id, &user.password),
            id: id.clone(),
            username: username.clone(),
            email,
            membership_tier: user.membership_tier,
            created_at: Utc::now(),
        };
        self.user_emails.insert(email_key, id.clone());
        self.usernames.insert(username, id.clone());
        self.users.insert(id, user.clone());
        Ok(user)
    }

    fn insert_country(&mut self, country: NewCountry) -> Result<Country, StoreError> {
        let country = country.normalized();
        country.validate()?;
        let name_key = country.name.to_lowercase();
        if self.country_names.contains_key(&name_key) {
            return Err(StoreError::conflict("country", "name"));
        }
        if self.country_codes.contains_key(&country.code) {
            return Err(StoreError::conflict("country", "code"));
        }

        let id = new_id();
        let country = Country {
            id: id.clone(),
            name: country.name,
            code: country.code,
            region: country.region,
            safety_score: country.safety_score,
            trend: country.trend,
            latitude: country.latitude,
            longitude: country.longitude,
            last_updated: Utc::now(),
        };
        self.country_names.insert(name_key, id.clone());
        self.country_codes.insert(country.code.clone(), id.clone());
        self.country_positions.insert(id, self.countries.len());
        self.countries.push(country.clone());
        Ok(country)
    }

    fn insert_certification(
        &mut self,
        certification: NewCertification,
        now: DateTime<Utc>,
    ) -> Result<Certification, StoreError> {
        certification.validate()?;
        let id = new_id();

        let mut millis = now.timestamp_millis();
        let mut verification = verification_id(millis, now.year());
        // 10_000 suffixes per year; past that every probe collides.
        let mut probes = 0u32;
        while self.verification_ids.contains_key(&verification) {
            probes += 1;
            if probes >= 10_000 {
                return Err(StoreError::backend("verification id space exhausted"));
            }
            millis += 1;
            verification = verification_id(millis, now.year());
        }

        let certification = Certification {
            id: id.clone(),
            organization_name: certification.organization_name.trim().to_string(),
            contact_email: certification.contact_email.trim().to_string(),
            country: certification.country.trim().to_string(),
            organization_size: certification.organization_size,
            status: CertificationStatus::Pending,
            level: certification.level.unwrap_or_default(),
            verification_id: verification.clone(),
            notes: certification.notes.filter(|n| !n.trim().is_empty()),
            created_at: now,
        };
        self.verification_ids.insert(verification, id.clone());
        self.certification_positions
            .insert(id, self.certifications.len());
        self.certifications.push(certification.clone());
        Ok(certification)
    }

    fn insert_report(&mut self, report: NewReport) -> Result<Report, StoreError> {
        report.validate()?;
        let id = new_id();
        let report = Report {
            download_url: download_url(&id),
            id: id.clone(),
            title: report.title,
            report_type: report.report_type,
            countries: report.countries,
            format: report.format,
            content: report.content,
            generated_by: report.generated_by,
            created_at: Utc::now(),
        };
        self.report_positions.insert(id, self.reports.len());
        self.reports.push(report.clone());
        Ok(report)
    }

    fn insert_membership(&mut self, membership: NewMembership) -> Result<Membership, StoreError> {
        membership.validate()?;
        let membership = Membership {
            id: new_id(),
            user_id: membership.user_id,
            plan: membership.plan,
            status: membership.status,
            start_date: Utc::now(),
            end_date: membership.end_date,
        };
        self.memberships.push(membership.clone());
        Ok(membership)
    }
}

#[async_trait]
impl Storage for MemoryStore {
    async fn get_user(&self, id: &str) -> Result<Option<User>, StoreError> {
        Ok(self.tables.read().users.get(id).cloned())
    }

    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let tables = self.tables.read();
        Ok(tables
            .user_emails
            .get(&email.trim().to_lowercase())
            .and_then(|id| tables.users.get(id))
            .cloned())
    }

    async fn create_user(&self, user: NewUser) -> Result<User, StoreError> {
        let user = self.tables.write().insert_user(user)?;
        debug!(user_id = %user.id, "user stored");
        Ok(user)
    }

    async fn all_countries(&self) -> Result<Vec<Country>, StoreError> {
        Ok(self.tables.read().countries.clone())
    }

    async fn countries_by_region(&self, region: Region) -> Result<Vec<Country>, StoreError> {
        Ok(self
            .tables
            .read()
            .countries
            .iter()
            .filter(|c| c.region == region)
            .cloned()
            .collect())
    }

    async fn countries_by_score(&self, min_score: u8) -> Result<Vec<Country>, StoreError> {
        Ok(self
            .tables
            .read()
            .countries
            .iter()
            .filter(|c| c.safety_score >= min_score)
            .cloned()
            .collect())
    }

    async fn get_country(&self, id: &str) -> Result<Option<Country>, StoreError> {
        let tables = self.tables.read();
        Ok(tables
            .country_positions
            .get(id)
            .map(|&pos| tables.countries[pos].clone()))
    }

    async fn create_country(&self, country: NewCountry) -> Result<Country, StoreError> {
        let country = self.tables.write().insert_country(country)?;
        debug!(country_id = %country.id, code = %country.code, "country stored");
        Ok(country)
    }

    async fn get_certification(&self, id: &str) -> Result<Option<Certification>, StoreError> {
        let tables = self.tables.read();
        Ok(tables
            .certification_positions
            .get(id)
            .map(|&pos| tables.certifications[pos].clone()))
    }

    async fn all_certifications(&self) -> Result<Vec<Certification>, StoreError> {
        Ok(self.tables.read().certifications.clone())
    }

    async fn create_certification(
        &self,
        certification: NewCertification,
    ) -> Result<Certification, StoreError> {
        let certification = self
            .tables
            .write()
            .insert_certification(certification, Utc::now())?;
        debug!(
            certification_id = %certification.id,
            verification_id = %certification.verification_id,
            "certification stored"
        );
        Ok(certification)
    }

    async fn update_certification_status(
        &self,
        id: &str,
        status: CertificationStatus,
        level: Option<CertificationLevel>,
    ) -> Result<Option<Certification>, StoreError> {
        let mut tables = self.tables.write();
        let Some(&pos) = tables.certification_positions.get(id) else {
            return Ok(None);
        };
        let certification = &mut tables.certifications[pos];
        certification.status = status;
        if let Some(level) = level {
            certification.level = level;
        }
        Ok(Some(certification.clone()))
    }

    async fn get_report(&self, id: &str) -> Result<Option<Report>, StoreError> {
        let tables = self.tables.read();
        Ok(tables
            .report_positions
            .get(id)
            .map(|&pos| tables.reports[pos].clone()))
    }

    async fn all_reports(&self) -> Result<Vec<Report>, StoreError> {
        Ok(self.tables.read().reports.iter().rev().cloned().collect())
    }

    async fn reports_by_user(&self, user_id: &str) -> Result<Vec<Report>, StoreError> {
        Ok(self
            .tables
            .read()
            .reports
            .iter()
            .rev()
            .filter(|r| r.generated_by.as_deref() == Some(user_id))
            .cloned()
            .collect())
    }

    async fn create_report(&self, report: NewReport) -> Result<Report, StoreError> {
        let report = self.tables.write().insert_report(report)?;
        debug!(report_id = %report.id, "report stored");
        Ok(report)
    }

    async fn membership_by_user(&self, user_id: &str) -> Result<Option<Membership>, StoreError> {
        // Latest active subscription wins if several exist.
        Ok(self
            .tables
            .read()
            .memberships
            .iter()
            .rev()
            .find(|m| m.user_id == user_id && m.is_active())
            .cloned())
    }

    async fn create_membership(
        &self,
        membership: NewMembership,
    ) -> Result<Membership, StoreError> {
        let membership = self.tables.write().insert_membership(membership)?;
        debug!(membership_id = %membership.id, user_id = %membership.user_id, "membership stored");
        Ok(membership)
    }
}
