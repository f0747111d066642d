//! Entity schemas for the IQSF data service.
//!
//! Every persisted record type has two shapes:
//!
//! - the entity itself ([`User`], [`Country`], [`Certification`], [`Report`],
//!   [`Membership`]) as returned by the store, including server-generated fields
//! - an insert shape (`New*`) holding only what a caller may supply at creation
//!
//! Insert shapes implement [`Validate`]. Enumerated fields are closed types
//! (see [`enums`]) so unknown values are rejected when the payload is decoded.
//!
//! # Example
//!
//! ```
//! use iqsf_model::{NewCountry, Region, Trend, Validate};
//!
//! let country = NewCountry {
//!     name: "Norway".into(),
//!     code: "NO".into(),
//!     region: Region::Europe,
//!     safety_score: 90,
//!     trend: Trend::Stable,
//!     latitude: Some(60.472),
//!     longitude: Some(8.4689),
//! };
//! assert!(country.validate().is_ok());
//! ```

pub mod enums;

mod certification;
mod country;
mod membership;
mod report;
mod user;
mod validate;

pub use certification::{Certification, CertificationUpdate, NewCertification};
pub use country::{Country, MapMarker, NewCountry};
pub use enums::{
    CertificationLevel, CertificationStatus, MembershipStatus, MembershipTier, OrganizationSize,
    ParseEnumError, Region, ReportFormat, ReportType, Trend,
};
pub use membership::{Membership, NewMembership};
pub use report::{NewReport, Report, download_url};
pub use user::{NewUser, User, UserSummary};
pub use validate::{FieldError, Validate, ValidationError};
