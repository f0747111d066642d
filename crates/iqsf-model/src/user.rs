//! User accounts.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use iqsf_core::MIN_PASSWORD_LEN;

use crate::enums::MembershipTier;
use crate::validate::{Checker, Validate, ValidationError};

/// A registered account.
///
/// The password is only ever held as a digest and is never serialized.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub username: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub membership_tier: MembershipTier,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Reduced projection returned to clients after registration.
    pub fn summary(&self) -> UserSummary {
        UserSummary {
            id: self.id.clone(),
            email: self.email.clone(),
            membership_tier: self.membership_tier,
        }
    }
}

/// Public view of a user: id, email and tier only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSummary {
    pub id: String,
    pub email: String,
    pub membership_tier: MembershipTier,
}

/// Registration payload.
#[derive(Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub membership_tier: MembershipTier,
}

// Keeps the plaintext password out of logs.
impl fmt::Debug for NewUser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewUser")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("membership_tier", &self.membership_tier)
            .finish()
    }
}

impl Validate for NewUser {
    fn validate(&self) -> Result<(), ValidationError> {
        let mut c = Checker::new();
        c.required("username", &self.username);
        c.email("email", &self.email);
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            c.fail(
                "password",
                format!("must be at least {MIN_PASSWORD_LEN} characters"),
            );
        }
        c.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_user() -> NewUser {
        NewUser {
            username: "amina".into(),
            email: "amina@example.org".into(),
            password: "correct horse".into(),
            membership_tier: MembershipTier::default(),
        }
    }

    #[test]
    fn test_valid_user() {
        assert!(new_user().validate().is_ok());
    }

    #[test]
    fn test_short_password_and_bad_email() {
        let mut user = new_user();
        user.password = "short".into();
        user.email = "amina".into();
        let err = user.validate().unwrap_err();
        assert!(err.has_field("password"));
        assert!(err.has_field("email"));
        assert!(!err.has_field("username"));
    }

    #[test]
    fn test_tier_defaults_to_community() {
        let user: NewUser = serde_json::from_str(
            r#"{"username":"a","email":"a@example.org","password":"12345678"}"#,
        )
        .unwrap();
        assert_eq!(user.membership_tier, MembershipTier::Community);
    }

    #[test]
    fn test_debug_redacts_password() {
        let rendered = format!("{:?}", new_user());
        assert!(!rendered.contains("correct horse"));
        assert!(rendered.contains("<redacted>"));
    }

    #[test]
    fn test_serialized_user_has_no_password() {
        let user = User {
            id: "u1".into(),
            username: "amina".into(),
            email: "amina@example.org".into(),
            password_hash: "deadbeef".into(),
            membership_tier: MembershipTier::Advocate,
            created_at: Utc::now(),
        };
        let json = serde_json::to_value(&user).unwrap();
        assert!(json.get("password").is_none());
        assert!(json.get("passwordHash").is_none());
        assert_eq!(json["membershipTier"], "Advocate");

        let summary = serde_json::to_value(user.summary()).unwrap();
        assert_eq!(summary.as_object().unwrap().len(), 3);
    }
}
