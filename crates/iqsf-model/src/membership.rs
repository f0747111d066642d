//! Paid memberships.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::enums::{MembershipStatus, MembershipTier};
use crate::validate::{Checker, Validate, ValidationError};

/// A membership subscription. `user_id` is a lookup key, not an owning link.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Membership {
    pub id: String,
    pub user_id: String,
    pub plan: MembershipTier,
    pub status: MembershipStatus,
    pub start_date: DateTime<Utc>,
    pub end_date: Option<DateTime<Utc>>,
}

impl Membership {
    #[inline]
    pub fn is_active(&self) -> bool {
        self.status == MembershipStatus::Active
    }
}

/// Subscription payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMembership {
    pub user_id: String,
    pub plan: MembershipTier,
    #[serde(default)]
    pub status: MembershipStatus,
    #[serde(default)]
    pub end_date: Option<DateTime<Utc>>,
}

impl Validate for NewMembership {
    fn validate(&self) -> Result<(), ValidationError> {
        let mut c = Checker::new();
        c.required("userId", &self.user_id);
        c.finish()
    }
}
