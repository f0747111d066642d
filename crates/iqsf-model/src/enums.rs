//! Closed enumerations for every enum-like entity field.
//!
//! Each type serializes to, and parses from, the exact wire string. Anything
//! else fails with [`ParseEnumError`] (or a serde error when decoding JSON).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Unrecognized value for a closed enumeration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} '{value}' (expected one of: {expected})")]
pub struct ParseEnumError {
    /// Name of the enumeration.
    pub kind: &'static str,
    /// The rejected input.
    pub value: String,
    /// Comma-separated accepted values.
    pub expected: &'static str,
}

/// Generate a closed string enum with serde, `Display` and `FromStr` impls.
macro_rules! string_enum {
    (
        $(#[$meta:meta])*
        $name:ident => $kind:literal {
            $($(#[$vmeta:meta])* $variant:ident => $wire:tt),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                #[serde(rename = $wire)]
                $variant,
            )+
        }

        impl $name {
            /// All variants in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Wire representation.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $wire,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = ParseEnumError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($wire => Ok($name::$variant),)+
                    _ => Err(ParseEnumError {
                        kind: $kind,
                        value: s.to_string(),
                        expected: concat!($($wire, " "),+).trim_ascii_end(),
                    }),
                }
            }
        }
    };
}

string_enum! {
    /// Geographic region of a country.
    Region => "region" {
        Africa => "Africa",
        Americas => "Americas",
        Asia => "Asia",
        Europe => "Europe",
        Oceania => "Oceania",
    }
}

string_enum! {
    /// Direction of a country's safety score over time.
    Trend => "trend" {
        Improving => "improving",
        Declining => "declining",
        Stable => "stable",
    }
}

string_enum! {
    /// Review state of a certification application.
    CertificationStatus => "certification status" {
        Pending => "pending",
        Approved => "approved",
        Rejected => "rejected",
    }
}

string_enum! {
    /// Awarded certification level.
    CertificationLevel => "certification level" {
        Bronze => "bronze",
        Silver => "silver",
        Gold => "gold",
    }
}

string_enum! {
    /// Headcount bracket of an applying organization.
    OrganizationSize => "organization size" {
        Small => "1-49",
        Medium => "50-249",
        Large => "250-999",
        Enterprise => "1000+",
    }
}

string_enum! {
    /// Scope of a generated report.
    ReportType => "report type" {
        Country => "country",
        Regional => "regional",
        Global => "global",
        Custom => "custom",
    }
}

string_enum! {
    /// Requested output format of a report.
    ReportFormat => "report format" {
        Pdf => "pdf",
        Excel => "excel",
        Json => "json",
    }
}

string_enum! {
    /// Membership tier, used both on users and as a membership plan.
    MembershipTier => "membership tier" {
        Community => "Community",
        Advocate => "Advocate",
        Partner => "Partner",
        Enterprise => "Enterprise",
    }
}

string_enum! {
    /// Lifecycle state of a membership.
    MembershipStatus => "membership status" {
        Active => "active",
        Cancelled => "cancelled",
        Expired => "expired",
    }
}

impl Default for CertificationStatus {
    fn default() -> Self {
        Self::Pending
    }
}

impl Default for CertificationLevel {
    fn default() -> Self {
        Self::Bronze
    }
}

impl Default for MembershipTier {
    fn default() -> Self {
        Self::Community
    }
}

impl Default for MembershipStatus {
    fn default() -> Self {
        Self::Active
    }
}
