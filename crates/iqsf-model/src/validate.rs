//! Field-level validation of insert shapes.

use std::fmt;

/// A single offending field.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct FieldError {
    /// Wire name of the field (camelCase).
    pub field: &'static str,
    /// Human-readable reason.
    pub reason: String,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.reason)
    }
}

/// Validation failure listing every offending field.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid fields: {}", join_fields(.fields))]
pub struct ValidationError {
    pub fields: Vec<FieldError>,
}

fn join_fields(fields: &[FieldError]) -> String {
    fields
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

impl ValidationError {
    /// Error for a single field.
    pub fn single(field: &'static str, reason: impl Into<String>) -> Self {
        Self {
            fields: vec![FieldError {
                field,
                reason: reason.into(),
            }],
        }
    }

    /// Whether `field` is among the offending fields.
    pub fn has_field(&self, field: &str) -> bool {
        self.fields.iter().any(|f| f.field == field)
    }
}

/// Validation of a creation-time payload.
pub trait Validate {
    /// Check every field constraint, reporting all failures at once.
    fn validate(&self) -> Result<(), ValidationError>;
}

/// Accumulates field errors while walking a payload.
#[derive(Debug, Default)]
pub(crate) struct Checker {
    fields: Vec<FieldError>,
}

impl Checker {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn fail(&mut self, field: &'static str, reason: impl Into<String>) {
        self.fields.push(FieldError {
            field,
            reason: reason.into(),
        });
    }

    /// Required string: rejects empty and whitespace-only values.
    pub(crate) fn required(&mut self, field: &'static str, value: &str) {
        if value.trim().is_empty() {
            self.fail(field, "must not be empty");
        }
    }

    pub(crate) fn email(&mut self, field: &'static str, value: &str) {
        if value.trim().is_empty() {
            self.fail(field, "must not be empty");
        } else if !is_plausible_email(value) {
            self.fail(field, "must be an email address");
        }
    }

    pub(crate) fn range(&mut self, field: &'static str, value: f64, min: f64, max: f64) {
        if !value.is_finite() || value < min || value > max {
            self.fail(field, format!("must be within [{min}, {max}]"));
        }
    }

    pub(crate) fn finish(self) -> Result<(), ValidationError> {
        if self.fields.is_empty() {
            Ok(())
        } else {
            Err(ValidationError {
                fields: self.fields,
            })
        }
    }
}

/// One `@`, non-empty local part, dotted non-empty domain, no whitespace.
fn is_plausible_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = value.split('@');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => {
            !local.is_empty()
                && !domain.is_empty()
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        _ => false,
    }
}
