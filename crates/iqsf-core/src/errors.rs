//! Error type constants for metrics and logging.
//!
//! These constants provide consistent error classification across all crates.

/// Request payload failed schema validation.
pub const ERROR_VALIDATION: &str = "validation";
/// Malformed request (bad query string, unparsable body).
pub const ERROR_BAD_REQUEST: &str = "bad_request";
/// Lookup by id with no match.
pub const ERROR_NOT_FOUND: &str = "not_found";
/// Unique field already taken.
pub const ERROR_CONFLICT: &str = "conflict";
/// Unexpected failure inside a handler or the store.
pub const ERROR_INTERNAL: &str = "internal";
/// Configuration error.
pub const ERROR_CONFIG: &str = "config";
/// Socket or file I/O failure.
pub const ERROR_IO: &str = "io";
