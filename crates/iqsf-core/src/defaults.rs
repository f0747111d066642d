//! Default configuration values.
//!
//! Centralized default constants for use across all crates.

// ============================================================================
// Server Defaults
// ============================================================================

/// Default HTTP listen address.
pub const DEFAULT_LISTEN: &str = "127.0.0.1:5000";
/// Default maximum accepted request body (64 KiB).
pub const DEFAULT_MAX_BODY_BYTES: usize = 64 * 1024;
/// Upper bound accepted for `server.max_body_bytes` (16 MiB).
pub const MAX_BODY_BYTES_LIMIT: usize = 16 * 1024 * 1024;
/// Default graceful shutdown timeout in seconds.
pub const DEFAULT_SHUTDOWN_TIMEOUT_SECS: u64 = 30;
/// Permissive CORS is off unless asked for.
pub const DEFAULT_CORS_ALLOW_ANY: bool = false;

// ============================================================================
// Store Defaults
// ============================================================================

/// Seed the sample countries at startup.
pub const DEFAULT_SEED_SAMPLE_DATA: bool = true;

// ============================================================================
// Logging Defaults
// ============================================================================

/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";
/// Default log format.
pub const DEFAULT_LOG_FORMAT: &str = "pretty";
/// Default log output.
pub const DEFAULT_LOG_OUTPUT: &str = "stderr";

// ============================================================================
// Domain Constants
// ============================================================================

/// Lowest valid country safety score.
pub const MIN_SAFETY_SCORE: u8 = 0;
/// Highest valid country safety score.
pub const MAX_SAFETY_SCORE: u8 = 100;
/// Score at or above which a country counts as top rated.
pub const TOP_RATED_SCORE: u8 = 80;
/// Simulated data points reported per tracked country.
///
/// Placeholder multiplier carried over for client compatibility; it is not a
/// measured quantity.
pub const DATA_POINTS_PER_COUNTRY: u64 = 150;
/// Minimum accepted password length at registration.
pub const MIN_PASSWORD_LEN: usize = 8;
/// Author recorded on reports generated without a user id.
pub const ANONYMOUS_AUTHOR: &str = "anonymous";
