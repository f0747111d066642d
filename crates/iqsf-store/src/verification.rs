//! Certification verification ids.

use iqsf_core::VERIFICATION_ID_PREFIX;

/// Format a verification id: `IQSF-{NNNN}-{YYYY}`.
///
/// `NNNN` is the last four decimal digits of `millis` (a Unix timestamp in
/// milliseconds), `YYYY` the issuing year. Four digits collide easily, so the
/// store probes successive `millis` values until the id is free.
///
/// # Example
/// ```
/// use iqsf_store::verification_id;
///
/// assert_eq!(verification_id(1_760_000_001_234, 2025), "IQSF-1234-2025");
/// assert_eq!(verification_id(1_760_000_000_007, 2025), "IQSF-0007-2025");
/// ```
pub fn verification_id(millis: i64, year: i32) -> String {
    format!(
        "{VERIFICATION_ID_PREFIX}-{:04}-{year:04}",
        millis.rem_euclid(10_000)
    )
}
