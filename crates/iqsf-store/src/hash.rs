//! Password digest utilities.

use sha2::{Digest, Sha256};

/// Compute the stored digest of a password, salted with the owning user id.
///
/// # Example
/// ```
/// use iqsf_store::password_digest;
///
/// let digest = password_digest("user-1", "password123");
/// assert_eq!(digest.len(), 64); // SHA256 = 32 bytes = 64 hex chars
/// ```
#[inline]
pub fn password_digest(user_id: &str, password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(user_id.as_bytes());
    hasher.update(b":");
    hasher.update(password.as_bytes());
    hex::encode(hasher.finalize())
}

/// Verify a plaintext password against a stored digest.
#[inline]
pub fn verify_password(user_id: &str, password: &str, digest: &str) -> bool {
    password_digest(user_id, password) == digest
}
