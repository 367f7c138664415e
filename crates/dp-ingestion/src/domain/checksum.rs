//! Payload checksum verification.
//!
//! The transport attaches an MD5 digest (128-bit, lowercase hex) to each
//! pushed block so transmission corruption is caught before persistence.
//! This is a corruption check, not a security signature.

use md5::{Digest, Md5};

/// Compute the lowercase hex MD5 digest of `payload`.
pub fn md5_hex(payload: &[u8]) -> String {
    let digest = Md5::digest(payload);
    hex::encode(digest)
}

/// Verify `supplied` against the computed digest of `payload`.
///
/// The comparison is an exact, case-sensitive match on the hex string.
/// An empty supplied checksum is trivially valid: callers that omit the
/// digest opt out of the corruption check.
pub fn verify_checksum(payload: &[u8], supplied: &str) -> bool {
    if supplied.is_empty() {
        return true;
    }
    md5_hex(payload) == supplied
}
