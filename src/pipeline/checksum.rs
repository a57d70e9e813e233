//! Output fingerprinting.

use sha2::{Digest, Sha256};

/// SHA-256 hex digest of serialized pipeline output.
///
/// Two runs over the same input snapshot must produce equal fingerprints;
/// the digest is the cheap way to assert that in tests and to tag result
/// artifacts for the presentation layer.
pub fn fingerprint(content: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    hex::encode(hasher.finalize())
}
