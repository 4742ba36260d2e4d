//! Content integrity fingerprints

use rand::RngCore;
use sha2::{Digest, Sha256};

/// Fingerprint a writing's content at creation time.
///
/// The digest covers the content plus the creation timestamp and a random
/// nonce, so two identical texts published separately never share a
/// fingerprint. The result is a lowercase hex SHA-256 string.
pub fn content_fingerprint(content: &str) -> String {
    let mut nonce = [0u8; 16];
    rand::thread_rng().fill_bytes(&mut nonce);

    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    hasher.update(chrono::Utc::now().timestamp_millis().to_be_bytes());
    hasher.update(nonce);
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fingerprint_is_hex_sha256() {
        let hash = content_fingerprint("hello");
        assert_eq!(hash.len(), 64);
        assert!(hash.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn identical_content_gets_distinct_fingerprints() {
        let first = content_fingerprint("same text");
        let second = content_fingerprint("same text");
        assert_ne!(first, second);
    }
}
