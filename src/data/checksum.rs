//! Checksum calculation for dataset identity.

use sha2::{Digest, Sha256};

/// Calculate the SHA-256 checksum of raw dataset content.
///
/// Returns the hexadecimal string representation of the hash. The checksum
/// is surfaced in the dataset summary so an operator can tell which file a
/// running server loaded.
pub fn calculate_checksum(content: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content);
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checksum_consistency() {
        let content = b"Launch Site,Payload Mass (kg),class,Booster Version Category\n";
        assert_eq!(calculate_checksum(content), calculate_checksum(content));
    }

    #[test]
    fn test_different_content_different_checksum() {
        assert_ne!(calculate_checksum(b"a,1,0,x"), calculate_checksum(b"a,1,1,x"));
    }

    #[test]
    fn test_checksum_is_hex_sha256() {
        let checksum = calculate_checksum(b"");
        assert_eq!(checksum.len(), 64);
        assert!(checksum.chars().all(|c| c.is_ascii_hexdigit()));
    }
}
