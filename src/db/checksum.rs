//! Checksum calculation for import batch versioning.

use sha2::{Digest, Sha256};

/// Calculate SHA-256 checksum of an import payload.
///
/// # Arguments
/// * `content` - JSON string content of the imported row batch
///
/// # Returns
/// Hexadecimal string representation of the SHA-256 hash.
pub fn calculate_checksum(content: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    let result = hasher.finalize();
    hex::encode(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checksum_consistency() {
        let content = r#"[{"title": "Relay protection check"}]"#;
        let checksum1 = calculate_checksum(content);
        let checksum2 = calculate_checksum(content);
        assert_eq!(checksum1, checksum2);
    }

    #[test]
    fn test_different_content_different_checksum() {
        let content1 = r#"[{"title": "batch one"}]"#;
        let content2 = r#"[{"title": "batch two"}]"#;
        assert_ne!(calculate_checksum(content1), calculate_checksum(content2));
    }

    #[test]
    fn test_checksum_is_hex_encoded_sha256() {
        let checksum = calculate_checksum("");
        assert_eq!(checksum.len(), 64);
        assert!(checksum.chars().all(|c| c.is_ascii_hexdigit()));
    }
}
