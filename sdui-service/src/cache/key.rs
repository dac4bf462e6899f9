//! Content-addressed cache keys
//!
//! A key is a 128-bit digest of the raw input text: the leading 16 bytes
//! of its blake3 hash. Keys are whitespace- and case-sensitive by design
//! (no normalization before hashing), so byte-identical text yields the
//! identical key and any difference yields, with overwhelming
//! probability, a different one. Collisions are not handled; key
//! equality is treated as content equality.

use std::fmt;

/// 128-bit content digest of a raw input text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CacheKey([u8; 16]);

impl CacheKey {
    /// Hash raw input text into a key
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        let digest = blake3::hash(text.as_bytes());
        let mut bytes = [0u8; 16];
        bytes.copy_from_slice(&digest.as_bytes()[..16]);
        Self(bytes)
    }

    /// The digest bytes
    #[must_use]
    pub fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }

    /// The digest as lowercase hex
    #[must_use]
    pub fn to_hex(&self) -> String {
        self.0.iter().map(|byte| format!("{byte:02x}")).collect()
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn identical_text_yields_identical_keys() {
        let text = r#"{"id":"a","type":"text","text":"hi"}"#;
        assert_eq!(CacheKey::from_text(text), CacheKey::from_text(text));
    }

    #[test]
    fn any_byte_difference_changes_the_key() {
        let compact = r#"{"id":"a","type":"text"}"#;
        let spaced = r#"{"id": "a", "type": "text"}"#;
        let cased = r#"{"id":"A","type":"text"}"#;
        assert_ne!(CacheKey::from_text(compact), CacheKey::from_text(spaced));
        assert_ne!(CacheKey::from_text(compact), CacheKey::from_text(cased));
    }

    #[test]
    fn hex_rendering_is_32_chars() {
        let key = CacheKey::from_text("anything");
        assert_eq!(key.to_hex().len(), 32);
        assert_eq!(key.to_string(), key.to_hex());
    }
}
