//! Opaque forum identifiers and their textual codecs.
//!
//! A forum is named by a fixed 32-byte identifier. Two textual encodings
//! of the same bytes are accepted at the API boundary:
//!
//! - **base64** (URL-safe alphabet, no padding) in URL paths and most
//!   request bodies
//! - **hex pairs** in the accept-invitation body
//!
//! Both decoders normalize to the same byte representation, so identifiers
//! decoded on either path compare equal for the same logical forum.

use crate::error::{PalaverError, Result};
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Length of a forum identifier in bytes.
pub const FORUM_ID_LENGTH: usize = 32;

/// A 32-byte opaque identifier naming a forum group.
///
/// Equality is byte-exact; no two distinct forums share an identifier.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ForumId([u8; FORUM_ID_LENGTH]);

impl ForumId {
    /// Creates a ForumId from raw bytes.
    pub fn from_bytes(bytes: [u8; FORUM_ID_LENGTH]) -> Self {
        Self(bytes)
    }

    /// Returns the raw identifier bytes.
    pub fn as_bytes(&self) -> &[u8; FORUM_ID_LENGTH] {
        &self.0
    }

    /// Returns the base64 string representation (URL-safe, no padding).
    pub fn to_base64(&self) -> String {
        URL_SAFE_NO_PAD.encode(self.0)
    }

    /// Parses a ForumId from its base64 string representation.
    pub fn from_base64(s: &str) -> Result<Self> {
        let bytes = URL_SAFE_NO_PAD
            .decode(s)
            .map_err(|_| PalaverError::invalid_identifier("invalid forum identifier"))?;
        Self::try_from_slice(&bytes)
    }

    /// Parses a ForumId from pairs of hexadecimal digits.
    ///
    /// The bytes are converted one-for-one into the canonical identifier
    /// form, so a hex-decoded identifier compares equal to the base64
    /// decoding of the same bytes.
    pub fn from_hex(s: &str) -> Result<Self> {
        let bytes = hex::decode(s)
            .map_err(|_| PalaverError::invalid_identifier("invalid forum identifier"))?;
        Self::try_from_slice(&bytes)
    }

    fn try_from_slice(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != FORUM_ID_LENGTH {
            return Err(PalaverError::invalid_identifier("invalid forum identifier"));
        }
        let mut arr = [0u8; FORUM_ID_LENGTH];
        arr.copy_from_slice(bytes);
        Ok(Self(arr))
    }

    /// Returns a short form of the identifier for logging (first 8 bytes as hex).
    pub fn short(&self) -> String {
        hex::encode(&self.0[..8])
    }
}

impl fmt::Display for ForumId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_base64())
    }
}

impl fmt::Debug for ForumId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ForumId({})", self.short())
    }
}

impl Serialize for ForumId {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_base64())
    }
}

impl<'de> Deserialize<'de> for ForumId {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        ForumId::from_base64(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_id() -> ForumId {
        let mut bytes = [0u8; FORUM_ID_LENGTH];
        for (i, byte) in bytes.iter_mut().enumerate() {
            *byte = i as u8;
        }
        ForumId::from_bytes(bytes)
    }

    #[test]
    fn test_base64_round_trip() {
        let id = sample_id();
        let encoded = id.to_base64();
        assert_eq!(ForumId::from_base64(&encoded).unwrap(), id);
    }

    #[test]
    fn test_hex_agrees_with_base64() {
        // The two codecs must produce the same identifier for the same bytes.
        let id = sample_id();
        let hex_form = hex::encode(id.as_bytes());
        assert_eq!(ForumId::from_hex(&hex_form).unwrap(), id);
    }

    #[test]
    fn test_base64_rejects_malformed_input() {
        for input in ["", "not base64!!!", "AAAA", "$$$$"] {
            let err = ForumId::from_base64(input).unwrap_err();
            assert_eq!(err.to_string(), "invalid forum identifier");
        }
    }

    #[test]
    fn test_hex_rejects_malformed_input() {
        // Odd digit count, bad digits, and wrong decoded length all fail.
        for input in ["", "abc", "zz", &"00".repeat(16), &"00".repeat(33)] {
            let err = ForumId::from_hex(input).unwrap_err();
            assert_eq!(err.to_string(), "invalid forum identifier");
        }
    }

    #[test]
    fn test_rejects_wrong_length() {
        let short = URL_SAFE_NO_PAD.encode([0u8; 16]);
        assert!(ForumId::from_base64(&short).is_err());
        let long = URL_SAFE_NO_PAD.encode([0u8; 33]);
        assert!(ForumId::from_base64(&long).is_err());
    }

    #[test]
    fn test_serde_round_trip() {
        let id = sample_id();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{}\"", id.to_base64()));
        let back: ForumId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn test_short_form() {
        assert_eq!(sample_id().short(), "0001020304050607");
    }
}
