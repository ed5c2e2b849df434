//! Contact identifiers.
//!
//! A contact is a known peer of the local node, identified by a small
//! integer assigned when the contact was added. Contact identifiers arrive
//! from API clients as decimal strings.

use crate::error::{PalaverError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a known peer within the local contact set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ContactId(pub u32);

impl ContactId {
    /// Parses a contact identifier from its decimal string form.
    pub fn from_decimal(s: &str) -> Result<Self> {
        s.parse::<u32>()
            .map(Self)
            .map_err(|_| PalaverError::invalid_identifier("invalid contact identifier"))
    }
}

impl fmt::Display for ContactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_decimal() {
        assert_eq!(ContactId::from_decimal("0").unwrap(), ContactId(0));
        assert_eq!(ContactId::from_decimal("42").unwrap(), ContactId(42));
    }

    #[test]
    fn test_from_decimal_rejects_non_integers() {
        for input in ["", "abc", "1.5", "-1", " 7", "7 ", "0x10"] {
            let err = ContactId::from_decimal(input).unwrap_err();
            assert_eq!(err.to_string(), "invalid contact identifier");
        }
    }

    #[test]
    fn test_display_is_decimal() {
        assert_eq!(ContactId(7).to_string(), "7");
    }
}
