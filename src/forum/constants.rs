//! Shared constants for forum validation and limits.

/// Maximum forum name length in UTF-8 encoded bytes.
pub const MAX_FORUM_NAME_LENGTH: usize = 100;
