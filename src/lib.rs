//! # Palaver - peer-to-peer forum node
//!
//! Palaver lets a node host named discussion forums and share them with
//! known peers ("contacts"). This library provides the domain model behind
//! the node's control surface:
//!
//! - **Identifiers**: opaque 32-byte forum identifiers with two textual
//!   codecs (base64 and hex pairs), and small-integer contact identifiers
//! - **Forums**: the forum record, post headers, and derived post summaries
//! - **Sharing**: pending invitations and the (forum, contact) matcher that
//!   reconciles a client-supplied pair against the engine's pending set
//! - **Engines**: the `ForumEngine` and `SharingEngine` interfaces consumed
//!   by the control surface, plus in-memory reference implementations
//!
//! The HTTP surface itself lives in the `palaver-api` binary crate.
//!
//! ## Identifier Encodings
//!
//! The same 32-byte forum identifier is accepted in two textual forms
//! depending on the call site: base64 (URL-safe alphabet, no padding) in
//! URL paths and most request bodies, and hex pairs in the
//! accept-invitation body. Both decoders normalize to the same bytes, so
//! identifiers from either path compare equal for the same logical forum.

pub mod contact;
pub mod error;
pub mod forum;
pub mod sharing;

pub use error::{PalaverError, Result};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
