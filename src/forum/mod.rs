//! Forums and the forum engine interface.
//!
//! A forum is a named shared discussion group identified by an opaque
//! 32-byte [`ForumId`]. Forums are created locally or arrive through the
//! sync layer when a share is accepted; once created they are immutable as
//! far as the control surface is concerned.
//!
//! The [`ForumEngine`] trait is the seam to the storage/sync engine that
//! owns forum state. [`MemoryForumEngine`] is the in-memory reference
//! implementation used by local nodes and tests.

pub mod constants;
mod engine;
mod id;
mod types;

pub use engine::{ForumEngine, MemoryForumEngine};
pub use id::{ForumId, FORUM_ID_LENGTH};
pub use types::{Forum, PostHeader, PostSummary};
