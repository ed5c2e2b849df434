//! Forum sharing: pending invitations and the sharing engine interface.
//!
//! Sharing lets a contact offer one of its forums to the local node. The
//! offer surfaces here as a [`PendingInvitation`] owned by the sharing
//! engine; the control surface reads the pending set, matches an entry by
//! (forum, contact) with [`find_invitation`], and asks the engine to
//! respond. The engine performs the actual network handshake and removes
//! the entry once it has been answered.

mod engine;
mod invitation;

pub use engine::{InvitationResponse, MemorySharingEngine, SentInvitation, SharingEngine};
pub use invitation::{find_invitation, PendingInvitation};
