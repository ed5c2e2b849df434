//! Sharing engine interface and the in-memory reference engine.

use crate::contact::ContactId;
use crate::error::{PalaverError, Result};
use crate::forum::{Forum, ForumId};
use crate::sharing::PendingInvitation;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::info;

/// Interface to the sharing engine that owns invitation state and performs
/// the network handshake with peers.
///
/// Calls are synchronous and may block. The pending set must be re-read on
/// every request; a cached copy could act on a since-withdrawn invitation.
pub trait SharingEngine: Send + Sync {
    /// Lists every invitation awaiting a response on this node.
    fn pending_invitations(&self) -> Result<Vec<PendingInvitation>>;

    /// Sends an invitation offering `forum_id` to `contact_id`, with an
    /// optional message text.
    fn send_invitation(&self, forum_id: &ForumId, contact_id: ContactId, text: &str)
        -> Result<()>;

    /// Responds to the pending invitation for (forum, contact), accepting
    /// or declining it. The invitation leaves the pending set either way.
    fn respond_to_invitation(
        &self,
        forum: &Forum,
        contact_id: ContactId,
        accept: bool,
    ) -> Result<()>;
}

/// An invitation this node has sent to a contact.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentInvitation {
    pub forum_id: ForumId,
    pub contact_id: ContactId,
    pub text: String,
}

/// A recorded response to a pending invitation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvitationResponse {
    pub forum_id: ForumId,
    pub contact_id: ContactId,
    pub accepted: bool,
}

/// In-memory sharing state.
#[derive(Default)]
struct SharingStore {
    contacts: BTreeSet<ContactId>,
    pending: Vec<PendingInvitation>,
    sent: Vec<SentInvitation>,
    responses: Vec<InvitationResponse>,
}

/// In-memory [`SharingEngine`] for local nodes and tests.
///
/// Invitations sent and responses given are recorded instead of being
/// delivered to a peer, so tests can observe exactly what the control
/// surface asked the engine to do.
#[derive(Default)]
pub struct MemorySharingEngine {
    store: RwLock<SharingStore>,
}

impl MemorySharingEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a contact so invitations can be addressed to it.
    pub fn add_contact(&self, contact_id: ContactId) {
        self.write_store().contacts.insert(contact_id);
    }

    /// Queues an invitation received from a peer.
    pub fn add_pending(&self, invitation: PendingInvitation) {
        self.write_store().pending.push(invitation);
    }

    /// Invitations this node has sent.
    pub fn sent_invitations(&self) -> Vec<SentInvitation> {
        self.read_store().sent.clone()
    }

    /// Responses recorded against pending invitations.
    pub fn responses(&self) -> Vec<InvitationResponse> {
        self.read_store().responses.clone()
    }

    fn read_store(&self) -> RwLockReadGuard<'_, SharingStore> {
        self.store.read().unwrap_or_else(|p| p.into_inner())
    }

    fn write_store(&self) -> RwLockWriteGuard<'_, SharingStore> {
        self.store.write().unwrap_or_else(|p| p.into_inner())
    }
}

impl SharingEngine for MemorySharingEngine {
    fn pending_invitations(&self) -> Result<Vec<PendingInvitation>> {
        Ok(self.read_store().pending.clone())
    }

    fn send_invitation(
        &self,
        forum_id: &ForumId,
        contact_id: ContactId,
        text: &str,
    ) -> Result<()> {
        let mut store = self.write_store();
        if !store.contacts.contains(&contact_id) {
            return Err(PalaverError::engine(format!(
                "no such contact: {}",
                contact_id
            )));
        }
        store.sent.push(SentInvitation {
            forum_id: *forum_id,
            contact_id,
            text: text.to_string(),
        });
        info!(
            "Queued invitation for {} to contact {}",
            forum_id.short(),
            contact_id
        );
        Ok(())
    }

    fn respond_to_invitation(
        &self,
        forum: &Forum,
        contact_id: ContactId,
        accept: bool,
    ) -> Result<()> {
        let mut store = self.write_store();
        let position = store
            .pending
            .iter()
            .position(|inv| inv.forum.id == forum.id && inv.candidate_contacts.contains(&contact_id))
            .ok_or_else(|| PalaverError::not_found("invitation not found"))?;
        store.pending.remove(position);
        store.responses.push(InvitationResponse {
            forum_id: forum.id,
            contact_id,
            accepted: accept,
        });
        info!(
            "Recorded {} for invitation {} from contact {}",
            if accept { "accept" } else { "decline" },
            forum.id.short(),
            contact_id
        );
        Ok(())
    }
}
