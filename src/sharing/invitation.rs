//! Pending invitations and the (forum, contact) matcher.

use crate::contact::ContactId;
use crate::forum::{Forum, ForumId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// An offer to share a forum with one or more contacts, awaiting a
/// response.
///
/// Created by the sharing engine when a peer sends an invitation; removed
/// by the engine when the invitation is accepted, declined, or withdrawn.
/// The candidate set is ordered so renderings of the same invitation are
/// deterministic.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingInvitation {
    /// The forum being shared.
    pub forum: Forum,
    /// Contacts the invitation names as potential sharers.
    pub candidate_contacts: BTreeSet<ContactId>,
    /// Whether the local node already subscribes to the forum.
    pub subscribed: bool,
}

/// Finds the pending invitation for the given (forum, contact) pair.
///
/// Scans `pending` once; an invitation matches iff its forum's identifier
/// equals `forum_id` and `contact_id` is among its candidate contacts.
/// Pending invitations are expected to be unique per pair; should the
/// engine ever report duplicates, the first match in engine order wins.
pub fn find_invitation<'a>(
    forum_id: &ForumId,
    contact_id: ContactId,
    pending: &'a [PendingInvitation],
) -> Option<&'a PendingInvitation> {
    pending
        .iter()
        .find(|inv| inv.forum.id == *forum_id && inv.candidate_contacts.contains(&contact_id))
}
