//! Output records rendered to API clients.
//!
//! These are the only shapes that cross the API boundary; engine-internal
//! types never serialize directly. Rendering is deterministic: forum
//! identifiers always appear in their base64 form and candidate contacts
//! in ascending numeric order.

use palaver::forum::{Forum, PostSummary};
use palaver::sharing::PendingInvitation;
use serde::Serialize;

/// A forum rendered for API clients.
#[derive(Debug, Serialize)]
pub struct ForumOutput {
    pub id: String,
    pub name: String,
}

impl From<&Forum> for ForumOutput {
    fn from(forum: &Forum) -> Self {
        Self {
            id: forum.id.to_base64(),
            name: forum.name.clone(),
        }
    }
}

/// A pending invitation rendered for API clients.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvitationOutput {
    pub forum_id: String,
    pub forum_name: String,
    pub candidate_contacts: Vec<String>,
    pub subscribed: bool,
}

impl From<&PendingInvitation> for InvitationOutput {
    fn from(invitation: &PendingInvitation) -> Self {
        Self {
            forum_id: invitation.forum.id.to_base64(),
            forum_name: invitation.forum.name.clone(),
            candidate_contacts: invitation
                .candidate_contacts
                .iter()
                .map(|c| c.to_string())
                .collect(),
            subscribed: invitation.subscribed,
        }
    }
}

/// A post-count summary rendered for API clients.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostSummaryOutput {
    pub forum_id: String,
    pub post_count: usize,
    /// `null` when the forum has no posts.
    pub earliest_timestamp: Option<u64>,
    /// `null` when the forum has no posts.
    pub latest_timestamp: Option<u64>,
}

impl From<&PostSummary> for PostSummaryOutput {
    fn from(summary: &PostSummary) -> Self {
        Self {
            forum_id: summary.forum_id.to_base64(),
            post_count: summary.post_count,
            earliest_timestamp: summary.earliest_timestamp,
            latest_timestamp: summary.latest_timestamp,
        }
    }
}
