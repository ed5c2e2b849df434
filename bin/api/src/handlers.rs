//! HTTP handlers for the forum control API.
//!
//! One handler per operation. Each decodes the identifiers supplied by the
//! client, consults the forum or sharing engine, and maps the outcome to a
//! response. Two encodings of the forum identifier are in play: path
//! parameters and the send-invitation body carry base64, while the
//! accept-invitation body carries hex pairs. Both are normalized to the
//! same [`ForumId`] before any comparison with engine state.
//!
//! Handlers never cache engine results between requests; the pending
//! invitation set in particular is re-read on every call so a withdrawn
//! invitation cannot be acted on.

use crate::error::ApiError;
use crate::output::{ForumOutput, InvitationOutput, PostSummaryOutput};
use crate::state::AppState;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use palaver::contact::ContactId;
use palaver::forum::constants::MAX_FORUM_NAME_LENGTH;
use palaver::forum::{ForumEngine, ForumId, PostSummary};
use palaver::sharing::{find_invitation, SharingEngine};
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, info, instrument};

// =============================================================================
// Request Bodies
// =============================================================================

/// Request body for creating a forum.
#[derive(Debug, Deserialize)]
pub struct CreateForumRequest {
    pub name: String,
}

/// Request body for sending an invitation.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddInvitationRequest {
    /// Forum identifier, base64 encoded.
    pub forum_id: String,
    /// Contact identifier, decimal.
    pub contact_id: String,
    /// Optional message text; anything but a JSON string counts as absent.
    #[serde(default)]
    pub text: Option<Value>,
}

/// Request body for accepting an invitation.
///
/// This call site supplies the forum identifier as hex pairs, unlike every
/// other operation.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AcceptInvitationRequest {
    /// Forum identifier, hex encoded.
    pub forum_id: String,
    /// Contact identifier, decimal.
    pub contact_id: String,
}

// =============================================================================
// Forum Handlers
// =============================================================================

/// List all forums known to this node.
#[instrument(skip(state))]
pub async fn list_forums(
    State(state): State<AppState>,
) -> Result<Json<Vec<ForumOutput>>, ApiError> {
    let forums = state.forums.list_forums()?;
    info!("Listed {} forums", forums.len());
    Ok(Json(forums.iter().map(ForumOutput::from).collect()))
}

/// Create a new forum.
#[instrument(skip(state, request))]
pub async fn create_forum(
    State(state): State<AppState>,
    Json(request): Json<CreateForumRequest>,
) -> Result<(StatusCode, Json<ForumOutput>), ApiError> {
    // The limit is on the UTF-8 encoded length, not the character count.
    if request.name.len() > MAX_FORUM_NAME_LENGTH {
        return Err(ApiError::bad_request("forum name is too long"));
    }
    let forum = state.forums.create_forum(&request.name)?;
    info!("Created forum '{}' ({})", forum.name, forum.id.short());
    Ok((StatusCode::CREATED, Json(ForumOutput::from(&forum))))
}

/// Get a forum by its base64 path identifier.
#[instrument(skip(state))]
pub async fn get_forum(
    State(state): State<AppState>,
    Path(forum_id): Path<String>,
) -> Result<Json<ForumOutput>, ApiError> {
    debug!("raw forum id: {}", forum_id);
    let id = ForumId::from_base64(&forum_id)?;
    debug!("decoded forum id: {}", id.short());
    let forum = state.forums.get_forum(&id)?;
    Ok(Json(ForumOutput::from(&forum)))
}

/// Summarize the posts of a forum: count plus earliest and latest
/// timestamp, recomputed from the full header list on every request.
#[instrument(skip(state))]
pub async fn get_post_count(
    State(state): State<AppState>,
    Path(forum_id): Path<String>,
) -> Result<Json<PostSummaryOutput>, ApiError> {
    debug!("raw forum id: {}", forum_id);
    let id = ForumId::from_base64(&forum_id)?;
    let headers = state.forums.get_post_headers(&id)?;
    let summary = PostSummary::from_headers(id, &headers);
    info!(
        "Post count for {}: {} posts",
        id.short(),
        summary.post_count
    );
    Ok(Json(PostSummaryOutput::from(&summary)))
}

// =============================================================================
// Invitation Handlers
// =============================================================================

/// List every pending invitation on this node.
#[instrument(skip(state))]
pub async fn list_pending(
    State(state): State<AppState>,
) -> Result<Json<Vec<InvitationOutput>>, ApiError> {
    let pending = state
        .sharing
        .pending_invitations()
        .map_err(|e| ApiError::bad_request(format!("Failed to list invitations: {}", e)))?;
    info!("Listed {} pending invitations", pending.len());
    Ok(Json(pending.iter().map(InvitationOutput::from).collect()))
}

/// Send an invitation offering a forum to a contact.
#[instrument(skip(state, request))]
pub async fn add_pending(
    State(state): State<AppState>,
    Json(request): Json<AddInvitationRequest>,
) -> Result<StatusCode, ApiError> {
    let forum_id = ForumId::from_base64(&request.forum_id)?;
    let contact_id = ContactId::from_decimal(&request.contact_id)?;
    let text = request.text.as_ref().and_then(Value::as_str).unwrap_or("");

    state
        .sharing
        .send_invitation(&forum_id, contact_id, text)
        .map_err(|e| ApiError::bad_request(format!("Failed to send invitation: {}", e)))?;

    info!(
        "Sent invitation for {} to contact {}",
        forum_id.short(),
        contact_id
    );
    Ok(StatusCode::NO_CONTENT)
}

/// Accept the pending invitation for a (forum, contact) pair.
///
/// The forum identifier arrives hex encoded and is normalized to the
/// canonical byte form before being matched against the pending set.
#[instrument(skip(state, request))]
pub async fn accept_pending(
    State(state): State<AppState>,
    Json(request): Json<AcceptInvitationRequest>,
) -> Result<StatusCode, ApiError> {
    debug!("raw forum id: {}", request.forum_id);
    let forum_id = ForumId::from_hex(&request.forum_id)?;
    let contact_id = ContactId::from_decimal(&request.contact_id)?;

    let pending = state
        .sharing
        .pending_invitations()
        .map_err(|e| ApiError::bad_request(format!("Failed to accept invitation: {}", e)))?;

    let invitation = find_invitation(&forum_id, contact_id, &pending)
        .ok_or_else(|| ApiError::bad_request("invitation not found"))?;

    state
        .sharing
        .respond_to_invitation(&invitation.forum, contact_id, true)
        .map_err(|e| ApiError::bad_request(format!("Failed to accept invitation: {}", e)))?;

    info!(
        "Accepted invitation for {} from contact {}",
        forum_id.short(),
        contact_id
    );
    Ok(StatusCode::NO_CONTENT)
}

// =============================================================================
// Reserved Operations
// =============================================================================

/// Reserved: forums are immutable once created.
pub async fn update_forum() -> ApiError {
    ApiError::NotImplemented
}

/// Reserved: forums cannot be deleted through the control surface.
pub async fn delete_forum() -> ApiError {
    ApiError::NotImplemented
}

/// Reserved: share links are not part of the control surface yet.
pub async fn get_link() -> ApiError {
    ApiError::NotImplemented
}

/// Reserved: pending invitations are removed by responding to them.
pub async fn remove_pending() -> ApiError {
    ApiError::NotImplemented
}
