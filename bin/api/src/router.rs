//! Route table for the control API.

use crate::handlers;
use crate::state::AppState;
use axum::routing::{delete, get, post};
use axum::Router;

/// Builds the API router over the given engines.
///
/// The static `/forums/pending` segments are registered alongside the
/// `:forumId` captures; the router resolves static segments first, so
/// invitation paths never reach the forum getter.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/forums",
            get(handlers::list_forums).post(handlers::create_forum),
        )
        .route(
            "/forums/pending",
            get(handlers::list_pending).post(handlers::add_pending),
        )
        .route("/forums/pending/accept", post(handlers::accept_pending))
        .route("/forums/pending/:id", delete(handlers::remove_pending))
        .route(
            "/forums/:forumId",
            get(handlers::get_forum)
                .put(handlers::update_forum)
                .delete(handlers::delete_forum),
        )
        .route("/forums/:forumId/link", get(handlers::get_link))
        .route("/forums/:forumId/postCount", get(handlers::get_post_count))
        .with_state(state)
}
