//! Shared application state for the control API.

use palaver::forum::ForumEngine;
use palaver::sharing::SharingEngine;
use std::sync::Arc;

/// Thread-safe handle to the forum engine.
pub type SharedForumEngine = Arc<dyn ForumEngine>;

/// Thread-safe handle to the sharing engine.
pub type SharedSharingEngine = Arc<dyn SharingEngine>;

/// Combined application state handed to every handler.
///
/// Handlers hold no state of their own; the engines are the single source
/// of truth and are re-queried on every request.
#[derive(Clone)]
pub struct AppState {
    pub forums: SharedForumEngine,
    pub sharing: SharedSharingEngine,
}
