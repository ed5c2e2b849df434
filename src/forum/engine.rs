//! Forum engine interface and the in-memory reference engine.

use crate::error::{PalaverError, Result};
use crate::forum::{Forum, ForumId, PostHeader, FORUM_ID_LENGTH};
use rand::Rng;
use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::info;

/// Interface to the storage/sync engine that owns forum state.
///
/// Calls are synchronous and may block on the engine's own I/O. Results
/// must not be cached across requests; the engine is the single source of
/// truth for forum state.
pub trait ForumEngine: Send + Sync {
    /// Lists all forums known to this node.
    fn list_forums(&self) -> Result<Vec<Forum>>;

    /// Creates a new forum with the given name and returns it.
    fn create_forum(&self, name: &str) -> Result<Forum>;

    /// Fetches a forum by identifier.
    fn get_forum(&self, id: &ForumId) -> Result<Forum>;

    /// Fetches the headers of every post in a forum.
    fn get_post_headers(&self, id: &ForumId) -> Result<Vec<PostHeader>>;
}

/// In-memory forum store.
#[derive(Default)]
struct ForumStore {
    forums: HashMap<ForumId, Forum>,
    posts: HashMap<ForumId, Vec<PostHeader>>,
}

/// In-memory [`ForumEngine`] for local nodes and tests.
#[derive(Default)]
pub struct MemoryForumEngine {
    store: RwLock<ForumStore>,
}

impl MemoryForumEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a forum that arrived from outside the engine, such as a
    /// share accepted from a contact.
    pub fn add_forum(&self, forum: Forum) {
        self.write_store().forums.insert(forum.id, forum);
    }

    /// Records a post header against an existing forum.
    pub fn add_post_header(&self, id: &ForumId, header: PostHeader) -> Result<()> {
        let mut store = self.write_store();
        if !store.forums.contains_key(id) {
            return Err(PalaverError::not_found("forum not found"));
        }
        store.posts.entry(*id).or_default().push(header);
        Ok(())
    }

    fn read_store(&self) -> RwLockReadGuard<'_, ForumStore> {
        self.store.read().unwrap_or_else(|p| p.into_inner())
    }

    fn write_store(&self) -> RwLockWriteGuard<'_, ForumStore> {
        self.store.write().unwrap_or_else(|p| p.into_inner())
    }
}

impl ForumEngine for MemoryForumEngine {
    fn list_forums(&self) -> Result<Vec<Forum>> {
        let mut forums: Vec<Forum> = self.read_store().forums.values().cloned().collect();
        // HashMap iteration order is arbitrary; keep listings stable.
        forums.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(forums)
    }

    fn create_forum(&self, name: &str) -> Result<Forum> {
        if name.is_empty() {
            return Err(PalaverError::invalid_input("forum name must not be empty"));
        }
        let id = fresh_forum_id();
        let forum = Forum {
            id,
            name: name.to_string(),
        };
        self.write_store().forums.insert(id, forum.clone());
        info!("Created forum '{}' ({})", forum.name, id.short());
        Ok(forum)
    }

    fn get_forum(&self, id: &ForumId) -> Result<Forum> {
        self.read_store()
            .forums
            .get(id)
            .cloned()
            .ok_or_else(|| PalaverError::not_found("forum not found"))
    }

    fn get_post_headers(&self, id: &ForumId) -> Result<Vec<PostHeader>> {
        let store = self.read_store();
        if !store.forums.contains_key(id) {
            return Err(PalaverError::not_found("forum not found"));
        }
        Ok(store.posts.get(id).cloned().unwrap_or_default())
    }
}

/// Generates a fresh random forum identifier.
fn fresh_forum_id() -> ForumId {
    let bytes: [u8; FORUM_ID_LENGTH] = rand::thread_rng().gen();
    ForumId::from_bytes(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_and_get_forum() {
        let engine = MemoryForumEngine::new();
        let forum = engine.create_forum("General").unwrap();
        assert_eq!(forum.name, "General");
        assert_eq!(engine.get_forum(&forum.id).unwrap(), forum);
    }

    #[test]
    fn test_created_forums_get_distinct_ids() {
        let engine = MemoryForumEngine::new();
        let a = engine.create_forum("A").unwrap();
        let b = engine.create_forum("B").unwrap();
        assert_ne!(a.id, b.id);
        assert_eq!(engine.list_forums().unwrap().len(), 2);
    }

    #[test]
    fn test_create_forum_rejects_empty_name() {
        let engine = MemoryForumEngine::new();
        let err = engine.create_forum("").unwrap_err();
        assert_eq!(err.to_string(), "forum name must not be empty");
        assert!(engine.list_forums().unwrap().is_empty());
    }

    #[test]
    fn test_get_unknown_forum_fails() {
        let engine = MemoryForumEngine::new();
        let id = ForumId::from_bytes([9u8; FORUM_ID_LENGTH]);
        let err = engine.get_forum(&id).unwrap_err();
        assert_eq!(err, PalaverError::not_found("forum not found"));
    }

    #[test]
    fn test_post_headers_for_forum_without_posts() {
        let engine = MemoryForumEngine::new();
        let forum = engine.create_forum("Quiet").unwrap();
        assert!(engine.get_post_headers(&forum.id).unwrap().is_empty());
    }

    #[test]
    fn test_post_headers_round_trip() {
        let engine = MemoryForumEngine::new();
        let forum = engine.create_forum("Busy").unwrap();
        engine
            .add_post_header(&forum.id, PostHeader { timestamp: 100 })
            .unwrap();
        engine
            .add_post_header(&forum.id, PostHeader { timestamp: 50 })
            .unwrap();
        let headers = engine.get_post_headers(&forum.id).unwrap();
        assert_eq!(headers.len(), 2);
    }

    #[test]
    fn test_post_headers_require_known_forum() {
        let engine = MemoryForumEngine::new();
        let id = ForumId::from_bytes([1u8; FORUM_ID_LENGTH]);
        assert!(engine.get_post_headers(&id).is_err());
        assert!(engine
            .add_post_header(&id, PostHeader { timestamp: 1 })
            .is_err());
    }
}
