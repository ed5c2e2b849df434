//! Forum domain types.

use crate::forum::ForumId;
use serde::{Deserialize, Serialize};

/// A named shared discussion group.
///
/// Created by the forum engine; immutable once created. Updating and
/// deleting forums are reserved operations on the control surface.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Forum {
    /// Opaque group identifier.
    pub id: ForumId,
    /// Human-readable forum name.
    pub name: String,
}

/// Header of a single forum post, as exposed by the forum engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostHeader {
    /// Post timestamp in milliseconds since the Unix epoch.
    pub timestamp: u64,
}

/// Derived per-forum post statistics.
///
/// Recomputed per request from the full post-header list; never persisted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PostSummary {
    /// The forum the summary describes.
    pub forum_id: ForumId,
    /// Number of posts in the forum.
    pub post_count: usize,
    /// Timestamp of the oldest post, or `None` when the forum is empty.
    pub earliest_timestamp: Option<u64>,
    /// Timestamp of the newest post, or `None` when the forum is empty.
    pub latest_timestamp: Option<u64>,
}

impl PostSummary {
    /// Computes the summary over a forum's full post-header list.
    pub fn from_headers(forum_id: ForumId, headers: &[PostHeader]) -> Self {
        Self {
            forum_id,
            post_count: headers.len(),
            earliest_timestamp: headers.iter().map(|h| h.timestamp).min(),
            latest_timestamp: headers.iter().map(|h| h.timestamp).max(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forum::FORUM_ID_LENGTH;

    fn forum_id() -> ForumId {
        ForumId::from_bytes([7u8; FORUM_ID_LENGTH])
    }

    #[test]
    fn test_summary_of_empty_forum() {
        let summary = PostSummary::from_headers(forum_id(), &[]);
        assert_eq!(summary.post_count, 0);
        assert_eq!(summary.earliest_timestamp, None);
        assert_eq!(summary.latest_timestamp, None);
    }

    #[test]
    fn test_summary_counts_and_timestamp_bounds() {
        let headers = [
            PostHeader { timestamp: 100 },
            PostHeader { timestamp: 50 },
            PostHeader { timestamp: 200 },
        ];
        let summary = PostSummary::from_headers(forum_id(), &headers);
        assert_eq!(summary.post_count, 3);
        assert_eq!(summary.earliest_timestamp, Some(50));
        assert_eq!(summary.latest_timestamp, Some(200));
    }

    #[test]
    fn test_summary_of_single_post() {
        let headers = [PostHeader { timestamp: 1234 }];
        let summary = PostSummary::from_headers(forum_id(), &headers);
        assert_eq!(summary.post_count, 1);
        assert_eq!(summary.earliest_timestamp, Some(1234));
        assert_eq!(summary.latest_timestamp, Some(1234));
    }
}
