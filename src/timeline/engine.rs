//! Timeline query engine: recency-ordered offset pagination over a single
//! author's tweets.
//!
//! Each call re-reads current state under the content store's own lock;
//! there is no snapshot isolation across calls, so concurrent inserts may
//! shift page boundaries between two calls by the same caller. That is a
//! documented property of offset pagination here, not a defect.

use crate::content::traits::ContentStore;
use crate::error::StoreError;
use crate::timeline::models::TimelinePage;
use std::sync::Arc;
use tracing::debug;

/// Page size used when the caller passes a non-positive limit.
pub const DEFAULT_PAGE_LIMIT: i64 = 20;

/// Paginates a handle's own tweets from the content store.
pub struct TimelineEngine {
    content: Arc<dyn ContentStore>,
    default_limit: i64,
}

impl TimelineEngine {
    /// Create an engine over the given content store.
    pub fn new(content: Arc<dyn ContentStore>) -> Self {
        Self {
            content,
            default_limit: DEFAULT_PAGE_LIMIT,
        }
    }

    /// Override the default page size (see `EngineConfig`).
    pub fn with_default_limit(mut self, limit: i64) -> Self {
        self.default_limit = limit;
        self
    }

    /// Read one page of `handle`'s timeline, newest first.
    ///
    /// `limit <= 0` falls back to the configured default; `offset < 0`
    /// is treated as 0; an offset past the end yields an empty page.
    pub async fn get_timeline(
        &self,
        handle: &str,
        limit: i64,
        offset: i64,
    ) -> Result<TimelinePage, StoreError> {
        if handle.is_empty() {
            return Err(StoreError::Validation("handle is required"));
        }

        let limit = if limit <= 0 { self.default_limit } else { limit };
        let offset = offset.max(0);

        let mut tweets = self.content.get_by_author(handle).await?;

        // Newest first; ties broken by id so the order is deterministic
        // within a single snapshot
        tweets.sort_by(|a, b| b.created_at.cmp(&a.created_at).then_with(|| a.id.cmp(&b.id)));

        let page: Vec<_> = tweets
            .into_iter()
            .skip(offset as usize)
            .take(limit as usize)
            .collect();

        let next_offset = if (page.len() as i64) < limit {
            page.len() as i64
        } else {
            limit
        };

        debug!(
            handle = %handle,
            returned = page.len(),
            next_offset,
            "timeline page read"
        );
        Ok(TimelinePage {
            tweets: page,
            next_offset,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::memory::InMemoryContentStore;
    use crate::content::models::TweetDraft;
    use chrono::{Duration, Utc};

    /// Store with `n` tweets by `handle`, one minute apart, oldest first.
    /// Returns the texts in newest-first order for easy assertions.
    async fn seeded(handle: &str, n: i64) -> (Arc<InMemoryContentStore>, Vec<String>) {
        let store = Arc::new(InMemoryContentStore::new());
        let base = Utc::now();
        for i in 0..n {
            store
                .create(
                    TweetDraft::new(handle, format!("tweet {i}"))
                        .at(base + Duration::minutes(i)),
                )
                .await
                .unwrap();
        }
        let newest_first = (0..n).rev().map(|i| format!("tweet {i}")).collect();
        (store, newest_first)
    }

    #[tokio::test]
    async fn test_middle_page() {
        let (store, newest_first) = seeded("lucas", 5).await;
        let engine = TimelineEngine::new(store);

        let page = engine.get_timeline("lucas", 2, 1).await.unwrap();
        assert_eq!(page.tweets.len(), 2);
        // 2nd and 3rd most recent
        assert_eq!(page.tweets[0].content.text, newest_first[1]);
        assert_eq!(page.tweets[1].content.text, newest_first[2]);
        assert_eq!(page.next_offset, 2);
    }

    #[tokio::test]
    async fn test_empty_author() {
        let store = Arc::new(InMemoryContentStore::new());
        let engine = TimelineEngine::new(store);

        let page = engine.get_timeline("lucas", 20, 0).await.unwrap();
        assert!(page.tweets.is_empty());
        assert_eq!(page.next_offset, 0);
    }

    #[tokio::test]
    async fn test_offset_past_end() {
        let (store, _) = seeded("lucas", 3).await;
        let engine = TimelineEngine::new(store);

        let page = engine.get_timeline("lucas", 10, 50).await.unwrap();
        assert!(page.tweets.is_empty());
        assert_eq!(page.next_offset, 0);
    }

    #[tokio::test]
    async fn test_limit_and_offset_defaults() {
        let (store, _) = seeded("lucas", 25).await;
        let engine = TimelineEngine::new(store);

        // limit <= 0 defaults to 20, offset < 0 defaults to 0
        let page = engine.get_timeline("lucas", 0, -3).await.unwrap();
        assert_eq!(page.tweets.len(), 20);
        assert_eq!(page.next_offset, 20);
    }

    #[tokio::test]
    async fn test_partial_last_page_next_offset() {
        let (store, _) = seeded("lucas", 5).await;
        let engine = TimelineEngine::new(store);

        let page = engine.get_timeline("lucas", 10, 3).await.unwrap();
        assert_eq!(page.tweets.len(), 2);
        assert_eq!(page.next_offset, 2);
    }

    #[tokio::test]
    async fn test_sorted_newest_first() {
        let (store, newest_first) = seeded("lucas", 4).await;
        let engine = TimelineEngine::new(store);

        let page = engine.get_timeline("lucas", 10, 0).await.unwrap();
        let texts: Vec<_> = page
            .tweets
            .iter()
            .map(|t| t.content.text.clone())
            .collect();
        assert_eq!(texts, newest_first);
    }

    #[tokio::test]
    async fn test_empty_handle_rejected() {
        let store = Arc::new(InMemoryContentStore::new());
        let engine = TimelineEngine::new(store);

        let err = engine.get_timeline("", 10, 0).await.unwrap_err();
        assert!(matches!(err, StoreError::Validation(_)));
    }

    #[tokio::test]
    async fn test_custom_default_limit() {
        let (store, _) = seeded("lucas", 10).await;
        let engine = TimelineEngine::new(store).with_default_limit(5);

        let page = engine.get_timeline("lucas", 0, 0).await.unwrap();
        assert_eq!(page.tweets.len(), 5);
        assert_eq!(page.next_offset, 5);
    }
}
