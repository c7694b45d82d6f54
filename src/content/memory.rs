//! In-memory implementation of [`ContentStore`].
//!
//! One `RwLock`-guarded table keyed by tweet id. The author index is a
//! linear scan, matching the source system; `get_by_author` returns value
//! copies so callers cannot reach into the table.

use crate::content::models::{Tweet, TweetDraft};
use crate::content::traits::ContentStore;
use crate::error::StoreError;
use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

/// In-memory tweet store.
pub struct InMemoryContentStore {
    tweets: RwLock<HashMap<Uuid, Tweet>>,
}

impl InMemoryContentStore {
    /// Create a new empty content store.
    pub fn new() -> Self {
        Self {
            tweets: RwLock::new(HashMap::new()),
        }
    }

    /// Seed a fully-formed tweet into the store (test scaffolding).
    pub async fn with_tweet(self, tweet: Tweet) -> Self {
        self.tweets.write().await.insert(tweet.id, tweet);
        self
    }
}

impl Default for InMemoryContentStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ContentStore for InMemoryContentStore {
    async fn create(&self, draft: TweetDraft) -> Result<Tweet, StoreError> {
        if draft.content.text.is_empty() {
            return Err(StoreError::Validation("tweet content cannot be empty"));
        }

        let tweet = Tweet {
            id: draft.id.unwrap_or_else(Uuid::new_v4),
            handle: draft.handle,
            content: draft.content,
            created_at: draft.created_at.unwrap_or_else(Utc::now),
        };

        let mut tweets = self.tweets.write().await;
        tweets.insert(tweet.id, tweet.clone());
        debug!(id = %tweet.id, handle = %tweet.handle, "tweet created");
        Ok(tweet)
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Option<Tweet>, StoreError> {
        let tweets = self.tweets.read().await;
        Ok(tweets.get(&id).cloned())
    }

    async fn get_by_author(&self, handle: &str) -> Result<Vec<Tweet>, StoreError> {
        let tweets = self.tweets.read().await;
        Ok(tweets
            .values()
            .filter(|tweet| tweet.handle == handle)
            .cloned()
            .collect())
    }

    async fn delete(&self, id: Uuid) -> Result<(), StoreError> {
        let mut tweets = self.tweets.write().await;
        if tweets.remove(&id).is_some() {
            debug!(id = %id, "tweet deleted");
        }
        Ok(())
    }
}
