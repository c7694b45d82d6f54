//! Tweet models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A stored tweet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tweet {
    pub id: Uuid,
    /// Author handle. Not checked against the user table — callers own
    /// referential integrity (documented gap carried from the source system).
    pub handle: String,
    pub content: TweetContent,
    pub created_at: DateTime<Utc>,
}

/// Tweet body. Semantically bounded to 280 characters; the in-memory path
/// does not enforce the bound.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TweetContent {
    pub text: String,
}

/// Input for tweet creation. The store assigns `id` and `created_at` when
/// they are not supplied.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TweetDraft {
    pub handle: String,
    pub content: TweetContent,
    #[serde(default)]
    pub id: Option<Uuid>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl TweetDraft {
    pub fn new(handle: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            handle: handle.into(),
            content: TweetContent { text: text.into() },
            id: None,
            created_at: None,
        }
    }

    /// Pin the creation timestamp (used by tests that need a known order).
    pub fn at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self
    }
}
