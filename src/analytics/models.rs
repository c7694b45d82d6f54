//! Analytics models: activity events and derived per-user analytics.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Event type emitted when a tweet is created.
pub const TWEET_CREATED: &str = "tweet_created";
/// Event type emitted when a timeline is viewed.
pub const TIMELINE_VIEWED: &str = "timeline_viewed";

/// An activity event pushed into the aggregator by callers.
///
/// `event_type` is an open string set: unrecognized values are accepted
/// and logged but mutate no analytics flag.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    pub id: Uuid,
    pub event_type: String,
    pub handle: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tweet_id: Option<Uuid>,
    pub timestamp: DateTime<Utc>,
}

impl Event {
    /// Create an event with a fresh id and the current timestamp.
    pub fn new(event_type: impl Into<String>, handle: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            event_type: event_type.into(),
            handle: handle.into(),
            tweet_id: None,
            timestamp: Utc::now(),
        }
    }

    /// Attach the tweet this event refers to.
    pub fn with_tweet(mut self, tweet_id: Uuid) -> Self {
        self.tweet_id = Some(tweet_id);
        self
    }
}

/// Derived per-user analytics. Never created directly by a caller: the
/// record materializes on the first event for a handle and is updated on
/// every subsequent one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserAnalytics {
    pub handle: String,
    pub is_active: bool,
    /// Set once the lifetime `tweet_created` count crosses the influencer
    /// threshold; never reset afterwards.
    pub is_influencer: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl UserAnalytics {
    /// A fresh record with both flags unset.
    pub(crate) fn materialize(handle: &str, now: DateTime<Utc>) -> Self {
        Self {
            handle: handle.to_string(),
            is_active: false,
            is_influencer: false,
            created_at: now,
            updated_at: now,
        }
    }
}
