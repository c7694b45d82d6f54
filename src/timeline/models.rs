//! Timeline response models.

use crate::content::models::Tweet;
use serde::{Deserialize, Serialize};

/// One page of an author's timeline, most recent tweet first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimelinePage {
    pub tweets: Vec<Tweet>,
    /// Continuation cursor for offset pagination: equals the requested
    /// limit when a full page came back, otherwise the number of tweets
    /// actually returned. Not stable across concurrent writes.
    pub next_offset: i64,
}
