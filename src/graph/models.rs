//! Social graph models: users and directed follow edges.

use serde::{Deserialize, Serialize};

/// A registered user. The handle is the primary identity and is never
/// reassigned after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique human-readable identifier. Empty on create means
    /// "auto-assign a random identifier".
    pub handle: String,
    pub first_name: String,
    pub last_name: String,
}

impl User {
    pub fn new(
        handle: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Self {
        Self {
            handle: handle.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }
}

/// A directed follow relationship: the follower receives the followee in
/// its following-list queries. At most one edge exists per ordered pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FollowEdge {
    pub follower_handle: String,
    pub followee_handle: String,
}
