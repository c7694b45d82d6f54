//! SocialGraphStore trait definition
//!
//! Defines the abstract interface for the social graph: users and directed
//! follow edges. The shipped implementation is [`super::InMemorySocialGraph`];
//! a durable backend implements the same trait and honors the same
//! idempotence and atomicity contracts.

use crate::error::StoreError;
use crate::graph::models::User;
use async_trait::async_trait;

/// Abstract interface for user and follow-edge operations.
#[async_trait]
pub trait SocialGraphStore: Send + Sync {
    /// Create a new user. Fails with `AlreadyExists` on a duplicate handle.
    /// An empty handle means "auto-assign a random identifier"; the stored
    /// user (with its final handle) is returned.
    async fn create_user(&self, user: User) -> Result<User, StoreError>;

    /// Get a user by handle. Fails with `NotFound` when absent.
    async fn get_user(&self, handle: &str) -> Result<User, StoreError>;

    /// Delete a user and every follow edge where it appears as follower or
    /// followee, atomically. Fails with `NotFound` when absent.
    async fn delete_user(&self, handle: &str) -> Result<(), StoreError>;

    /// Insert a follow edge. Both endpoints are verified inside the same
    /// critical section as the insert. Re-following is idempotent.
    async fn follow_user(&self, follower: &str, followee: &str) -> Result<(), StoreError>;

    /// Remove a follow edge. Removing a missing edge (or from an unknown
    /// follower) is a no-op, not an error.
    async fn unfollow_user(&self, follower: &str, followee: &str) -> Result<(), StoreError>;

    /// Users with an edge pointing at `handle`, in no guaranteed order.
    /// Fails with `NotFound` when `handle` itself is unknown.
    async fn get_followers(&self, handle: &str) -> Result<Vec<User>, StoreError>;

    /// Users that `handle` follows, in no guaranteed order.
    /// Fails with `NotFound` when `handle` itself is unknown.
    async fn get_followees(&self, handle: &str) -> Result<Vec<User>, StoreError>;
}
