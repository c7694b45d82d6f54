//! In-memory implementation of [`SocialGraphStore`].
//!
//! Users and follow edges live in plain hash tables behind a single
//! `tokio::sync::RwLock`, so the follow-edge endpoint check and the
//! delete-cascade both run inside one critical section. Reads return
//! value copies, never references into the tables.

use crate::error::StoreError;
use crate::graph::models::User;
use crate::graph::traits::SocialGraphStore;
use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

/// Both tables sit under one lock: `follow_user` must observe the user
/// table and mutate the edge table without a window where a concurrent
/// `delete_user` could slip between the check and the insert.
#[derive(Default)]
struct GraphTables {
    users: HashMap<String, User>,
    /// follower handle -> set of followee handles
    follow: HashMap<String, HashSet<String>>,
}

/// In-memory social graph store.
pub struct InMemorySocialGraph {
    tables: RwLock<GraphTables>,
}

impl InMemorySocialGraph {
    /// Create a new empty graph store.
    pub fn new() -> Self {
        Self {
            tables: RwLock::new(GraphTables::default()),
        }
    }

    // ========================================================================
    // Builder / seeding methods for tests
    // ========================================================================

    /// Seed a user into the store, bypassing duplicate checks.
    pub async fn with_user(self, user: User) -> Self {
        self.tables
            .write()
            .await
            .users
            .insert(user.handle.clone(), user);
        self
    }

    /// Seed a follow edge without endpoint verification.
    pub async fn with_edge(self, follower: &str, followee: &str) -> Self {
        self.tables
            .write()
            .await
            .follow
            .entry(follower.to_string())
            .or_default()
            .insert(followee.to_string());
        self
    }
}

impl Default for InMemorySocialGraph {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SocialGraphStore for InMemorySocialGraph {
    async fn create_user(&self, mut user: User) -> Result<User, StoreError> {
        let mut tables = self.tables.write().await;

        if !user.handle.is_empty() && tables.users.contains_key(&user.handle) {
            return Err(StoreError::AlreadyExists("user"));
        }

        // Auto-assign an identifier when the caller supplied none
        if user.handle.is_empty() {
            user.handle = Uuid::new_v4().to_string();
        }

        tables.users.insert(user.handle.clone(), user.clone());
        debug!(handle = %user.handle, "user created");
        Ok(user)
    }

    async fn get_user(&self, handle: &str) -> Result<User, StoreError> {
        let tables = self.tables.read().await;
        tables
            .users
            .get(handle)
            .cloned()
            .ok_or(StoreError::NotFound("user"))
    }

    async fn delete_user(&self, handle: &str) -> Result<(), StoreError> {
        let mut tables = self.tables.write().await;

        if tables.users.remove(handle).is_none() {
            return Err(StoreError::NotFound("user"));
        }

        // Drop the user's outgoing edges, then scrub it from every other
        // user's followee set so no dangling edge survives the delete.
        tables.follow.remove(handle);
        for followees in tables.follow.values_mut() {
            followees.remove(handle);
        }

        debug!(handle = %handle, "user deleted with follow edges");
        Ok(())
    }

    async fn follow_user(&self, follower: &str, followee: &str) -> Result<(), StoreError> {
        let mut tables = self.tables.write().await;

        // Endpoint checks and edge insert share this critical section
        if !tables.users.contains_key(follower) || !tables.users.contains_key(followee) {
            return Err(StoreError::NotFound("user"));
        }

        tables
            .follow
            .entry(follower.to_string())
            .or_default()
            .insert(followee.to_string());

        debug!(follower = %follower, followee = %followee, "follow edge inserted");
        Ok(())
    }

    async fn unfollow_user(&self, follower: &str, followee: &str) -> Result<(), StoreError> {
        let mut tables = self.tables.write().await;

        // Unknown follower or missing edge is a no-op
        if let Some(followees) = tables.follow.get_mut(follower) {
            followees.remove(followee);
        }
        Ok(())
    }

    async fn get_followers(&self, handle: &str) -> Result<Vec<User>, StoreError> {
        let tables = self.tables.read().await;

        if !tables.users.contains_key(handle) {
            return Err(StoreError::NotFound("user"));
        }

        let followers = tables
            .follow
            .iter()
            .filter(|(_, followees)| followees.contains(handle))
            .filter_map(|(follower, _)| tables.users.get(follower).cloned())
            .collect();
        Ok(followers)
    }

    async fn get_followees(&self, handle: &str) -> Result<Vec<User>, StoreError> {
        let tables = self.tables.read().await;

        if !tables.users.contains_key(handle) {
            return Err(StoreError::NotFound("user"));
        }

        let followees = tables
            .follow
            .get(handle)
            .map(|followees| {
                followees
                    .iter()
                    .filter_map(|followee| tables.users.get(followee).cloned())
                    .collect()
            })
            .unwrap_or_default();
        Ok(followees)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(handle: &str) -> User {
        User::new(handle, "Test", "User")
    }

    #[tokio::test]
    async fn test_create_and_get_user() {
        let store = InMemorySocialGraph::new();
        let created = store.create_user(user("lucas")).await.unwrap();
        assert_eq!(created.handle, "lucas");

        let fetched = store.get_user("lucas").await.unwrap();
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn test_create_duplicate_handle_fails() {
        let store = InMemorySocialGraph::new();
        store.create_user(user("lucas")).await.unwrap();

        let err = store.create_user(user("lucas")).await.unwrap_err();
        assert!(matches!(err, StoreError::AlreadyExists(_)));
    }

    #[tokio::test]
    async fn test_empty_handle_auto_assigned() {
        let store = InMemorySocialGraph::new();
        let created = store.create_user(user("")).await.unwrap();
        assert!(!created.handle.is_empty());
        assert!(store.get_user(&created.handle).await.is_ok());
    }

    #[tokio::test]
    async fn test_get_unknown_user_not_found() {
        let store = InMemorySocialGraph::new();
        let err = store.get_user("ghost").await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_get_user_returns_copy() {
        let store = InMemorySocialGraph::new();
        store.create_user(user("lucas")).await.unwrap();

        let mut fetched = store.get_user("lucas").await.unwrap();
        fetched.first_name = "Mutated".into();

        assert_eq!(store.get_user("lucas").await.unwrap().first_name, "Test");
    }

    #[tokio::test]
    async fn test_follow_requires_both_endpoints() {
        let store = InMemorySocialGraph::new().with_user(user("lucas")).await;

        let err = store.follow_user("lucas", "ghost").await.unwrap_err();
        assert!(err.is_not_found());
        let err = store.follow_user("ghost", "lucas").await.unwrap_err();
        assert!(err.is_not_found());

        // The failed calls must not have left a partial edge behind
        assert!(store.get_followees("lucas").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_follow_is_idempotent() {
        let store = InMemorySocialGraph::new()
            .with_user(user("lucas"))
            .await
            .with_user(user("maria"))
            .await;

        store.follow_user("lucas", "maria").await.unwrap();
        store.follow_user("lucas", "maria").await.unwrap();

        let followers = store.get_followers("maria").await.unwrap();
        assert_eq!(followers.len(), 1);
        assert_eq!(followers[0].handle, "lucas");
    }

    #[tokio::test]
    async fn test_self_follow_permitted() {
        let store = InMemorySocialGraph::new().with_user(user("lucas")).await;
        store.follow_user("lucas", "lucas").await.unwrap();

        let followers = store.get_followers("lucas").await.unwrap();
        assert_eq!(followers.len(), 1);
    }

    #[tokio::test]
    async fn test_unfollow_missing_edge_is_noop() {
        let store = InMemorySocialGraph::new()
            .with_user(user("lucas"))
            .await
            .with_user(user("maria"))
            .await;

        store.unfollow_user("lucas", "maria").await.unwrap();
        store.unfollow_user("ghost", "maria").await.unwrap();

        assert!(store.get_followers("maria").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_unfollow_removes_edge() {
        let store = InMemorySocialGraph::new()
            .with_user(user("lucas"))
            .await
            .with_user(user("maria"))
            .await
            .with_edge("lucas", "maria")
            .await;

        store.unfollow_user("lucas", "maria").await.unwrap();
        assert!(store.get_followers("maria").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_user_cascades_edges() {
        let store = InMemorySocialGraph::new()
            .with_user(user("lucas"))
            .await
            .with_user(user("maria"))
            .await
            .with_user(user("juan"))
            .await
            .with_edge("lucas", "maria")
            .await
            .with_edge("maria", "lucas")
            .await
            .with_edge("juan", "lucas")
            .await;

        store.delete_user("lucas").await.unwrap();

        assert!(store.get_user("lucas").await.unwrap_err().is_not_found());
        // No edge touching the deleted handle remains in either direction
        assert!(store.get_followers("maria").await.unwrap().is_empty());
        assert!(store.get_followees("maria").await.unwrap().is_empty());
        assert!(store.get_followees("juan").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_unknown_user_not_found() {
        let store = InMemorySocialGraph::new();
        let err = store.delete_user("ghost").await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_followers_of_unknown_handle_not_found() {
        let store = InMemorySocialGraph::new();
        assert!(store.get_followers("ghost").await.unwrap_err().is_not_found());
        assert!(store.get_followees("ghost").await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn test_followers_and_followees_directions() {
        let store = InMemorySocialGraph::new()
            .with_user(user("lucas"))
            .await
            .with_user(user("maria"))
            .await
            .with_edge("lucas", "maria")
            .await;

        let maria_followers = store.get_followers("maria").await.unwrap();
        assert_eq!(maria_followers.len(), 1);
        assert_eq!(maria_followers[0].handle, "lucas");
        assert!(store.get_followees("maria").await.unwrap().is_empty());

        let lucas_followees = store.get_followees("lucas").await.unwrap();
        assert_eq!(lucas_followees.len(), 1);
        assert_eq!(lucas_followees[0].handle, "maria");
        assert!(store.get_followers("lucas").await.unwrap().is_empty());
    }
}
