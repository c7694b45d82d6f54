//! ContentStore trait definition

use crate::content::models::{Tweet, TweetDraft};
use crate::error::StoreError;
use async_trait::async_trait;
use uuid::Uuid;

/// Abstract interface for tweet storage.
///
/// Not-found semantics differ from the graph store on purpose: `get_by_id`
/// reports absence through `Ok(None)` because "does not exist" is an
/// ordinary outcome for tweet lookups, and `delete` of an unknown id is a
/// no-op.
#[async_trait]
pub trait ContentStore: Send + Sync {
    /// Store a tweet, assigning `id` and `created_at` when the draft left
    /// them unset. Fails with `Validation` on empty content.
    async fn create(&self, draft: TweetDraft) -> Result<Tweet, StoreError>;

    /// Look up a tweet by id. `Ok(None)` when it does not exist.
    async fn get_by_id(&self, id: Uuid) -> Result<Option<Tweet>, StoreError>;

    /// All tweets by an author, in no guaranteed order. Empty Vec when the
    /// author has none (or is unknown — no referential check happens here).
    async fn get_by_author(&self, handle: &str) -> Result<Vec<Tweet>, StoreError>;

    /// Delete a tweet. Deleting an unknown id is not an error.
    async fn delete(&self, id: Uuid) -> Result<(), StoreError>;
}
