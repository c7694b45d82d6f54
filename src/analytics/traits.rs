//! AnalyticsStore trait definition

use crate::analytics::models::{Event, UserAnalytics};
use crate::error::StoreError;
use async_trait::async_trait;

/// Abstract interface for the event-driven analytics aggregator.
#[async_trait]
pub trait AnalyticsStore: Send + Sync {
    /// Ingest one activity event: append it to the event log, materialize
    /// the handle's analytics record if needed, and update the derived
    /// flags. Fails with `InvalidEvent` when `handle` or `event_type` is
    /// empty.
    async fn process_event(&self, event: Event) -> Result<(), StoreError>;

    /// Analytics for one handle. Fails with `NotFound` when no event has
    /// ever materialized a record for it.
    async fn get_user_analytics(&self, handle: &str) -> Result<UserAnalytics, StoreError>;

    /// All analytics records, in no guaranteed order.
    async fn get_all_user_analytics(&self) -> Result<Vec<UserAnalytics>, StoreError>;

    /// Remove a handle's analytics record. Fails with `NotFound` when
    /// absent. Independent of the user's own lifecycle: deleting a user
    /// does not cascade here.
    async fn delete_user_analytics(&self, handle: &str) -> Result<(), StoreError>;
}
