//! In-memory implementation of [`AnalyticsStore`].
//!
//! Two independent locks, as in the source system: one over the derived
//! analytics table, one over the append-only event log. `process_event`
//! never holds the log's write guard while taking the analytics lock, so
//! the two domains cannot deadlock against each other.

use crate::analytics::models::{Event, UserAnalytics, TIMELINE_VIEWED, TWEET_CREATED};
use crate::analytics::traits::AnalyticsStore;
use crate::error::StoreError;
use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::debug;

/// Lifetime `tweet_created` count a handle must exceed to be flagged as
/// influencer.
pub const INFLUENCER_THRESHOLD: u64 = 100;

/// In-memory analytics aggregator.
pub struct InMemoryAnalyticsStore {
    analytics: RwLock<HashMap<String, UserAnalytics>>,
    /// Append-only; the influencer heuristic recounts from here so the log
    /// stays the single source of truth for the threshold.
    events: RwLock<Vec<Event>>,
    influencer_threshold: u64,
}

impl InMemoryAnalyticsStore {
    /// Create an empty aggregator with the standard influencer threshold.
    pub fn new() -> Self {
        Self {
            analytics: RwLock::new(HashMap::new()),
            events: RwLock::new(Vec::new()),
            influencer_threshold: INFLUENCER_THRESHOLD,
        }
    }

    /// Override the influencer threshold (see `EngineConfig`).
    pub fn with_threshold(mut self, threshold: u64) -> Self {
        self.influencer_threshold = threshold;
        self
    }

    /// Seed an analytics record directly (test scaffolding).
    pub async fn with_record(self, record: UserAnalytics) -> Self {
        self.analytics
            .write()
            .await
            .insert(record.handle.clone(), record);
        self
    }

    /// Number of events in the log (used by tests and diagnostics).
    pub async fn event_count(&self) -> usize {
        self.events.read().await.len()
    }
}

impl Default for InMemoryAnalyticsStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AnalyticsStore for InMemoryAnalyticsStore {
    async fn process_event(&self, event: Event) -> Result<(), StoreError> {
        if event.handle.is_empty() {
            return Err(StoreError::InvalidEvent("handle is required"));
        }
        if event.event_type.is_empty() {
            return Err(StoreError::InvalidEvent("event type is required"));
        }

        let handle = event.handle.clone();
        let event_type = event.event_type.clone();

        // Append under the log's own lock and release it before touching
        // the analytics table.
        {
            let mut events = self.events.write().await;
            events.push(event);
        }

        let mut analytics = self.analytics.write().await;
        let now = Utc::now();
        let record = analytics
            .entry(handle.clone())
            .or_insert_with(|| UserAnalytics::materialize(&handle, now));

        match event_type.as_str() {
            TWEET_CREATED => {
                record.is_active = true;
                // Recount lifetime tweet_created events from the log; the
                // flag latches once set and is never cleared by recounts.
                let events = self.events.read().await;
                let tweet_count = events
                    .iter()
                    .filter(|e| e.handle == handle && e.event_type == TWEET_CREATED)
                    .count() as u64;
                if tweet_count > self.influencer_threshold {
                    record.is_influencer = true;
                }
            }
            TIMELINE_VIEWED => {
                record.is_active = true;
            }
            other => {
                // Unrecognized types still touch the record
                debug!(handle = %handle, event_type = %other, "unrecognized event type");
            }
        }

        record.updated_at = now;
        debug!(handle = %handle, event_type = %event_type, "event processed");
        Ok(())
    }

    async fn get_user_analytics(&self, handle: &str) -> Result<UserAnalytics, StoreError> {
        if handle.is_empty() {
            return Err(StoreError::Validation("handle is required"));
        }

        let analytics = self.analytics.read().await;
        analytics
            .get(handle)
            .cloned()
            .ok_or(StoreError::NotFound("user analytics"))
    }

    async fn get_all_user_analytics(&self) -> Result<Vec<UserAnalytics>, StoreError> {
        let analytics = self.analytics.read().await;
        Ok(analytics.values().cloned().collect())
    }

    async fn delete_user_analytics(&self, handle: &str) -> Result<(), StoreError> {
        if handle.is_empty() {
            return Err(StoreError::Validation("handle is required"));
        }

        let mut analytics = self.analytics.write().await;
        if analytics.remove(handle).is_none() {
            return Err(StoreError::NotFound("user analytics"));
        }

        debug!(handle = %handle, "user analytics deleted");
        Ok(())
    }
}
