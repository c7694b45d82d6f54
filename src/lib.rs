//! Microblog Engine
//!
//! The concurrent in-memory data layer behind a microblogging platform:
//! - Social graph store: users and directed follow edges
//! - Content store: tweets indexed by id and author handle
//! - Timeline query engine: offset pagination over an author's own tweets
//! - Analytics aggregator: event-driven active/influencer classification
//!
//! Each store is a trait seam with a `tokio::sync::RwLock`-guarded
//! in-memory implementation. Transport, identity extraction, and durable
//! persistence are the caller's business; a durable backend plugs in by
//! implementing the same traits.

pub mod analytics;
pub mod content;
pub mod error;
pub mod graph;
pub mod timeline;

use anyhow::Result;
use serde::Deserialize;
use std::path::Path;
use std::sync::Arc;

use crate::analytics::InMemoryAnalyticsStore;
use crate::content::InMemoryContentStore;
use crate::graph::InMemorySocialGraph;
use crate::timeline::TimelineEngine;

// ============================================================================
// YAML config structs (deserialization targets)
// ============================================================================

/// Top-level YAML configuration file structure
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct EngineConfig {
    pub timeline: TimelineConfig,
    pub analytics: AnalyticsConfig,
}

/// Timeline section
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TimelineConfig {
    /// Page size used when a caller passes a non-positive limit
    pub default_page_limit: i64,
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self {
            default_page_limit: timeline::DEFAULT_PAGE_LIMIT,
        }
    }
}

/// Analytics section
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AnalyticsConfig {
    /// Lifetime tweet_created count a handle must exceed to be flagged
    /// as influencer
    pub influencer_threshold: u64,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            influencer_threshold: analytics::INFLUENCER_THRESHOLD,
        }
    }
}

impl EngineConfig {
    /// Load configuration from a YAML file. A missing file yields the
    /// defaults; a malformed file is an error.
    pub fn from_yaml(path: &Path) -> Result<Self> {
        match std::fs::read_to_string(path) {
            Ok(contents) => {
                let config = serde_yaml::from_str(&contents)
                    .map_err(|e| anyhow::anyhow!("failed to parse {}: {e}", path.display()))?;
                tracing::info!("loaded config from {}", path.display());
                Ok(config)
            }
            Err(_) => {
                tracing::info!("no config at {}, using defaults", path.display());
                Ok(Self::default())
            }
        }
    }
}

// ============================================================================
// Engine assembly
// ============================================================================

/// All four components wired together over the in-memory stores.
///
/// The stores share nothing: each owns its lock domain, and only the
/// timeline engine holds a (trait-object) reference to another component.
pub struct Engine {
    pub graph: Arc<InMemorySocialGraph>,
    pub content: Arc<InMemoryContentStore>,
    pub timeline: TimelineEngine,
    pub analytics: Arc<InMemoryAnalyticsStore>,
}

impl Engine {
    /// Build an engine from configuration.
    pub fn new(config: &EngineConfig) -> Self {
        let graph = Arc::new(InMemorySocialGraph::new());
        let content = Arc::new(InMemoryContentStore::new());
        let timeline = TimelineEngine::new(content.clone())
            .with_default_limit(config.timeline.default_page_limit);
        let analytics = Arc::new(
            InMemoryAnalyticsStore::new().with_threshold(config.analytics.influencer_threshold),
        );
        Self {
            graph,
            content,
            timeline,
            analytics,
        }
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(&EngineConfig::default())
    }
}
