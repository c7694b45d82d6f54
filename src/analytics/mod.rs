//! Analytics aggregator: activity events in, derived user classification out

pub mod memory;
pub mod models;
pub mod traits;

pub use memory::{InMemoryAnalyticsStore, INFLUENCER_THRESHOLD};
pub use models::{Event, UserAnalytics, TIMELINE_VIEWED, TWEET_CREATED};
pub use traits::AnalyticsStore;
