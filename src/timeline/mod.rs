//! Timeline query engine: paginated, recency-ordered reads of an author's
//! own tweets (not an aggregated multi-author feed)

pub mod engine;
pub mod models;

pub use engine::{TimelineEngine, DEFAULT_PAGE_LIMIT};
pub use models::TimelinePage;
