//! Content store: tweets indexed by id and author handle

pub mod memory;
pub mod models;
pub mod traits;

pub use memory::InMemoryContentStore;
pub use models::{Tweet, TweetContent, TweetDraft};
pub use traits::ContentStore;
