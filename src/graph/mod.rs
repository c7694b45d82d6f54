//! Social graph store: users and directed follow edges

pub mod memory;
pub mod models;
pub mod traits;

pub use memory::InMemorySocialGraph;
pub use models::{FollowEdge, User};
pub use traits::SocialGraphStore;
