//! Error taxonomy shared by all store components.

use thiserror::Error;

/// Errors returned by the store operations.
///
/// The in-memory engine only ever produces the first four variants;
/// `Unavailable` exists so a durable backend implementing the same traits
/// can report connectivity failures without conflating them with `NotFound`.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The entity does not exist and its absence is an error for this
    /// operation (see the idempotence notes on the individual traits —
    /// `unfollow_user` and tweet `delete` deliberately do NOT use this).
    #[error("{0} not found")]
    NotFound(&'static str),

    /// Create collided with an existing primary key.
    #[error("{0} already exists")]
    AlreadyExists(&'static str),

    /// A malformed analytics event was submitted.
    #[error("invalid event: {0}")]
    InvalidEvent(&'static str),

    /// An empty required field reached the store before any caller-side
    /// validation caught it.
    #[error("validation failed: {0}")]
    Validation(&'static str),

    /// Backend unreachable. Never produced by the in-memory engine.
    #[error("store unavailable: {0}")]
    Unavailable(#[source] anyhow::Error),
}

impl StoreError {
    /// Whether this error means "the entity simply is not there".
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(StoreError::NotFound("user").to_string(), "user not found");
        assert_eq!(
            StoreError::AlreadyExists("user").to_string(),
            "user already exists"
        );
        assert_eq!(
            StoreError::InvalidEvent("handle is required").to_string(),
            "invalid event: handle is required"
        );
    }

    #[test]
    fn test_is_not_found() {
        assert!(StoreError::NotFound("tweet").is_not_found());
        assert!(!StoreError::AlreadyExists("user").is_not_found());
    }
}
