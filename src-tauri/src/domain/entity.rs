//! Domain Layer - Core Entity Trait
//!
//! This trait defines the basic contract for persisted entities.
//! All entities have a server-assigned ID and a user-editable content part.

use thiserror::Error;

/// Core trait for all persisted entities
pub trait Entity: Sized + Send + Sync + Clone {
    /// The type of the entity's unique identifier
    type Id: Copy + Eq + std::hash::Hash + std::fmt::Display + Send + Sync;

    /// The part of the entity a user creates and edits
    type Content: ?Sized + Send + Sync;

    /// Returns the entity's unique identifier
    fn id(&self) -> Self::Id;
}

/// Common result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level errors
///
/// Variants stay distinct for logging; command handlers collapse them into
/// one generic message per user action.
#[derive(Debug, Clone, Error)]
pub enum DomainError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Not configured: {0}")]
    NotConfigured(String),
    #[error("Transport error: {0}")]
    Transport(String),
    #[error("Remote service returned {status}: {message}")]
    Api { status: u16, message: String },
    #[error("Parse error: {0}")]
    Parse(String),
}

impl From<reqwest::Error> for DomainError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            DomainError::Parse(e.to_string())
        } else {
            DomainError::Transport(e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DomainError::Api { status: 429, message: "slow down".into() };
        assert_eq!(err.to_string(), "Remote service returned 429: slow down");
        assert_eq!(
            DomainError::InvalidInput("empty".into()).to_string(),
            "Invalid input: empty"
        );
    }
}
