//! Saved Tweet Entity
//!
//! A generated tweet the user chose to keep in the hosted database.

use serde::{Deserialize, Serialize};
use super::entity::Entity;

/// A persisted tweet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedTweet {
    /// Server-assigned identifier, immutable after creation
    pub id: i64,
    /// Tweet text
    pub content: String,
    /// Server-assigned creation timestamp
    pub created_at: String,
}

impl Entity for SavedTweet {
    type Id = i64;
    type Content = str;

    fn id(&self) -> Self::Id {
        self.id
    }
}
