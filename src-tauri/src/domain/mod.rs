//! Domain Layer
//!
//! Entities, remix post-processing and share links.
//! No I/O happens here.

mod entity;
mod remix;
mod saved_tweet;
mod share;

pub use entity::{Entity, DomainError, DomainResult};
pub use remix::{RemixMode, RemixOutput};
pub use saved_tweet::SavedTweet;
pub use share::tweet_intent_url;
