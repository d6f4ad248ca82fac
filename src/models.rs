//! Frontend Models
//!
//! Data structures matching backend entities, plus the small pure helpers
//! the components share.

use serde::{Deserialize, Serialize};

/// Display limit for a tweet. Informational only, never enforced.
pub const TWEET_CHAR_LIMIT: i64 = 280;

/// Saved tweet (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedTweet {
    pub id: i64,
    pub content: String,
    pub created_at: String,
}

impl SavedTweet {
    /// Date part of the server timestamp, for display
    pub fn created_date(&self) -> &str {
        self.created_at.split('T').next().unwrap_or(&self.created_at)
    }
}

/// What the remix action should produce (matches backend)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RemixMode {
    Remix,
    #[default]
    Tweets,
}

/// Result of a remix action (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum RemixOutput {
    Text { text: String },
    Tweets { tweets: Vec<String> },
}

/// `280 - length(text)`, counted in Unicode scalar values; may be negative
pub fn remaining_chars(text: &str) -> i64 {
    TWEET_CHAR_LIMIT - text.chars().count() as i64
}

/// Replace the content of the cached tweet with `id`, if present
pub fn replace_content(tweets: &mut [SavedTweet], id: i64, content: &str) {
    if let Some(tweet) = tweets.iter_mut().find(|t| t.id == id) {
        tweet.content = content.to_string();
    }
}

/// Drop the cached tweet with `id`
pub fn remove_tweet(tweets: &mut Vec<SavedTweet>, id: i64) {
    tweets.retain(|t| t.id != id);
}

/// Apply a delete's outcome to the cache; a failed delete keeps the tweet
pub fn settle_delete(tweets: &mut Vec<SavedTweet>, id: i64, outcome: &Result<(), String>) {
    if outcome.is_ok() {
        remove_tweet(tweets, id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tweet(id: i64, content: &str) -> SavedTweet {
        SavedTweet {
            id,
            content: content.to_string(),
            created_at: "2024-11-02T10:15:00.000000+00:00".to_string(),
        }
    }

    #[test]
    fn test_remaining_chars() {
        assert_eq!(remaining_chars(&"a".repeat(300)), -20);
        assert_eq!(remaining_chars(""), 280);
        assert_eq!(remaining_chars("naïve"), 275);
    }

    #[test]
    fn test_replace_content_in_place() {
        let mut cache = vec![tweet(2, "second"), tweet(1, "first")];
        replace_content(&mut cache, 1, "edited");
        assert_eq!(cache, vec![tweet(2, "second"), tweet(1, "edited")]);

        replace_content(&mut cache, 99, "ghost");
        assert_eq!(cache, vec![tweet(2, "second"), tweet(1, "edited")]);
    }

    #[test]
    fn test_remove_tweet() {
        let mut cache = vec![tweet(3, "c"), tweet(2, "b"), tweet(1, "a")];
        remove_tweet(&mut cache, 2);
        assert_eq!(cache, vec![tweet(3, "c"), tweet(1, "a")]);
    }

    #[test]
    fn test_failed_delete_keeps_tweet() {
        let mut cache = vec![tweet(2, "b"), tweet(1, "a")];
        settle_delete(&mut cache, 2, &Err("Failed to delete tweet".to_string()));
        assert_eq!(cache, vec![tweet(2, "b"), tweet(1, "a")]);

        settle_delete(&mut cache, 2, &Ok(()));
        assert_eq!(cache, vec![tweet(1, "a")]);
    }

    #[test]
    fn test_created_date() {
        assert_eq!(tweet(1, "x").created_date(), "2024-11-02");
    }

    #[test]
    fn test_remix_output_from_backend_json() {
        let out: RemixOutput = serde_json::from_str(r#"{"kind":"tweets","tweets":["a","b"]}"#).unwrap();
        assert_eq!(out, RemixOutput::Tweets { tweets: vec!["a".into(), "b".into()] });

        let out: RemixOutput = serde_json::from_str(r#"{"kind":"text","text":"hi"}"#).unwrap();
        assert_eq!(out, RemixOutput::Text { text: "hi".into() });
    }
}
