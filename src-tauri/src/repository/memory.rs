//! In-Memory Repository
//!
//! Same semantics as the hosted table: monotonic ids, `created_at` set on
//! insert, newest first. Used when no database is configured.

use async_trait::async_trait;
use chrono::{SecondsFormat, Utc};
use tokio::sync::Mutex;

use super::traits::Repository;
use crate::domain::{DomainResult, SavedTweet};

#[derive(Default)]
struct Rows {
    next_id: i64,
    tweets: Vec<SavedTweet>,
}

#[derive(Default)]
pub struct MemoryRepository {
    rows: Mutex<Rows>,
}

impl MemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Repository<SavedTweet> for MemoryRepository {
    async fn create(&self, content: &str) -> DomainResult<SavedTweet> {
        let mut rows = self.rows.lock().await;
        rows.next_id += 1;
        let tweet = SavedTweet {
            id: rows.next_id,
            content: content.to_string(),
            created_at: Utc::now().to_rfc3339_opts(SecondsFormat::Micros, false),
        };
        rows.tweets.push(tweet.clone());
        Ok(tweet)
    }

    async fn list(&self) -> DomainResult<Vec<SavedTweet>> {
        let rows = self.rows.lock().await;
        // Insertion order breaks timestamp ties
        Ok(rows.tweets.iter().rev().cloned().collect())
    }

    async fn update(&self, id: i64, content: &str) -> DomainResult<()> {
        let mut rows = self.rows.lock().await;
        if let Some(tweet) = rows.tweets.iter_mut().find(|t| t.id == id) {
            tweet.content = content.to_string();
        }
        Ok(())
    }

    async fn delete(&self, id: i64) -> DomainResult<()> {
        self.rows.lock().await.tweets.retain(|t| t.id != id);
        Ok(())
    }
}
