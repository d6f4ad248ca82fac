//! Saved Tweets Store
//!
//! Uses Leptos reactive_stores for the cached copy of the saved tweets.

use leptos::prelude::*;
use reactive_stores::Store;
use crate::models::{self, SavedTweet};

/// Cached saved tweets with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct SavedState {
    /// Last loaded list, newest first
    pub tweets: Vec<SavedTweet>,
}

/// Type alias for the store
pub type SavedStore = Store<SavedState>;

/// Get the saved tweets store from context
pub fn use_saved_store() -> SavedStore {
    expect_context::<SavedStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Current cached tweets (tracked)
pub fn store_tweets(store: &SavedStore) -> Vec<SavedTweet> {
    store.tweets().get()
}

/// Replace the cache with a freshly loaded list
pub fn store_replace_all(store: &SavedStore, tweets: Vec<SavedTweet>) {
    store.tweets().set(tweets);
}

/// Update a tweet's content in place by ID
pub fn store_update_content(store: &SavedStore, id: i64, content: &str) {
    models::replace_content(&mut store.tweets().write(), id, content);
}

/// Remove a tweet from the cache if its delete went through
pub fn store_settle_delete(store: &SavedStore, id: i64, outcome: &Result<(), String>) {
    models::settle_delete(&mut store.tweets().write(), id, outcome);
}
