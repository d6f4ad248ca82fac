//! Tauri Commands for Saved Tweet CRUD
//!
//! Exposes the saved-tweet repository to the frontend via Tauri IPC.

use tauri::State;
use crate::domain::{DomainError, SavedTweet};
use crate::AppState;

fn generic(message: &'static str) -> impl FnOnce(DomainError) -> String {
    move |e| {
        tracing::error!(error = %e, "{}", message);
        message.to_string()
    }
}

/// Save a tweet
#[tauri::command]
pub async fn save_tweet(state: State<'_, AppState>, content: String) -> Result<SavedTweet, String> {
    state.saved_tweets.create(&content).await.map_err(generic("Failed to save tweet"))
}

/// List saved tweets, newest first
#[tauri::command]
pub async fn list_saved_tweets(state: State<'_, AppState>) -> Result<Vec<SavedTweet>, String> {
    state.saved_tweets.list().await.map_err(generic("Failed to load saved tweets"))
}

/// Replace a saved tweet's content
#[tauri::command]
pub async fn update_saved_tweet(
    state: State<'_, AppState>,
    id: i64,
    content: String,
) -> Result<(), String> {
    state.saved_tweets.update(id, &content).await.map_err(generic("Failed to update tweet"))
}

/// Delete a saved tweet
#[tauri::command]
pub async fn delete_saved_tweet(state: State<'_, AppState>, id: i64) -> Result<(), String> {
    state.saved_tweets.delete(id).await.map_err(generic("Failed to delete tweet"))
}
