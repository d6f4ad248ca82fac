//! Share Command
//!
//! Opens the pre-filled compose page in the system browser.

use crate::domain::tweet_intent_url;

/// Open the tweet intent for `content`; the post result is never observed
#[tauri::command]
pub async fn share_tweet(content: String) -> Result<(), String> {
    let url = tweet_intent_url(&content);
    tracing::debug!(%url, "Opening share link");
    open::that_detached(&url).map_err(|e| {
        tracing::error!(error = %e, "Failed to open share link");
        "Failed to open share link".to_string()
    })
}
