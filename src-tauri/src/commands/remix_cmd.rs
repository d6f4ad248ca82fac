//! Tauri Command for the remix action
//!
//! Every failure collapses into one generic message for the frontend.

use tauri::State;
use crate::domain::{DomainError, RemixMode, RemixOutput};
use crate::AppState;

pub const REMIX_FAILED: &str = "Failed to remix content";

/// Log the detailed error and hand the frontend the generic message
fn remix_failed(e: DomainError, mode: RemixMode) -> String {
    tracing::error!(error = %e, mode = mode.as_str(), "Remix failed");
    REMIX_FAILED.to_string()
}

/// Remix `input` into a passage or a list of tweets
#[tauri::command]
pub async fn remix_content(
    state: State<'_, AppState>,
    input: String,
    mode: Option<RemixMode>,
) -> Result<RemixOutput, String> {
    let mode = mode.unwrap_or_default();
    state.remix.remix(&input, mode).await.map_err(|e| remix_failed(e, mode))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_error_becomes_generic_message() {
        let errors = [
            DomainError::InvalidInput("empty".into()),
            DomainError::NotConfigured("no key".into()),
            DomainError::Transport("connection reset".into()),
            DomainError::Api { status: 529, message: "overloaded".into() },
            DomainError::Parse("bad json".into()),
        ];
        for e in errors {
            assert_eq!(remix_failed(e, RemixMode::Tweets), "Failed to remix content");
        }
    }
}
