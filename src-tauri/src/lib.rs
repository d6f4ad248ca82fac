//! Content Remixer Backend
//!
//! Layered architecture:
//! - domain: Entities, remix post-processing, share links
//! - llm: Completion model and remix service
//! - repository: Saved tweet store abstractions and implementations
//! - commands: Tauri command handlers

use std::sync::Arc;
use tauri::Manager;
use tracing_subscriber::EnvFilter;

mod config;
mod domain;
mod llm;
mod repository;
mod commands;

use config::AppConfig;
use domain::SavedTweet;
use llm::{AnthropicClient, RemixService};
use repository::{MemoryRepository, Repository, SupabaseRepository};

/// Application state shared across commands
pub struct AppState {
    pub remix: RemixService,
    pub saved_tweets: Arc<dyn Repository<SavedTweet>>,
}

impl AppState {
    /// Wire services from configuration, falling back where credentials are missing
    pub fn from_config(config: &AppConfig) -> Self {
        let remix = match &config.claude_api_key {
            Some(key) => {
                let client = AnthropicClient::new(key.clone(), config.claude_model);
                tracing::info!(model = client.model(), "Remix service ready");
                RemixService::new(Arc::new(client))
            }
            None => {
                tracing::warn!("CLAUDE_API_KEY is not set; remixing will fail");
                RemixService::unconfigured()
            }
        };

        let saved_tweets: Arc<dyn Repository<SavedTweet>> = match &config.supabase {
            Some(supabase) => {
                tracing::info!(url = %supabase.url, "Using Supabase for saved tweets");
                Arc::new(SupabaseRepository::new(supabase.clone()))
            }
            None => {
                tracing::warn!("Supabase is not configured; saved tweets are kept in memory");
                Arc::new(MemoryRepository::new())
            }
        };

        Self { remix, saved_tweets }
    }
}

fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .try_init();
}

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    init_logging();
    let config = AppConfig::from_env();

    tauri::Builder::default()
        .setup(move |app| {
            // Single instance check - must be first!
            #[cfg(desktop)]
            app.handle().plugin(tauri_plugin_single_instance::init(|app, _args, _cwd| {
                // Focus the existing window when a new instance tries to start
                if let Some(window) = app.get_webview_window("main") {
                    let _ = window.set_focus();
                }
            }))?;

            app.manage(AppState::from_config(&config));
            tracing::info!("App setup complete");
            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            commands::remix_content,
            commands::save_tweet,
            commands::list_saved_tweets,
            commands::update_saved_tweet,
            commands::delete_saved_tweet,
            commands::share_tweet,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
