//! Saved Tweet Commands
//!
//! Frontend bindings for the persisted tweet CRUD commands.

use wasm_bindgen::prelude::*;
use serde::Serialize;
use crate::models::SavedTweet;
use super::call;

// ========================
// Argument Structs
// ========================

#[derive(Serialize)]
struct ContentArgs<'a> {
    content: &'a str,
}

#[derive(Serialize)]
struct IdArgs {
    id: i64,
}

#[derive(Serialize)]
struct UpdateArgs<'a> {
    id: i64,
    content: &'a str,
}

// ========================
// Commands
// ========================

pub async fn save_tweet(content: &str) -> Result<SavedTweet, String> {
    let js_args = serde_wasm_bindgen::to_value(&ContentArgs { content }).map_err(|e| e.to_string())?;
    call("save_tweet", js_args).await
}

pub async fn list_saved_tweets() -> Result<Vec<SavedTweet>, String> {
    call("list_saved_tweets", JsValue::NULL).await
}

pub async fn update_saved_tweet(id: i64, content: &str) -> Result<(), String> {
    let js_args = serde_wasm_bindgen::to_value(&UpdateArgs { id, content }).map_err(|e| e.to_string())?;
    call("update_saved_tweet", js_args).await
}

pub async fn delete_saved_tweet(id: i64) -> Result<(), String> {
    let js_args = serde_wasm_bindgen::to_value(&IdArgs { id }).map_err(|e| e.to_string())?;
    call("delete_saved_tweet", js_args).await
}
