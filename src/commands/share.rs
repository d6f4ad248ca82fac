//! Share Command
//!
//! Hands tweet text to the backend, which opens the compose page externally.

use serde::Serialize;
use super::call;

#[derive(Serialize)]
struct ShareArgs<'a> {
    content: &'a str,
}

pub async fn share_tweet(content: &str) -> Result<(), String> {
    let js_args = serde_wasm_bindgen::to_value(&ShareArgs { content }).map_err(|e| e.to_string())?;
    call("share_tweet", js_args).await
}
