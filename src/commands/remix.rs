//! Remix Commands
//!
//! Frontend binding for the remix action.

use serde::Serialize;
use crate::models::{RemixMode, RemixOutput};
use super::call;

#[derive(Serialize)]
struct RemixArgs<'a> {
    input: &'a str,
    mode: RemixMode,
}

pub async fn remix_content(input: &str, mode: RemixMode) -> Result<RemixOutput, String> {
    let js_args = serde_wasm_bindgen::to_value(&RemixArgs { input, mode }).map_err(|e| e.to_string())?;
    call("remix_content", js_args).await
}
