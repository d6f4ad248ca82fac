//! Tauri Command Wrappers
//!
//! Frontend bindings to backend commands, organized by domain.

mod remix;
mod saved;
mod share;

use serde::de::DeserializeOwned;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    /// Rejects with the command's error string when the handler returns `Err`
    #[wasm_bindgen(catch, js_namespace = ["window", "__TAURI__", "core"])]
    async fn invoke(cmd: &str, args: JsValue) -> Result<JsValue, JsValue>;
}

/// Invoke `cmd` and decode its result, mapping a rejection to its message
async fn call<T: DeserializeOwned>(cmd: &str, args: JsValue) -> Result<T, String> {
    let result = invoke(cmd, args).await.map_err(|e| {
        e.as_string().unwrap_or_else(|| format!("{} failed: {:?}", cmd, e))
    })?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

// Re-export all public items
pub use remix::*;
pub use saved::*;
pub use share::*;
