//! Commands Layer
//!
//! Tauri command handlers that bridge frontend to backend services.

mod remix_cmd;
mod saved_cmd;
mod share_cmd;

pub use remix_cmd::*;
pub use saved_cmd::*;
pub use share_cmd::*;
