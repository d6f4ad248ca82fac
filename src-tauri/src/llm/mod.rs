//! LLM Layer
//!
//! Completion abstraction, the Anthropic implementation, and the remix
//! service that sits on top of it.

mod anthropic;
mod remix;

use async_trait::async_trait;
use crate::domain::DomainResult;

pub use anthropic::AnthropicClient;
pub use remix::RemixService;

/// A model that turns one user message into one text reply
#[async_trait]
pub trait CompletionModel: Send + Sync {
    /// Send `message` as a single user turn and return the reply text
    async fn complete(&self, message: &str) -> DomainResult<String>;
}
