//! Anthropic Messages API client

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, instrument};

use super::CompletionModel;
use crate::domain::{DomainError, DomainResult};

const ANTHROPIC_API_URL: &str = "https://api.anthropic.com/v1/messages";
const ANTHROPIC_VERSION: &str = "2023-06-01";
const MAX_TOKENS: u32 = 1024;

#[derive(Debug, Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    messages: Vec<Message<'a>>,
}

#[derive(Debug, Serialize)]
struct Message<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct MessagesResponse {
    #[serde(default)]
    content: Vec<ContentBlock>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum ContentBlock {
    Text { text: String },
    #[serde(other)]
    Other,
}

impl MessagesResponse {
    /// Concatenated text blocks; a reply without any is a parse failure
    fn into_text(self) -> DomainResult<String> {
        let texts: Vec<String> = self
            .content
            .into_iter()
            .filter_map(|block| match block {
                ContentBlock::Text { text } => Some(text),
                ContentBlock::Other => None,
            })
            .collect();

        if texts.is_empty() {
            return Err(DomainError::Parse("Reply contained no text block".into()));
        }
        Ok(texts.concat())
    }
}

/// Anthropic API client
#[derive(Debug, Clone)]
pub struct AnthropicClient {
    client: Client,
    api_key: String,
    model: String,
}

impl AnthropicClient {
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            model: model.into(),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn request(&self, message: &str) -> reqwest::RequestBuilder {
        let body = MessagesRequest {
            model: &self.model,
            max_tokens: MAX_TOKENS,
            messages: vec![Message { role: "user", content: message }],
        };
        self.client
            .post(ANTHROPIC_API_URL)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .json(&body)
    }
}

#[async_trait]
impl CompletionModel for AnthropicClient {
    #[instrument(skip(self, message), fields(model = %self.model, len = message.len()))]
    async fn complete(&self, message: &str) -> DomainResult<String> {
        debug!("Sending request to Anthropic API");

        let response = self.request(message).send().await.map_err(|e| {
            error!(error = ?e, "Failed to send request to Anthropic API");
            DomainError::Transport(e.to_string())
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %body, "Anthropic API returned error");
            return Err(DomainError::Api { status: status.as_u16(), message: body });
        }

        let parsed: MessagesResponse = response.json().await.map_err(|e| {
            error!(error = ?e, "Failed to parse Anthropic response");
            DomainError::Parse(e.to_string())
        })?;

        let text = parsed.into_text()?;
        debug!(chars = text.len(), "Received reply from Anthropic");
        Ok(text)
    }
}
