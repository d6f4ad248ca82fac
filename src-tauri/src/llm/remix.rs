//! Remix Service
//!
//! One model call per remix action. No caching, no retry.

use std::sync::Arc;
use tracing::{debug, instrument};

use super::CompletionModel;
use crate::domain::{DomainError, DomainResult, RemixMode, RemixOutput};

#[derive(Clone)]
pub struct RemixService {
    model: Option<Arc<dyn CompletionModel>>,
}

impl RemixService {
    pub fn new(model: Arc<dyn CompletionModel>) -> Self {
        Self { model: Some(model) }
    }

    /// Service without credentials; every remix fails with `NotConfigured`
    pub fn unconfigured() -> Self {
        Self { model: None }
    }

    /// Send `input` with the mode's prompt and shape the reply
    #[instrument(skip(self, input), fields(mode = mode.as_str(), len = input.len()))]
    pub async fn remix(&self, input: &str, mode: RemixMode) -> DomainResult<RemixOutput> {
        if input.is_empty() {
            return Err(DomainError::InvalidInput("Input text is empty".into()));
        }
        let model = self
            .model
            .as_ref()
            .ok_or_else(|| DomainError::NotConfigured("CLAUDE_API_KEY is not set".into()))?;

        let reply = model.complete(&mode.build_message(input)).await?;
        let output = RemixOutput::from_reply(mode, &reply);
        if let RemixOutput::Tweets { tweets } = &output {
            debug!(count = tweets.len(), "Extracted tweets from reply");
        }
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tokio::sync::Mutex;

    /// Replays a fixed reply and records every message it receives
    struct StubModel {
        reply: DomainResult<String>,
        calls: AtomicUsize,
        last_message: Mutex<Option<String>>,
    }

    impl StubModel {
        fn new(reply: DomainResult<String>) -> Arc<Self> {
            Arc::new(Self {
                reply,
                calls: AtomicUsize::new(0),
                last_message: Mutex::new(None),
            })
        }
    }

    #[async_trait]
    impl CompletionModel for StubModel {
        async fn complete(&self, message: &str) -> DomainResult<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            *self.last_message.lock().await = Some(message.to_string());
            self.reply.clone()
        }
    }

    #[tokio::test]
    async fn test_tweets_mode_extracts_marked_lines() {
        let stub = StubModel::new(Ok("Here you go:\nTWEET: one\nTWEET: two\n".into()));
        let service = RemixService::new(stub.clone());

        let output = service.remix("My blog post", RemixMode::Tweets).await.unwrap();
        assert_eq!(
            output,
            RemixOutput::Tweets { tweets: vec!["one".into(), "two".into()] }
        );
        assert_eq!(stub.calls.load(Ordering::SeqCst), 1);

        let sent = stub.last_message.lock().await.clone().unwrap();
        assert!(sent.starts_with(RemixMode::Tweets.prompt()));
        assert!(sent.ends_with("My blog post"));
    }

    #[tokio::test]
    async fn test_reply_without_markers_is_empty_not_error() {
        let stub = StubModel::new(Ok("I cannot help with that.".into()));
        let service = RemixService::new(stub);

        let output = service.remix("post", RemixMode::Tweets).await.unwrap();
        assert_eq!(output, RemixOutput::Tweets { tweets: vec![] });
    }

    #[tokio::test]
    async fn test_remix_mode_returns_text() {
        let stub = StubModel::new(Ok("\nA fresh take.\n".into()));
        let service = RemixService::new(stub);

        let output = service.remix("post", RemixMode::Remix).await.unwrap();
        assert_eq!(output, RemixOutput::Text { text: "A fresh take.".into() });
    }

    #[tokio::test]
    async fn test_empty_input_never_calls_model() {
        let stub = StubModel::new(Ok("TWEET: x".into()));
        let service = RemixService::new(stub.clone());

        let result = service.remix("", RemixMode::Tweets).await;
        assert!(matches!(result, Err(DomainError::InvalidInput(_))));
        assert_eq!(stub.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_whitespace_input_reaches_model() {
        let stub = StubModel::new(Ok("TWEET: x".into()));
        let service = RemixService::new(stub.clone());

        let output = service.remix("   ", RemixMode::Tweets).await.unwrap();
        assert_eq!(output, RemixOutput::Tweets { tweets: vec!["x".into()] });
        assert_eq!(stub.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_model_failure_propagates() {
        let stub = StubModel::new(Err(DomainError::Api { status: 401, message: "bad key".into() }));
        let service = RemixService::new(stub);

        let result = service.remix("post", RemixMode::Tweets).await;
        assert!(matches!(result, Err(DomainError::Api { status: 401, .. })));
    }

    #[tokio::test]
    async fn test_unconfigured_service_fails() {
        let service = RemixService::unconfigured();
        let result = service.remix("post", RemixMode::Remix).await;
        assert!(matches!(result, Err(DomainError::NotConfigured(_))));
    }
}
