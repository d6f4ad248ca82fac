//! Supabase Repository
//!
//! Saved tweets in the hosted `saved_tweets` table, over PostgREST.

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use serde::Serialize;
use tracing::{debug, error, instrument};

use super::traits::Repository;
use crate::config::SupabaseConfig;
use crate::domain::{DomainError, DomainResult, SavedTweet};

const TABLE: &str = "saved_tweets";

#[derive(Serialize)]
struct ContentRow<'a> {
    content: &'a str,
}

pub struct SupabaseRepository {
    client: Client,
    config: SupabaseConfig,
}

impl SupabaseRepository {
    pub fn new(config: SupabaseConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    fn table_url(&self) -> String {
        format!("{}/rest/v1/{}", self.config.url, TABLE)
    }

    /// Attach the public key the way the JS client does
    fn authorized(&self, builder: RequestBuilder) -> RequestBuilder {
        builder
            .header("apikey", &self.config.anon_key)
            .bearer_auth(&self.config.anon_key)
    }

    fn insert_request(&self, content: &str) -> RequestBuilder {
        self.authorized(self.client.post(self.table_url()))
            .header("Prefer", "return=representation")
            .json(&[ContentRow { content }])
    }

    fn select_request(&self) -> RequestBuilder {
        self.authorized(self.client.get(self.table_url()))
            .query(&[("select", "*"), ("order", "created_at.desc")])
    }

    fn update_request(&self, id: i64, content: &str) -> RequestBuilder {
        self.authorized(self.client.patch(self.table_url()))
            .query(&[("id", format!("eq.{}", id))])
            .json(&ContentRow { content })
    }

    fn delete_request(&self, id: i64) -> RequestBuilder {
        self.authorized(self.client.delete(self.table_url()))
            .query(&[("id", format!("eq.{}", id))])
    }

    /// Send and turn transport failures and non-2xx replies into errors
    async fn send(builder: RequestBuilder) -> DomainResult<Response> {
        let response = builder.send().await.map_err(|e| {
            error!(error = ?e, "Failed to reach Supabase");
            DomainError::Transport(e.to_string())
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %body, "Supabase returned error");
            return Err(DomainError::Api { status: status.as_u16(), message: body });
        }
        Ok(response)
    }
}

#[async_trait]
impl Repository<SavedTweet> for SupabaseRepository {
    #[instrument(skip(self, content))]
    async fn create(&self, content: &str) -> DomainResult<SavedTweet> {
        let response = Self::send(self.insert_request(content)).await?;
        let rows: Vec<SavedTweet> = response.json().await?;
        let created = rows
            .into_iter()
            .next()
            .ok_or_else(|| DomainError::Parse("Insert returned no row".into()))?;
        debug!(id = created.id, "Saved tweet");
        Ok(created)
    }

    #[instrument(skip(self))]
    async fn list(&self) -> DomainResult<Vec<SavedTweet>> {
        let response = Self::send(self.select_request()).await?;
        let rows: Vec<SavedTweet> = response.json().await?;
        debug!(count = rows.len(), "Loaded saved tweets");
        Ok(rows)
    }

    #[instrument(skip(self, content))]
    async fn update(&self, id: i64, content: &str) -> DomainResult<()> {
        Self::send(self.update_request(id, content)).await?;
        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> DomainResult<()> {
        Self::send(self.delete_request(id)).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repo() -> SupabaseRepository {
        SupabaseRepository::new(SupabaseConfig {
            url: "https://abc.supabase.co".into(),
            anon_key: "anon-key".into(),
        })
    }

    fn json_body(request: &reqwest::Request) -> serde_json::Value {
        let bytes = request.body().and_then(|b| b.as_bytes()).unwrap();
        serde_json::from_slice(bytes).unwrap()
    }

    fn assert_authorized(request: &reqwest::Request) {
        assert_eq!(request.headers()["apikey"], "anon-key");
        assert_eq!(request.headers()["authorization"], "Bearer anon-key");
    }

    #[test]
    fn test_insert_request() {
        let request = repo().insert_request("hello").build().unwrap();

        assert_eq!(*request.method(), reqwest::Method::POST);
        assert_eq!(request.url().as_str(), "https://abc.supabase.co/rest/v1/saved_tweets");
        assert_eq!(request.headers()["prefer"], "return=representation");
        assert_authorized(&request);
        assert_eq!(json_body(&request), serde_json::json!([{"content": "hello"}]));
    }

    #[test]
    fn test_select_request_orders_newest_first() {
        let request = repo().select_request().build().unwrap();

        assert_eq!(*request.method(), reqwest::Method::GET);
        assert_eq!(
            request.url().as_str(),
            "https://abc.supabase.co/rest/v1/saved_tweets?select=*&order=created_at.desc"
        );
        assert_authorized(&request);
    }

    #[test]
    fn test_update_request_filters_by_id() {
        let request = repo().update_request(42, "edited").build().unwrap();

        assert_eq!(*request.method(), reqwest::Method::PATCH);
        assert_eq!(request.url().query(), Some("id=eq.42"));
        assert_authorized(&request);
        assert_eq!(json_body(&request), serde_json::json!({"content": "edited"}));
    }

    #[test]
    fn test_delete_request_filters_by_id() {
        let request = repo().delete_request(7).build().unwrap();

        assert_eq!(*request.method(), reqwest::Method::DELETE);
        assert_eq!(request.url().query(), Some("id=eq.7"));
        assert_authorized(&request);
        assert!(request.body().is_none());
    }
}
