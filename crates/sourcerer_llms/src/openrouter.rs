//! OpenRouter provider implementation.

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::convert::{api_error_message, extract_content};
use crate::error::{Error, Result};
use crate::provider::Provider;
use crate::types::{ChatRequest, OpenRouterConfig};

/// Chat completions against an OpenRouter-compatible endpoint.
pub struct OpenRouterProvider {
    config: OpenRouterConfig,
    client: Client,
}

impl OpenRouterProvider {
    /// Create a new provider. Fails fast on an empty API key so no request
    /// is ever attempted without a credential.
    pub fn new(config: OpenRouterConfig) -> Result<Self> {
        if config.api_key.is_empty() {
            return Err(Error::MissingApiKey("openrouter".to_string()));
        }

        let client = Client::new();
        Ok(Self { config, client })
    }

    /// Create the provider from `OPENROUTER_API_KEY`.
    pub fn from_env() -> Result<Self> {
        Self::new(OpenRouterConfig::from_env()?)
    }
}

#[async_trait]
impl Provider for OpenRouterProvider {
    fn provider_id(&self) -> &str {
        "openrouter"
    }

    async fn chat(&self, request: ChatRequest) -> Result<String> {
        let url = format!("{}chat/completions", self.config.base_url);
        debug!(model = %request.model, "sending chat completion request");

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.config.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Api {
                status: status.as_u16(),
                message: api_error_message(&body),
            });
        }

        let body: serde_json::Value = response.json().await?;
        extract_content(&body)
    }
}
