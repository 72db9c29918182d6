//! OpenAI-compatible chat-completions extraction provider.
//!
//! Works against any endpoint speaking the OpenAI chat-completions
//! protocol. The original deployment of this pipeline ran on Groq;
//! point `OPENAI_BASE_URL` at `https://api.groq.com/openai/v1` (or any
//! compatible gateway) to use it.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use serde::Deserialize;
use serde_json::json;

use crate::error::{BidsheetError, Result};

use super::prompts;
use super::provider::{ExtractorConfig, ItemExtractor, RawItem, parse_items_response};

/// Default OpenAI API base.
const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// OpenAI-compatible extraction provider.
pub struct OpenAiExtractor {
    client: Client,
    api_url: String,
    api_key: String,
    config: ExtractorConfig,
}

impl OpenAiExtractor {
    /// Create a provider with the given API key and default settings.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::with_config(api_key, ExtractorConfig::default())
    }

    /// Create from environment variables.
    ///
    /// Reads the key from `OPENAI_API_KEY` and, when set, the base URL
    /// from `OPENAI_BASE_URL`.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("OPENAI_API_KEY").map_err(|_| {
            BidsheetError::Config("OPENAI_API_KEY environment variable not set".to_string())
        })?;
        Self::new(api_key)
    }

    /// Create with custom configuration.
    pub fn with_config(api_key: impl Into<String>, config: ExtractorConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(60))
            .build()
            .map_err(|e| BidsheetError::Config(format!("Failed to create HTTP client: {e}")))?;

        let base = std::env::var("OPENAI_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let api_url = format!("{}/chat/completions", base.trim_end_matches('/'));

        Ok(Self {
            client,
            api_url,
            api_key: api_key.into(),
            config,
        })
    }

    /// Create with a specific model.
    pub fn with_model(api_key: impl Into<String>, model: impl Into<String>) -> Result<Self> {
        let config = ExtractorConfig {
            model: model.into(),
            ..ExtractorConfig::default()
        };
        Self::with_config(api_key, config)
    }

    fn build_headers(&self) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", self.api_key))
                .map_err(|e| BidsheetError::Config(format!("Invalid API key: {e}")))?,
        );
        Ok(headers)
    }

    /// Send one chat completion and return the assistant text.
    fn send_message(&self, user_prompt: &str) -> Result<String> {
        let body = json!({
            "model": self.config.model,
            "max_tokens": self.config.max_tokens,
            "temperature": self.config.temperature,
            "messages": [
                {"role": "system", "content": prompts::system_prompt()},
                {"role": "user", "content": user_prompt}
            ]
        });

        let response = self
            .client
            .post(&self.api_url)
            .headers(self.build_headers()?)
            .json(&body)
            .send()
            .map_err(|e| BidsheetError::Api(format!("request failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().unwrap_or_default();
            return Err(BidsheetError::Api(format!("API error ({status}): {error_text}")));
        }

        let api_response: ApiResponse = response
            .json()
            .map_err(|e| BidsheetError::Api(format!("failed to parse API response: {e}")))?;

        api_response
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| BidsheetError::Api("no choices in API response".to_string()))
    }
}

impl ItemExtractor for OpenAiExtractor {
    fn extract_items(&self, document_text: &str) -> Result<Vec<RawItem>> {
        let prompt = prompts::extraction_prompt(document_text);
        let response = self.send_message(&prompt)?;
        parse_items_response(&response)
    }

    fn config(&self) -> &ExtractorConfig {
        &self.config
    }
}

#[derive(Deserialize)]
struct ApiResponse {
    choices: Vec<ApiChoice>,
}

#[derive(Deserialize)]
struct ApiChoice {
    message: ApiMessage,
}

#[derive(Deserialize)]
struct ApiMessage {
    content: String,
}
