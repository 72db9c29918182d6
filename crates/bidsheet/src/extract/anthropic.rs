//! Anthropic Claude API extraction provider.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use serde::Deserialize;
use serde_json::json;

use crate::error::{BidsheetError, Result};

use super::prompts;
use super::provider::{ExtractorConfig, ItemExtractor, RawItem, parse_items_response};

/// Anthropic API endpoint.
const API_URL: &str = "https://api.anthropic.com/v1/messages";

/// Anthropic API version.
const API_VERSION: &str = "2023-06-01";

/// Anthropic Claude extraction provider.
pub struct AnthropicExtractor {
    client: Client,
    api_key: String,
    config: ExtractorConfig,
}

impl AnthropicExtractor {
    /// Create a provider with the given API key.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        let config = ExtractorConfig {
            model: "claude-sonnet-4-20250514".to_string(),
            ..ExtractorConfig::default()
        };
        Self::with_config(api_key, config)
    }

    /// Create from the `ANTHROPIC_API_KEY` environment variable.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("ANTHROPIC_API_KEY").map_err(|_| {
            BidsheetError::Config("ANTHROPIC_API_KEY environment variable not set".to_string())
        })?;
        Self::new(api_key)
    }

    /// Create with custom configuration.
    pub fn with_config(api_key: impl Into<String>, config: ExtractorConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(60))
            .build()
            .map_err(|e| BidsheetError::Config(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            api_key: api_key.into(),
            config,
        })
    }

    fn build_headers(&self) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            "x-api-key",
            HeaderValue::from_str(&self.api_key)
                .map_err(|e| BidsheetError::Config(format!("Invalid API key: {e}")))?,
        );
        headers.insert("anthropic-version", HeaderValue::from_static(API_VERSION));
        Ok(headers)
    }

    /// Send one message and return the response text.
    fn send_message(&self, user_prompt: &str) -> Result<String> {
        let body = json!({
            "model": self.config.model,
            "max_tokens": self.config.max_tokens,
            "temperature": self.config.temperature,
            "system": prompts::system_prompt(),
            "messages": [
                {
                    "role": "user",
                    "content": user_prompt
                }
            ]
        });

        let response = self
            .client
            .post(API_URL)
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
            .content
            .into_iter()
            .find_map(|block| (block.content_type == "text").then_some(block.text))
            .ok_or_else(|| BidsheetError::Api("no text in API response".to_string()))
    }
}

impl ItemExtractor for AnthropicExtractor {
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
    content: Vec<ContentBlock>,
}

#[derive(Deserialize)]
struct ContentBlock {
    #[serde(rename = "type")]
    content_type: String,
    text: String,
}
