use crate::completion::ShaderCompletion;
use crate::{prompt, ProviderConfig, ProviderError};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::time::Instant;

const API_KEY_HEADER: &str = "x-goog-api-key";

/// `generateContent` client. One instance is shared by all requests.
pub struct GeminiClient {
    http: Client,
    config: ProviderConfig,
}

impl GeminiClient {
    pub fn new(config: ProviderConfig) -> Result<Self, ProviderError> {
        let http = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &ProviderConfig {
        &self.config
    }
}

#[async_trait]
impl ShaderCompletion for GeminiClient {
    async fn complete(&self, description: &str) -> Result<String, ProviderError> {
        let started = Instant::now();
        let response = self
            .http
            .post(self.config.endpoint())
            .header(API_KEY_HEADER, &self.config.api_key)
            .json(&prompt::request_body(description))
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(ProviderError::Status(status.as_u16()));
        }

        let body = response.bytes().await?;
        let text = prompt::extract_text(&body)?;
        log::debug!(
            "{} answered with {} chars in {} ms",
            self.config.model,
            text.len(),
            started.elapsed().as_millis()
        );
        Ok(text)
    }
}
