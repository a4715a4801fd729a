//! Image generation backed by the HuggingFace inference API.

use crate::config::Config;
use crate::services::Generation;
use anyhow::Result;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use reqwest::Client;
use serde::Serialize;
use std::time::Duration;

// Placeholder URLs embed at most this many characters of the prompt.
const PLACEHOLDER_PROMPT_LIMIT: usize = 50;

#[derive(Debug, Serialize)]
struct ImageRequest<'a> {
    inputs: &'a str,
}

pub struct ImageGenerator {
    http: Client,
    api_url: String,
    api_key: Option<String>,
    timeout: Duration,
}

impl ImageGenerator {
    pub fn new(config: &Config, http: Client) -> Self {
        Self {
            http,
            api_url: config.image_api_url.clone(),
            api_key: config.image_api_key.clone(),
            timeout: Duration::from_secs(config.request_timeout_secs),
        }
    }

    /// Produce an image reference for `prompt`. Never fails: on a missing
    /// credential or any provider failure the result is a placeholder URL
    /// embedding the truncated prompt. Single attempt, no retries.
    pub async fn generate(&self, prompt: &str) -> Generation {
        if let Some(api_key) = self.api_key.as_deref() {
            match self.request_image(api_key, prompt).await {
                Ok(data_uri) => return Generation::Provider(data_uri),
                Err(e) => tracing::warn!("Image provider request failed: {e:#}"),
            }
        }

        Generation::Fallback(placeholder_url(prompt))
    }

    async fn request_image(&self, api_key: &str, prompt: &str) -> Result<String> {
        let response = self
            .http
            .post(&self.api_url)
            .bearer_auth(api_key)
            .json(&ImageRequest { inputs: prompt })
            .timeout(self.timeout)
            .send()
            .await?
            .error_for_status()?;

        // The provider returns raw PNG bytes on success.
        let bytes = response.bytes().await?;
        Ok(format!("data:image/png;base64,{}", BASE64.encode(&bytes)))
    }
}

fn placeholder_url(prompt: &str) -> String {
    let truncated: String = prompt.chars().take(PLACEHOLDER_PROMPT_LIMIT).collect();
    format!(
        "https://via.placeholder.com/500x500?text={}",
        urlencoding::encode(&truncated)
    )
}
