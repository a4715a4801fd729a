//! Text generation backed by an OpenRouter-compatible completion API.

use crate::config::Config;
use crate::services::Generation;
use anyhow::{anyhow, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: Vec<CompletionMessage<'a>>,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct CompletionMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct CompletionResponse {
    choices: Vec<CompletionChoice>,
}

#[derive(Debug, Deserialize)]
struct CompletionChoice {
    message: CompletionReply,
}

#[derive(Debug, Deserialize)]
struct CompletionReply {
    content: String,
}

pub struct TextGenerator {
    http: Client,
    api_url: String,
    api_key: Option<String>,
    model: String,
    max_tokens: u32,
    timeout: Duration,
}

impl TextGenerator {
    pub fn new(config: &Config, http: Client) -> Self {
        Self {
            http,
            api_url: config.text_api_url.clone(),
            api_key: config.text_api_key.clone(),
            model: config.text_model.clone(),
            max_tokens: config.max_completion_tokens,
            timeout: Duration::from_secs(config.request_timeout_secs),
        }
    }

    /// Produce a reply for `prompt`. Never fails: without a credential the
    /// prompt is echoed back, and any provider failure degrades to a canned
    /// demo reply. Single attempt, no retries.
    pub async fn generate(&self, prompt: &str) -> Generation {
        let Some(api_key) = self.api_key.as_deref() else {
            return Generation::Fallback(format!("Echo: {prompt}"));
        };

        match self.request_completion(api_key, prompt).await {
            Ok(text) => Generation::Provider(text),
            Err(e) => {
                tracing::warn!("Text provider request failed: {e:#}");
                Generation::Fallback(fallback_reply(prompt))
            }
        }
    }

    async fn request_completion(&self, api_key: &str, prompt: &str) -> Result<String> {
        let request = CompletionRequest {
            model: &self.model,
            messages: vec![CompletionMessage {
                role: "user",
                content: prompt,
            }],
            max_tokens: self.max_tokens,
        };

        let response = self
            .http
            .post(&self.api_url)
            .bearer_auth(api_key)
            .header("HTTP-Referer", "http://localhost")
            .json(&request)
            .timeout(self.timeout)
            .send()
            .await?
            .error_for_status()?;

        let payload: CompletionResponse = response.json().await?;
        payload
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| anyhow!("completion response contained no choices"))
    }
}

fn fallback_reply(prompt: &str) -> String {
    format!(
        "Response to '{prompt}': I'm a demo AI assistant. Please configure API keys for real responses."
    )
}
