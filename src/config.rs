use serde::{Deserialize, Serialize};
use std::env;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    // Server configuration
    pub host: String,
    pub port: u16,

    // Text provider (OpenRouter-compatible completion API)
    pub text_api_url: String,
    pub text_api_key: Option<String>,
    pub text_model: String,
    pub max_completion_tokens: u32,

    // Image provider (HuggingFace inference API)
    pub image_api_url: String,
    pub image_api_key: Option<String>,

    // Upstream calls
    pub request_timeout_secs: u64,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Config {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8000".to_string())
                .parse()?,

            text_api_url: env::var("TEXT_API_URL")
                .unwrap_or_else(|_| "https://openrouter.ai/api/v1/chat/completions".to_string()),
            text_api_key: read_credential("OPENROUTER_API_KEY"),
            text_model: env::var("TEXT_MODEL")
                .unwrap_or_else(|_| "openai/gpt-3.5-turbo".to_string()),
            max_completion_tokens: 500,

            image_api_url: env::var("IMAGE_API_URL").unwrap_or_else(|_| {
                "https://api-inference.huggingface.co/models/stabilityai/stable-diffusion-2"
                    .to_string()
            }),
            image_api_key: read_credential("HUGGINGFACE_TOKEN"),

            request_timeout_secs: 30,
        })
    }
}

// An empty credential counts as absent, same as an unset variable.
fn read_credential(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.is_empty())
}
