use crate::config::Config;
use crate::services::{ImageGenerator, SessionStore, TextGenerator};
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub sessions: Arc<RwLock<SessionStore>>,
    pub text: Arc<TextGenerator>,
    pub image: Arc<ImageGenerator>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        tracing::info!("[STATE] Initializing AppState...");

        // Missing credentials are not fatal: the generators degrade to
        // their documented fallback replies.
        if config.text_api_key.is_none() {
            tracing::warn!("[STATE] ⚠️ OPENROUTER_API_KEY not set, chat replies fall back to echo");
        }
        if config.image_api_key.is_none() {
            tracing::warn!(
                "[STATE] ⚠️ HUGGINGFACE_TOKEN not set, image replies fall back to placeholders"
            );
        }

        let http = reqwest::Client::new();
        let text = TextGenerator::new(&config, http.clone());
        let image = ImageGenerator::new(&config, http);

        Self {
            config: Arc::new(config),
            sessions: Arc::new(RwLock::new(SessionStore::new())),
            text: Arc::new(text),
            image: Arc::new(image),
        }
    }
}
