// crates/langmap-core/src/remote.rs
#![cfg(feature = "remote")]
//! Blocking client for OpenAI-compatible `chat/completions` endpoints.
//!
//! Defaults target Gemini's OpenAI-compatible endpoint.

use crate::assistant::TextGenerator;
use crate::error::{LangMapError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/openai/";
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

pub const ENV_API_KEY: &str = "GEMINI_API_KEY";
pub const ENV_BASE_URL: &str = "LANGMAP_BASE_URL";
pub const ENV_MODEL: &str = "LANGMAP_MODEL";
pub const ENV_TIMEOUT_SECS: &str = "LANGMAP_TIMEOUT_SECS";

/// Connection settings for the text-generation service.
#[derive(Clone)]
pub struct RemoteConfig {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    pub timeout_secs: u64,
}

impl RemoteConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Load configuration from the environment.
    ///
    /// Loading order:
    /// 1. `.env` in the working directory (or a parent), if present
    /// 2. process environment, which wins over `.env`
    ///
    /// Supported variables:
    /// - `GEMINI_API_KEY`: required
    /// - `LANGMAP_BASE_URL`: endpoint root (default: Gemini's OpenAI-compatible API)
    /// - `LANGMAP_MODEL`: model name (default: `gemini-2.0-flash`)
    /// - `LANGMAP_TIMEOUT_SECS`: request timeout (default: 60)
    pub fn from_env() -> Result<Self> {
        if let Ok(path) = dotenvy::dotenv() {
            tracing::debug!(path = %path.display(), "loaded .env");
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let api_key = lookup(ENV_API_KEY)
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty())
            .ok_or(LangMapError::MissingApiKey)?;

        let mut config = Self::new(api_key);

        if let Some(url) = lookup(ENV_BASE_URL).filter(|v| !v.trim().is_empty()) {
            config.base_url = url.trim().to_string();
            tracing::info!("Override base_url from env: {}", config.base_url);
        }
        if let Some(model) = lookup(ENV_MODEL).filter(|v| !v.trim().is_empty()) {
            config.model = model.trim().to_string();
            tracing::info!("Override model from env: {}", config.model);
        }
        if let Some(raw) = lookup(ENV_TIMEOUT_SECS) {
            match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => config.timeout_secs = secs,
                _ => tracing::warn!(value = %raw, "ignoring invalid LANGMAP_TIMEOUT_SECS"),
            }
        }

        Ok(config)
    }

    /// `<base_url>/chat/completions`, tolerant of a trailing slash.
    pub fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }
}

impl fmt::Debug for RemoteConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RemoteConfig")
            .field("api_key", &mask_key(&self.api_key))
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

fn mask_key(key: &str) -> String {
    let visible: String = key.chars().take(4).collect();
    if key.chars().count() <= 8 {
        "****".to_string()
    } else {
        format!("{visible}****")
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

/// Text-generation service reached over HTTP.
pub struct ChatCompletionsClient {
    http: reqwest::blocking::Client,
    config: RemoteConfig,
}

impl ChatCompletionsClient {
    pub fn new(config: RemoteConfig) -> Result<Self> {
        Self::with_builder(config, reqwest::blocking::Client::builder())
    }

    /// Like [`ChatCompletionsClient::new`] on top of a caller-tuned
    /// builder (proxies, TLS roots). The configured timeout is applied last.
    pub fn with_builder(
        config: RemoteConfig,
        builder: reqwest::blocking::ClientBuilder,
    ) -> Result<Self> {
        let http = builder
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self { http, config })
    }

    pub fn from_env() -> Result<Self> {
        Self::new(RemoteConfig::from_env()?)
    }

    pub fn config(&self) -> &RemoteConfig {
        &self.config
    }
}

impl TextGenerator for ChatCompletionsClient {
    fn name(&self) -> &str {
        &self.config.model
    }

    fn complete(&self, system: &str, user: &str) -> Result<String> {
        let body = ChatRequest {
            model: &self.config.model,
            messages: [
                ChatMessage {
                    role: "system",
                    content: system,
                },
                ChatMessage {
                    role: "user",
                    content: user,
                },
            ],
        };

        let response = self
            .http
            .post(self.config.completions_url())
            .bearer_auth(&self.config.api_key)
            .json(&body)
            .send()?;

        let status = response.status();
        let text = response.text()?;
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "text-generation request failed");
            return Err(LangMapError::Remote {
                status: status.as_u16(),
                body: text,
            });
        }

        parse_completion(&text)
    }
}

/// Extracts the first choice's message content.
fn parse_completion(body: &str) -> Result<String> {
    let parsed: ChatResponse = serde_json::from_str(body)?;
    parsed
        .choices
        .into_iter()
        .next()
        .and_then(|c| c.message.content)
        .ok_or_else(|| LangMapError::InvalidData("response contained no message content".into()))
}
