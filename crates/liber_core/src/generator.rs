//! External text generation seam.
//!
//! The desk treats the generator as an injected capability with a single
//! fallible operation. Production uses Ollama; tests inject fakes. Every
//! failure variant means the same thing to the caller: fall back.

use crate::config::LlmConfig;
use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;

/// Why a generation attempt produced no text.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("generator returned status {0}")]
    Status(reqwest::StatusCode),

    #[error("malformed generator response")]
    MalformedResponse,

    #[error("{0}")]
    Unavailable(String),
}

/// A collaborator that may phrase a better answer than the composer.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// One attempt, bounded by the implementation's own timeout.
    async fn generate(&self, prompt: &str) -> Result<String, GenerateError>;
}

/// Ollama-backed generator using the non-streaming generate endpoint.
pub struct OllamaGenerator {
    client: reqwest::Client,
    base_url: String,
    model: String,
}

impl OllamaGenerator {
    pub fn new(config: &LlmConfig) -> Result<Self, GenerateError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            model: config.model.clone(),
        })
    }
}

#[async_trait]
impl TextGenerator for OllamaGenerator {
    async fn generate(&self, prompt: &str) -> Result<String, GenerateError> {
        let body = serde_json::json!({
            "model": self.model,
            "prompt": prompt,
            "stream": false
        });

        let response = self
            .client
            .post(format!("{}/api/generate", self.base_url))
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(GenerateError::Status(response.status()));
        }

        let json: serde_json::Value = response.json().await?;
        json.get("response")
            .and_then(|r| r.as_str())
            .map(|s| s.to_string())
            .ok_or(GenerateError::MalformedResponse)
    }
}
