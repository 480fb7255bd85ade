//! Gemini completion transport.
//!
//! One prompt per call through the rig-core Gemini client. The response
//! schema, JSON mime type and thinking budget travel in the request's
//! `generationConfig` via `additional_params`. The transport returns the raw
//! answer text; cleanup and parsing happen in [`crate::response`].

use async_trait::async_trait;
use log::{debug, error};
use reqwest::Client as HttpClient;
use rig::{client::CompletionClient, completion::Prompt, providers::gemini};
use serde_json::{json, Value};
use std::sync::Arc;

use uportfolio_core::AnalysisPrompt;

use crate::env::AiEnvironment;
use crate::error::AiError;
use crate::providers::GenerationConfig;

// ============================================================================
// Transport Trait
// ============================================================================

/// A single round trip to a completion service.
#[async_trait]
pub trait CompletionTransport: Send + Sync {
    /// Send the prompt and schema once. `Ok(None)` means the service answered
    /// without any text.
    async fn complete(&self, prompt: &AnalysisPrompt) -> Result<Option<String>, AiError>;
}

// ============================================================================
// Request Parameters
// ============================================================================

/// Gemini `generationConfig` asking for schema-constrained JSON.
fn generation_params(prompt: &AnalysisPrompt, config: &GenerationConfig) -> Value {
    let mut generation_config = json!({
        "responseMimeType": "application/json",
        "responseSchema": prompt.schema,
    });
    if let Some(budget) = config.thinking_budget {
        generation_config["thinkingConfig"] = json!({ "thinkingBudget": budget });
    }
    json!({ "generationConfig": generation_config })
}

fn non_empty(text: String) -> Option<String> {
    if text.trim().is_empty() {
        None
    } else {
        Some(text)
    }
}

// ============================================================================
// Gemini Transport
// ============================================================================

/// Calls Gemini through the rig-core provider client.
pub struct GeminiTransport<E: AiEnvironment> {
    env: Arc<E>,
    config: GenerationConfig,
}

impl<E: AiEnvironment> GeminiTransport<E> {
    /// Create a new transport. The API key is read from `env` on each call.
    pub fn new(env: Arc<E>, config: GenerationConfig) -> Self {
        Self { env, config }
    }

    pub fn config(&self) -> &GenerationConfig {
        &self.config
    }

    fn create_client(&self, api_key: &str) -> Result<gemini::Client<HttpClient>, AiError> {
        gemini::Client::<HttpClient>::builder()
            .api_key(api_key)
            .base_url(&self.config.base_url)
            .build()
            .map_err(|e| AiError::Provider(e.to_string()))
    }

    async fn prompt_model(&self, prompt: &AnalysisPrompt) -> Result<String, AiError> {
        let api_key = self.config.get_api_key(self.env.as_ref())?;
        let client = self.create_client(&api_key)?;

        debug!(
            "Requesting generation from model {} ({} prompt chars)",
            self.config.model_id,
            prompt.text.len()
        );

        client
            .agent(&self.config.model_id)
            .additional_params(generation_params(prompt, &self.config))
            .build()
            .prompt(prompt.text.as_str())
            .await
            .map_err(|e| AiError::Provider(e.to_string()))
    }
}

#[async_trait]
impl<E: AiEnvironment> CompletionTransport for GeminiTransport<E> {
    async fn complete(&self, prompt: &AnalysisPrompt) -> Result<Option<String>, AiError> {
        let response = match self.config.timeout {
            Some(limit) => tokio::time::timeout(limit, self.prompt_model(prompt))
                .await
                .map_err(|_| {
                    AiError::provider(format!("Gemini request timed out after {:?}", limit))
                })?,
            None => self.prompt_model(prompt).await,
        };

        match response {
            Ok(text) => Ok(non_empty(text)),
            Err(e) => {
                error!("Gemini request failed: {}", e);
                Err(e)
            }
        }
    }
}
