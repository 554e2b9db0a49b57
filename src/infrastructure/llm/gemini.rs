use async_trait::async_trait;
use rig::client::{CompletionClient, ProviderClient};
use rig::completion::Prompt;
use rig::providers::gemini;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::domain::{ports::LlmService, DomainError, GenerationConfig};
use crate::infrastructure::config::LlmConfig;

const API_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

pub struct GeminiLlm {
    client: gemini::Client,
    http: reqwest::Client,
    api_key: String,
    model: String,
    timeout: Duration,
}

#[derive(Serialize)]
struct CountTokensRequest<'a> {
    contents: [Content<'a>; 1],
}

#[derive(Serialize)]
struct Content<'a> {
    parts: [Part<'a>; 1],
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CountTokensResponse {
    total_tokens: usize,
}

impl GeminiLlm {
    /// Builds the completion client from `GEMINI_API_KEY`.
    pub fn from_env(config: &LlmConfig) -> Result<Self, DomainError> {
        let api_key = std::env::var("GEMINI_API_KEY")
            .map_err(|_| DomainError::internal("GEMINI_API_KEY is not set"))?;

        Ok(Self {
            client: gemini::Client::from_env(),
            http: reqwest::Client::new(),
            api_key,
            model: config.model.clone(),
            timeout: Duration::from_secs(config.timeout_seconds),
        })
    }

    /// Sampling settings without a dedicated builder method travel in
    /// Gemini's `generationConfig` object.
    fn additional_params(config: &GenerationConfig) -> serde_json::Value {
        let mut generation = serde_json::Map::new();
        if let Some(top_p) = config.top_p {
            generation.insert("topP".into(), top_p.into());
        }
        if let Some(top_k) = config.top_k {
            generation.insert("topK".into(), top_k.into());
        }
        if !config.stop_sequences.is_empty() {
            generation.insert("stopSequences".into(), config.stop_sequences.clone().into());
        }
        serde_json::json!({ "generationConfig": generation })
    }
}

#[async_trait]
impl LlmService for GeminiLlm {
    async fn complete(
        &self,
        prompt: &str,
        config: &GenerationConfig,
    ) -> Result<String, DomainError> {
        let mut builder = self.client.agent(&self.model);
        if let Some(temperature) = config.temperature {
            builder = builder.temperature(temperature);
        }
        if let Some(max_tokens) = config.max_output_tokens {
            builder = builder.max_tokens(max_tokens);
        }
        if !config.is_empty() {
            builder = builder.additional_params(Self::additional_params(config));
        }
        let agent = builder.build();

        tokio::time::timeout(self.timeout, agent.prompt(prompt))
            .await
            .map_err(|_| DomainError::timeout("Completion timed out"))?
            .map_err(|e| DomainError::external(format!("Completion failed: {e}")))
    }

    async fn count_tokens(&self, prompt: &str) -> Result<usize, DomainError> {
        let url = format!("{API_BASE_URL}/models/{}:countTokens", self.model);
        let request = CountTokensRequest {
            contents: [Content {
                parts: [Part { text: prompt }],
            }],
        };

        let resp = tokio::time::timeout(
            self.timeout,
            self.http
                .post(&url)
                .query(&[("key", self.api_key.as_str())])
                .json(&request)
                .send(),
        )
        .await
        .map_err(|_| DomainError::timeout("Token count timed out"))?
        .map_err(|e| DomainError::external(format!("Gemini API error: {e}")))?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(DomainError::external(format!("Gemini API {status}: {body}")));
        }

        let parsed: CountTokensResponse = resp
            .json()
            .await
            .map_err(|e| DomainError::external(format!("Parse error: {e}")))?;
        Ok(parsed.total_tokens)
    }
}
