/// LLM Client — the single point of entry for all text-generation calls.
///
/// ARCHITECTURAL RULE: No other module may call the generation endpoint directly.
/// Handlers depend on the `TextGenerator` trait; `CohereClient` is the production backend.
///
/// One outbound request per call. No retry, no caching, no streaming.
use std::collections::BTreeSet;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::config::GenerationConfig;
use crate::generation::{GenerationRequest, GenerationResult, LikelihoodMode};

pub mod prompts;

#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("generation API key is not configured (set COHERE_API_KEY)")]
    MissingCredential,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("authentication rejected (status {status}): {message}")]
    Authentication { status: u16, message: String },

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("endpoint returned no candidates")]
    NoCandidates,

    #[error("invalid generation parameters: {0}")]
    InvalidParameters(String),

    #[error("malformed generation output: {0}")]
    MalformedOutput(String),
}

/// Anything that can turn a rendered prompt into text.
/// Carried in `AppState` as `Arc<dyn TextGenerator>`.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, request: &GenerationRequest)
        -> Result<GenerationResult, GenerationError>;
}

#[derive(Debug, Serialize)]
struct CohereGenerateRequest<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    model: Option<&'a str>,
    prompt: &'a str,
    max_tokens: u32,
    temperature: f32,
    k: u32,
    stop_sequences: &'a BTreeSet<String>,
    return_likelihoods: LikelihoodMode,
}

#[derive(Debug, Deserialize)]
struct CohereGenerateResponse {
    #[serde(default)]
    generations: Vec<Generation>,
}

#[derive(Debug, Deserialize)]
struct Generation {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CohereError {
    message: String,
}

/// Client for Cohere's `/generate` endpoint.
#[derive(Clone)]
pub struct CohereClient {
    client: Client,
    api_key: Option<String>,
    endpoint: String,
    model: Option<String>,
}

impl CohereClient {
    pub fn new(config: &GenerationConfig) -> Result<Self, GenerationError> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            api_key: config.api_key.clone(),
            endpoint: format!("{}/generate", config.base_url.trim_end_matches('/')),
            model: config.model.clone(),
        })
    }
}

#[async_trait]
impl TextGenerator for CohereClient {
    async fn generate(
        &self,
        request: &GenerationRequest,
    ) -> Result<GenerationResult, GenerationError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(GenerationError::MissingCredential)?;

        let params = request.parameters();

        let body = CohereGenerateRequest {
            model: self.model.as_deref(),
            prompt: request.rendered_prompt(),
            max_tokens: params.max_tokens,
            temperature: params.temperature,
            k: params.sampling_k,
            stop_sequences: &params.stop_sequences,
            return_likelihoods: params.likelihoods,
        };

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<CohereError>(&body)
                .map(|e| e.message)
                .unwrap_or(body);
            let status = status.as_u16();
            return Err(if is_auth_failure(status) {
                GenerationError::Authentication { status, message }
            } else {
                GenerationError::Api { status, message }
            });
        }

        let parsed: CohereGenerateResponse = response.json().await?;
        debug!(
            kind = %request.kind(),
            candidates = parsed.generations.len(),
            "generation call succeeded"
        );

        let first = parsed
            .generations
            .into_iter()
            .next()
            .ok_or(GenerationError::NoCandidates)?;

        let text = first.text.ok_or_else(|| {
            GenerationError::MalformedOutput("first candidate carried no text".to_string())
        })?;

        Ok(GenerationResult { text })
    }
}

fn is_auth_failure(status: u16) -> bool {
    status == StatusCode::UNAUTHORIZED.as_u16() || status == StatusCode::FORBIDDEN.as_u16()
}

/// Strips ```json ... ``` or ``` ... ``` code fences from LLM output.
pub fn strip_json_fences(text: &str) -> &str {
    let text = text.trim();
    if let Some(stripped) = text.strip_prefix("```json") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else if let Some(stripped) = text.strip_prefix("```") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else {
        text
    }
}
