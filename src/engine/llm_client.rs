use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use anyhow::Result;
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::config::LlmConfig;
use crate::engine::narrative::{DilemmaRequest, NarrativeSource, PmqRequest};
use crate::engine::narrative_parser::{decode_dilemma, decode_evaluation};
use crate::engine::prompt_builder::{dilemma_schema, pmq_schema, PromptBuilder};
use crate::error::NarrativeError;
use crate::model::pmq::PmqEvaluation;
use crate::model::political_event::PoliticalEvent;

#[derive(Serialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub temperature: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_format: Option<Value>,
}

#[derive(Serialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

#[derive(Deserialize)]
pub struct ChatCompletionResponse {
    pub choices: Vec<Choice>,
}

#[derive(Deserialize)]
pub struct Choice {
    pub message: ChatMessageResponse,
}

#[derive(Deserialize)]
pub struct ChatMessageResponse {
    pub content: String,
}

/// Thin client for an OpenAI-compatible chat completions endpoint
/// (LM Studio by default).
pub struct LlmClient {
    http: Client,
    config: LlmConfig,
}

impl LlmClient {
    pub fn new(config: LlmConfig) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self { http, config })
    }

    pub fn complete(&self, prompt: String, schema: Option<(&str, Value)>) -> Result<String, NarrativeError> {
        let req = ChatCompletionRequest {
            model: self.config.model.clone(),
            temperature: self.config.temperature,
            messages: vec![ChatMessage {
                role: "system".into(),
                content: prompt,
            }],
            response_format: schema.map(|(name, schema)| {
                json!({
                    "type": "json_schema",
                    "json_schema": { "name": name, "strict": true, "schema": schema }
                })
            }),
        };

        let resp = self
            .http
            .post(&self.config.endpoint)
            .json(&req)
            .send()
            .map_err(transport_error)?;

        let status = resp.status();
        if !status.is_success() {
            return Err(NarrativeError::Status(status.as_u16()));
        }

        let body = resp
            .json::<ChatCompletionResponse>()
            .map_err(|e| NarrativeError::Malformed(e.to_string()))?;

        body.choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .filter(|c| !c.trim().is_empty())
            .ok_or(NarrativeError::EmptyCompletion)
    }

    pub fn test_connection(&self) -> Result<String> {
        let models_url = self
            .config
            .endpoint
            .replace("/chat/completions", "/models");

        let resp: Value = self.http.get(models_url).send()?.json()?;

        Ok(format!(
            "Connected ({} models available)",
            resp["data"].as_array().map(|a| a.len()).unwrap_or(0)
        ))
    }
}

fn transport_error(err: reqwest::Error) -> NarrativeError {
    if err.is_timeout() {
        NarrativeError::Timeout
    } else {
        NarrativeError::Transport(err.to_string())
    }
}

/// [`NarrativeSource`] backed by a language model.
pub struct LlmNarrator {
    client: LlmClient,
    next_event: AtomicU64,
}

impl LlmNarrator {
    pub fn new(client: LlmClient) -> Self {
        Self {
            client,
            next_event: AtomicU64::new(1),
        }
    }
}

impl NarrativeSource for LlmNarrator {
    fn generate_dilemma(&self, request: &DilemmaRequest) -> Result<PoliticalEvent, NarrativeError> {
        let prompt = PromptBuilder::dilemma(request);
        log::debug!("dilemma prompt:\n{}", prompt);

        let raw = self.client.complete(prompt, Some(("political_dilemma", dilemma_schema())))?;
        let id = format!("evt-{}", self.next_event.fetch_add(1, Ordering::Relaxed));

        decode_dilemma(&raw, &id).inspect_err(|e| {
            log::warn!("narrator produced an unusable dilemma: {}", e);
        })
    }

    fn evaluate_response(&self, request: &PmqRequest) -> Result<PmqEvaluation, NarrativeError> {
        let prompt = PromptBuilder::pmq(request);

        match self.client.complete(prompt, Some(("pmq_verdict", pmq_schema()))) {
            Ok(raw) => Ok(decode_evaluation(&raw)),
            Err(NarrativeError::Malformed(_)) | Err(NarrativeError::EmptyCompletion) => {
                log::warn!("narrator gave no readable PMQ verdict, using neutral fallback");
                Ok(PmqEvaluation::neutral())
            }
            Err(e) => Err(e),
        }
    }
}
