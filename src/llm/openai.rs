//! Chat-completions client for the extraction service.

use anyhow::{anyhow, bail, Context, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{config::Settings, llm::prompt::ChatMessage};

/// Wire format requested from the completion service.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ResponseFormat {
    Text,
    JsonObject,
}

/// Thin client over an OpenAI-compatible chat-completions endpoint.
pub struct ChatClient {
    client: Client,
    base_url: String,
    api_key: String,
    model: String,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    temperature: f32,
    frequency_penalty: f32,
    n: u8,
    response_format: ResponseFormat,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: String,
}

impl ChatClient {
    /// Build a client from process configuration. Fails when no
    /// credential is configured.
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let api_key = settings.require_api_key()?.to_string();
        let client = Client::builder()
            .user_agent("review-assistant/0.1")
            .gzip(true)
            .brotli(true)
            .build()?;
        Ok(Self {
            client,
            base_url: settings.openai_api_base.trim_end_matches('/').to_string(),
            api_key,
            model: settings.openai_model.clone(),
        })
    }

    /// Send one deterministic completion request and return the first
    /// choice's content.
    pub async fn complete(
        &self,
        messages: &[ChatMessage],
        format: ResponseFormat,
    ) -> Result<String> {
        let url = format!("{}/chat/completions", self.base_url);
        let request = ChatRequest {
            model: &self.model,
            messages,
            temperature: 0.0,
            frequency_penalty: 0.0,
            n: 1,
            response_format: format,
        };

        debug!(%url, model = %self.model, turns = messages.len(), "sending completion request");
        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .context("send completion request")?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            bail!("completion request failed with {status}: {body}");
        }

        let payload: ChatResponse = response.json().await.context("decode completion response")?;
        payload
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| anyhow!("completion response contained no choices"))
    }
}
