use super::traits::ModelProvider;
use crate::error::LlmError;
use anyhow::Context;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

const PROVIDER_NAME: &str = "openai_compatible";
const CHAT_COMPLETIONS_PATH: &str = "/chat/completions";

/// Bounded timeout on every external call; a timeout surfaces as the same
/// request error the caller's documented fallback already handles.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Chat-completions provider for any OpenAI-compatible endpoint.
///
/// Works against hosted APIs and local inference servers alike; only the
/// base URL and (optional) bearer key differ.
pub struct OpenAiCompatibleProvider {
    /// Pre-computed `"Bearer <key>"` header value (avoids `format!` per request).
    cached_auth_header: Option<String>,
    base_url: String,
    client: Client,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<Message<'a>>,
    temperature: f64,
    max_tokens: u32,
}

#[derive(Serialize)]
struct Message<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

impl OpenAiCompatibleProvider {
    pub fn new(base_url: impl Into<String>, api_key: Option<&str>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            cached_auth_header: api_key.map(|k| format!("Bearer {k}")),
            base_url,
            client: Client::builder()
                .timeout(REQUEST_TIMEOUT)
                .build()
                .unwrap_or_default(),
        }
    }

    fn chat_completions_url(&self) -> String {
        format!("{}{CHAT_COMPLETIONS_PATH}", self.base_url)
    }

    fn build_request<'a>(
        system_prompt: Option<&'a str>,
        message: &'a str,
        model: &'a str,
        temperature: f64,
        max_tokens: u32,
    ) -> ChatRequest<'a> {
        let capacity = if system_prompt.is_some() { 2 } else { 1 };
        let mut messages = Vec::with_capacity(capacity);
        if let Some(sys) = system_prompt {
            messages.push(Message {
                role: "system",
                content: sys,
            });
        }
        messages.push(Message {
            role: "user",
            content: message,
        });
        ChatRequest {
            model,
            messages,
            temperature,
            max_tokens,
        }
    }

    async fn call_api(&self, request: &ChatRequest<'_>) -> anyhow::Result<ChatResponse> {
        let mut builder = self.client.post(self.chat_completions_url()).json(request);
        if let Some(auth_header) = self.cached_auth_header.as_ref() {
            builder = builder.header("Authorization", auth_header);
        }

        let response = builder
            .send()
            .await
            .context("chat completions request failed")?;

        let status = response.status();
        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(LlmError::Auth {
                provider: PROVIDER_NAME.into(),
            }
            .into());
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(LlmError::Request {
                provider: PROVIDER_NAME.into(),
                message: format!("status {status}: {body}"),
            }
            .into());
        }

        response
            .json::<ChatResponse>()
            .await
            .context("failed to decode chat completions response")
    }

    fn extract_text(response: ChatResponse) -> anyhow::Result<String> {
        response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|text| !text.is_empty())
            .ok_or_else(|| {
                LlmError::EmptyCompletion {
                    provider: PROVIDER_NAME.into(),
                }
                .into()
            })
    }
}

#[async_trait]
impl ModelProvider for OpenAiCompatibleProvider {
    fn name(&self) -> &str {
        PROVIDER_NAME
    }

    async fn chat_with_system(
        &self,
        system_prompt: Option<&str>,
        message: &str,
        model: &str,
        temperature: f64,
        max_tokens: u32,
    ) -> anyhow::Result<String> {
        let request = Self::build_request(system_prompt, message, model, temperature, max_tokens);
        let response = self.call_api(&request).await?;
        Self::extract_text(response)
    }

    async fn warmup(&self) -> anyhow::Result<()> {
        // Establish TLS + connection pool so the first routing call doesn't
        // pay the cold-start cost.
        let _ = self.client.get(format!("{}/models", self.base_url)).send().await;
        Ok(())
    }
}
