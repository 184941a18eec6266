//! OpenAI chat-completions backend.

use crate::config::OpenAiConfig;
use async_trait::async_trait;
use pony_express_assistant::{
    BackendError, ChatBackend, Completion, CompletionRequest, ToolCall,
};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// `ChatBackend` implementation over the OpenAI chat completions API.
pub struct OpenAiBackend {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl OpenAiBackend {
    /// Creates a backend from provider configuration.
    #[must_use]
    pub fn new(http: reqwest::Client, config: &OpenAiConfig) -> Self {
        Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        }
    }
}

#[derive(Serialize)]
struct WireRequest<'a> {
    model: &'a str,
    messages: &'a [pony_express_assistant::ChatMessage],
    temperature: f32,
    max_tokens: u32,
    tools: Vec<JsonValue>,
    parallel_tool_calls: bool,
}

#[derive(Deserialize)]
struct WireResponse {
    choices: Vec<WireChoice>,
}

#[derive(Deserialize)]
struct WireChoice {
    message: WireMessage,
}

#[derive(Deserialize)]
struct WireMessage {
    content: Option<String>,
    #[serde(default)]
    tool_calls: Vec<WireToolCall>,
}

#[derive(Deserialize)]
struct WireToolCall {
    function: WireFunction,
}

#[derive(Deserialize)]
struct WireFunction {
    name: String,
    arguments: String,
}

#[async_trait]
impl ChatBackend for OpenAiBackend {
    async fn complete(&self, request: &CompletionRequest) -> Result<Completion, BackendError> {
        let tools = request
            .tools
            .iter()
            .map(|tool| {
                serde_json::json!({
                    "type": "function",
                    "function": {
                        "name": tool.name,
                        "description": tool.description,
                        "parameters": tool.parameters,
                        "strict": true,
                    }
                })
            })
            .collect();

        let body = WireRequest {
            model: &request.model,
            messages: &request.messages,
            temperature: request.temperature,
            max_tokens: request.max_tokens,
            tools,
            parallel_tool_calls: true,
        };

        let response = self
            .http
            .post(format!("{}/v1/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| BackendError::RequestFailed {
                reason: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(BackendError::RequestFailed {
                reason: format!("status {status}: {detail}"),
            });
        }

        let parsed: WireResponse =
            response
                .json()
                .await
                .map_err(|e| BackendError::ResponseParseFailed {
                    reason: e.to_string(),
                })?;

        let choice = parsed
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| BackendError::ResponseParseFailed {
                reason: "response carried no choices".to_string(),
            })?;

        Ok(Completion {
            content: choice.message.content,
            tool_calls: choice
                .message
                .tool_calls
                .into_iter()
                .map(|call| ToolCall::new(call.function.name, call.function.arguments))
                .collect(),
        })
    }
}
