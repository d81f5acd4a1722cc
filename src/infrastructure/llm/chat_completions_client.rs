use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::application::ports::{CompletionRequest, LlmClient, LlmClientError};
use crate::infrastructure::observability::sanitize_prompt;
use crate::presentation::config::LlmSettings;

pub const UNKNOWN_MODEL_ERROR: &str = "unknown model error";

pub struct ChatCompletionsClient {
    client: Client,
    base_url: String,
    api_key: String,
}

#[derive(Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ResponseMessage,
}

#[derive(Deserialize)]
struct ResponseMessage {
    #[serde(default)]
    content: Option<String>,
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: Option<ErrorDetail>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ErrorDetail {
    Structured { message: Option<String> },
    Plain(String),
}

impl ChatCompletionsClient {
    pub fn new(base_url: &str, api_key: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.trim().to_string(),
        }
    }

    pub fn from_settings(settings: &LlmSettings) -> Self {
        Self::new(&settings.base_url, &settings.api_key)
    }
}

/// Pulls the backend's own message out of an error body shaped as
/// `{"error": {"message": ...}}` or `{"error": "..."}`.
pub fn backend_error_message(body: &str) -> String {
    serde_json::from_str::<ErrorEnvelope>(body)
        .ok()
        .and_then(|envelope| envelope.error)
        .and_then(|detail| match detail {
            ErrorDetail::Structured { message } => message,
            ErrorDetail::Plain(message) => Some(message),
        })
        .filter(|message| !message.trim().is_empty())
        .unwrap_or_else(|| UNKNOWN_MODEL_ERROR.to_string())
}

#[async_trait]
impl LlmClient for ChatCompletionsClient {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, LlmClientError> {
        if !self.has_credential() {
            return Err(LlmClientError::MissingCredential);
        }

        let body = ChatCompletionRequest {
            model: &request.model,
            messages: [
                ChatMessage {
                    role: "system",
                    content: &request.system_prompt,
                },
                ChatMessage {
                    role: "user",
                    content: &request.user_prompt,
                },
            ],
        };

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| LlmClientError::ApiRequestFailed(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            tracing::warn!(
                model = %request.model,
                status = %status,
                body = %sanitize_prompt(&text),
                "Model backend returned an error"
            );
            let message = backend_error_message(&text);
            return Err(if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
                LlmClientError::RateLimited(message)
            } else {
                LlmClientError::Backend(message)
            });
        }

        let completion: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| LlmClientError::InvalidResponse(e.to_string()))?;

        completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| LlmClientError::InvalidResponse("empty choices".to_string()))
    }

    fn has_credential(&self) -> bool {
        !self.api_key.is_empty()
    }
}
