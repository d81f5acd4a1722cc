use std::time::Duration;

use async_trait::async_trait;
use base64::{Engine as _, engine::general_purpose};
use reqwest::Client;
use serde::Deserialize;

use crate::application::ports::{OcrEngine, OcrError};
use crate::domain::{OcrLanguage, PageImage};
use crate::presentation::config::OcrSettings;

pub const OCR_PROMPT: &str = "You are an OCR engine for condo and HOA assessment documents. \
Transcribe all text visible on this page exactly as written, keeping line breaks, table rows, \
amounts and currency symbols. Do not summarize, translate or add commentary. \
Output only the transcribed text.";

pub struct VlmOcrEngine {
    client: Client,
    base_url: String,
    model: String,
    api_key: String,
}

impl VlmOcrEngine {
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(300);

    pub fn new(
        base_url: &str,
        model: &str,
        api_key: &str,
        timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            model: model.to_string(),
            api_key: api_key.to_string(),
        })
    }

    /// Endpoint and key default to the text model's when not set for OCR.
    pub fn from_settings(
        settings: &OcrSettings,
        fallback_base_url: &str,
        fallback_api_key: &str,
    ) -> Result<Self, reqwest::Error> {
        Self::new(
            settings.base_url.as_deref().unwrap_or(fallback_base_url),
            &settings.model,
            settings.api_key.as_deref().unwrap_or(fallback_api_key),
            Duration::from_secs(settings.timeout_secs),
        )
    }

    fn prompt_for(language: OcrLanguage) -> String {
        format!(
            "{OCR_PROMPT}\nThe document is written in {} (language pack `{}`).",
            language.name(),
            language.code()
        )
    }
}

#[derive(Deserialize)]
struct ChatCompletion {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChatMessage,
}

#[derive(Deserialize)]
struct ChatMessage {
    content: Option<String>,
}

#[async_trait]
impl OcrEngine for VlmOcrEngine {
    async fn recognize(&self, page: &PageImage, language: OcrLanguage) -> Result<String, OcrError> {
        let page_index = page.page_index;
        let encoded = general_purpose::STANDARD.encode(&page.bytes);
        let data_uri = format!("data:{};base64,{encoded}", page.mime);

        let body = serde_json::json!({
            "model": self.model,
            "messages": [
                {
                    "role": "user",
                    "content": [
                        { "type": "image_url", "image_url": { "url": data_uri } },
                        { "type": "text", "text": Self::prompt_for(language) }
                    ]
                }
            ],
            "temperature": 0.0,
            "stream": false
        });

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| OcrError::RequestFailed {
                page: page_index,
                message: e.to_string(),
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            return Err(OcrError::RequestFailed {
                page: page_index,
                message: format!("{status}: {text}"),
            });
        }

        let completion: ChatCompletion =
            response.json().await.map_err(|e| OcrError::InvalidResponse {
                page: page_index,
                message: e.to_string(),
            })?;

        let text = completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .unwrap_or_default();

        tracing::debug!(page_index, text_chars = text.chars().count(), "Page recognized");
        Ok(text)
    }
}
