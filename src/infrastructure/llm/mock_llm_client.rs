use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use crate::application::ports::{CompletionRequest, LlmClient, LlmClientError};

#[derive(Debug, Clone)]
pub enum MockReply {
    Text(String),
    Fail(String),
}

pub struct MockLlmClient {
    default_reply: MockReply,
    replies: HashMap<String, MockReply>,
    delays: HashMap<String, Duration>,
    credential: bool,
    calls: Mutex<Vec<CompletionRequest>>,
}

impl MockLlmClient {
    pub fn replying(text: impl Into<String>) -> Self {
        Self::with_default(MockReply::Text(text.into()))
    }

    pub fn failing(message: impl Into<String>) -> Self {
        Self::with_default(MockReply::Fail(message.into()))
    }

    fn with_default(default_reply: MockReply) -> Self {
        Self {
            default_reply,
            replies: HashMap::new(),
            delays: HashMap::new(),
            credential: true,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn with_model_reply(mut self, model: &str, reply: MockReply) -> Self {
        self.replies.insert(model.to_string(), reply);
        self
    }

    pub fn with_model_delay(mut self, model: &str, delay: Duration) -> Self {
        self.delays.insert(model.to_string(), delay);
        self
    }

    pub fn without_credential(mut self) -> Self {
        self.credential = false;
        self
    }

    pub fn calls(&self) -> Vec<CompletionRequest> {
        self.calls
            .lock()
            .map(|calls| calls.clone())
            .unwrap_or_default()
    }
}

#[async_trait::async_trait]
impl LlmClient for MockLlmClient {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, LlmClientError> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(request.clone());
        }

        if let Some(delay) = self.delays.get(&request.model) {
            tokio::time::sleep(*delay).await;
        }

        match self.replies.get(&request.model).unwrap_or(&self.default_reply) {
            MockReply::Text(text) => Ok(text.clone()),
            MockReply::Fail(message) => Err(LlmClientError::Backend(message.clone())),
        }
    }

    fn has_credential(&self) -> bool {
        self.credential
    }
}
