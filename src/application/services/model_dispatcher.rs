use std::sync::Arc;

use crate::application::ports::{CompletionRequest, LlmClient, LlmClientError};

use super::backend_pool::BackendPool;
use super::prompts::PromptTemplate;

pub struct ModelDispatcher {
    client: Arc<dyn LlmClient>,
    pool: Arc<dyn BackendPool>,
    template: PromptTemplate,
}

impl ModelDispatcher {
    pub fn new(
        client: Arc<dyn LlmClient>,
        pool: Arc<dyn BackendPool>,
        template: PromptTemplate,
    ) -> Self {
        Self {
            client,
            pool,
            template,
        }
    }

    pub fn backend_for(&self, index: usize) -> &str {
        self.pool.select(index)
    }

    pub async fn dispatch(&self, index: usize, unit: &str) -> Result<String, LlmClientError> {
        let backend = self.backend_for(index);
        let (system_prompt, user_prompt) = self.template.render(unit);

        tracing::debug!(
            chunk_index = index,
            backend,
            input_chars = unit.chars().count(),
            "Dispatching model call"
        );

        let request = CompletionRequest::new(backend, system_prompt, user_prompt);
        self.client.complete(&request).await
    }
}
