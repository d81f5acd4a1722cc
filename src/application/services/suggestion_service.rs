use std::sync::Arc;

use serde_json::Value;

use crate::application::ports::LlmClient;
use crate::domain::SuggestionItem;

use super::backend_pool::BackendPool;
use super::fan_out::{FanOutCoordinator, merge_records};
use super::model_dispatcher::ModelDispatcher;
use super::prompts::PromptTemplate;

pub const DEFAULT_MAX_ITEMS_PER_BATCH: usize = 8;

pub struct SuggestionService {
    llm_client: Arc<dyn LlmClient>,
    backend_pool: Arc<dyn BackendPool>,
    coordinator: FanOutCoordinator,
    max_items_per_batch: usize,
}

impl SuggestionService {
    pub fn new(
        llm_client: Arc<dyn LlmClient>,
        backend_pool: Arc<dyn BackendPool>,
        coordinator: FanOutCoordinator,
        max_items_per_batch: usize,
    ) -> Self {
        Self {
            llm_client,
            backend_pool,
            coordinator,
            max_items_per_batch: max_items_per_batch.max(1),
        }
    }

    #[tracing::instrument(skip(self, breakdown, language_note), fields(items = breakdown.len()))]
    pub async fn suggest(
        &self,
        breakdown: &[Value],
        language_note: Option<&str>,
    ) -> Result<Vec<SuggestionItem>, SuggestionError> {
        if breakdown.is_empty() {
            return Err(SuggestionError::EmptyBreakdown);
        }

        if !self.llm_client.has_credential() {
            return Err(SuggestionError::MissingCredential);
        }

        let batches = breakdown
            .chunks(self.max_items_per_batch)
            .map(|batch| serde_json::to_string_pretty(batch))
            .collect::<Result<Vec<_>, _>>()?;

        tracing::info!(batch_count = batches.len(), "Dispatching suggestion batches");

        let dispatcher = ModelDispatcher::new(
            Arc::clone(&self.llm_client),
            Arc::clone(&self.backend_pool),
            PromptTemplate::suggestions().with_language_note(language_note),
        );

        let results = self.coordinator.run(&dispatcher, &batches).await;
        Ok(merge_records(results))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SuggestionError {
    #[error("missing or invalid breakdown")]
    EmptyBreakdown,
    #[error("missing inference credential")]
    MissingCredential,
    #[error("failed to serialize breakdown: {0}")]
    Serialization(#[from] serde_json::Error),
}
