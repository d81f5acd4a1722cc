use futures::future::join_all;
use tokio::sync::Semaphore;

use crate::application::ports::LlmClientError;
use crate::domain::{ChunkResult, ModelRecord};

use super::lenient_json::{BracketMode, into_elements, try_parse_json};
use super::model_dispatcher::ModelDispatcher;

/// Issues one model call per unit, waits for every call to settle, and keeps
/// results in input order.
///
/// `max_concurrent_calls == 0` means unbounded. When there are no more units
/// than the cap, no limiter is created at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FanOutCoordinator {
    max_concurrent_calls: usize,
    mode: BracketMode,
}

impl FanOutCoordinator {
    pub fn new(max_concurrent_calls: usize, mode: BracketMode) -> Self {
        Self {
            max_concurrent_calls,
            mode,
        }
    }

    pub async fn run<S>(&self, dispatcher: &ModelDispatcher, units: &[S]) -> Vec<ChunkResult>
    where
        S: AsRef<str> + Sync,
    {
        let limiter = self.limiter_for(units.len());
        let limiter = limiter.as_ref();

        let calls = units.iter().enumerate().map(|(index, unit)| async move {
            let _permit = match limiter {
                Some(semaphore) => semaphore.acquire().await.ok(),
                None => None,
            };
            let outcome = dispatcher.dispatch(index, unit.as_ref()).await;
            self.settle(index, outcome)
        });

        let results = join_all(calls).await;

        tracing::info!(
            units = units.len(),
            succeeded = results.iter().filter(|r| r.is_success()).count(),
            with_items = results.iter().filter(|r| r.has_items()).count(),
            "Fan-out settled"
        );

        results
    }

    fn limiter_for(&self, unit_count: usize) -> Option<Semaphore> {
        (self.max_concurrent_calls > 0 && unit_count > self.max_concurrent_calls)
            .then(|| Semaphore::new(self.max_concurrent_calls))
    }

    fn settle(&self, index: usize, outcome: Result<String, LlmClientError>) -> ChunkResult {
        match outcome {
            Ok(raw) => {
                let parsed = try_parse_json(&raw, self.mode).map(into_elements);
                if parsed.as_ref().is_none_or(|elements| elements.is_empty()) {
                    tracing::warn!(
                        chunk_index = index,
                        raw_chars = raw.chars().count(),
                        "No structured data in model output"
                    );
                }
                ChunkResult::fulfilled(index, raw, parsed)
            }
            Err(e) => {
                tracing::warn!(chunk_index = index, error = %e, "Model call failed");
                ChunkResult::rejected(index, e.to_string())
            }
        }
    }
}

/// Flattens settled results into records, one or more per result, in order.
pub fn merge_records<T: ModelRecord>(results: Vec<ChunkResult>) -> Vec<T> {
    results
        .into_iter()
        .flat_map(|result| result.into_records::<T>())
        .collect()
}
