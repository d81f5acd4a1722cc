mod lenient_json_test;
mod ocr_fallback_test;
mod prompts_test;
mod text_chunker_test;

use std::sync::Arc;

use condo_advocate::application::services::{BackendPool, RoundRobinBackendPool};

pub(crate) const TEST_MODELS: [&str; 3] = ["model-a", "model-b", "model-c"];

pub(crate) fn test_pool() -> Arc<dyn BackendPool> {
    Arc::new(
        RoundRobinBackendPool::new(TEST_MODELS.iter().map(|m| m.to_string()).collect()).unwrap(),
    )
}
