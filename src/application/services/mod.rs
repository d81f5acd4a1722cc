mod backend_pool;
mod document_analysis_service;
mod fan_out;
mod legal_assistant_service;
mod lenient_json;
mod model_dispatcher;
mod ocr_fallback;
mod prompts;
mod suggestion_service;
mod text_chunker;

pub use backend_pool::{BackendPool, BackendPoolError, RoundRobinBackendPool};
pub use document_analysis_service::{
    AnalysisError, DEFAULT_MIN_NATIVE_TEXT_LENGTH, DocumentAnalysisService,
};
pub use fan_out::{FanOutCoordinator, merge_records};
pub use legal_assistant_service::{LegalAssistantError, LegalAssistantService};
pub use lenient_json::{
    BracketMode, into_elements, strip_newlines, strip_trailing_commas, try_parse_json,
};
pub use model_dispatcher::ModelDispatcher;
pub use ocr_fallback::{DEFAULT_MAX_OCR_PAGES, OcrFallback};
pub use prompts::PromptTemplate;
pub use suggestion_service::{DEFAULT_MAX_ITEMS_PER_BATCH, SuggestionError, SuggestionService};
pub use text_chunker::{DEFAULT_MAX_CHUNK_LENGTH, DEFAULT_MIN_CHUNK_CONTENT, TextChunker};
