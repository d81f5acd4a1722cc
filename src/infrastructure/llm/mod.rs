mod chat_completions_client;
mod mock_llm_client;

pub use chat_completions_client::{
    ChatCompletionsClient, UNKNOWN_MODEL_ERROR, backend_error_message,
};
pub use mock_llm_client::{MockLlmClient, MockReply};
