use std::fmt;

use config::{Config, ConfigError, File};
use serde::Deserialize;

use super::{Environment, ScaffoldConfig};

const DEFAULT_BASE_URL: &str = "https://models.github.ai/inference";
const DEFAULT_MODEL: &str = "openai/gpt-4o";
const DEFAULT_MODEL_POOL: [&str; 3] = [
    "openai/gpt-4o",
    "openai/gpt-4.1",
    "meta/Llama-3.2-11B-Vision-Instruct",
];
const CREDENTIAL_FALLBACK_VAR: &str = "GITHUB_TOKEN";

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub llm: LlmSettings,
    pub chunking: ChunkingSettings,
    pub dispatch: DispatchSettings,
    pub extraction: ExtractionSettings,
    pub logging: LoggingSettings,
    #[serde(default)]
    pub scaffold: ScaffoldConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub max_upload_bytes: usize,
}

#[derive(Clone, Deserialize)]
pub struct LlmSettings {
    pub base_url: String,
    #[serde(default)]
    pub api_key: String,
    pub analysis_models: Vec<String>,
    pub suggestion_models: Vec<String>,
    pub legal_model: String,
    pub letter_model: String,
}

impl fmt::Debug for LlmSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LlmSettings")
            .field("base_url", &self.base_url)
            .field("api_key", &redacted(Some(&self.api_key)))
            .field("analysis_models", &self.analysis_models)
            .field("suggestion_models", &self.suggestion_models)
            .field("legal_model", &self.legal_model)
            .field("letter_model", &self.letter_model)
            .finish()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChunkingSettings {
    pub max_chunk_length: usize,
    pub min_chunk_content: usize,
    pub max_items_per_batch: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DispatchSettings {
    /// `0` disables the cap.
    pub max_concurrent_calls: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExtractionSettings {
    pub min_native_text_length: usize,
    pub ocr: OcrSettings,
}

/// Vision model used as the OCR engine. Unset endpoint and key fall back to
/// the `llm` ones.
#[derive(Clone, Deserialize)]
pub struct OcrSettings {
    #[serde(default)]
    pub base_url: Option<String>,
    pub model: String,
    #[serde(default)]
    pub api_key: Option<String>,
    pub max_pages: usize,
    pub timeout_secs: u64,
}

impl fmt::Debug for OcrSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OcrSettings")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("api_key", &redacted(self.api_key.as_deref()))
            .field("max_pages", &self.max_pages)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    pub level: String,
    pub enable_json: bool,
}

impl Settings {
    /// Defaults, then `appsettings.{environment}`, then `APP__*` variables.
    pub fn load(environment: Environment) -> Result<Self, ConfigError> {
        let configuration = Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3000)?
            .set_default("server.max_upload_bytes", 10 * 1024 * 1024)?
            .set_default("llm.base_url", DEFAULT_BASE_URL)?
            .set_default("llm.api_key", "")?
            .set_default("llm.analysis_models", DEFAULT_MODEL_POOL.to_vec())?
            .set_default("llm.suggestion_models", DEFAULT_MODEL_POOL.to_vec())?
            .set_default("llm.legal_model", DEFAULT_MODEL)?
            .set_default("llm.letter_model", DEFAULT_MODEL)?
            .set_default("chunking.max_chunk_length", 8000)?
            .set_default("chunking.min_chunk_content", 10)?
            .set_default("chunking.max_items_per_batch", 8)?
            .set_default("dispatch.max_concurrent_calls", 8)?
            .set_default("extraction.min_native_text_length", 20)?
            .set_default("extraction.ocr.model", DEFAULT_MODEL)?
            .set_default("extraction.ocr.max_pages", 50)?
            .set_default("extraction.ocr.timeout_secs", 300)?
            .set_default("logging.level", "info")?
            .set_default("logging.enable_json", false)?
            .set_default("scaffold.enabled", false)?
            .set_default("scaffold.mock_response_delay_ms", 0)?
            .add_source(
                File::with_name(&format!("appsettings.{}", environment.as_str()))
                    .required(false),
            )
            .add_source(
                config::Environment::with_prefix("APP")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("llm.analysis_models")
                    .with_list_parse_key("llm.suggestion_models")
                    .try_parsing(true),
            )
            .build()?;

        let mut settings: Settings = configuration.try_deserialize()?;

        if settings.llm.api_key.trim().is_empty() {
            settings.llm.api_key = std::env::var(CREDENTIAL_FALLBACK_VAR).unwrap_or_default();
        }

        Ok(settings)
    }
}

fn redacted(value: Option<&str>) -> &'static str {
    match value {
        Some(v) if !v.is_empty() => "[REDACTED]",
        _ => "[UNSET]",
    }
}
