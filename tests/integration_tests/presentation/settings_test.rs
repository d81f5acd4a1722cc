use condo_advocate::presentation::config::{Environment, Settings};

#[test]
fn given_no_overrides_when_loading_then_uses_built_in_defaults() {
    let settings = Settings::load(Environment::Test).unwrap();

    assert_eq!(settings.chunking.max_chunk_length, 8000);
    assert_eq!(settings.chunking.min_chunk_content, 10);
    assert_eq!(settings.chunking.max_items_per_batch, 8);
    assert_eq!(settings.extraction.min_native_text_length, 20);
    assert_eq!(settings.extraction.ocr.max_pages, 50);
    assert_eq!(settings.llm.analysis_models.len(), 3);
    assert_eq!(settings.llm.analysis_models[0], "openai/gpt-4o");
    assert_eq!(settings.server.max_upload_bytes, 10 * 1024 * 1024);
    assert!(!settings.scaffold.enabled);
}

#[test]
fn given_llm_settings_when_debug_printing_then_hides_api_key() {
    let mut settings = Settings::load(Environment::Test).unwrap();
    settings.llm.api_key = "ghp_secretvalue".to_string();

    let printed = format!("{:?}", settings.llm);

    assert!(!printed.contains("ghp_secretvalue"));
    assert!(printed.contains("[REDACTED]"));
}

#[test]
fn given_environment_names_when_parsing_then_accepts_known_values() {
    assert_eq!("PROD".parse::<Environment>(), Ok(Environment::Prod));
    assert_eq!(" development ".parse::<Environment>(), Ok(Environment::Local));
    assert!("staging".parse::<Environment>().is_err());
    assert_eq!(Environment::default().to_string(), "local");
}
