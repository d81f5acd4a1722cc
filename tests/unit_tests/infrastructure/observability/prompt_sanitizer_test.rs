use condo_advocate::infrastructure::observability::sanitize_prompt;

#[test]
fn given_empty_text_when_sanitizing_then_returns_marker() {
    assert_eq!(sanitize_prompt("   "), "[EMPTY]");
}

#[test]
fn given_long_text_when_sanitizing_then_truncates_on_char_boundary() {
    let text = "é".repeat(150);

    let sanitized = sanitize_prompt(&text);

    assert!(sanitized.starts_with(&"é".repeat(100)));
    assert!(sanitized.ends_with("(150 chars total)"));
}

#[test]
fn given_credentials_when_sanitizing_then_redacts_them() {
    let sanitized = sanitize_prompt("Authorization: Bearer ghp_abcdef123456 api_key=hunter2");

    assert!(!sanitized.contains("ghp_abcdef123456"));
    assert!(!sanitized.contains("hunter2"));
    assert!(sanitized.contains("Bearer [REDACTED]"));
    assert!(sanitized.contains("api_key=[REDACTED]"));
}

#[test]
fn given_plain_text_when_sanitizing_then_keeps_it() {
    assert_eq!(sanitize_prompt(" Pool levy 850 $ "), "Pool levy 850 $");
}
