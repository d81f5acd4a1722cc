use condo_advocate::infrastructure::llm::{UNKNOWN_MODEL_ERROR, backend_error_message};

#[test]
fn given_structured_error_body_when_extracting_then_returns_message() {
    let body = r#"{"error": {"code": "unavailable_model", "message": "Unknown model: foo"}}"#;

    assert_eq!(backend_error_message(body), "Unknown model: foo");
}

#[test]
fn given_plain_error_body_when_extracting_then_returns_string() {
    assert_eq!(
        backend_error_message(r#"{"error": "Bad credentials"}"#),
        "Bad credentials"
    );
}

#[test]
fn given_body_without_message_when_extracting_then_returns_generic_error() {
    assert_eq!(
        backend_error_message(r#"{"error": {"code": "x"}}"#),
        UNKNOWN_MODEL_ERROR
    );
    assert_eq!(backend_error_message("<html>502</html>"), UNKNOWN_MODEL_ERROR);
    assert_eq!(backend_error_message(""), UNKNOWN_MODEL_ERROR);
}
