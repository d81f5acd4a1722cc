use axum::http::{HeaderMap, HeaderValue};

use condo_advocate::infrastructure::observability::{REQUEST_ID_HEADER, RequestId};

#[test]
fn given_request_id_header_constant_when_accessed_then_returns_correct_value() {
    assert_eq!(REQUEST_ID_HEADER, "x-request-id");
}

#[test]
fn given_incoming_header_when_resolving_then_reuses_it() {
    let mut headers = HeaderMap::new();
    headers.insert(REQUEST_ID_HEADER, HeaderValue::from_static("abc-123"));

    assert_eq!(RequestId::from_headers(&headers).as_str(), "abc-123");
}

#[test]
fn given_no_header_when_resolving_then_generates_uuid() {
    let request_id = RequestId::from_headers(&HeaderMap::new());

    assert!(uuid::Uuid::parse_str(request_id.as_str()).is_ok());
}

#[test]
fn given_oversized_header_when_resolving_then_generates_new_id() {
    let mut headers = HeaderMap::new();
    let oversized = "a".repeat(200);
    headers.insert(REQUEST_ID_HEADER, HeaderValue::from_str(&oversized).unwrap());

    let request_id = RequestId::from_headers(&headers);

    assert_ne!(request_id.as_str(), oversized);
    assert_eq!(request_id.to_string(), request_id.0);
}
