use serde_json::Value;

/// A record shape produced by a fan-out pipeline.
///
/// Every chunk of work contributes at least one record: real items when the
/// model output parses, otherwise exactly one placeholder.
pub trait ModelRecord: Sized {
    /// Accepts one element of a parsed model response, or `None` when the
    /// element does not have the expected shape.
    fn from_element(element: &Value) -> Option<Self>;

    fn no_structured_data(raw_output: String) -> Self;

    fn call_failed(error: String) -> Self;

    fn malformed(element: &Value) -> Self;
}
