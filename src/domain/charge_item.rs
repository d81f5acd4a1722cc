use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};

use super::model_record::ModelRecord;

pub const UNKNOWN_CATEGORY: &str = "Unknown";
pub const ERROR_CATEGORY: &str = "Error";
pub const NO_STRUCTURED_DATA: &str = "No structured data found in this chunk";
pub const MODEL_CALL_FAILED: &str = "Model call failed";
pub const MALFORMED_ITEM: &str = "Malformed item in model output";

/// One itemized charge extracted from an assessment document.
///
/// Placeholder records carry `raw_output` or `error` so an operator can see
/// what the model returned for a chunk that produced nothing usable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChargeItem {
    pub category: String,
    pub description: String,
    #[serde(serialize_with = "serialize_amount")]
    pub amount: f64,
    pub questionable: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw_output: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ChargeItem {
    pub fn new(
        category: impl Into<String>,
        description: impl Into<String>,
        amount: f64,
        questionable: bool,
    ) -> Self {
        Self {
            category: category.into(),
            description: description.into(),
            amount,
            questionable,
            raw_output: None,
            error: None,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        self.raw_output.is_some() || self.error.is_some()
    }

    fn from_object(object: &Map<String, Value>) -> Self {
        Self::new(
            text_field(object, "category").unwrap_or_else(|| UNKNOWN_CATEGORY.to_string()),
            text_field(object, "description").unwrap_or_default(),
            parse_amount(object.get("amount")),
            parse_flag(object.get("questionable")),
        )
    }
}

impl ModelRecord for ChargeItem {
    fn from_element(element: &Value) -> Option<Self> {
        element.as_object().map(Self::from_object)
    }

    fn no_structured_data(raw_output: String) -> Self {
        Self {
            raw_output: Some(raw_output),
            ..Self::new(UNKNOWN_CATEGORY, NO_STRUCTURED_DATA, 0.0, true)
        }
    }

    fn call_failed(error: String) -> Self {
        Self {
            error: Some(error),
            ..Self::new(ERROR_CATEGORY, MODEL_CALL_FAILED, 0.0, true)
        }
    }

    fn malformed(element: &Value) -> Self {
        Self {
            raw_output: Some(element.to_string()),
            ..Self::new(UNKNOWN_CATEGORY, MALFORMED_ITEM, 0.0, true)
        }
    }
}

fn text_field(object: &Map<String, Value>, key: &str) -> Option<String> {
    match object.get(key)? {
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Amounts arrive as numbers or as text such as `"$1,200.50"`. Anything that
/// does not resolve to a finite, non-negative number becomes zero.
pub fn parse_amount(value: Option<&Value>) -> f64 {
    let amount = match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => parse_amount_text(s),
        _ => None,
    };

    amount
        .filter(|a| a.is_finite() && *a >= 0.0)
        .unwrap_or(0.0)
}

const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Whole amounts go out as integers, so `100` round-trips as `100`.
pub(crate) fn serialize_amount<S: Serializer>(
    amount: &f64,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    if amount.fract() == 0.0 && amount.abs() < MAX_EXACT_INTEGER {
        serializer.serialize_i64(*amount as i64)
    } else {
        serializer.serialize_f64(*amount)
    }
}

fn parse_amount_text(text: &str) -> Option<f64> {
    let cleaned: String = text
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect();

    cleaned.parse().ok()
}

fn parse_flag(value: Option<&Value>) -> bool {
    match value {
        Some(Value::Bool(b)) => *b,
        Some(Value::String(s)) => s.trim().eq_ignore_ascii_case("true"),
        _ => false,
    }
}
