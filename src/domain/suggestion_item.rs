use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::charge_item::{ERROR_CATEGORY, serialize_amount};
use super::model_record::ModelRecord;

pub const SUGGESTIONS_UNPARSEABLE: &str = "Failed to parse suggestions JSON";
pub const SUGGESTION_CALL_FAILED: &str = "Model call failed";
pub const MALFORMED_SUGGESTION: &str = "Malformed suggestion in model output";

/// A cost-saving idea produced for a batch of charge items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuggestionItem {
    pub suggestion: String,
    pub category: String,
    #[serde(serialize_with = "serialize_amount")]
    pub estimated_savings: f64,
    #[serde(
        rename = "rawOutput",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub raw_output: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SuggestionItem {
    pub fn new(
        suggestion: impl Into<String>,
        category: impl Into<String>,
        estimated_savings: f64,
    ) -> Self {
        Self {
            suggestion: suggestion.into(),
            category: category.into(),
            estimated_savings,
            raw_output: None,
            error: None,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        self.category == ERROR_CATEGORY && (self.raw_output.is_some() || self.error.is_some())
    }
}

impl ModelRecord for SuggestionItem {
    fn from_element(element: &Value) -> Option<Self> {
        let suggestion = element.get("suggestion")?.as_str()?;
        let category = element.get("category")?.as_str()?;
        let estimated_savings = element.get("estimated_savings")?.as_f64()?;

        if suggestion.trim().is_empty() || category.trim().is_empty() {
            return None;
        }

        Some(Self::new(suggestion, category, estimated_savings))
    }

    fn no_structured_data(raw_output: String) -> Self {
        Self {
            raw_output: Some(raw_output),
            ..Self::new(SUGGESTIONS_UNPARSEABLE, ERROR_CATEGORY, 0.0)
        }
    }

    fn call_failed(error: String) -> Self {
        Self {
            error: Some(error),
            ..Self::new(SUGGESTION_CALL_FAILED, ERROR_CATEGORY, 0.0)
        }
    }

    fn malformed(element: &Value) -> Self {
        Self {
            raw_output: Some(element.to_string()),
            ..Self::new(MALFORMED_SUGGESTION, ERROR_CATEGORY, 0.0)
        }
    }
}
