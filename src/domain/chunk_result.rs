use serde_json::Value;

use super::model_record::ModelRecord;

/// Terminal outcome of one unit of model work.
#[derive(Debug, Clone, PartialEq)]
pub struct ChunkResult {
    pub source_index: usize,
    pub raw_output: Option<String>,
    pub parsed: Option<Vec<Value>>,
    pub error: Option<String>,
}

impl ChunkResult {
    pub fn fulfilled(source_index: usize, raw_output: String, parsed: Option<Vec<Value>>) -> Self {
        Self {
            source_index,
            raw_output: Some(raw_output),
            parsed,
            error: None,
        }
    }

    pub fn rejected(source_index: usize, error: String) -> Self {
        Self {
            source_index,
            raw_output: None,
            parsed: None,
            error: Some(error),
        }
    }

    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }

    pub fn has_items(&self) -> bool {
        self.parsed.as_ref().is_some_and(|items| !items.is_empty())
    }

    pub fn into_records<T: ModelRecord>(self) -> Vec<T> {
        if let Some(error) = self.error {
            return vec![T::call_failed(error)];
        }

        match self.parsed {
            Some(elements) if !elements.is_empty() => elements
                .iter()
                .map(|element| T::from_element(element).unwrap_or_else(|| T::malformed(element)))
                .collect(),
            _ => vec![T::no_structured_data(self.raw_output.unwrap_or_default())],
        }
    }
}
