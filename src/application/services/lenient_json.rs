use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;
use serde_json::{Map, Value};

static TRAILING_COMMA: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r",(\s*[}\]])").expect("trailing comma pattern is valid"));

/// Which brackets may open the JSON payload embedded in model output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BracketMode {
    ArrayOnly,
    ArrayOrObject,
}

impl BracketMode {
    /// Slices from the first opening bracket to the last closing one.
    pub fn slice<'a>(&self, raw: &'a str) -> Option<&'a str> {
        let (start, end) = match self {
            Self::ArrayOnly => (raw.find('[')?, raw.rfind(']')?),
            Self::ArrayOrObject => {
                let start = [raw.find('['), raw.find('{')].into_iter().flatten().min()?;
                let end = [raw.rfind(']'), raw.rfind('}')].into_iter().flatten().max()?;
                (start, end)
            }
        };

        (start < end).then(|| &raw[start..=end])
    }

    fn accepts(&self, value: &Value) -> bool {
        match self {
            Self::ArrayOnly => value.is_array(),
            Self::ArrayOrObject => value.is_array() || value.is_object(),
        }
    }
}

type RepairPass = fn(&str) -> Cow<'_, str>;

const REPAIR_PASSES: [RepairPass; 3] = [
    keep_as_is,
    strip_trailing_commas,
    strip_trailing_commas_and_newlines,
];

fn keep_as_is(raw: &str) -> Cow<'_, str> {
    Cow::Borrowed(raw)
}

pub fn strip_trailing_commas(raw: &str) -> Cow<'_, str> {
    TRAILING_COMMA.replace_all(raw, "$1")
}

pub fn strip_newlines(raw: &str) -> Cow<'_, str> {
    if raw.contains(['\n', '\r']) {
        Cow::Owned(raw.replace(['\n', '\r'], ""))
    } else {
        Cow::Borrowed(raw)
    }
}

fn strip_trailing_commas_and_newlines(raw: &str) -> Cow<'_, str> {
    let without_commas = strip_trailing_commas(raw);
    Cow::Owned(strip_newlines(&without_commas).into_owned())
}

/// Best-effort extraction of a JSON payload from free-text model output.
///
/// Returns `None` when nothing parseable is found; callers treat that as
/// "no structured data", not as a failure.
pub fn try_parse_json(raw: &str, mode: BracketMode) -> Option<Value> {
    REPAIR_PASSES.iter().find_map(|repair| {
        let repaired = repair(raw);
        let slice = mode.slice(&repaired)?;
        serde_json::from_str::<Value>(slice)
            .ok()
            .filter(|value| mode.accepts(value))
    })
}

const WRAPPER_KEYS: [&str; 5] = ["items", "charges", "breakdown", "suggestions", "data"];

/// Flattens a parsed payload into its elements. An object wrapping an array
/// (`{"items": [...]}`) yields the array; any other object is one element.
///
/// With several array fields, a known wrapper key wins, then the array
/// holding the most objects.
pub fn into_elements(value: Value) -> Vec<Value> {
    match value {
        Value::Array(items) => items,
        Value::Object(mut object) => match wrapped_array_key(&object) {
            Some(key) => match object.remove(&key) {
                Some(Value::Array(items)) => items,
                _ => vec![Value::Object(object)],
            },
            None => vec![Value::Object(object)],
        },
        other => vec![other],
    }
}

fn wrapped_array_key(object: &Map<String, Value>) -> Option<String> {
    let known = WRAPPER_KEYS
        .iter()
        .find(|key| object.get(**key).is_some_and(Value::is_array))
        .map(|key| key.to_string());

    known.or_else(|| {
        object
            .iter()
            .filter_map(|(key, v)| v.as_array().map(|items| (key, items)))
            .max_by_key(|(_, items)| {
                let objects = items.iter().filter(|item| item.is_object()).count();
                (objects, items.len())
            })
            .map(|(key, _)| key.clone())
    })
}
