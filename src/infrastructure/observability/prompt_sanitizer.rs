use std::sync::LazyLock;

use regex::Regex;

const MAX_VISIBLE_CHARS: usize = 100;

static SECRET_PATTERNS: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    [
        (r"(?i)bearer\s+[^\s&'\x22]+", "Bearer [REDACTED]"),
        (r"\bghp_[A-Za-z0-9]+", "[REDACTED]"),
        (r"\bgithub_pat_[A-Za-z0-9_]+", "[REDACTED]"),
        (r"\bsk-[A-Za-z0-9_-]+", "[REDACTED]"),
        (
            r"(?i)\b(api_key|password|secret|token)=[^\s&'\x22]+",
            "$1=[REDACTED]",
        ),
    ]
    .into_iter()
    .filter_map(|(pattern, replacement)| Regex::new(pattern).ok().map(|re| (re, replacement)))
    .collect()
});

/// Shortens free text (prompts, model output, error bodies) for logging and
/// masks anything that looks like a credential.
pub fn sanitize_prompt(text: &str) -> String {
    let trimmed = text.trim();

    if trimmed.is_empty() {
        return String::from("[EMPTY]");
    }

    let total_chars = trimmed.chars().count();
    let visible = if total_chars > MAX_VISIBLE_CHARS {
        let head: String = trimmed.chars().take(MAX_VISIBLE_CHARS).collect();
        format!("{head}... ({total_chars} chars total)")
    } else {
        trimmed.to_string()
    };

    SECRET_PATTERNS
        .iter()
        .fold(visible, |acc, (pattern, replacement)| {
            pattern.replace_all(&acc, *replacement).into_owned()
        })
}
