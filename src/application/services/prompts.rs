pub const INPUT_PLACEHOLDER: &str = "{input}";

pub const ANALYSIS_SYSTEM_PROMPT: &str = "You're a helpful assistant for condo owners.";
pub const ANALYSIS_USER_PROMPT: &str = "Here's a section of a condo fee document:\n\n{input}\n\n\
Extract every itemized charge with its amount, category and a short description, and flag \
questionable items (for example vague fees or unexplained legal and administrative charges). \
Respond with only a JSON array of objects shaped as \
{\"category\": string, \"description\": string, \"amount\": number, \"questionable\": boolean}.";

pub const SUGGESTION_SYSTEM_PROMPT: &str =
    "You provide precise, practical cost-saving suggestions in JSON format.";
pub const SUGGESTION_USER_PROMPT: &str = "You're a condo cost consultant. Review these charges and \
suggest actionable cost-saving ideas for the owner. Return a JSON array where each item has:\n\
- \"suggestion\" (string) describing the cost-saving idea,\n\
- \"category\" (string) categorizing the suggestion,\n\
- \"estimated_savings\" (number) estimating potential savings in dollars.\n\n\
Example:\n\
[\n  {\n    \"suggestion\": \"Negotiate landscaping contract to reduce monthly fee.\",\n    \
\"category\": \"Contract Negotiation\",\n    \"estimated_savings\": 5000\n  }\n]\n\n\
Here is the data to analyze:\n\n{input}";

pub const LEGAL_SYSTEM_PROMPT: &str = "You are a helpful legal assistant.";
pub const LEGAL_USER_PROMPT: &str = "You are a legal assistant helping condo owners with \
region-specific guidance.\n\n{input}\n\nProvide a clear, structured answer for a layperson.";

pub const LETTER_SYSTEM_PROMPT: &str =
    "You are a helpful legal assistant who drafts formal letters.";
pub const LETTER_USER_PROMPT: &str = "Based on the following context, generate a formal dispute \
letter. Use {{placeholders}} for user-provided details like dates, names, amounts, or unit \
numbers. Do not include sections for sender or recipient addresses or contact information at the \
top of the letter. Return only the letter content, no extra commentary.\n\n{input}";

/// System prompt plus a user template holding one `{input}` slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptTemplate {
    system: String,
    user: String,
    language_note: Option<String>,
}

impl PromptTemplate {
    pub fn new(system: impl Into<String>, user: impl Into<String>) -> Self {
        Self {
            system: system.into(),
            user: user.into(),
            language_note: None,
        }
    }

    pub fn analysis() -> Self {
        Self::new(ANALYSIS_SYSTEM_PROMPT, ANALYSIS_USER_PROMPT)
    }

    pub fn suggestions() -> Self {
        Self::new(SUGGESTION_SYSTEM_PROMPT, SUGGESTION_USER_PROMPT)
    }

    pub fn legal_question() -> Self {
        Self::new(LEGAL_SYSTEM_PROMPT, LEGAL_USER_PROMPT)
    }

    pub fn dispute_letter() -> Self {
        Self::new(LETTER_SYSTEM_PROMPT, LETTER_USER_PROMPT)
    }

    pub fn with_language_note(mut self, note: Option<&str>) -> Self {
        self.language_note = note
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .map(String::from);
        self
    }

    pub fn render(&self, input: &str) -> (String, String) {
        let user = self.user.replace(INPUT_PLACEHOLDER, input);
        match &self.language_note {
            Some(note) => (format!("{} {}", self.system, note), format!("{user}\n\n{note}")),
            None => (self.system.clone(), user),
        }
    }
}
