use std::sync::Arc;

use crate::application::ports::{CompletionRequest, LlmClient, LlmClientError};

use super::prompts::PromptTemplate;

pub struct LegalAssistantService {
    llm_client: Arc<dyn LlmClient>,
    legal_model: String,
    letter_model: String,
}

impl LegalAssistantService {
    pub fn new(llm_client: Arc<dyn LlmClient>, legal_model: String, letter_model: String) -> Self {
        Self {
            llm_client,
            legal_model,
            letter_model,
        }
    }

    #[tracing::instrument(skip(self, question, language_note))]
    pub async fn answer_question(
        &self,
        question: &str,
        region: &str,
        language_note: Option<&str>,
    ) -> Result<String, LegalAssistantError> {
        let question = required(question, "question")?;
        let region = required(region, "region")?;

        let input = format!("Region: {region}\nQuestion: {question}");
        let template = PromptTemplate::legal_question().with_language_note(language_note);

        self.complete(&self.legal_model, &template, &input).await
    }

    #[tracing::instrument(skip(self, context, language_note))]
    pub async fn draft_dispute_letter(
        &self,
        context: &str,
        language_note: Option<&str>,
    ) -> Result<String, LegalAssistantError> {
        let context = required(context, "context")?;
        let template = PromptTemplate::dispute_letter().with_language_note(language_note);

        self.complete(&self.letter_model, &template, context).await
    }

    async fn complete(
        &self,
        model: &str,
        template: &PromptTemplate,
        input: &str,
    ) -> Result<String, LegalAssistantError> {
        let (system_prompt, user_prompt) = template.render(input);
        let request = CompletionRequest::new(model, system_prompt, user_prompt);

        let answer = self.llm_client.complete(&request).await?;
        tracing::info!(model, answer_chars = answer.chars().count(), "Completion received");

        Ok(answer)
    }
}

fn required<'a>(value: &'a str, field: &'static str) -> Result<&'a str, LegalAssistantError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(LegalAssistantError::MissingField(field))
    } else {
        Ok(trimmed)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum LegalAssistantError {
    #[error("missing {0}")]
    MissingField(&'static str),
    #[error(transparent)]
    Completion(#[from] LlmClientError),
}
