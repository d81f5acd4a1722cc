use std::sync::Arc;

use crate::application::services::{
    DocumentAnalysisService, LegalAssistantService, SuggestionService,
};
use crate::presentation::config::ScaffoldConfig;

#[derive(Clone)]
pub struct AppState {
    pub analysis_service: Arc<DocumentAnalysisService>,
    pub suggestion_service: Arc<SuggestionService>,
    pub legal_assistant_service: Arc<LegalAssistantService>,
    pub scaffold_config: ScaffoldConfig,
    pub max_upload_bytes: usize,
}
