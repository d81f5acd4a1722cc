mod analyze_pdf;
mod error;
mod generate_suggestions;
mod health;
mod legal;
mod scaffold;

pub use analyze_pdf::analyze_pdf_handler;
pub use error::ErrorResponse;
pub use generate_suggestions::{
    SuggestionsRequest, SuggestionsResponse, generate_suggestions_handler,
};
pub use health::{HealthResponse, health_handler};
pub use legal::{
    DisputeLetterRequest, DisputeLetterResponse, LegalAnswerResponse, LegalQuestionRequest,
    analyze_legal_handler, generate_dispute_letter_handler,
};
pub use scaffold::sample_breakdown;
