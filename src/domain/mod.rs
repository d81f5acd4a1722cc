mod charge_item;
mod chunk_result;
mod document;
mod extracted_text;
mod model_record;
mod ocr_language;
mod suggestion_item;

pub use charge_item::{
    ChargeItem, ERROR_CATEGORY, MALFORMED_ITEM, MODEL_CALL_FAILED, NO_STRUCTURED_DATA,
    UNKNOWN_CATEGORY, parse_amount,
};
pub use chunk_result::ChunkResult;
pub use document::{ContentType, Document};
pub use extracted_text::{ExtractedText, PageImage};
pub use model_record::ModelRecord;
pub use ocr_language::OcrLanguage;
pub use suggestion_item::{
    MALFORMED_SUGGESTION, SUGGESTION_CALL_FAILED, SUGGESTIONS_UNPARSEABLE, SuggestionItem,
};
