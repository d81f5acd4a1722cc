mod mock_file_loader;
mod mock_ocr;
mod pdf_adapter;
mod pdf_rasterizer;
mod pdfium_binding;
mod vlm_ocr_engine;

pub use mock_file_loader::MockFileLoader;
pub use mock_ocr::{MockOcrEngine, MockRasterizer};
pub use pdf_adapter::PdfAdapter;
pub use pdf_rasterizer::PdfiumRasterizer;
pub use vlm_ocr_engine::{OCR_PROMPT, VlmOcrEngine};
