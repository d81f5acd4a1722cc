use std::sync::Arc;

use condo_advocate::application::services::OcrFallback;
use condo_advocate::domain::{ContentType, Document, OcrLanguage};
use condo_advocate::infrastructure::text_processing::{MockOcrEngine, MockRasterizer};

fn pdf() -> Document {
    Document::new("scan.pdf".to_string(), ContentType::Pdf, 3)
}

fn fallback(page_count: usize, pages: Vec<Option<&str>>, max_pages: usize) -> OcrFallback {
    OcrFallback::new(
        Arc::new(MockRasterizer { page_count }),
        Arc::new(MockOcrEngine {
            pages: pages.into_iter().map(|p| p.map(String::from)).collect(),
        }),
        max_pages,
    )
}

#[tokio::test]
async fn given_scanned_pages_when_recognizing_then_joins_texts_in_page_order() {
    let ocr = fallback(2, vec![Some("Page one fees"), Some("  Page two fees \n")], 50);

    let text = ocr
        .extract_text_with_ocr(b"%PDF", &pdf(), OcrLanguage::English, 2)
        .await;

    assert_eq!(text, "Page one fees\n\nPage two fees");
}

#[tokio::test]
async fn given_failing_page_when_recognizing_then_skips_it() {
    let ocr = fallback(3, vec![Some("first"), None, Some("third")], 50);

    let text = ocr
        .extract_text_with_ocr(b"%PDF", &pdf(), OcrLanguage::French, 3)
        .await;

    assert_eq!(text, "first\n\nthird");
}

#[tokio::test]
async fn given_page_cap_when_recognizing_then_stops_at_cap() {
    let ocr = fallback(3, vec![Some("first"), Some("second"), Some("third")], 2);

    let text = ocr
        .extract_text_with_ocr(b"%PDF", &pdf(), OcrLanguage::English, 3)
        .await;

    assert_eq!(text, "first\n\nsecond");
}

#[tokio::test]
async fn given_unknown_page_count_when_recognizing_then_uses_cap() {
    let ocr = fallback(3, vec![Some("first"), Some("second"), Some("third")], 50);

    let text = ocr
        .extract_text_with_ocr(b"%PDF", &pdf(), OcrLanguage::English, 0)
        .await;

    assert_eq!(text, "first\n\nsecond\n\nthird");
}

#[tokio::test]
async fn given_image_upload_when_recognizing_then_reads_it_as_single_page() {
    let ocr = fallback(0, vec![Some("Receipt total 75.00")], 50);
    let image = Document::new("receipt.png".to_string(), ContentType::Png, 4);

    let text = ocr
        .extract_text_with_ocr(b"\x89PNG", &image, OcrLanguage::English, 1)
        .await;

    assert_eq!(text, "Receipt total 75.00");
}

#[tokio::test]
async fn given_blank_pages_when_recognizing_then_returns_empty_text() {
    let ocr = OcrFallback::new(
        Arc::new(MockRasterizer { page_count: 2 }),
        Arc::new(MockOcrEngine::silent()),
        50,
    );

    let text = ocr
        .extract_text_with_ocr(b"%PDF", &pdf(), OcrLanguage::English, 2)
        .await;

    assert!(text.is_empty());
}
