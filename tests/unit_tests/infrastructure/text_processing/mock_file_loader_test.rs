use condo_advocate::application::ports::FileLoader;
use condo_advocate::domain::{ContentType, Document};
use condo_advocate::infrastructure::text_processing::MockFileLoader;

#[tokio::test]
async fn given_utf8_bytes_when_extracting_then_returns_single_page_text() {
    let document = Document::new("fees.pdf".to_string(), ContentType::Pdf, 9);

    let extracted = MockFileLoader
        .extract_text(b"Dues 100$", &document)
        .await
        .unwrap();

    assert_eq!(extracted.text, "Dues 100$");
    assert_eq!(extracted.page_count, 1);
    assert!(extracted.is_sufficient(5));
}

#[tokio::test]
async fn given_invalid_utf8_when_extracting_then_fails() {
    let document = Document::new("fees.pdf".to_string(), ContentType::Pdf, 2);

    assert!(MockFileLoader.extract_text(&[0xff, 0xfe], &document).await.is_err());
}
