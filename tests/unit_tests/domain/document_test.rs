use condo_advocate::domain::{ContentType, Document};

#[test]
fn given_pdf_mime_when_parsing_then_returns_pdf_content_type() {
    assert_eq!(
        ContentType::from_mime("application/pdf"),
        Some(ContentType::Pdf)
    );
}

#[test]
fn given_mime_with_parameters_when_parsing_then_ignores_parameters() {
    assert_eq!(
        ContentType::from_mime("image/PNG; charset=binary"),
        Some(ContentType::Png)
    );
}

#[test]
fn given_unknown_mime_when_parsing_then_returns_none() {
    assert_eq!(ContentType::from_mime("application/unknown"), None);
}

#[test]
fn given_octet_stream_when_detecting_then_falls_back_to_extension() {
    assert_eq!(
        ContentType::detect(Some("application/octet-stream"), "statement.JPG"),
        Some(ContentType::Jpeg)
    );
    assert_eq!(ContentType::detect(None, "fees.pdf"), Some(ContentType::Pdf));
    assert_eq!(ContentType::detect(None, "notes.txt"), None);
}

#[test]
fn given_content_types_when_checking_image_then_only_pdf_is_not_image() {
    assert!(!ContentType::Pdf.is_image());
    assert!(ContentType::Png.is_image());
    assert!(ContentType::Webp.is_image());
}

#[test]
fn given_document_when_created_then_holds_metadata() {
    let document = Document::new("fees.pdf".to_string(), ContentType::Pdf, 1024);

    assert_eq!(document.filename, "fees.pdf");
    assert_eq!(document.content_type.as_mime(), "application/pdf");
    assert_eq!(document.size_bytes, 1024);
}
