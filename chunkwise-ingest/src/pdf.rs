use thiserror::Error;

use crate::error::BoxError;

/// Turns raw PDF bytes into one string per page, in document order.
pub trait PageTextExtractor: Send + Sync {
    fn extract_page_texts(&self, bytes: &[u8]) -> Result<Vec<String>, PdfExtractError>;
}

#[derive(Debug, Error)]
pub enum PdfExtractError {
    /// The bytes are not a readable PDF document.
    #[error("malformed PDF: {0}")]
    Malformed(#[source] BoxError),
    #[error("PDF backend failure: {0}")]
    Backend(#[source] BoxError),
}

/// Extractor backed by the `pdf-extract` crate.
#[cfg(feature = "pdf")]
#[derive(Debug, Default, Clone, Copy)]
pub struct PdfExtractBackend;

#[cfg(feature = "pdf")]
impl PdfExtractBackend {
    pub fn new() -> Self {
        Self
    }
}

#[cfg(feature = "pdf")]
impl PageTextExtractor for PdfExtractBackend {
    fn extract_page_texts(&self, bytes: &[u8]) -> Result<Vec<String>, PdfExtractError> {
        // pdf-extract panics on some font and encoding edge cases.
        let outcome = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            pdf_extract::extract_text_from_mem_by_pages(bytes)
        }));

        match outcome {
            Ok(Ok(pages)) => Ok(pages),
            Ok(Err(pdf_extract::OutputError::PdfError(err))) => {
                Err(PdfExtractError::Malformed(Box::new(err)))
            }
            Ok(Err(err)) => Err(PdfExtractError::Backend(Box::new(err))),
            Err(panic) => Err(PdfExtractError::Backend(panic_message(panic).into())),
        }
    }
}

#[cfg(feature = "pdf")]
fn panic_message(panic: Box<dyn std::any::Any + Send>) -> String {
    if let Some(message) = panic.downcast_ref::<&str>() {
        format!("pdf backend panicked: {message}")
    } else if let Some(message) = panic.downcast_ref::<String>() {
        format!("pdf backend panicked: {message}")
    } else {
        "pdf backend panicked".to_string()
    }
}

#[cfg(all(test, feature = "pdf"))]
mod tests {
    use super::*;

    #[test]
    fn garbage_bytes_are_malformed() {
        let error = PdfExtractBackend::new()
            .extract_page_texts(b"this is not a pdf document")
            .expect_err("garbage should not parse");

        let PdfExtractError::Malformed(cause) = error else {
            panic!("expected a malformed PDF error");
        };
        // The parser's own error is kept, not a flattened message.
        assert!(!format!("{cause:?}").starts_with('"'), "{cause:?}");
    }

    #[test]
    fn well_formed_pdf_yields_pages_in_order() {
        let bytes = include_bytes!("../tests/fixtures/two_pages.pdf");

        let pages = PdfExtractBackend::new()
            .extract_page_texts(bytes)
            .expect("fixture should parse");

        assert_eq!(pages.len(), 2);
        assert!(pages[0].contains("First page"), "{pages:?}");
        assert!(pages[1].contains("Second page"), "{pages:?}");
    }

    #[test]
    fn pdf_without_pages_yields_no_pages() {
        let bytes = include_bytes!("../tests/fixtures/no_pages.pdf");

        let pages = PdfExtractBackend::new()
            .extract_page_texts(bytes)
            .expect("fixture should parse");

        assert!(pages.is_empty(), "{pages:?}");
    }

    #[test]
    fn panic_payloads_become_messages() {
        assert_eq!(
            panic_message(Box::new("bad font")),
            "pdf backend panicked: bad font"
        );
        assert_eq!(
            panic_message(Box::new(String::from("bad cmap"))),
            "pdf backend panicked: bad cmap"
        );
        assert_eq!(panic_message(Box::new(7u8)), "pdf backend panicked");
    }
}
