use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use encoding_rs::{Encoding, UTF_8};

use crate::error::{IngestionError, IngestionResult};
use crate::pdf::{PageTextExtractor, PdfExtractError};
use crate::source::{discover_sources, SourceFilter};

/// Document text used for a PDF that has no pages.
pub const EMPTY_PDF_PLACEHOLDER: &str = "<empty file>";

pub const TEXT_SUFFIX: &str = ".txt";
pub const PDF_SUFFIX: &str = ".pdf";

/// Anything that can turn a path into an ordered list of document strings.
///
/// Every call builds a fresh list. A failure on any source fails the whole
/// call and nothing is returned.
pub trait DocumentLoader {
    fn load_documents(&self) -> IngestionResult<Vec<String>>;
}

pub struct TextFileLoader {
    path: PathBuf,
    encoding: &'static Encoding,
    filter: SourceFilter,
}

impl TextFileLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            encoding: UTF_8,
            filter: SourceFilter::suffix(TEXT_SUFFIX),
        }
    }

    /// Uses a WHATWG encoding label such as `"utf-8"`, `"latin1"` or `"utf-16le"`.
    pub fn with_encoding(path: impl Into<PathBuf>, label: &str) -> IngestionResult<Self> {
        let encoding = Encoding::for_label(label.trim().as_bytes())
            .ok_or_else(|| IngestionError::UnsupportedEncoding(label.to_string()))?;

        Ok(Self {
            encoding,
            ..Self::new(path)
        })
    }

    pub fn with_filter(mut self, filter: SourceFilter) -> Self {
        self.filter = filter;
        self
    }

    pub fn encoding(&self) -> &'static str {
        self.encoding.name()
    }

    fn load_file(&self, path: &Path) -> IngestionResult<String> {
        let bytes = fs::read(path).map_err(|err| IngestionError::load(path, err))?;
        let content = self
            .encoding
            .decode_without_bom_handling_and_without_replacement(&bytes)
            .ok_or_else(|| {
                IngestionError::load(
                    path,
                    format!("file is not valid {}", self.encoding.name()),
                )
            })?
            .into_owned();

        tracing::debug!(
            path = %path.display(),
            chars = content.chars().count(),
            "loaded text file"
        );
        Ok(content)
    }
}

impl fmt::Debug for TextFileLoader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextFileLoader")
            .field("path", &self.path)
            .field("encoding", &self.encoding.name())
            .field("filter", &self.filter)
            .finish()
    }
}

impl DocumentLoader for TextFileLoader {
    fn load_documents(&self) -> IngestionResult<Vec<String>> {
        let documents = discover_sources(&self.path, &self.filter)?
            .iter()
            .map(|source| self.load_file(source))
            .collect::<IngestionResult<Vec<_>>>()?;

        tracing::info!(
            path = %self.path.display(),
            documents = documents.len(),
            "text load complete"
        );
        Ok(documents)
    }
}

pub struct PdfFileLoader {
    path: PathBuf,
    extractor: Box<dyn PageTextExtractor>,
    filter: SourceFilter,
}

impl PdfFileLoader {
    #[cfg(feature = "pdf")]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::with_extractor(path, crate::pdf::PdfExtractBackend::new())
    }

    pub fn with_extractor<E>(path: impl Into<PathBuf>, extractor: E) -> Self
    where
        E: PageTextExtractor + 'static,
    {
        Self {
            path: path.into(),
            extractor: Box::new(extractor),
            filter: SourceFilter::suffix(PDF_SUFFIX).walk_only(),
        }
    }

    pub fn with_filter(mut self, filter: SourceFilter) -> Self {
        self.filter = filter;
        self
    }

    fn load_file(&self, path: &Path) -> IngestionResult<String> {
        let bytes = fs::read(path).map_err(|err| IngestionError::load(path, err))?;
        let pages = self
            .extractor
            .extract_page_texts(&bytes)
            .map_err(|err| match err {
                PdfExtractError::Malformed(_) => IngestionError::PdfParse {
                    path: path.to_path_buf(),
                    source: err,
                },
                PdfExtractError::Backend(_) => IngestionError::load(path, err),
            })?;

        if pages.is_empty() {
            tracing::warn!(path = %path.display(), "pdf has no pages");
            return Ok(EMPTY_PDF_PLACEHOLDER.to_string());
        }

        tracing::debug!(path = %path.display(), pages = pages.len(), "loaded pdf file");
        Ok(pages.join("\n"))
    }
}

impl fmt::Debug for PdfFileLoader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PdfFileLoader")
            .field("path", &self.path)
            .field("filter", &self.filter)
            .finish_non_exhaustive()
    }
}

impl DocumentLoader for PdfFileLoader {
    fn load_documents(&self) -> IngestionResult<Vec<String>> {
        let documents = discover_sources(&self.path, &self.filter)?
            .iter()
            .map(|source| self.load_file(source))
            .collect::<IngestionResult<Vec<_>>>()?;

        tracing::info!(
            path = %self.path.display(),
            documents = documents.len(),
            "pdf load complete"
        );
        Ok(documents)
    }
}
