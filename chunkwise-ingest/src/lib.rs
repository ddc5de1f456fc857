//! Load plain-text and PDF files into document strings and cut them into
//! fixed-size, overlapping character chunks.
//!
//! ```no_run
//! use chunkwise_ingest::{load_and_split, CharacterTextSplitter, TextFileLoader};
//!
//! let loader = TextFileLoader::new("data/");
//! let splitter = CharacterTextSplitter::new(1000, 200)?;
//! let chunks = load_and_split(&loader, &splitter)?;
//! println!("{} chunks", chunks.len());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod error;
mod loader;
mod pdf;
mod source;
mod splitter;

pub use error::{BoxError, IngestionError, IngestionResult, SplitterConfigError};
pub use loader::{
    DocumentLoader, PdfFileLoader, TextFileLoader, EMPTY_PDF_PLACEHOLDER, PDF_SUFFIX, TEXT_SUFFIX,
};
#[cfg(feature = "pdf")]
pub use pdf::PdfExtractBackend;
pub use pdf::{PageTextExtractor, PdfExtractError};
pub use source::{discover_sources, SourceFilter};
pub use splitter::{
    CharacterTextSplitter, CharacterTextSplitterBuilder, DEFAULT_CHUNK_OVERLAP,
    DEFAULT_CHUNK_SIZE,
};

pub fn load_and_split<L>(
    loader: &L,
    splitter: &CharacterTextSplitter,
) -> Result<Vec<String>, IngestionError>
where
    L: DocumentLoader + ?Sized,
{
    let documents = loader.load_documents()?;
    Ok(splitter.split_texts(&documents))
}
