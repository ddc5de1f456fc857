use std::error::Error as StdError;
use std::path::PathBuf;

use thiserror::Error;

use crate::pdf::PdfExtractError;

pub type BoxError = Box<dyn StdError + Send + Sync>;

#[derive(Debug, Error)]
pub enum IngestionError {
    #[error("provided path is neither a valid directory nor a {expected} file: {}", path.display())]
    InvalidPath {
        path: PathBuf,
        expected: String,
    },
    #[error("error reading the PDF file {}: {source}", path.display())]
    PdfParse {
        path: PathBuf,
        #[source]
        source: PdfExtractError,
    },
    #[error("failed to load {}: {source}", path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: BoxError,
    },
    #[error("unsupported text encoding: {0}")]
    UnsupportedEncoding(String),
}

impl IngestionError {
    pub(crate) fn load(path: impl Into<PathBuf>, source: impl Into<BoxError>) -> Self {
        IngestionError::Load {
            path: path.into(),
            source: source.into(),
        }
    }

    /// Path of the source the error refers to, when there is one.
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            IngestionError::InvalidPath { path, .. }
            | IngestionError::PdfParse { path, .. }
            | IngestionError::Load { path, .. } => Some(path),
            IngestionError::UnsupportedEncoding(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SplitterConfigError {
    #[error("chunk_size must be greater than zero")]
    ChunkSizeMustBeGreaterThanZero,
    #[error("chunk_overlap ({chunk_overlap}) must be smaller than chunk_size ({chunk_size})")]
    OverlapMustBeSmallerThanChunkSize {
        chunk_size: usize,
        chunk_overlap: usize,
    },
}

pub type IngestionResult<T> = Result<T, IngestionError>;
