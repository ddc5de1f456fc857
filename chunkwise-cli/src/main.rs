//! chunkwise: load a text or PDF source and print how it splits.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use chunkwise_ingest::{
    CharacterTextSplitter, DocumentLoader, TextFileLoader, DEFAULT_CHUNK_OVERLAP,
    DEFAULT_CHUNK_SIZE, PDF_SUFFIX,
};
use clap::{Parser, ValueEnum};
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Pdf,
}

impl Format {
    fn infer(path: &Path) -> Self {
        let is_pdf = path
            .file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| name.ends_with(PDF_SUFFIX));
        if is_pdf {
            Format::Pdf
        } else {
            Format::Text
        }
    }
}

/// Load `.txt` or `.pdf` files and split them into overlapping chunks.
#[derive(Parser, Debug)]
#[command(name = "chunkwise", version, about)]
struct Cli {
    /// File or directory to load.
    path: PathBuf,

    /// Source format; inferred from the path when omitted.
    #[arg(long, value_enum)]
    format: Option<Format>,

    /// Text encoding label for `.txt` sources.
    #[arg(long, env = "CHUNKWISE_ENCODING", default_value = "utf-8")]
    encoding: String,

    /// Maximum characters per chunk.
    #[arg(long, env = "CHUNKWISE_CHUNK_SIZE", default_value_t = DEFAULT_CHUNK_SIZE)]
    chunk_size: usize,

    /// Characters shared between neighbouring chunks.
    #[arg(long, env = "CHUNKWISE_CHUNK_OVERLAP", default_value_t = DEFAULT_CHUNK_OVERLAP)]
    chunk_overlap: usize,

    /// How many chunks to print from each end.
    #[arg(long, default_value_t = 2)]
    preview: usize,
}

fn build_loader(cli: &Cli) -> Result<Box<dyn DocumentLoader>> {
    let format = cli.format.unwrap_or_else(|| Format::infer(&cli.path));
    match format {
        Format::Text => {
            let loader = TextFileLoader::with_encoding(&cli.path, &cli.encoding)?;
            Ok(Box::new(loader))
        }
        #[cfg(feature = "pdf")]
        Format::Pdf => Ok(Box::new(chunkwise_ingest::PdfFileLoader::new(&cli.path))),
        #[cfg(not(feature = "pdf"))]
        Format::Pdf => bail!("chunkwise was built without the `pdf` feature"),
    }
}

fn preview_indices(total: usize, preview: usize) -> Vec<usize> {
    if total <= preview.saturating_mul(2) {
        return (0..total).collect();
    }
    (0..preview).chain(total - preview..total).collect()
}

fn run(cli: Cli) -> Result<()> {
    let splitter = CharacterTextSplitter::new(cli.chunk_size, cli.chunk_overlap)
        .context("invalid splitter configuration")?;
    let loader = build_loader(&cli)?;

    let documents = loader
        .load_documents()
        .with_context(|| format!("failed to load {}", cli.path.display()))?;
    if documents.is_empty() {
        bail!("no matching documents under {}", cli.path.display());
    }

    let chunks = splitter.split_texts(&documents);
    info!(
        documents = documents.len(),
        chunks = chunks.len(),
        chunk_size = splitter.chunk_size(),
        chunk_overlap = splitter.chunk_overlap(),
        "split complete"
    );

    println!("documents: {}", documents.len());
    println!("chunks: {}", chunks.len());
    for index in preview_indices(chunks.len(), cli.preview) {
        println!("--------");
        println!("{}", chunks[index]);
    }

    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    run(Cli::parse())
}
