use std::error::Error;

use chunkwise_ingest::{load_and_split, CharacterTextSplitter, TextFileLoader};

fn main() -> Result<(), Box<dyn Error>> {
    let splitter = CharacterTextSplitter::builder()
        .chunk_size(1000)
        .chunk_overlap(200)
        .build()?;

    let loader = TextFileLoader::new("tests/fixtures");
    let chunks = load_and_split(&loader, &splitter)?;

    println!("Loaded and split into {} chunks:", chunks.len());
    for (i, chunk) in chunks.iter().take(3).enumerate() {
        let preview: String = chunk.chars().take(50).collect();
        println!("  Chunk {}: {}...", i + 1, preview);
    }

    Ok(())
}
