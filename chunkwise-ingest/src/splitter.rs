use crate::error::SplitterConfigError;

pub const DEFAULT_CHUNK_SIZE: usize = 1_000;
pub const DEFAULT_CHUNK_OVERLAP: usize = 200;

/// Fixed-size character windows with a constant overlap between neighbours.
///
/// Sizes count Unicode scalar values, never bytes, so chunks always fall on
/// UTF-8 boundaries. Word and sentence boundaries are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharacterTextSplitter {
    chunk_size: usize,
    chunk_overlap: usize,
}

#[derive(Debug, Default, Clone, Copy)]
pub struct CharacterTextSplitterBuilder {
    chunk_size: Option<usize>,
    chunk_overlap: Option<usize>,
}

impl CharacterTextSplitterBuilder {
    pub fn chunk_size(mut self, value: usize) -> Self {
        self.chunk_size = Some(value);
        self
    }

    pub fn chunk_overlap(mut self, value: usize) -> Self {
        self.chunk_overlap = Some(value);
        self
    }

    pub fn build(self) -> Result<CharacterTextSplitter, SplitterConfigError> {
        CharacterTextSplitter::new(
            self.chunk_size.unwrap_or(DEFAULT_CHUNK_SIZE),
            self.chunk_overlap.unwrap_or(DEFAULT_CHUNK_OVERLAP),
        )
    }
}

impl CharacterTextSplitter {
    pub fn new(chunk_size: usize, chunk_overlap: usize) -> Result<Self, SplitterConfigError> {
        if chunk_size == 0 {
            return Err(SplitterConfigError::ChunkSizeMustBeGreaterThanZero);
        }
        if chunk_overlap >= chunk_size {
            return Err(SplitterConfigError::OverlapMustBeSmallerThanChunkSize {
                chunk_size,
                chunk_overlap,
            });
        }

        Ok(Self {
            chunk_size,
            chunk_overlap,
        })
    }

    pub fn builder() -> CharacterTextSplitterBuilder {
        CharacterTextSplitterBuilder::default()
    }

    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    pub fn chunk_overlap(&self) -> usize {
        self.chunk_overlap
    }

    fn step(&self) -> usize {
        self.chunk_size - self.chunk_overlap
    }

    pub fn split(&self, text: &str) -> Vec<String> {
        // Byte offset of every char start, plus the end of the text.
        let bounds: Vec<usize> = text
            .char_indices()
            .map(|(offset, _)| offset)
            .chain(std::iter::once(text.len()))
            .collect();
        let char_count = bounds.len() - 1;

        (0..char_count)
            .step_by(self.step())
            .map(|start| {
                let end = usize::min(start + self.chunk_size, char_count);
                text[bounds[start]..bounds[end]].to_string()
            })
            .collect()
    }

    pub fn split_texts<S>(&self, texts: &[S]) -> Vec<String>
    where
        S: AsRef<str>,
    {
        texts
            .iter()
            .flat_map(|text| self.split(text.as_ref()))
            .collect()
    }
}

impl Default for CharacterTextSplitter {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            chunk_overlap: DEFAULT_CHUNK_OVERLAP,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_is_size_minus_overlap() {
        let splitter = CharacterTextSplitter::new(10, 4).unwrap();
        assert_eq!(splitter.step(), 6);
        assert_eq!(CharacterTextSplitter::default().step(), 800);
    }

    #[test]
    fn builder_falls_back_to_defaults() {
        let splitter = CharacterTextSplitter::builder().build().unwrap();
        assert_eq!(splitter, CharacterTextSplitter::default());

        let splitter = CharacterTextSplitter::builder()
            .chunk_size(50)
            .chunk_overlap(0)
            .build()
            .unwrap();
        assert_eq!((splitter.chunk_size(), splitter.chunk_overlap()), (50, 0));
    }

    #[test]
    fn builder_reports_overlap_above_default_size() {
        let error = CharacterTextSplitter::builder()
            .chunk_overlap(1_000)
            .build()
            .unwrap_err();

        assert_eq!(
            error,
            SplitterConfigError::OverlapMustBeSmallerThanChunkSize {
                chunk_size: 1_000,
                chunk_overlap: 1_000,
            }
        );
    }
}
