use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use walkdir::WalkDir;

use crate::error::{IngestionError, IngestionResult};

/// Predicate deciding which files a loader picks up.
#[derive(Clone)]
pub struct SourceFilter {
    label: String,
    predicate: Arc<dyn Fn(&Path) -> bool + Send + Sync>,
    walk_only: bool,
}

impl SourceFilter {
    pub fn new<F>(label: impl Into<String>, predicate: F) -> Self
    where
        F: Fn(&Path) -> bool + Send + Sync + 'static,
    {
        Self {
            label: label.into(),
            predicate: Arc::new(predicate),
            walk_only: false,
        }
    }

    /// Case-sensitive match on the end of the file name, e.g. `".txt"`.
    pub fn suffix(suffix: &'static str) -> Self {
        Self::new(suffix, move |path: &Path| {
            path.file_name()
                .and_then(|name| name.to_str())
                .is_some_and(|name| name.ends_with(suffix))
        })
    }

    /// Apply the predicate only while walking a directory; a path naming a
    /// regular file directly is accepted whatever its name.
    pub fn walk_only(mut self) -> Self {
        self.walk_only = true;
        self
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn matches(&self, path: &Path) -> bool {
        (self.predicate)(path)
    }
}

impl fmt::Debug for SourceFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SourceFilter")
            .field("label", &self.label)
            .field("walk_only", &self.walk_only)
            .finish_non_exhaustive()
    }
}

/// Resolves `path` into the list of files to load.
///
/// A directory is walked recursively and every regular file accepted by
/// `filter` is returned, entries sorted by file name so the result is stable
/// for a fixed layout. A single file is returned as-is when it matches, or
/// unconditionally for a [`SourceFilter::walk_only`] filter.
pub fn discover_sources(path: &Path, filter: &SourceFilter) -> IngestionResult<Vec<PathBuf>> {
    if path.is_dir() {
        let mut sources = Vec::new();
        for entry in WalkDir::new(path).sort_by_file_name() {
            let entry = entry.map_err(|err| {
                let failed = err
                    .path()
                    .map(Path::to_path_buf)
                    .unwrap_or_else(|| path.to_path_buf());
                IngestionError::load(failed, err)
            })?;
            // Symlinked files count; symlinked directories are not descended.
            if entry.path().is_file() && filter.matches(entry.path()) {
                sources.push(entry.into_path());
            }
        }
        tracing::debug!(
            root = %path.display(),
            filter = filter.label(),
            count = sources.len(),
            "discovered sources"
        );
        return Ok(sources);
    }

    if path.is_file() && (filter.walk_only || filter.matches(path)) {
        return Ok(vec![path.to_path_buf()]);
    }

    Err(IngestionError::InvalidPath {
        path: path.to_path_buf(),
        expected: filter.label().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suffix_filter_is_case_sensitive() {
        let filter = SourceFilter::suffix(".txt");

        assert!(filter.matches(Path::new("notes/a.txt")));
        assert!(!filter.matches(Path::new("notes/a.TXT")));
        assert!(!filter.matches(Path::new("notes/a.txt.bak")));
    }

    #[test]
    fn custom_filter_uses_predicate() {
        let filter = SourceFilter::new("markdown", |path: &Path| {
            path.extension().is_some_and(|ext| ext == "md")
        });

        assert_eq!(filter.label(), "markdown");
        assert!(filter.matches(Path::new("README.md")));
        assert!(!filter.matches(Path::new("README.txt")));
    }

    #[test]
    fn walk_only_filter_accepts_any_named_file() {
        let dir = tempfile::tempdir().expect("temp dir");
        let named = dir.path().join("Report.PDF");
        std::fs::write(&named, "bytes").expect("write named file");
        std::fs::write(dir.path().join("other.bin"), "bytes").expect("write other file");
        let filter = SourceFilter::suffix(".pdf").walk_only();

        let single = discover_sources(&named, &filter).expect("named file");
        let walked = discover_sources(dir.path(), &filter).expect("walk directory");

        assert_eq!(single, vec![named]);
        assert!(walked.is_empty());
    }

    #[test]
    fn strict_filter_rejects_non_matching_named_file() {
        let dir = tempfile::tempdir().expect("temp dir");
        let named = dir.path().join("notes.md");
        std::fs::write(&named, "bytes").expect("write named file");

        let error = discover_sources(&named, &SourceFilter::suffix(".txt"))
            .expect_err("markdown is not a text source");

        assert!(matches!(error, IngestionError::InvalidPath { .. }));
    }

    #[test]
    fn missing_path_is_invalid() {
        let dir = tempfile::tempdir().expect("temp dir");
        let missing = dir.path().join("nope");

        let error = discover_sources(&missing, &SourceFilter::suffix(".txt"))
            .expect_err("missing path should fail");

        assert!(matches!(
            error,
            IngestionError::InvalidPath { path, expected } if path == missing && expected == ".txt"
        ));
    }
}
