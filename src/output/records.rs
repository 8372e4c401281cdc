//! Page records on disk
//!
//! Each visited URL produces exactly one file under `<text-dir>/<domain>/`
//! holding a single `url|text` record. Re-running a crawl for the same domain
//! overwrites files of the same name.

use crate::DocsweepError;
use std::path::{Path, PathBuf};

/// The persisted output for one visited URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRecord {
    /// Absolute URL the text came from
    pub url: String,

    /// Sanitized page text (never contains `|`)
    pub text: String,
}

impl PageRecord {
    pub fn new(url: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            text: text.into(),
        }
    }

    /// Serializes the record as `url|text` with no trailing newline
    pub fn to_file_contents(&self) -> String {
        format!("{}|{}", self.url, self.text)
    }

    /// Parses file contents by splitting once on the first `|`
    ///
    /// Returns `None` when there is no `|` at all.
    pub fn parse(contents: &str) -> Option<Self> {
        contents
            .split_once('|')
            .map(|(url, text)| Self::new(url, text))
    }
}

/// Derives the record file name for a URL
///
/// The `scheme://` prefix is dropped, every `/` becomes `_`, and `.txt` is
/// appended.
///
/// # Examples
///
/// ```
/// use docsweep::output::record_file_name;
///
/// assert_eq!(
///     record_file_name("https://example.com/docs/a"),
///     "example.com_docs_a.txt"
/// );
/// ```
pub fn record_file_name(url: &str) -> String {
    let without_scheme = url.split_once("://").map_or(url, |(_, rest)| rest);
    format!("{}.txt", without_scheme.replace('/', "_"))
}

/// Directory of page records for one domain
#[derive(Debug, Clone)]
pub struct RecordStore {
    dir: PathBuf,
}

impl RecordStore {
    /// Creates `<text_dir>/<domain>` (idempotently) and returns a store for it
    ///
    /// Failing to create the directory is the one fatal error of a crawl and
    /// happens before any page is fetched.
    pub fn create(text_dir: impl AsRef<Path>, domain: &str) -> Result<Self, DocsweepError> {
        let store = Self::open(text_dir, domain);
        std::fs::create_dir_all(&store.dir).map_err(|source| DocsweepError::OutputDir {
            path: store.dir.clone(),
            source,
        })?;
        Ok(store)
    }

    /// Returns a store for an existing record directory without touching disk
    pub fn open(text_dir: impl AsRef<Path>, domain: &str) -> Self {
        Self {
            dir: text_dir.as_ref().join(domain),
        }
    }

    /// The directory records are written to
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Full path of the record file for a URL
    pub fn path_for(&self, url: &str) -> PathBuf {
        self.dir.join(record_file_name(url))
    }

    /// Writes (or overwrites) the record file for `record.url`
    pub async fn write(&self, record: &PageRecord) -> std::io::Result<PathBuf> {
        let path = self.path_for(&record.url);
        tokio::fs::write(&path, record.to_file_contents()).await?;
        Ok(path)
    }

    /// Reads every record in the directory back, sorted by URL
    ///
    /// This is the hand-off to the chunking stage: one `(url, text)` pair per
    /// file. Files that are not `.txt` or hold no `|` are skipped.
    pub fn load_records(&self) -> std::io::Result<Vec<PageRecord>> {
        let mut records = Vec::new();

        for entry in std::fs::read_dir(&self.dir)? {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some("txt") {
                continue;
            }

            let contents = std::fs::read_to_string(&path)?;
            match PageRecord::parse(&contents) {
                Some(record) => records.push(record),
                None => tracing::warn!("Skipping malformed record file {}", path.display()),
            }
        }

        records.sort_by(|a, b| a.url.cmp(&b.url));
        Ok(records)
    }
}
