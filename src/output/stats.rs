//! Statistics over a directory of page records
//!
//! This module reads records back from disk and summarizes them, which is
//! how degenerate documents (failed fetches, JavaScript-only pages) show up
//! before the records are handed to chunking.

use crate::output::records::{PageRecord, RecordStore};
use crate::text::requires_javascript;
use crate::DocsweepError;

/// Record statistics summary
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CrawlStatistics {
    /// Number of record files
    pub record_count: u64,

    /// Records whose text is empty
    pub empty_records: u64,

    /// Total characters of text across all records
    pub total_chars: u64,

    /// Records carrying the JavaScript-required placeholder
    pub javascript_pages: u64,

    /// URL and character count of the longest record
    pub largest_record: Option<(String, u64)>,
}

impl CrawlStatistics {
    /// Computes statistics from records already in memory
    pub fn from_records(records: &[PageRecord]) -> Self {
        let mut stats = Self::default();

        for record in records {
            let chars = record.text.chars().count() as u64;
            stats.record_count += 1;
            stats.total_chars += chars;

            if record.text.is_empty() {
                stats.empty_records += 1;
            }
            if requires_javascript(&record.text) {
                stats.javascript_pages += 1;
            }

            let is_larger = stats
                .largest_record
                .as_ref()
                .map_or(true, |(_, largest)| chars > *largest);
            if is_larger {
                stats.largest_record = Some((record.url.clone(), chars));
            }
        }

        stats
    }

    /// Average characters per record
    pub fn average_chars(&self) -> f64 {
        if self.record_count == 0 {
            0.0
        } else {
            self.total_chars as f64 / self.record_count as f64
        }
    }
}

/// Loads statistics from a record directory
///
/// # Returns
///
/// * `Ok(CrawlStatistics)` - Successfully loaded statistics
/// * `Err(DocsweepError)` - The directory could not be read
pub fn load_statistics(store: &RecordStore) -> Result<CrawlStatistics, DocsweepError> {
    let records = store.load_records()?;
    Ok(CrawlStatistics::from_records(&records))
}

/// Prints statistics to stdout in a formatted manner
pub fn print_statistics(stats: &CrawlStatistics) {
    println!("=== Record Statistics ===\n");

    println!("Overview:");
    println!("  Records: {}", stats.record_count);
    println!("  Total characters: {}", stats.total_chars);
    println!("  Average characters per record: {:.1}", stats.average_chars());
    println!();

    if stats.empty_records > 0 || stats.javascript_pages > 0 {
        println!("Degenerate Records:");
        println!("  Empty: {}", stats.empty_records);
        println!("  JavaScript required: {}", stats.javascript_pages);
        println!();
    }

    if let Some((url, chars)) = &stats.largest_record {
        println!("Largest Record: {} ({} characters)", url, chars);
    }
}
