//! Output module for page records and crawl reports
//!
//! This module handles:
//! - Naming, writing and reading back `url|text` page records
//! - Statistics over a record directory
//! - The end-of-run crawl summary

mod records;
pub mod stats;
mod summary;

pub use records::{record_file_name, PageRecord, RecordStore};
pub use stats::{load_statistics, print_statistics, CrawlStatistics};
pub use summary::{print_summary, CrawlSummary};
