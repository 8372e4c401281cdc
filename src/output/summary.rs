//! End-of-run summary for a crawl

use chrono::{DateTime, Utc};

/// Counters collected by the coordinator over one crawl
#[derive(Debug, Clone)]
pub struct CrawlSummary {
    pub domain: String,
    pub started_at: DateTime<Utc>,
    pub finished_at: Option<DateTime<Utc>>,

    /// URLs popped from the frontier and visited
    pub pages_visited: u64,

    /// Record files written
    pub records_written: u64,

    /// Visits that produced no links (fetch failure or non-HTML response)
    pub pages_skipped: u64,

    /// Record files that could not be written
    pub write_failures: u64,

    /// Pages whose text was the JavaScript-required placeholder
    pub javascript_pages: u64,

    /// Size of the seen set when the crawl ended
    pub urls_seen: u64,
}

impl CrawlSummary {
    pub fn new(domain: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            started_at: Utc::now(),
            finished_at: None,
            pages_visited: 0,
            records_written: 0,
            pages_skipped: 0,
            write_failures: 0,
            javascript_pages: 0,
            urls_seen: 0,
        }
    }

    /// Stamps the finish time
    pub fn finish(&mut self, urls_seen: usize) {
        self.finished_at = Some(Utc::now());
        self.urls_seen = urls_seen as u64;
    }

    /// Wall-clock duration, once finished
    pub fn duration_seconds(&self) -> Option<i64> {
        self.finished_at
            .map(|finished| (finished - self.started_at).num_seconds())
    }
}

/// Prints the summary to stdout
pub fn print_summary(summary: &CrawlSummary) {
    println!("=== Crawl Summary: {} ===\n", summary.domain);
    println!("  Started:  {}", summary.started_at.to_rfc3339());
    if let Some(finished) = summary.finished_at {
        println!("  Finished: {}", finished.to_rfc3339());
    }
    if let Some(seconds) = summary.duration_seconds() {
        println!("  Duration: {}s", seconds);
    }
    println!();
    println!("  Pages visited:       {}", summary.pages_visited);
    println!("  Records written:     {}", summary.records_written);
    println!("  Pages without links: {}", summary.pages_skipped);
    println!("  Write failures:      {}", summary.write_failures);
    println!("  JavaScript-only:     {}", summary.javascript_pages);
    println!("  URLs seen:           {}", summary.urls_seen);
}
