//! Crawler module for web page fetching and processing
//!
//! This module contains the core crawling logic, including:
//! - HTTP fetching and response classification
//! - HTML link and text extraction
//! - The LIFO frontier and seen set
//! - Overall crawl coordination

mod coordinator;
mod fetcher;
mod frontier;
mod parser;

pub use coordinator::{run_crawl, visit_page, Coordinator, PageVisit};
pub use fetcher::{build_http_client, fetch_page, is_html_content_type, FetchResult};
pub use frontier::Frontier;
pub use parser::{extract_links, extract_text};

use crate::config::Config;
use crate::output::CrawlSummary;
use crate::DocsweepError;

/// Runs a complete crawl operation
///
/// This is the main entry point for starting a crawl. It will:
/// 1. Create the record directory for the domain
/// 2. Build the HTTP client
/// 3. Visit pages from the frontier, writing one record per URL
/// 4. Follow in-scope links until the frontier is empty
///
/// # Arguments
///
/// * `config` - A finalized crawl configuration
pub async fn crawl(config: Config) -> Result<CrawlSummary, DocsweepError> {
    run_crawl(config).await
}
