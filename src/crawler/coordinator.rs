//! Crawler coordinator - main crawl orchestration logic
//!
//! The coordinator owns the frontier and the seen set. Page visits (fetch,
//! text extraction, record write, link extraction) run on a bounded pool of
//! tasks; each visit hands its in-scope links back to the coordinator, which
//! is the only place URLs are marked seen and enqueued. The crawl ends when
//! the frontier is empty and no visit is in flight.
//!
//! With one worker the visit order is the frontier's plain LIFO order.

use crate::config::{Config, SeedConfig};
use crate::crawler::fetcher::{build_http_client, fetch_page};
use crate::crawler::frontier::Frontier;
use crate::crawler::parser::{extract_links, extract_text};
use crate::output::{CrawlSummary, PageRecord, RecordStore};
use crate::state::PageState;
use crate::text::{requires_javascript, sanitize};
use crate::url::resolve_links;
use crate::DocsweepError;
use reqwest::Client;
use std::sync::Arc;
use tokio::task::JoinSet;

/// Outcome of visiting one URL
#[derive(Debug, Clone)]
pub struct PageVisit {
    /// The URL that was visited
    pub url: String,

    /// Terminal state: `Recorded` (links harvested) or `Skipped`
    pub state: PageState,

    /// In-scope, normalized, deduplicated links found on the page
    pub links: Vec<String>,

    /// Whether the record file was written
    pub record_written: bool,

    /// Whether the page only said JavaScript is required
    pub requires_javascript: bool,
}

/// Main crawler coordinator structure
pub struct Coordinator {
    config: Arc<Config>,
    client: Client,
    store: RecordStore,
    frontier: Frontier,
}

impl Coordinator {
    /// Creates a new coordinator instance
    ///
    /// The record directory is created here, before anything is fetched;
    /// failing to create it is the only fatal crawl error.
    ///
    /// # Arguments
    ///
    /// * `config` - A finalized crawl configuration
    ///
    /// # Returns
    ///
    /// * `Ok(Coordinator)` - Ready to run, with the seed on the frontier
    /// * `Err(DocsweepError)` - Output directory or HTTP client setup failed
    pub fn new(config: Config) -> Result<Self, DocsweepError> {
        let store = RecordStore::create(&config.output.text_dir, &config.seed.domain)?;
        let client = build_http_client(&config.crawler)?;
        let frontier = Frontier::with_seed(config.seed.base_url.clone());

        Ok(Self {
            config: Arc::new(config),
            client,
            store,
            frontier,
        })
    }

    /// The record directory this crawl writes to
    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    /// Runs the main crawl loop until the frontier drains
    ///
    /// Per-page failures are logged and folded into the summary; nothing
    /// inside the loop can abort the run.
    pub async fn run(&mut self) -> CrawlSummary {
        let mut summary = CrawlSummary::new(self.config.seed.domain.clone());
        let max_workers = self.config.crawler.max_concurrent_fetches.max(1) as usize;
        let mut in_flight = JoinSet::new();

        tracing::info!(
            "Starting crawl of {} from {} ({} worker(s))",
            self.config.seed.domain,
            self.config.seed.base_url,
            max_workers
        );

        loop {
            // Top up the pool from the frontier
            while in_flight.len() < max_workers {
                let Some(url) = self.frontier.pop() else {
                    break;
                };

                let client = self.client.clone();
                let store = self.store.clone();
                let config = Arc::clone(&self.config);
                in_flight.spawn(async move { visit_page(&client, &store, &config.seed, url).await });
            }

            if in_flight.is_empty() && self.frontier.is_empty() {
                break;
            }

            let Some(joined) = in_flight.join_next().await else {
                break;
            };

            match joined {
                Ok(visit) => self.absorb(visit, &mut summary),
                Err(e) => tracing::error!("Page visit task failed: {}", e),
            }
        }

        summary.finish(self.frontier.seen_count());

        tracing::info!(
            "Crawl completed: {} pages visited, {} records written in {}s",
            summary.pages_visited,
            summary.records_written,
            summary.duration_seconds().unwrap_or(0)
        );

        summary
    }

    /// Folds a finished visit into the summary and enqueues its unseen links
    fn absorb(&mut self, visit: PageVisit, summary: &mut CrawlSummary) {
        summary.pages_visited += 1;
        if visit.record_written {
            summary.records_written += 1;
        } else {
            summary.write_failures += 1;
        }
        if visit.state == PageState::Skipped {
            summary.pages_skipped += 1;
        }
        if visit.requires_javascript {
            summary.javascript_pages += 1;
        }

        let found = visit.links.len();
        let mut enqueued = 0;
        for link in visit.links {
            if self.frontier.offer(link.as_str()) {
                transition(&link, PageState::Unseen, PageState::Queued);
                enqueued += 1;
            }
        }

        tracing::debug!(
            "{} [{}]: {} in-scope links, {} new, {} pending",
            visit.url,
            visit.state,
            found,
            enqueued,
            self.frontier.len()
        );
    }
}

/// Visits one URL: fetch, record, and collect in-scope links
///
/// The record is written whatever happens to the fetch; a failed or non-HTML
/// fetch yields a record with whatever text was obtainable (possibly empty)
/// and no links.
pub async fn visit_page(
    client: &Client,
    store: &RecordStore,
    seed: &SeedConfig,
    url: String,
) -> PageVisit {
    tracing::info!("{}", url);

    let fetch = fetch_page(client, &url).await;
    if let Some(target) = fetch.redirect_target(&url) {
        tracing::debug!("{} redirected to {}", url, target);
    }

    let state = match fetch.describe_failure() {
        None => transition(&url, PageState::Queued, PageState::Fetched),
        Some(reason) => {
            tracing::warn!("No links taken from {}: {}", url, reason);
            transition(&url, PageState::Queued, PageState::Skipped)
        }
    };

    let text = sanitize(&fetch.body().map(extract_text).unwrap_or_default());
    let javascript_only = requires_javascript(&text);
    if javascript_only {
        tracing::warn!("Unable to parse page {} due to JavaScript being required", url);
    }

    let record = PageRecord::new(url.clone(), text);
    let record_written = match store.write(&record).await {
        Ok(path) => {
            tracing::debug!("Wrote {}", path.display());
            true
        }
        Err(e) => {
            tracing::error!("Failed to write record for {}: {}", url, e);
            false
        }
    };

    let (state, links) = match fetch.html() {
        Some(html) => (
            transition(&url, state, PageState::Recorded),
            resolve_links(&extract_links(html), seed),
        ),
        None => (state, Vec::new()),
    };
    if !state.is_terminal() {
        tracing::warn!("Visit of {} ended in non-terminal state {}", url, state);
    }

    PageVisit {
        url,
        state,
        links,
        record_written,
        requires_javascript: javascript_only,
    }
}

/// Moves a page to its next state, flagging transitions the state machine forbids
fn transition(url: &str, from: PageState, to: PageState) -> PageState {
    if !from.can_transition_to(to) {
        tracing::warn!("Unexpected state change for {}: {} -> {}", url, from, to);
    }
    tracing::trace!("{}: {} -> {}", url, from, to);
    to
}

/// Runs the main crawl operation
///
/// # Arguments
///
/// * `config` - A finalized crawl configuration
///
/// # Returns
///
/// * `Ok(CrawlSummary)` - Crawl ran to completion
/// * `Err(DocsweepError)` - Setup failed before any page was fetched
///
/// # Example
///
/// ```no_run
/// use docsweep::config::load_config;
/// use docsweep::crawler::run_crawl;
/// use std::path::Path;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = load_config(Path::new("docsweep.toml"))?;
/// let summary = run_crawl(config).await?;
/// println!("{} pages recorded", summary.records_written);
/// # Ok(())
/// # }
/// ```
pub async fn run_crawl(config: Config) -> Result<CrawlSummary, DocsweepError> {
    let mut coordinator = Coordinator::new(config)?;
    Ok(coordinator.run().await)
}
