//! Docsweep main entry point
//!
//! This is the command-line interface for the Docsweep documentation crawler.

use anyhow::{Context, Result};
use clap::Parser;
use docsweep::config::{finalize_config, load_config_with_hash, parse_excludes, Config, SeedConfig};
use docsweep::crawler::crawl;
use docsweep::output::{load_statistics, print_statistics, print_summary, RecordStore};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Docsweep: crawl a documentation site into plain-text records
///
/// Every page under the base URL is fetched once and saved as a
/// `url|text` record in `<output-dir>/<domain>/`, ready for chunking and
/// indexing.
#[derive(Parser, Debug)]
#[command(name = "docsweep")]
#[command(version)]
#[command(about = "Crawl a documentation site into plain-text records", long_about = None)]
struct Cli {
    /// Path to TOML configuration file
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// The domain to crawl (defaults to the host of --url)
    #[arg(long)]
    domain: Option<String>,

    /// The base URL to crawl; only URLs containing it are followed
    #[arg(long, value_name = "URL")]
    url: Option<String>,

    /// Comma-separated substrings; URLs containing any of them are skipped
    #[arg(long, value_name = "LIST")]
    excludes: Option<String>,

    /// Root directory for records
    #[arg(long, value_name = "DIR")]
    output_dir: Option<String>,

    /// Number of pages fetched concurrently (1 keeps depth-first order)
    #[arg(long, value_name = "N")]
    concurrency: Option<u32>,

    /// Per-request timeout in milliseconds
    #[arg(long, value_name = "MS")]
    timeout_ms: Option<u64>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Validate the configuration and show what would be crawled
    #[arg(long, conflicts_with = "stats")]
    dry_run: bool,

    /// Show statistics for the records already on disk and exit
    #[arg(long, conflicts_with = "dry_run")]
    stats: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let config = build_config(&cli)?;

    if cli.dry_run {
        handle_dry_run(&config);
    } else if cli.stats {
        handle_stats(&config)?;
    } else {
        handle_crawl(config).await?;
    }

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("docsweep=info,warn"),
            1 => EnvFilter::new("docsweep=debug,info"),
            2 => EnvFilter::new("docsweep=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Builds the finalized configuration from the optional file plus CLI overrides
fn build_config(cli: &Cli) -> Result<Config> {
    let mut config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            let (config, hash) = load_config_with_hash(path)
                .with_context(|| format!("Failed to load configuration from {}", path.display()))?;
            tracing::info!("Configuration loaded successfully (hash: {})", hash);
            config
        }
        None => {
            let url = cli
                .url
                .as_deref()
                .context("--url is required when no --config file is given")?;
            Config::new(SeedConfig::new(url))
        }
    };

    if let Some(url) = &cli.url {
        if config.seed.base_url != *url {
            config.seed.base_url = url.clone();
            config.seed.domain.clear();
        }
    }
    if let Some(domain) = &cli.domain {
        config.seed.domain = domain.clone();
    }
    if let Some(excludes) = &cli.excludes {
        config.seed.excludes = parse_excludes(excludes);
    }
    if let Some(dir) = &cli.output_dir {
        config.output.text_dir = dir.clone();
    }
    if let Some(concurrency) = cli.concurrency {
        config.crawler.max_concurrent_fetches = concurrency;
    }
    if let Some(timeout_ms) = cli.timeout_ms {
        config.crawler.request_timeout_ms = timeout_ms;
    }

    finalize_config(config).context("Invalid configuration")
}

/// Handles the --dry-run mode: shows the finalized configuration
fn handle_dry_run(config: &Config) {
    println!("=== Docsweep Dry Run ===\n");

    println!("Seed:");
    println!("  Domain: {}", config.seed.domain);
    println!("  Base URL: {}", config.seed.base_url);
    if config.seed.excludes.is_empty() {
        println!("  Excludes: (none)");
    } else {
        println!("  Excludes:");
        for exclude in &config.seed.excludes {
            println!("    - {}", exclude);
        }
    }

    println!("\nCrawler Configuration:");
    println!(
        "  Max concurrent fetches: {}",
        config.crawler.max_concurrent_fetches
    );
    println!("  Request timeout: {}ms", config.crawler.request_timeout_ms);
    println!("  User agent: {}", config.crawler.user_agent);

    let store = RecordStore::open(&config.output.text_dir, &config.seed.domain);
    println!("\nOutput:");
    println!("  Records: {}", store.dir().display());

    println!("\n✓ Configuration is valid");
    println!("✓ Would start crawling at {}", config.seed.base_url);
}

/// Handles the --stats mode: summarizes the records already on disk
fn handle_stats(config: &Config) -> Result<()> {
    let store = RecordStore::open(&config.output.text_dir, &config.seed.domain);
    println!("Records: {}\n", store.dir().display());

    let stats = load_statistics(&store)
        .with_context(|| format!("Failed to read records from {}", store.dir().display()))?;
    print_statistics(&stats);

    Ok(())
}

/// Handles the main crawl operation
async fn handle_crawl(config: Config) -> Result<()> {
    tracing::info!("Crawling {} under {}", config.seed.domain, config.seed.base_url);
    if !config.seed.excludes.is_empty() {
        tracing::info!("Excluding URLs containing: {}", config.seed.excludes.join(", "));
    }

    match crawl(config).await {
        Ok(summary) => {
            print_summary(&summary);
            Ok(())
        }
        Err(e) => {
            tracing::error!("Crawl failed: {}", e);
            Err(e.into())
        }
    }
}
