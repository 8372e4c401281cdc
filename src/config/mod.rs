//! Configuration module for Docsweep
//!
//! This module handles loading, parsing, validating and canonicalizing the
//! crawl configuration, whether it comes from a TOML file or the command line.
//!
//! # Example
//!
//! ```no_run
//! use docsweep::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("docsweep.toml")).unwrap();
//! println!("Crawling {} under {}", config.seed.domain, config.seed.base_url);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{Config, CrawlerConfig, OutputConfig, SeedConfig};

// Re-export parser functions
pub use parser::{
    compute_config_hash, finalize_config, load_config, load_config_with_hash, parse_excludes,
};
