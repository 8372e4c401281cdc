//! Docsweep: a domain-scoped documentation crawler
//!
//! This crate walks the pages under a documentation base URL, normalizes each
//! one into a sanitized plain-text record tagged with its source URL, and
//! writes the records to disk for downstream chunking and indexing.

pub mod config;
pub mod crawler;
pub mod output;
pub mod state;
pub mod text;
pub mod url;

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for Docsweep operations
#[derive(Debug, Error)]
pub enum DocsweepError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Failed to create output directory {}: {source}", path.display())]
    OutputDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// Reasons a raw hyperlink cannot be turned into a crawlable URL
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UrlError {
    #[error("Failed to parse URL: {0}")]
    Parse(String),

    #[error("Missing host in URL")]
    MissingHost,

    #[error("Fragment-only link")]
    FragmentOnly,

    #[error("Mail link")]
    Mailto,

    #[error("Link points at another domain: {0}")]
    ForeignDomain(String),
}

/// Result type alias for Docsweep operations
pub type Result<T> = std::result::Result<T, DocsweepError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Result type alias for URL operations
pub type UrlResult<T> = std::result::Result<T, UrlError>;

// Re-export commonly used types
pub use config::{Config, SeedConfig};
pub use output::{PageRecord, RecordStore};
pub use state::PageState;
pub use text::sanitize;
pub use url::{in_scope, normalize_link};
