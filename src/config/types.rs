use serde::Deserialize;

/// Main configuration structure for Docsweep
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub seed: SeedConfig,
    #[serde(default)]
    pub crawler: CrawlerConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Creates a configuration for the given seed with default crawler and output settings
    pub fn new(seed: SeedConfig) -> Self {
        Self {
            seed,
            crawler: CrawlerConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

/// What to crawl: the domain, the allowed path prefix, and the exclusions
///
/// After [`finalize_config`](crate::config::finalize_config) this value is
/// read-only for the whole run and shared by every component.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SeedConfig {
    /// Network location (host, plus port when non-default) of the site
    #[serde(default)]
    pub domain: String,

    /// Absolute URL defining the crawlable path prefix; also the first URL visited
    #[serde(rename = "base-url")]
    pub base_url: String,

    /// A URL containing any of these substrings is never crawled
    #[serde(default)]
    pub excludes: Vec<String>,
}

impl SeedConfig {
    /// Creates a seed with no exclusions, deriving the domain from the base URL
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            domain: String::new(),
            base_url: base_url.into(),
            excludes: Vec::new(),
        }
    }

    /// Scheme of the base URL, used when resolving relative links
    pub fn scheme(&self) -> &str {
        self.base_url
            .split_once("://")
            .map(|(scheme, _)| scheme)
            .unwrap_or("https")
    }
}

/// Crawler behavior configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CrawlerConfig {
    /// Maximum number of page visits in flight at once
    #[serde(rename = "max-concurrent-fetches", default = "default_concurrency")]
    pub max_concurrent_fetches: u32,

    /// Per-request timeout (milliseconds)
    #[serde(rename = "request-timeout-ms", default = "default_timeout_ms")]
    pub request_timeout_ms: u64,

    /// User-Agent header sent with every request
    #[serde(rename = "user-agent", default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        Self {
            max_concurrent_fetches: default_concurrency(),
            request_timeout_ms: default_timeout_ms(),
            user_agent: default_user_agent(),
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Root directory; records land in `<text-dir>/<domain>/`
    #[serde(rename = "text-dir", default = "default_text_dir")]
    pub text_dir: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            text_dir: default_text_dir(),
        }
    }
}

fn default_concurrency() -> u32 {
    1
}

fn default_timeout_ms() -> u64 {
    30_000
}

fn default_user_agent() -> String {
    format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
}

fn default_text_dir() -> String {
    "text".to_string()
}
