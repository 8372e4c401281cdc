use crate::config::types::Config;
use crate::config::validation::validate;
use crate::url::netloc;
use crate::ConfigError;
use sha2::{Digest, Sha256};
use std::path::Path;
use url::Url;

/// Loads, validates and finalizes a configuration file from the given path
///
/// # Arguments
///
/// * `path` - Path to the TOML configuration file
///
/// # Returns
///
/// * `Ok(Config)` - Successfully loaded and finalized configuration
/// * `Err(ConfigError)` - Failed to load, parse, or validate the configuration
///
/// # Example
///
/// ```no_run
/// use std::path::Path;
/// use docsweep::config::load_config;
///
/// let config = load_config(Path::new("docsweep.toml")).unwrap();
/// println!("Base URL: {}", config.seed.base_url);
/// ```
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    finalize_config(config)
}

/// Validates a configuration and canonicalizes its seed
///
/// After this call:
/// - `base_url` is `scheme://netloc/path` (query and fragment dropped, any
///   trailing slash kept)
/// - `domain` is the base URL's network location
/// - `excludes` holds only non-empty, trimmed entries
///
/// Configurations assembled from command-line flags go through here too, so
/// every crawl sees the same canonical seed.
pub fn finalize_config(mut config: Config) -> Result<Config, ConfigError> {
    validate(&config)?;

    let base = Url::parse(&config.seed.base_url)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid base URL: {}", e)))?;
    let location = netloc(&base).ok_or_else(|| {
        ConfigError::InvalidUrl(format!("Base URL has no host: {}", config.seed.base_url))
    })?;

    config.seed.base_url = format!("{}://{}{}", base.scheme(), location, base.path());
    config.seed.domain = location;
    config.seed.excludes = config
        .seed
        .excludes
        .iter()
        .map(|e| e.trim())
        .filter(|e| !e.is_empty())
        .map(str::to_string)
        .collect();

    Ok(config)
}

/// Splits a comma-separated exclusion list
///
/// Entries are trimmed and empty entries dropped, so an empty string yields an
/// empty list rather than a list holding `""` (which would match every URL).
pub fn parse_excludes(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|e| !e.is_empty())
        .map(str::to_string)
        .collect()
}

/// Computes a SHA-256 hash of the configuration file content
///
/// Logged at startup so a text directory can be traced back to the
/// configuration that produced it.
///
/// # Returns
///
/// * `Ok(String)` - Hex-encoded SHA-256 hash of the file content
/// * `Err(ConfigError)` - Failed to read the file
pub fn compute_config_hash(path: &Path) -> Result<String, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    let result = hasher.finalize();
    Ok(hex::encode(result))
}

/// Loads a configuration and returns both the config and its hash
pub fn load_config_with_hash(path: &Path) -> Result<(Config, String), ConfigError> {
    let config = load_config(path)?;
    let hash = compute_config_hash(path)?;
    Ok((config, hash))
}
