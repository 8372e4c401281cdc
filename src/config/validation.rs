use crate::config::types::{Config, CrawlerConfig, OutputConfig, SeedConfig};
use crate::url::netloc;
use crate::ConfigError;
use url::Url;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_seed_config(&config.seed)?;
    validate_crawler_config(&config.crawler)?;
    validate_output_config(&config.output)?;
    Ok(())
}

/// Validates the seed: a parseable http(s) base URL whose host matches the domain
fn validate_seed_config(config: &SeedConfig) -> Result<(), ConfigError> {
    if config.base_url.is_empty() {
        return Err(ConfigError::Validation(
            "base_url cannot be empty".to_string(),
        ));
    }

    let url = Url::parse(&config.base_url)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid base_url '{}': {}", config.base_url, e)))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::Validation(format!(
            "base_url '{}' must use http or https, got {}",
            config.base_url,
            url.scheme()
        )));
    }

    let location = netloc(&url).ok_or_else(|| {
        ConfigError::InvalidUrl(format!("base_url '{}' has no host", config.base_url))
    })?;

    if !config.domain.is_empty() && !config.domain.eq_ignore_ascii_case(&location) {
        return Err(ConfigError::Validation(format!(
            "domain '{}' does not match the base_url host '{}'",
            config.domain, location
        )));
    }

    Ok(())
}

/// Validates crawler configuration
fn validate_crawler_config(config: &CrawlerConfig) -> Result<(), ConfigError> {
    if config.max_concurrent_fetches < 1 || config.max_concurrent_fetches > 64 {
        return Err(ConfigError::Validation(format!(
            "max_concurrent_fetches must be between 1 and 64, got {}",
            config.max_concurrent_fetches
        )));
    }

    if config.request_timeout_ms < 100 {
        return Err(ConfigError::Validation(format!(
            "request_timeout_ms must be >= 100ms, got {}ms",
            config.request_timeout_ms
        )));
    }

    if config.user_agent.trim().is_empty() {
        return Err(ConfigError::Validation(
            "user_agent cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// Validates output configuration
fn validate_output_config(config: &OutputConfig) -> Result<(), ConfigError> {
    if config.text_dir.is_empty() {
        return Err(ConfigError::Validation(
            "text_dir cannot be empty".to_string(),
        ));
    }

    Ok(())
}
