//! URL handling module for Docsweep
//!
//! This module provides link normalization, network-location extraction and
//! the scope filter that keeps the crawl under the seed's base URL.

mod domain;
mod normalize;
mod scope;

use crate::config::SeedConfig;
use std::collections::HashSet;

// Re-export main functions
pub use domain::netloc;
pub use normalize::normalize_link;
pub use scope::in_scope;

/// Turns the raw hyperlinks of one page into crawl candidates
///
/// Each distinct raw link is normalized and scope-filtered; the survivors are
/// deduplicated (two spellings of the same page collapse into one) and kept in
/// first-seen order. Whether a candidate was already visited is the frontier's
/// decision, not this function's.
///
/// # Examples
///
/// ```
/// use docsweep::config::SeedConfig;
/// use docsweep::url::resolve_links;
///
/// let mut seed = SeedConfig::new("https://example.com/docs");
/// seed.domain = "example.com".to_string();
///
/// let raw = vec![
///     "https://example.com/docs/a".to_string(),
///     "https://other.com/x".to_string(),
///     "/docs/a#frag".to_string(),
/// ];
/// assert_eq!(resolve_links(&raw, &seed), vec!["https://example.com/docs/a"]);
/// ```
pub fn resolve_links(raw_links: &[String], seed: &SeedConfig) -> Vec<String> {
    let mut distinct_raw = HashSet::new();
    let mut accepted = HashSet::new();
    let mut candidates = Vec::new();

    for raw in raw_links {
        if !distinct_raw.insert(raw.as_str()) {
            continue;
        }

        let normalized = match normalize_link(raw, seed) {
            Ok(n) => n,
            Err(e) => {
                tracing::trace!("Skipping link {}: {}", raw, e);
                continue;
            }
        };

        if !in_scope(&normalized, seed) {
            tracing::trace!("Out of scope: {}", normalized);
            continue;
        }

        if accepted.insert(normalized.clone()) {
            candidates.push(normalized);
        }
    }

    candidates
}
