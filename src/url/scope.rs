use crate::config::SeedConfig;

/// Decides whether a normalized URL may be crawled
///
/// A candidate is rejected when it contains any exclusion substring
/// (case-sensitive, first match wins) or when it does not contain the base
/// URL. Both are necessary conditions; exclusions are checked first because
/// they are usually the cheaper test.
///
/// # Examples
///
/// ```
/// use docsweep::config::SeedConfig;
/// use docsweep::url::in_scope;
///
/// let mut seed = SeedConfig::new("https://example.com/docs");
/// seed.excludes = vec!["/docs/legacy".to_string()];
///
/// assert!(in_scope("https://example.com/docs/guide", &seed));
/// assert!(!in_scope("https://example.com/docs/legacy/v1", &seed));
/// assert!(!in_scope("https://example.com/blog", &seed));
/// ```
pub fn in_scope(candidate: &str, seed: &SeedConfig) -> bool {
    if let Some(exclude) = seed
        .excludes
        .iter()
        .find(|exclude| candidate.contains(exclude.as_str()))
    {
        tracing::trace!("{} excluded by '{}'", candidate, exclude);
        return false;
    }

    candidate.contains(&seed.base_url)
}
