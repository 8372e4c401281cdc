use crate::config::SeedConfig;
use crate::url::netloc;
use crate::UrlError;
use regex::Regex;
use std::sync::LazyLock;
use url::Url;

/// Links treated as absolute; anything else is resolved against the domain root
#[allow(clippy::expect_used)]
static ABSOLUTE_HTTP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^http[s]*://.+").expect("valid regex"));

/// Turns a raw hyperlink into an absolute, comparable URL on the seed's domain
///
/// # Normalization Steps
///
/// 1. Absolute `http://` / `https://` links are parsed; a link whose network
///    location differs from the seed domain is rejected
/// 2. Otherwise `#fragment` and `mailto:` links are rejected, a single leading
///    `/` is stripped, and the rest is appended to `<scheme>://<domain>/`
///    (path-relative links resolve against the site root, not the current page)
/// 3. The result is rebuilt as `scheme://netloc/path`, dropping the query
///    string and the fragment
/// 4. A single trailing `/` is removed
///
/// The scheme used in step 2 is the base URL's, which is `https` for any real
/// documentation site.
///
/// # Returns
///
/// * `Ok(String)` - The normalized URL (not yet scope-filtered)
/// * `Err(UrlError)` - Why the link is not crawlable
///
/// # Examples
///
/// ```
/// use docsweep::config::SeedConfig;
/// use docsweep::url::normalize_link;
///
/// let mut seed = SeedConfig::new("https://example.com/docs");
/// seed.domain = "example.com".to_string();
///
/// assert_eq!(
///     normalize_link("/docs/a/?q=1#top", &seed).unwrap(),
///     "https://example.com/docs/a"
/// );
/// assert!(normalize_link("mailto:team@example.com", &seed).is_err());
/// ```
pub fn normalize_link(raw: &str, seed: &SeedConfig) -> Result<String, UrlError> {
    let url = if is_absolute_http(raw) {
        let url = Url::parse(raw).map_err(|e| UrlError::Parse(e.to_string()))?;
        let location = netloc(&url).ok_or(UrlError::MissingHost)?;
        if !location.eq_ignore_ascii_case(&seed.domain) {
            return Err(UrlError::ForeignDomain(location));
        }
        url
    } else {
        if raw.starts_with('#') {
            return Err(UrlError::FragmentOnly);
        }
        if raw.starts_with("mailto:") {
            return Err(UrlError::Mailto);
        }

        let path = raw.strip_prefix('/').unwrap_or(raw);
        let joined = format!("{}://{}/{}", seed.scheme(), seed.domain, path);
        Url::parse(&joined).map_err(|e| UrlError::Parse(e.to_string()))?
    };

    let location = netloc(&url).ok_or(UrlError::MissingHost)?;
    let mut normalized = format!("{}://{}{}", url.scheme(), location, url.path());

    if normalized.ends_with('/') {
        normalized.pop();
    }

    Ok(normalized)
}

fn is_absolute_http(raw: &str) -> bool {
    ABSOLUTE_HTTP.is_match(raw)
}
