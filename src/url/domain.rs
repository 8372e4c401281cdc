use url::Url;

/// Extracts the network location (`host` or `host:port`) from a URL
///
/// The port is only present when it differs from the scheme's default, and
/// the host comes back lowercased, so two spellings of the same location
/// compare equal.
///
/// # Returns
///
/// * `Some(String)` - The network location
/// * `None` - If the URL has no host
///
/// # Examples
///
/// ```
/// use url::Url;
/// use docsweep::url::netloc;
///
/// let url = Url::parse("https://EXAMPLE.com/path").unwrap();
/// assert_eq!(netloc(&url), Some("example.com".to_string()));
///
/// let url = Url::parse("http://localhost:8080/docs").unwrap();
/// assert_eq!(netloc(&url), Some("localhost:8080".to_string()));
/// ```
pub fn netloc(url: &Url) -> Option<String> {
    let host = url.host_str()?;
    Some(match url.port() {
        Some(port) => format!("{}:{}", host, port),
        None => host.to_string(),
    })
}
