//! HTTP fetcher implementation
//!
//! This module handles all HTTP requests for the crawler, including:
//! - Building the HTTP client with the configured user agent and timeout
//! - GET requests for page content
//! - Classifying responses as HTML, non-HTML, HTTP errors or network errors
//!
//! Nothing here returns `Err`: every failure is folded into a `FetchResult`
//! so a bad page never stops the crawl. There are no retries.

use crate::config::CrawlerConfig;
use reqwest::{header::CONTENT_TYPE, redirect::Policy, Client};
use std::time::Duration;

/// Result of a fetch operation
#[derive(Debug)]
pub enum FetchResult {
    /// 2xx response declared as `text/html`
    Html {
        /// Final URL after redirects
        final_url: String,
        /// Page body content
        body: String,
    },

    /// 2xx response with any other content type
    NonHtml {
        /// The actual Content-Type received
        content_type: String,
        /// Response body, decoded lossily
        body: String,
    },

    /// Non-2xx response; the body (an error page) is kept for its text
    HttpError {
        /// The HTTP status code
        status_code: u16,
        /// Response body, empty if it could not be read
        body: String,
    },

    /// No response at all (DNS, connection refused, timeout, broken body)
    NetworkError {
        /// Error description
        error: String,
    },
}

impl FetchResult {
    /// Whatever body was obtained, for text extraction
    pub fn body(&self) -> Option<&str> {
        match self {
            Self::Html { body, .. } | Self::NonHtml { body, .. } | Self::HttpError { body, .. } => {
                Some(body)
            }
            Self::NetworkError { .. } => None,
        }
    }

    /// The body only when it qualifies as an HTML page, for link extraction
    pub fn html(&self) -> Option<&str> {
        match self {
            Self::Html { body, .. } => Some(body),
            _ => None,
        }
    }

    /// Where an HTML fetch ended up, when redirects moved it off `requested`
    pub fn redirect_target(&self, requested: &str) -> Option<&str> {
        match self {
            Self::Html { final_url, .. } if final_url != requested => Some(final_url),
            _ => None,
        }
    }

    /// Short description of a non-HTML outcome, for logging
    pub fn describe_failure(&self) -> Option<String> {
        match self {
            Self::Html { .. } => None,
            Self::NonHtml { content_type, .. } => Some(format!("not HTML ({})", content_type)),
            Self::HttpError { status_code, .. } => Some(format!("HTTP {}", status_code)),
            Self::NetworkError { error } => Some(error.clone()),
        }
    }
}

/// Builds an HTTP client with proper configuration
///
/// # Example
///
/// ```no_run
/// use docsweep::config::CrawlerConfig;
/// use docsweep::crawler::build_http_client;
///
/// let client = build_http_client(&CrawlerConfig::default()).unwrap();
/// ```
pub fn build_http_client(config: &CrawlerConfig) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(config.user_agent.as_str())
        .timeout(Duration::from_millis(config.request_timeout_ms))
        .connect_timeout(Duration::from_millis(config.request_timeout_ms.min(10_000)))
        .redirect(Policy::limited(10))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Returns true if a Content-Type header value declares an HTML document
pub fn is_html_content_type(content_type: &str) -> bool {
    content_type
        .trim_start()
        .to_ascii_lowercase()
        .starts_with("text/html")
}

/// Fetches a URL and classifies the response
///
/// # Request Flow
///
/// 1. Send a GET request (redirects followed, at most 10 hops)
/// 2. Connection, DNS or timeout failure → `NetworkError`
/// 3. Non-2xx status → `HttpError` (body kept)
/// 4. Content-Type not starting with `text/html` → `NonHtml` (body kept)
/// 5. Otherwise → `Html`
pub async fn fetch_page(client: &Client, url: &str) -> FetchResult {
    let response = match client.get(url).send().await {
        Ok(response) => response,
        Err(e) => return network_error(e),
    };

    let status = response.status();
    let final_url = response.url().to_string();
    let content_type = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();

    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return FetchResult::HttpError {
            status_code: status.as_u16(),
            body,
        };
    }

    let body = match response.text().await {
        Ok(body) => body,
        Err(e) => return network_error(e),
    };

    if is_html_content_type(&content_type) {
        FetchResult::Html { final_url, body }
    } else {
        FetchResult::NonHtml { content_type, body }
    }
}

/// Classifies a transport-level error
fn network_error(e: reqwest::Error) -> FetchResult {
    let error = if e.is_timeout() {
        "Request timeout".to_string()
    } else if e.is_connect() {
        format!("Connection failed: {}", e)
    } else if e.is_redirect() {
        format!("Redirect error: {}", e)
    } else {
        e.to_string()
    };

    FetchResult::NetworkError { error }
}
