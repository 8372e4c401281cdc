//! HTML parser for extracting links and text
//!
//! Parsing is tolerant: malformed markup yields whatever the HTML5 parser
//! recovers, never an error.

use scraper::{Html, Selector};

/// Extracts the raw `href` of every anchor element, in document order
///
/// Values are returned exactly as written (entity-decoded, otherwise
/// untouched) and not deduplicated; resolving and filtering them is the URL
/// module's job.
///
/// # Example
///
/// ```
/// use docsweep::crawler::extract_links;
///
/// let html = r##"<p><a href="/docs/a">A</a> <a name="x">no href</a> <a href="#top">Top</a></p>"##;
/// assert_eq!(extract_links(html), vec!["/docs/a", "#top"]);
/// ```
pub fn extract_links(html: &str) -> Vec<String> {
    let document = Html::parse_document(html);
    let mut links = Vec::new();

    if let Ok(a_selector) = Selector::parse("a[href]") {
        for element in document.select(&a_selector) {
            if let Some(href) = element.value().attr("href") {
                links.push(href.to_string());
            }
        }
    }

    links
}

/// Extracts the text of a document with all markup removed
///
/// Text nodes are concatenated in document order with no separator, including
/// the contents of `<title>`, `<script>` and `<style>`.
pub fn extract_text(html: &str) -> String {
    let document = Html::parse_document(html);
    document.root_element().text().collect()
}
