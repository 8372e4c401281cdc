/// Punctuation that survives sanitization
const PERMITTED_PUNCTUATION: &[char] = &['.', ',', '?', '!', ':', ';', '\'', '-'];

/// Text shown by single-page apps that only render client-side
pub const JAVASCRIPT_REQUIRED_MARKER: &str = "You need to enable JavaScript to run this app.";

/// Normalizes extracted page text into a single line of plain text
///
/// # Sanitization Steps
///
/// 1. Trim leading and trailing whitespace
/// 2. Replace newlines with spaces
/// 3. Collapse whitespace runs into single spaces
/// 4. Drop every character that is not alphanumeric, whitespace, or one of
///    `. , ? ! : ; ' -`
///
/// Step 4 runs after the collapse, so removing a standalone symbol can leave
/// two adjacent spaces behind. `|` is always removed, which keeps the
/// `url|text` record format unambiguous.
///
/// # Examples
///
/// ```
/// use docsweep::text::sanitize;
///
/// assert_eq!(sanitize("  Hello,\n\n  world!  "), "Hello, world!");
/// assert_eq!(sanitize("price: $5 | 10%"), "price: 5  10");
/// ```
pub fn sanitize(raw: &str) -> String {
    let single_line = raw.trim().replace('\n', " ");
    let collapsed = single_line.split_whitespace().collect::<Vec<_>>().join(" ");

    collapsed.chars().filter(|&c| is_permitted(c)).collect()
}

fn is_permitted(c: char) -> bool {
    c.is_alphanumeric() || c.is_whitespace() || PERMITTED_PUNCTUATION.contains(&c)
}

/// Returns true when the text is the placeholder of a JavaScript-only page
///
/// Such pages are still recorded; callers surface this as a content-quality
/// warning.
pub fn requires_javascript(text: &str) -> bool {
    text.contains(JAVASCRIPT_REQUIRED_MARKER)
}
