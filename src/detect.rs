//! Detection of complete HTML documents inside generator output.

use log::debug;
use regex::Regex;
use std::sync::OnceLock;

/// Opening fence: three backticks, an optional language tag, then the line break.
const FENCE_OPEN_PATTERN: &str = r"^```[A-Za-z0-9_+.-]*[ \t]*(\r?\n)?";

/// Closing fence, optionally preceded by a line break.
const FENCE_CLOSE_PATTERN: &str = r"(\r?\n)?```$";

/// Case-insensitive root element marker.
const HTML_MARKER_PATTERN: &str = r"(?i)<html";

fn fence_open() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(FENCE_OPEN_PATTERN).expect("fence pattern is valid"))
}

fn fence_close() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(FENCE_CLOSE_PATTERN).expect("fence pattern is valid"))
}

fn html_marker() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(HTML_MARKER_PATTERN).expect("marker pattern is valid"))
}

/// Remove one surrounding fenced block, if present, and trim whitespace.
///
/// Both delimiters are handled independently, so a generator that forgets the
/// closing fence still has its opening one removed.
///
/// # Example
/// ```
/// use logoprint::detect::strip_code_fence;
///
/// assert_eq!(strip_code_fence("```html\n<p>hi</p>\n```"), "<p>hi</p>");
/// assert_eq!(strip_code_fence("  plain  "), "plain");
/// ```
pub fn strip_code_fence(raw: &str) -> &str {
    let trimmed = raw.trim();
    let start = fence_open()
        .find(trimmed)
        .map(|m| m.end())
        .unwrap_or(0);
    let body = &trimmed[start..];
    let end = fence_close()
        .find(body)
        .map(|m| m.start())
        .unwrap_or(body.len());
    body[..end].trim()
}

/// Check whether text carries a case-insensitive `<html` marker.
pub fn contains_html_marker(text: &str) -> bool {
    html_marker().is_match(text)
}

/// Return the unwrapped text when the response is already a complete HTML document.
///
/// # Returns
/// * `Some(document)` if, after fence stripping and trimming, the text
///   contains `<html` (any case). The text is returned unchanged otherwise.
/// * `None` if the response should go through line-based parsing.
///
/// # Example
/// ```
/// use logoprint::detect_embedded_document;
///
/// let raw = "```html\n<!doctype html><html><body>ok</body></html>\n```";
/// assert_eq!(
///     detect_embedded_document(raw).as_deref(),
///     Some("<!doctype html><html><body>ok</body></html>")
/// );
/// assert!(detect_embedded_document("perro\ngato").is_none());
/// ```
pub fn detect_embedded_document(raw: &str) -> Option<String> {
    let candidate = strip_code_fence(raw);
    if contains_html_marker(candidate) {
        debug!("response is an embedded HTML document ({} bytes)", candidate.len());
        Some(candidate.to_string())
    } else {
        None
    }
}
