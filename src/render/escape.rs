//! HTML escaping for untrusted generator text.

use std::borrow::Cow;

/// Escape `&`, `<`, `>`, `"` and `'` for safe embedding in markup.
///
/// Returns the input unchanged (borrowed) when nothing needs escaping.
///
/// # Example
/// ```
/// use logoprint::render::escape_html;
///
/// assert_eq!(escape_html("<b>\"Tom\" & 'Jerry'</b>"),
///            "&lt;b&gt;&quot;Tom&quot; &amp; &#39;Jerry&#39;&lt;/b&gt;");
/// ```
pub fn escape_html(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(text.len() + 16);
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    Cow::Owned(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_all_special_chars() {
        assert_eq!(escape_html("&<>\"'"), "&amp;&lt;&gt;&quot;&#39;");
    }

    #[test]
    fn test_escape_borrows_clean_text() {
        assert!(matches!(escape_html("pato"), Cow::Borrowed("pato")));
    }

    #[test]
    fn test_escape_treats_entities_as_text() {
        assert_eq!(escape_html("&amp;"), "&amp;amp;");
    }

    #[test]
    fn test_escape_keeps_unicode() {
        assert_eq!(escape_html("ñandú <3"), "ñandú &lt;3");
    }
}
