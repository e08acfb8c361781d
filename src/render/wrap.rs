//! Wrapping structured `html_a4` / `css_print` payloads into a full document.

use std::fmt::Write;
use std::sync::OnceLock;

use regex::Regex;

use crate::model::{DocumentSource, Locale, Printable, PrintableDocument};

/// Title of wrapped documents; the generator's body carries its own heading.
const WRAPPED_TITLE: &str = "Printable";

fn style_close() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)</style").expect("style pattern is valid"))
}

/// Embed generator-supplied body markup and print CSS in the document wrapper.
///
/// The body is markup by contract and is inserted as-is. The stylesheet is
/// kept inside its `<style>` element: any closing `</style` sequence in it is
/// neutralized.
///
/// # Example
/// ```
/// use logoprint::{wrap_printable, Locale};
///
/// let doc = wrap_printable("<h1>Fonema /s/</h1>", "h1 { color: red; }", Locale::Es);
/// assert!(doc.as_str().contains("<body>\n<h1>Fonema /s/</h1>\n</body>"));
/// ```
pub fn wrap_printable(html: &str, css: &str, locale: Locale) -> PrintableDocument {
    let css = style_close().replace_all(css, "<\\/style");
    let mut output = String::with_capacity(html.len() + css.len() + 256);

    output.push_str("<!doctype html>\n");
    let _ = writeln!(output, "<html lang=\"{}\">", locale.lang());
    output.push_str("<head>\n");
    output.push_str("<meta charset=\"utf-8\" />\n");
    output.push_str("<meta name=\"viewport\" content=\"width=device-width,initial-scale=1\" />\n");
    let _ = writeln!(output, "<title>{}</title>", WRAPPED_TITLE);
    output.push_str("<style>\n");
    let css = css.trim();
    if !css.is_empty() {
        output.push_str(css);
        output.push('\n');
    }
    output.push_str("</style>\n");
    output.push_str("</head>\n");
    output.push_str("<body>\n");
    output.push_str(html.trim());
    output.push('\n');
    output.push_str("</body>\n");
    output.push_str("</html>\n");

    PrintableDocument::new(output, DocumentSource::Wrapped)
}

/// Wrap a structured printable payload.
pub fn wrap_payload(printable: &Printable, locale: Locale) -> PrintableDocument {
    wrap_printable(&printable.html_a4, &printable.css_print, locale)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_embeds_html_and_css() {
        let doc = wrap_printable("<div class=\"x\">hola</div>", ".x { color: red; }", Locale::Es);
        let html = doc.as_str();
        assert!(html.starts_with("<!doctype html>"));
        assert!(html.contains("<html lang=\"es\">"));
        assert!(html.contains("<style>\n.x { color: red; }\n</style>"));
        assert!(html.contains("<div class=\"x\">hola</div>"));
        assert_eq!(doc.source, DocumentSource::Wrapped);
    }

    #[test]
    fn test_wrap_without_css() {
        let doc = wrap_printable("<p>x</p>", "", Locale::En);
        assert!(doc.as_str().contains("<style>\n</style>"));
        assert!(doc.as_str().contains("<html lang=\"en\">"));
    }

    #[test]
    fn test_wrap_css_cannot_close_style() {
        let doc = wrap_printable("<p>x</p>", "p{}</STYLE><script>bad()</script>", Locale::Es);
        let html = doc.as_str();
        assert_eq!(html.matches("</style>").count(), 1);
        assert!(html.contains("<\\/style"));
    }

    #[test]
    fn test_wrap_payload() {
        let printable = Printable {
            html_a4: "<p>ficha</p>".to_string(),
            css_print: String::new(),
        };
        let doc = wrap_payload(&printable, Locale::Es);
        assert!(doc.as_str().contains("<p>ficha</p>"));
    }
}
