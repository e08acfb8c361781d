//! Turning generator output into a printable document.
//!
//! Raw text goes through three stages:
//!
//! 1. Embedded document detection: a (possibly fenced) HTML document is used
//!    as-is.
//! 2. Line normalization and title extraction.
//! 3. Card grid rendering on the configured grid (3x4 by default).
//!
//! [`from_response`] adds the HTTP layer on top: non-success statuses become
//! errors, structured `printable` payloads are wrapped directly, and anything
//! else is handed to [`to_printable_with_options`].

use log::{debug, warn};

use crate::detect::detect_embedded_document;
use crate::error::{Error, Result};
use crate::model::{DocumentSource, PrintableDocument};
use crate::normalize::{extract_title_and_items_with_locale, LineNormalizer, NormalizeOptions};
use crate::render::{wrap_payload, CardGridRenderer, RenderOptions};
use crate::response::ResponsePayload;

/// Options for conversion.
#[derive(Debug, Clone, Default)]
pub struct ConvertOptions {
    /// Rendering options (grid, locale, page geometry)
    pub render: RenderOptions,

    /// Line normalization options
    pub normalize: NormalizeOptions,
}

impl ConvertOptions {
    /// Create new conversion options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set rendering options.
    pub fn with_render_options(mut self, options: RenderOptions) -> Self {
        self.render = options;
        self
    }

    /// Set normalization options.
    pub fn with_normalize_options(mut self, options: NormalizeOptions) -> Self {
        self.normalize = options;
        self
    }
}

/// A successfully converted generator response.
#[derive(Debug, Clone)]
pub struct Generation {
    /// The document to preview and print
    pub document: PrintableDocument,

    /// The parsed response body, for display
    pub payload: ResponsePayload,
}

impl Generation {
    /// True when the body said `"ok": false` even though a document was produced.
    pub fn reported_failure(&self) -> bool {
        self.payload.reported_failure()
    }
}

/// Convert raw generator text with default options (3x4 grid, Spanish).
///
/// # Errors
/// Returns [`Error::NoPrintableContent`] when the text is not an HTML
/// document and has no content lines besides an optional title.
///
/// # Example
/// ```
/// use logoprint::{to_printable, DocumentSource};
///
/// let doc = to_printable("perro\ngato\nvaca")?;
/// assert_eq!(doc.source, DocumentSource::CardGrid { filled: 3, slots: 12 });
/// # Ok::<(), logoprint::Error>(())
/// ```
pub fn to_printable(raw: &str) -> Result<PrintableDocument> {
    to_printable_with_options(raw, &ConvertOptions::default())
}

/// Convert raw generator text.
pub fn to_printable_with_options(raw: &str, options: &ConvertOptions) -> Result<PrintableDocument> {
    if let Some(html) = detect_embedded_document(raw) {
        return Ok(PrintableDocument::new(html, DocumentSource::Embedded));
    }

    let lines = LineNormalizer::new(options.normalize.clone()).process(raw);
    let titled = extract_title_and_items_with_locale(lines, options.render.locale);
    if titled.is_empty() {
        debug!("no content lines in {} byte response", raw.len());
        return Err(Error::NoPrintableContent);
    }

    let set = titled.into_card_set(options.render.columns, options.render.rows);
    Ok(CardGridRenderer::new(options.render.clone()).render(&set))
}

/// Convert an HTTP response from the generator.
///
/// # Errors
/// * [`Error::Http`] for a non-2xx status, with the body's `error` or
///   `message` field, the raw body, or `HTTP <status>` as message.
/// * [`Error::NoPrintableContent`] when a 2xx body yields nothing printable.
pub fn from_response(status: u16, body: &str, options: &ConvertOptions) -> Result<Generation> {
    let payload = ResponsePayload::parse(body);

    if !(200..300).contains(&status) {
        return Err(Error::Http {
            status,
            message: payload.failure_message(status),
        });
    }

    if payload.reported_failure() {
        warn!("generator reported ok=false");
    }

    let document = if let Some(printable) = payload.printable() {
        debug!("wrapping structured printable payload");
        wrap_payload(&printable, options.render.locale)
    } else if let Some(text) = payload.text() {
        to_printable_with_options(text, options)?
    } else {
        return Err(Error::NoPrintableContent);
    };

    Ok(Generation { document, payload })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Locale;

    #[test]
    fn test_plain_lines_become_grid() {
        let doc = to_printable("perro\ngato\nvaca").unwrap();
        let html = doc.as_str();
        assert_eq!(html.matches("<div class=\"card").count(), 12);
        assert_eq!(html.matches("<div class=\"card empty\">").count(), 9);
        assert!(html.contains("<h1>Material imprimible</h1>"));
    }

    #[test]
    fn test_empty_input_has_no_content() {
        assert!(matches!(to_printable(""), Err(Error::NoPrintableContent)));
        assert!(matches!(to_printable("\"\"\n"), Err(Error::NoPrintableContent)));
        assert!(matches!(
            to_printable("Actividades: solo título"),
            Err(Error::NoPrintableContent)
        ));
    }

    #[test]
    fn test_embedded_document_used_as_is() {
        let raw = "```html\n<html><body>ficha</body></html>\n```";
        let doc = to_printable(raw).unwrap();
        assert_eq!(doc.as_str(), "<html><body>ficha</body></html>");
        assert_eq!(doc.source, DocumentSource::Embedded);
    }

    #[test]
    fn test_fenced_plain_list_becomes_grid() {
        let doc = to_printable("```text\nperro\ngato\n```").unwrap();
        assert_eq!(doc.source, DocumentSource::CardGrid { filled: 2, slots: 12 });
        assert!(!doc.as_str().contains("```"));
    }

    #[test]
    fn test_options_flow_through() {
        let options = ConvertOptions::new()
            .with_render_options(RenderOptions::new().with_grid(2, 2).with_locale(Locale::En));
        let doc = to_printable_with_options("a\nb\nc\nd\ne", &options).unwrap();
        assert_eq!(doc.source, DocumentSource::CardGrid { filled: 4, slots: 4 });
        assert!(doc.as_str().contains("<h1>Printable material</h1>"));
    }

    #[test]
    fn test_from_response_http_error() {
        let err = from_response(500, "{\"error\":\"quota exceeded\"}", &ConvertOptions::default())
            .unwrap_err();
        assert!(matches!(err, Error::Http { status: 500, .. }));
        assert_eq!(err.to_string(), "quota exceeded");
    }

    #[test]
    fn test_from_response_printable_json() {
        let body = r#"{"ok":true,"printable":{"html_a4":"<p>hoja</p>","css_print":"p{}"}}"#;
        let generation = from_response(200, body, &ConvertOptions::default()).unwrap();
        assert_eq!(generation.document.source, DocumentSource::Wrapped);
        assert!(generation.document.as_str().contains("<p>hoja</p>"));
        assert!(!generation.reported_failure());
    }

    #[test]
    fn test_from_response_raw_text() {
        let generation = from_response(200, "pato\npez", &ConvertOptions::default()).unwrap();
        assert_eq!(
            generation.document.source,
            DocumentSource::CardGrid { filled: 2, slots: 12 }
        );
        assert!(matches!(generation.payload, ResponsePayload::Raw(_)));
    }

    #[test]
    fn test_from_response_json_without_printable() {
        let result = from_response(200, "{\"ok\":false}", &ConvertOptions::default());
        assert!(matches!(result, Err(Error::NoPrintableContent)));
    }
}
