//! # logoprint
//!
//! Printable card sheets from speech-therapy exercise generators.
//!
//! Generators answer with a complete HTML document, a structured
//! `printable` JSON payload, or plain lines of text. This library turns any of
//! those into a self-contained A4 HTML document that can be shown in an
//! isolated viewer and printed or saved as PDF without network access.
//!
//! ## Quick Start
//!
//! ```
//! use logoprint::to_printable;
//!
//! fn main() -> logoprint::Result<()> {
//!     let doc = to_printable("Actividades: fonema /p/\npato\npez\npelota")?;
//!     assert!(doc.as_str().contains("<h1>Actividades: fonema /p/</h1>"));
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Embedded document detection**: fenced or bare HTML passes through untouched
//! - **Line normalization**: quote stripping, CRLF handling, Unicode NFC
//! - **Title heuristic**: short first lines with a colon or "actividades"
//! - **Card grid**: fixed A4 grid with dashed trim guides, 3x4 by default
//! - **Escaping**: every generator string is HTML-escaped before embedding
//! - **Response handling**: JSON, error JSON and raw text bodies

pub mod config;
pub mod convert;
pub mod detect;
pub mod error;
pub mod model;
pub mod normalize;
pub mod render;
pub mod request;
pub mod response;

// Re-export commonly used types
pub use config::{EndpointConfig, DEFAULT_API_URL};
pub use convert::{
    from_response, to_printable, to_printable_with_options, ConvertOptions, Generation,
};
pub use detect::detect_embedded_document;
pub use error::{Error, Result};
pub use model::{
    CardSet, DocumentSource, Locale, Printable, PrintableDocument, MAX_GRID_DIMENSION,
};
pub use normalize::{
    extract_title_and_items, extract_title_and_items_with_locale, normalize_lines,
    NormalizeOptions, TitledItems,
};
pub use render::{render_card_grid, render_card_grid_with_options, wrap_printable, RenderOptions};
pub use request::{GenerationRequest, Parameters, ProfileParameters, SimpleParameters};
pub use response::ResponsePayload;

/// Builder for converting generator output.
///
/// # Example
///
/// ```
/// use logoprint::{Locale, Logoprint};
///
/// let doc = Logoprint::new()
///     .with_locale(Locale::En)
///     .with_grid(4, 5)
///     .strip_list_markers()
///     .convert("- dog\n- cat")?;
/// assert!(doc.as_str().contains("<span>dog</span>"));
/// # Ok::<(), logoprint::Error>(())
/// ```
pub struct Logoprint {
    options: ConvertOptions,
}

impl Logoprint {
    /// Create a new builder with the 3x4 Spanish defaults.
    pub fn new() -> Self {
        Self {
            options: ConvertOptions::default(),
        }
    }

    /// Set the document locale.
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.options.render = self.options.render.with_locale(locale);
        self
    }

    /// Set grid dimensions.
    pub fn with_grid(mut self, columns: usize, rows: usize) -> Self {
        self.options.render = self.options.render.with_grid(columns, rows);
        self
    }

    /// Replace all rendering options.
    pub fn with_render_options(mut self, options: RenderOptions) -> Self {
        self.options.render = options;
        self
    }

    /// Remove bullet and number markers from content lines.
    pub fn strip_list_markers(mut self) -> Self {
        self.options.normalize = self.options.normalize.with_list_marker_stripping(true);
        self
    }

    /// Keep lines exactly as received instead of NFC-normalizing them.
    pub fn without_unicode_normalization(mut self) -> Self {
        self.options.normalize = self.options.normalize.with_unicode_normalization(false);
        self
    }

    /// The options this builder will convert with.
    pub fn options(&self) -> &ConvertOptions {
        &self.options
    }

    /// Convert raw generator text.
    pub fn convert(&self, raw: &str) -> Result<PrintableDocument> {
        to_printable_with_options(raw, &self.options)
    }

    /// Convert an HTTP response from the generator.
    pub fn convert_response(&self, status: u16, body: &str) -> Result<Generation> {
        from_response(status, body, &self.options)
    }
}

impl Default for Logoprint {
    fn default() -> Self {
        Self::new()
    }
}
