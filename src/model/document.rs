//! Printable document types.

use serde::{Deserialize, Serialize};

/// Where a printable document came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DocumentSource {
    /// The generator returned a complete HTML document, used as-is
    Embedded,
    /// Rendered from line items onto a card grid
    CardGrid {
        /// Slots holding an item
        filled: usize,
        /// Total slots on the sheet
        slots: usize,
    },
    /// Structured `html_a4` / `css_print` fields wrapped into a document
    Wrapped,
}

/// A self-contained HTML document ready for display or print-to-PDF.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrintableDocument {
    /// Full markup, doctype included
    pub html: String,

    /// How the document was produced
    pub source: DocumentSource,
}

impl PrintableDocument {
    /// Create a document from markup and its origin.
    pub fn new(html: impl Into<String>, source: DocumentSource) -> Self {
        Self {
            html: html.into(),
            source,
        }
    }

    /// Borrow the markup.
    pub fn as_str(&self) -> &str {
        &self.html
    }

    /// Take the markup.
    pub fn into_string(self) -> String {
        self.html
    }

    /// Length of the markup in bytes.
    pub fn len(&self) -> usize {
        self.html.len()
    }

    /// Check if the markup is empty.
    pub fn is_empty(&self) -> bool {
        self.html.is_empty()
    }
}

impl std::fmt::Display for PrintableDocument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.html)
    }
}

impl AsRef<str> for PrintableDocument {
    fn as_ref(&self) -> &str {
        &self.html
    }
}

/// Structured printable payload returned by some generator variants.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Printable {
    /// Body markup laid out for A4
    #[serde(default)]
    pub html_a4: String,

    /// Print stylesheet for the body markup
    #[serde(default)]
    pub css_print: String,
}

impl Printable {
    /// Check whether there is any body markup to show.
    pub fn has_html(&self) -> bool {
        !self.html_a4.trim().is_empty()
    }
}
