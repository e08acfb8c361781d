//! Output language for generated documents.

use serde::{Deserialize, Serialize};

/// Language of the generated document.
///
/// Only affects the `lang` attribute and the fallback title; item text is
/// always passed through as the generator wrote it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// Spanish
    #[default]
    Es,
    /// English
    En,
}

impl Locale {
    /// Value for the document's `lang` attribute.
    pub fn lang(self) -> &'static str {
        match self {
            Locale::Es => "es",
            Locale::En => "en",
        }
    }

    /// Title used when the response has no recognizable title line.
    pub fn default_title(self) -> &'static str {
        match self {
            Locale::Es => "Material imprimible",
            Locale::En => "Printable material",
        }
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.lang())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locale_defaults() {
        assert_eq!(Locale::default(), Locale::Es);
        assert_eq!(Locale::Es.default_title(), "Material imprimible");
        assert_eq!(Locale::En.default_title(), "Printable material");
        assert_eq!(Locale::En.to_string(), "en");
    }
}
