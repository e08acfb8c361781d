//! Line normalization and title extraction for plain-text generator output.
//!
//! Generators that do not return HTML answer with one item per line, sometimes
//! wrapped in the quotes of a JSON string literal and sometimes preceded by a
//! title line. This module turns that text into an ordered item list and an
//! optional title.

use log::{debug, trace};
use regex::Regex;
use serde::{Deserialize, Serialize};
use unicode_normalization::UnicodeNormalization;

use crate::detect::strip_code_fence;
use crate::model::{CardSet, Locale};

/// Longest first line, in characters, that can still be read as a title.
pub const MAX_TITLE_CHARS: usize = 90;

/// Words that mark a first line as a title, matched case-insensitively.
const TITLE_KEYWORDS: [&str; 2] = ["activities", "actividades"];

/// Options for line normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizeOptions {
    /// Normalize every line to Unicode NFC form
    pub normalize_unicode: bool,

    /// Remove leading bullet or number markers (`- `, `• `, `3. `, `3) `)
    pub strip_list_markers: bool,
}

impl NormalizeOptions {
    /// Create options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable NFC normalization.
    pub fn with_unicode_normalization(mut self, enabled: bool) -> Self {
        self.normalize_unicode = enabled;
        self
    }

    /// Enable or disable list marker removal.
    pub fn with_list_marker_stripping(mut self, enabled: bool) -> Self {
        self.strip_list_markers = enabled;
        self
    }
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        Self {
            normalize_unicode: true,
            strip_list_markers: false,
        }
    }
}

/// Splits raw generator text into clean, non-empty lines.
pub struct LineNormalizer {
    options: NormalizeOptions,
    list_marker_regex: Regex,
}

impl LineNormalizer {
    /// Create a normalizer with the given options.
    pub fn new(options: NormalizeOptions) -> Self {
        Self {
            options,
            list_marker_regex: Regex::new(r"^(?:[-*•·]|\d{1,3}[.)])\s+")
                .expect("list marker pattern is valid"),
        }
    }

    /// Normalize raw text into lines.
    ///
    /// One layer of surrounding double quotes and then one surrounding code
    /// fence are removed from the whole input, then the text is split on LF,
    /// CRLF or CR. Each line is trimmed and empty
    /// lines are dropped. Order is preserved.
    pub fn process(&self, raw: &str) -> Vec<String> {
        let text = strip_code_fence(strip_surrounding_quotes(raw));

        let lines: Vec<String> = text
            .split(['\n', '\r'])
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .filter_map(|line| self.clean_line(line))
            .collect();

        trace!("normalized {} bytes into {} lines", raw.len(), lines.len());
        lines
    }

    fn clean_line(&self, line: &str) -> Option<String> {
        let mut result = if self.options.normalize_unicode {
            line.nfc().collect::<String>()
        } else {
            line.to_string()
        };

        if self.options.strip_list_markers {
            result = self
                .list_marker_regex
                .replace(&result, "")
                .trim()
                .to_string();
        }

        (!result.is_empty()).then_some(result)
    }
}

impl Default for LineNormalizer {
    fn default() -> Self {
        Self::new(NormalizeOptions::default())
    }
}

/// Trim, drop one leading and one trailing `"`, then trim again.
fn strip_surrounding_quotes(raw: &str) -> &str {
    let text = raw.trim();
    let text = text.strip_prefix('"').unwrap_or(text);
    let text = text.strip_suffix('"').unwrap_or(text);
    text.trim()
}

/// Normalize raw text into lines with default options.
///
/// # Example
/// ```
/// use logoprint::normalize_lines;
///
/// let lines = normalize_lines("\"Línea A\nLínea B\n\"");
/// assert_eq!(lines, vec!["Línea A", "Línea B"]);
/// ```
pub fn normalize_lines(raw: &str) -> Vec<String> {
    LineNormalizer::default().process(raw)
}

/// A title and the remaining content lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TitledItems {
    /// Sheet title, either taken from the first line or the locale default
    pub title: String,

    /// Content lines in original order
    pub items: Vec<String>,
}

impl TitledItems {
    /// True when no content is left to print.
    ///
    /// Callers must treat this as "no printable content" rather than render
    /// an empty sheet.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Lay the items out on a grid, dropping those that do not fit.
    pub fn into_card_set(self, columns: usize, rows: usize) -> CardSet {
        CardSet::new(self.title, self.items, columns, rows)
    }
}

/// Check whether a line reads as a sheet title.
///
/// A title is at most [`MAX_TITLE_CHARS`] characters long and contains a
/// colon or one of the words "activities" / "actividades" in any case.
pub fn is_title_line(line: &str) -> bool {
    if line.chars().count() > MAX_TITLE_CHARS {
        return false;
    }
    if line.contains(':') {
        return true;
    }
    let lower = line.to_lowercase();
    TITLE_KEYWORDS.iter().any(|kw| lower.contains(kw))
}

/// Split lines into a title and items using the Spanish fallback title.
///
/// # Example
/// ```
/// use logoprint::extract_title_and_items;
///
/// let lines = vec!["Actividades: fonética".to_string(), "pato".into(), "pez".into()];
/// let result = extract_title_and_items(lines);
/// assert_eq!(result.title, "Actividades: fonética");
/// assert_eq!(result.items, vec!["pato", "pez"]);
/// ```
pub fn extract_title_and_items(lines: Vec<String>) -> TitledItems {
    extract_title_and_items_with_locale(lines, Locale::default())
}

/// Split lines into a title and items, falling back to the locale's title.
pub fn extract_title_and_items_with_locale(lines: Vec<String>, locale: Locale) -> TitledItems {
    let mut lines = lines.into_iter().peekable();

    let title = match lines.peek() {
        Some(first) if is_title_line(first) => {
            debug!("using first line as title: {:?}", first);
            lines.next()
        }
        _ => None,
    };

    TitledItems {
        title: title.unwrap_or_else(|| locale.default_title().to_string()),
        items: lines.collect(),
    }
}
