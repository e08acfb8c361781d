//! Rendering options and page geometry.

use crate::model::{clamp_dimension, Locale, DEFAULT_COLUMNS, DEFAULT_ROWS};

/// A4 page width in millimetres.
pub const A4_WIDTH_MM: f32 = 210.0;

/// A4 page height in millimetres.
pub const A4_HEIGHT_MM: f32 = 297.0;

/// Vertical space reserved for the sheet title, in millimetres.
const TITLE_BLOCK_MM: f32 = 14.0;

/// Smallest card height the layout will produce, in millimetres.
const MIN_CARD_HEIGHT_MM: f32 = 10.0;

/// Options for rendering a card sheet.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOptions {
    /// Document language and fallback title
    pub locale: Locale,

    /// Grid columns
    pub columns: usize,

    /// Grid rows
    pub rows: usize,

    /// Page margin on every side, in millimetres
    pub margin_mm: f32,

    /// Gap between cards, in millimetres
    pub gap_mm: f32,

    /// Distance from the card border to the dashed trim guide, in millimetres
    pub trim_inset_mm: f32,

    /// Card text size, in points
    pub font_size_pt: f32,
}

impl RenderOptions {
    /// Create new render options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the document locale.
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    /// Set grid dimensions, each clamped to `1..=MAX_GRID_DIMENSION`.
    ///
    /// [`MAX_GRID_DIMENSION`]: crate::model::MAX_GRID_DIMENSION
    pub fn with_grid(mut self, columns: usize, rows: usize) -> Self {
        self.columns = clamp_dimension(columns);
        self.rows = clamp_dimension(rows);
        self
    }

    /// Set the page margin.
    pub fn with_margin(mut self, mm: f32) -> Self {
        self.margin_mm = mm.clamp(0.0, 40.0);
        self
    }

    /// Set the gap between cards.
    pub fn with_gap(mut self, mm: f32) -> Self {
        self.gap_mm = mm.max(0.0);
        self
    }

    /// Set the trim guide inset.
    pub fn with_trim_inset(mut self, mm: f32) -> Self {
        self.trim_inset_mm = mm.max(0.0);
        self
    }

    /// Set the card text size.
    pub fn with_font_size(mut self, pt: f32) -> Self {
        self.font_size_pt = pt.clamp(6.0, 96.0);
        self
    }

    /// Number of card slots on one sheet.
    pub fn slot_count(&self) -> usize {
        clamp_dimension(self.columns) * clamp_dimension(self.rows)
    }

    /// Fixed card height that fits `rows` cards on one A4 page.
    pub fn card_height_mm(&self) -> f32 {
        let rows = clamp_dimension(self.rows) as f32;
        let usable = A4_HEIGHT_MM - 2.0 * self.margin_mm - TITLE_BLOCK_MM;
        let height = (usable - (rows - 1.0) * self.gap_mm) / rows;
        height.floor().max(MIN_CARD_HEIGHT_MM)
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            locale: Locale::default(),
            columns: DEFAULT_COLUMNS,
            rows: DEFAULT_ROWS,
            margin_mm: 10.0,
            gap_mm: 4.0,
            trim_inset_mm: 3.0,
            font_size_pt: 20.0,
        }
    }
}
