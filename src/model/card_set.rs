//! Card set: a title plus the items laid out on a fixed grid.

use serde::{Deserialize, Serialize};

/// Default number of grid columns.
pub const DEFAULT_COLUMNS: usize = 3;

/// Default number of grid rows.
pub const DEFAULT_ROWS: usize = 4;

/// Largest number of columns or rows a sheet can have.
pub const MAX_GRID_DIMENSION: usize = 12;

/// Clamp one grid dimension to `1..=MAX_GRID_DIMENSION`.
pub(crate) fn clamp_dimension(n: usize) -> usize {
    n.clamp(1, MAX_GRID_DIMENSION)
}

/// Items destined for a fixed `columns` x `rows` card grid.
///
/// Construction caps `items` to the slot count, so a `CardSet` never holds
/// more entries than it can print. Padding is applied on demand by
/// [`CardSet::slots`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardSet {
    /// Sheet title
    pub title: String,

    /// Card contents, at most `columns * rows`
    pub items: Vec<String>,

    /// Grid columns (1 to 12)
    pub columns: usize,

    /// Grid rows (1 to 12)
    pub rows: usize,
}

impl CardSet {
    /// Create a card set, dropping items that do not fit the grid.
    ///
    /// Each dimension is clamped to `1..=MAX_GRID_DIMENSION`.
    pub fn new(title: impl Into<String>, items: Vec<String>, columns: usize, rows: usize) -> Self {
        let columns = clamp_dimension(columns);
        let rows = clamp_dimension(rows);
        let mut items = items;
        items.truncate(columns * rows);
        Self {
            title: title.into(),
            items,
            columns,
            rows,
        }
    }

    /// Create a card set on the default 3x4 grid.
    pub fn with_default_grid(title: impl Into<String>, items: Vec<String>) -> Self {
        Self::new(title, items, DEFAULT_COLUMNS, DEFAULT_ROWS)
    }

    /// Total number of card slots on the sheet.
    pub fn slot_count(&self) -> usize {
        self.columns.saturating_mul(self.rows)
    }

    /// Number of slots holding a non-empty item.
    pub fn filled_count(&self) -> usize {
        self.items.iter().filter(|item| !item.is_empty()).count()
    }

    /// Every slot in order, padded with empty strings up to the slot count.
    pub fn slots(&self) -> impl Iterator<Item = &str> {
        self.items
            .iter()
            .map(String::as_str)
            .chain(std::iter::repeat(""))
            .take(self.slot_count())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(n: usize) -> Vec<String> {
        (1..=n).map(|i| format!("item {}", i)).collect()
    }

    #[test]
    fn test_card_set_pads_short_lists() {
        let set = CardSet::with_default_grid("T", items(3));
        let slots: Vec<&str> = set.slots().collect();
        assert_eq!(slots.len(), 12);
        assert_eq!(&slots[..3], &["item 1", "item 2", "item 3"]);
        assert!(slots[3..].iter().all(|s| s.is_empty()));
        assert_eq!(set.filled_count(), 3);
    }

    #[test]
    fn test_card_set_truncates_long_lists() {
        let set = CardSet::with_default_grid("T", items(20));
        assert_eq!(set.items.len(), 12);
        assert_eq!(set.items.last().unwrap(), "item 12");
        assert_eq!(set.slots().count(), 12);
    }

    #[test]
    fn test_card_set_zero_dimensions() {
        let set = CardSet::new("T", items(5), 0, 0);
        assert_eq!(set.columns, 1);
        assert_eq!(set.rows, 1);
        assert_eq!(set.items, vec!["item 1".to_string()]);
    }

    #[test]
    fn test_card_set_oversized_dimensions() {
        let set = CardSet::new("T", items(200), usize::MAX, usize::MAX / 2);
        assert_eq!(set.columns, MAX_GRID_DIMENSION);
        assert_eq!(set.rows, MAX_GRID_DIMENSION);
        assert_eq!(set.slot_count(), 144);
        assert_eq!(set.items.len(), 144);
        assert_eq!(set.slots().count(), 144);
    }

    #[test]
    fn test_slot_count_saturates() {
        let set = CardSet {
            title: String::new(),
            items: Vec::new(),
            columns: usize::MAX,
            rows: 2,
        };
        assert_eq!(set.slot_count(), usize::MAX);
    }
}
