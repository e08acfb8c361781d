//! Model types shared by the normalizer and the renderer.
//!
//! A generator response is either already a [`PrintableDocument`], a
//! structured [`Printable`] payload, or plain lines that become a
//! [`CardSet`] before rendering.

mod card_set;
mod document;
mod locale;

pub use card_set::{CardSet, DEFAULT_COLUMNS, DEFAULT_ROWS, MAX_GRID_DIMENSION};
pub(crate) use card_set::clamp_dimension;
pub use document::{DocumentSource, Printable, PrintableDocument};
pub use locale::Locale;
