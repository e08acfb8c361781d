//! Rendering module for producing printable HTML documents.

mod escape;
mod grid;
mod options;
mod wrap;

pub use escape::escape_html;
pub use grid::{render_card_grid, render_card_grid_with_options, CardGridRenderer};
pub use options::{RenderOptions, A4_HEIGHT_MM, A4_WIDTH_MM};
pub use wrap::{wrap_payload, wrap_printable};
