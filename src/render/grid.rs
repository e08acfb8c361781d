//! Card grid rendering: one A4 sheet of fixed-size, cut-out cards.

use std::fmt::Write;

use log::debug;

use crate::model::{CardSet, DocumentSource, PrintableDocument};

use super::{escape_html, RenderOptions, A4_WIDTH_MM};

/// Render items onto a `columns` x `rows` card sheet with default styling.
///
/// Items beyond the slot count are dropped; missing items become blank cards.
/// Every item and the title are HTML-escaped. The result is deterministic for
/// the same inputs.
///
/// # Example
/// ```
/// use logoprint::render_card_grid;
///
/// let items = vec!["perro".to_string(), "gato".to_string()];
/// let doc = render_card_grid("Animales", &items, 3, 4);
/// assert_eq!(doc.as_str().matches("<div class=\"card").count(), 12);
/// ```
pub fn render_card_grid(
    title: &str,
    items: &[String],
    columns: usize,
    rows: usize,
) -> PrintableDocument {
    let options = RenderOptions::default().with_grid(columns, rows);
    render_card_grid_with_options(title, items, &options)
}

/// Render items onto a card sheet using the grid and styling in `options`.
pub fn render_card_grid_with_options(
    title: &str,
    items: &[String],
    options: &RenderOptions,
) -> PrintableDocument {
    let set = CardSet::new(title, items.to_vec(), options.columns, options.rows);
    CardGridRenderer::new(options.clone()).render(&set)
}

/// Card grid renderer.
pub struct CardGridRenderer {
    options: RenderOptions,
}

impl CardGridRenderer {
    /// Create a new card grid renderer.
    ///
    /// The grid dimensions of the rendered [`CardSet`] take precedence over
    /// `options.columns` and `options.rows`.
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    /// Render a card set to a complete HTML document.
    pub fn render(&self, set: &CardSet) -> PrintableDocument {
        let title = escape_html(&set.title);
        let mut output = String::with_capacity(4096 + set.slot_count() * 64);

        output.push_str("<!doctype html>\n");
        let _ = writeln!(output, "<html lang=\"{}\">", self.options.locale.lang());
        output.push_str("<head>\n");
        output.push_str("<meta charset=\"utf-8\" />\n");
        output.push_str(
            "<meta name=\"viewport\" content=\"width=device-width,initial-scale=1\" />\n",
        );
        let _ = writeln!(output, "<title>{}</title>", title);
        output.push_str("<style>\n");
        self.write_style(&mut output, set);
        output.push_str("</style>\n");
        output.push_str("</head>\n");
        output.push_str("<body>\n");
        output.push_str("<main class=\"sheet\">\n");
        let _ = writeln!(output, "<h1>{}</h1>", title);
        output.push_str("<section class=\"grid\">\n");

        for item in set.slots() {
            let text = escape_html(item);
            if text.is_empty() {
                output.push_str("<div class=\"card empty\"><span>&nbsp;</span></div>\n");
            } else {
                let _ = writeln!(output, "<div class=\"card\"><span>{}</span></div>", text);
            }
        }

        output.push_str("</section>\n");
        output.push_str("</main>\n");
        output.push_str("</body>\n");
        output.push_str("</html>\n");

        let filled = set.filled_count();
        let slots = set.slot_count();
        debug!("rendered card grid: {} of {} slots filled", filled, slots);

        PrintableDocument::new(output, DocumentSource::CardGrid { filled, slots })
    }

    fn write_style(&self, output: &mut String, set: &CardSet) {
        let o = &self.options;
        let grid = RenderOptions {
            columns: set.columns,
            rows: set.rows,
            ..o.clone()
        };
        let sheet_width = A4_WIDTH_MM - 2.0 * o.margin_mm;

        let _ = writeln!(output, "@page {{ size: A4; margin: {}mm; }}", o.margin_mm);
        output.push_str("* { box-sizing: border-box; }\n");
        output.push_str("html, body { margin: 0; padding: 0; background: #fff; }\n");
        output.push_str(
            "body { font-family: Arial, Helvetica, sans-serif; color: #111; \
             -webkit-print-color-adjust: exact; print-color-adjust: exact; }\n",
        );
        let _ = writeln!(output, ".sheet {{ width: {}mm; margin: 0 auto; }}", sheet_width);
        output.push_str(
            "h1 { height: 14mm; margin: 0; font-size: 16pt; line-height: 14mm; \
             text-align: center; white-space: nowrap; overflow: hidden; text-overflow: ellipsis; }\n",
        );
        let _ = writeln!(
            output,
            ".grid {{ display: grid; grid-template-columns: repeat({}, 1fr); gap: {}mm; }}",
            set.columns, o.gap_mm
        );
        let _ = writeln!(
            output,
            ".card {{ position: relative; height: {}mm; border: 1.5px solid #333; border-radius: 3mm; \
             display: flex; align-items: center; justify-content: center; text-align: center; \
             padding: {}mm; font-size: {}pt; overflow: hidden; overflow-wrap: anywhere; \
             break-inside: avoid; page-break-inside: avoid; }}",
            grid.card_height_mm(),
            o.trim_inset_mm + 2.0,
            o.font_size_pt
        );
        let _ = writeln!(
            output,
            ".card::after {{ content: \"\"; position: absolute; inset: {}mm; \
             border: 1px dashed #9a9a9a; border-radius: 2mm; pointer-events: none; }}",
            o.trim_inset_mm
        );
        output.push_str(".card.empty span { visibility: hidden; }\n");
        output.push_str("@media print { .sheet { margin: 0; } }\n");
    }
}
