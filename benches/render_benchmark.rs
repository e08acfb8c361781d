//! Benchmarks for response conversion.
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use logoprint::{render_card_grid, to_printable};

/// Creates a plain-text response with a title line and `item_count` items.
fn create_text_response(item_count: usize) -> String {
    let mut content = String::from("\"Actividades: fonema /r/\r\n");
    for i in 0..item_count {
        content.push_str(&format!("rana & ratón <{}>\r\n", i));
    }
    content.push('"');
    content
}

fn bench_to_printable(c: &mut Criterion) {
    let small = create_text_response(12);
    let large = create_text_response(500);

    c.bench_function("to_printable_12_items", |b| {
        b.iter(|| to_printable(black_box(&small)))
    });
    c.bench_function("to_printable_500_items", |b| {
        b.iter(|| to_printable(black_box(&large)))
    });
}

fn bench_render_card_grid(c: &mut Criterion) {
    let items: Vec<String> = (0..12).map(|i| format!("palabra '{}'", i)).collect();

    c.bench_function("render_card_grid_3x4", |b| {
        b.iter(|| render_card_grid(black_box("Animales"), black_box(&items), 3, 4))
    });
}

fn bench_embedded_document(c: &mut Criterion) {
    let body = format!(
        "```html\n<!doctype html><html><body>{}</body></html>\n```",
        "<p>x</p>".repeat(2000)
    );

    c.bench_function("detect_embedded_document", |b| {
        b.iter(|| to_printable(black_box(&body)))
    });
}

criterion_group!(
    benches,
    bench_to_printable,
    bench_render_card_grid,
    bench_embedded_document
);
criterion_main!(benches);
