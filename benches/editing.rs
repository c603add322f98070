//! Benchmarks for column mapping and clipboard editing.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use quill::editor::{
    Clipboard, Direction, Document, Viewport, column_to_display, display_to_column,
};

fn tabbed_line() -> Vec<u8> {
    b"\tfn main() {\t// entry\t\tpoint\t".repeat(32)
}

fn bench_column_to_display(c: &mut Criterion) {
    let text = tabbed_line();
    c.bench_function("column_to_display", |b| {
        b.iter(|| column_to_display(black_box(&text), black_box(text.len()), 4));
    });
}

fn bench_display_to_column(c: &mut Criterion) {
    let text = tabbed_line();
    c.bench_function("display_to_column", |b| {
        b.iter(|| display_to_column(black_box(&text), black_box(700), 4));
    });
}

fn bench_paste_block(c: &mut Criterion) {
    let vp = Viewport::new(80, 24, 4);
    let text = (0..200)
        .map(|n| format!("line {n}\twith some text"))
        .collect::<Vec<_>>()
        .join("\n");
    let mut source = Document::from_text("source.txt", &text);
    let mut clipboard = Clipboard::new();
    source.set_mark();
    for _ in 0..100 {
        source.move_cursor(Direction::Down, &vp);
    }
    clipboard.copy_selection(&source);

    c.bench_function("paste_100_lines", |b| {
        b.iter(|| {
            let mut doc = Document::from_text("target.txt", "header");
            clipboard.paste(black_box(&mut doc), &vp);
            doc
        });
    });
}

criterion_group!(
    benches,
    bench_column_to_display,
    bench_display_to_column,
    bench_paste_block
);
criterion_main!(benches);
