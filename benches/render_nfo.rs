use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

use nforender::test_support::{framed_sheet, indexed_sheet};
use nforender::{ColorRemapper, NfoDocument, Palette, Renderer};
use image::Rgb;

// An 80x60 cell document, about the shape of a real NFO.
fn sample_document() -> NfoDocument {
    let line = "#".repeat(80);
    let mut text = String::new();
    for _ in 0..60 {
        text.push_str(&line);
        text.push('\n');
    }
    NfoDocument::from_bytes(text.as_bytes())
}

fn bench_render(c: &mut Criterion) {
    let renderer = Renderer::new(indexed_sheet(32, 8, 8, 16));
    let doc = sample_document();
    c.bench_function("render_80x60", |b| {
        b.iter(|| renderer.render(black_box(&doc)).unwrap())
    });
}

fn bench_recolor(c: &mut Criterion) {
    let renderer = Renderer::new(framed_sheet(32, 8, 8, 16));
    let canvas = renderer.render(&sample_document()).unwrap();
    let remapper = ColorRemapper::new(Palette::default());
    let target = Palette::new(Rgb([255, 255, 255]), Rgb([0, 0, 128]));
    c.bench_function("recolor_80x60", |b| {
        b.iter(|| {
            let mut copy = canvas.clone();
            remapper.apply(&mut copy, black_box(target));
            copy
        })
    });
}

criterion_group!(benches, bench_render, bench_recolor);
criterion_main!(benches);
