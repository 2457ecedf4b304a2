use image::{Rgb, RgbImage};
use nforender::test_support::{index_color, indexed_sheet};
use nforender::{NfoDocument, Palette, Renderer};
use pretty_assertions::assert_eq;

const CW: u32 = 4;
const CH: u32 = 6;

fn renderer() -> Renderer {
    Renderer::new(indexed_sheet(32, 8, CW, CH))
}

// Sample the cell center; indexed glyphs are solid fills.
fn cell_color(canvas: &RgbImage, col: u32, row: u32) -> Rgb<u8> {
    *canvas.get_pixel(col * CW + CW / 2, row * CH + CH / 2)
}

#[test]
fn canvas_size_law() {
    let doc = NfoDocument::from_bytes(b"AB\nC\n");
    let canvas = renderer().render(&doc).unwrap();
    assert_eq!(canvas.dimensions(), ((2 + 2) * CW, (2 + 2) * CH));
}

#[test]
fn glyphs_land_on_their_cells() {
    let doc = NfoDocument::from_bytes(b"AB\nC\n");
    let canvas = renderer().render(&doc).unwrap();
    assert_eq!(cell_color(&canvas, 1, 1), index_color(b'A'));
    assert_eq!(cell_color(&canvas, 2, 1), index_color(b'B'));
    assert_eq!(cell_color(&canvas, 1, 2), index_color(b'C'));
    assert_eq!(cell_color(&canvas, 2, 2), Palette::DEFAULT_BACKGROUND);
}

#[test]
fn rendering_is_deterministic() {
    let doc = NfoDocument::from_bytes(b"hello\nworld\n");
    let r = renderer();
    let first = r.render(&doc).unwrap();
    let second = r.render(&doc).unwrap();
    assert_eq!(first.as_raw(), second.as_raw());
}

#[test]
fn tab_advances_without_drawing() {
    let doc = NfoDocument::from_bytes(b"a\tb\n");
    let canvas = renderer().render(&doc).unwrap();
    assert_eq!(cell_color(&canvas, 1, 1), index_color(b'a'));
    assert_eq!(cell_color(&canvas, 2, 1), Palette::DEFAULT_BACKGROUND);
    assert_eq!(cell_color(&canvas, 3, 1), index_color(b'b'));
}

#[test]
fn trailing_spaces_render_nothing() {
    let doc = NfoDocument::from_bytes(b"a   \nbbbb\n");
    let canvas = renderer().render(&doc).unwrap();
    assert_eq!(cell_color(&canvas, 1, 1), index_color(b'a'));
    assert_eq!(cell_color(&canvas, 2, 1), Palette::DEFAULT_BACKGROUND);
}

#[test]
fn empty_document_yields_minimal_canvas() {
    let doc = NfoDocument::from_bytes(b"");
    let canvas = renderer().render(&doc).unwrap();
    assert_eq!(canvas.dimensions(), (2 * CW, 2 * CH));
    assert!(canvas.pixels().all(|p| *p == Palette::DEFAULT_BACKGROUND));
}

#[test]
fn empty_lines_leave_their_row_blank() {
    let doc = NfoDocument::from_bytes(b"a\n\na\n");
    let canvas = renderer().render(&doc).unwrap();
    assert_eq!(cell_color(&canvas, 1, 1), index_color(b'a'));
    assert_eq!(cell_color(&canvas, 1, 2), Palette::DEFAULT_BACKGROUND);
    assert_eq!(cell_color(&canvas, 1, 3), index_color(b'a'));
}

#[test]
fn custom_background_fills_canvas() {
    let palette = Palette::new(Palette::DEFAULT_FOREGROUND, Rgb([10, 20, 30]));
    let r = Renderer::with_palette(indexed_sheet(32, 8, CW, CH), palette);
    let canvas = r.render(&NfoDocument::from_bytes(b"")).unwrap();
    assert!(canvas.pixels().all(|p| *p == Rgb([10, 20, 30])));
}
