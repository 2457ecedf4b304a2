//! Test support utilities for nforender.
//!
//! Synthetic glyph sheets with exactly known pixels, so tests and benches
//! can assert placement without depending on the bundled artwork.

use image::{DynamicImage, Rgb, RgbImage};

use crate::{GlyphSheet, Palette};

/// Sheet where every glyph cell is a solid color encoding its own index;
/// see [`index_color`].
pub fn indexed_sheet(columns: u32, rows: u32, cell_width: u32, cell_height: u32) -> GlyphSheet {
    let img = RgbImage::from_fn(columns * cell_width, rows * cell_height, |x, y| {
        index_color(((y / cell_height) * columns + x / cell_width) as u8)
    });
    GlyphSheet::from_image(&DynamicImage::ImageRgb8(img), columns, rows)
}

/// Fill color of cell `i` in an [`indexed_sheet`]. Never pure black, so
/// every glyph is distinguishable from an untouched canvas.
pub fn index_color(i: u8) -> Rgb<u8> {
    Rgb([i, 255 - i, i])
}

/// Bicolor sheet in the default palette: each cell draws a one-pixel
/// foreground frame on the default background, like the bundled sheets.
pub fn framed_sheet(columns: u32, rows: u32, cell_width: u32, cell_height: u32) -> GlyphSheet {
    let img = RgbImage::from_fn(columns * cell_width, rows * cell_height, |x, y| {
        let cx = x % cell_width;
        let cy = y % cell_height;
        if cx == 0 || cy == 0 || cx == cell_width - 1 || cy == cell_height - 1 {
            Palette::DEFAULT_FOREGROUND
        } else {
            Palette::DEFAULT_BACKGROUND
        }
    });
    GlyphSheet::from_image(&DynamicImage::ImageRgb8(img), columns, rows)
}
