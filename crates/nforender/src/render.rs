//! Glyph compositing onto the output canvas.

use image::{imageops, RgbImage};

use crate::nfo::trim_art_line;
use crate::{GlyphSheet, NfoDocument, Palette, Result};

/// Composites documents against a glyph sheet.
///
/// Owns the sheet for the duration of a run. Rendering is a pure function of
/// (document, sheet, palette); repeating it yields pixel-identical canvases.
pub struct Renderer {
    sheet: GlyphSheet,
    palette: Palette,
}

impl Renderer {
    pub fn new(sheet: GlyphSheet) -> Self {
        Self::with_palette(sheet, Palette::default())
    }

    /// The palette's background seeds the blank canvas; the foreground entry
    /// only matters to the recolor pass.
    pub fn with_palette(sheet: GlyphSheet, palette: Palette) -> Self {
        Self { sheet, palette }
    }

    pub fn sheet(&self) -> &GlyphSheet {
        &self.sheet
    }

    /// Draw a document onto a fresh canvas.
    ///
    /// The canvas spans `(width + 2) x (height + 2)` cells. Both cursors
    /// advance one cell before each draw, so the art starts at cell (1,1)
    /// with a one-cell margin framing it. A tab consumes its cell without
    /// drawing; trailing whitespace never reaches the canvas.
    pub fn render(&self, doc: &NfoDocument) -> Result<RgbImage> {
        let cw = self.sheet.cell_width();
        let ch = self.sheet.cell_height();
        let canvas_w = (doc.width() as u32 + 2) * cw;
        let canvas_h = (doc.height() as u32 + 2) * ch;
        let mut canvas = RgbImage::from_pixel(canvas_w, canvas_h, self.palette.background);

        let mut y = 0i64;
        for line in doc.lines() {
            y += i64::from(ch);
            let mut x = 0i64;
            for &code in trim_art_line(line) {
                x += i64::from(cw);
                if code == b'\t' {
                    continue;
                }
                let glyph = self.sheet.glyph(u32::from(code))?;
                imageops::replace(&mut canvas, glyph, x, y);
            }
        }
        log::debug!("composed {}x{} canvas", canvas_w, canvas_h);
        Ok(canvas)
    }
}
