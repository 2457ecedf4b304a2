//! Font sheet loading and grid slicing.

use std::path::Path;

use image::{imageops, DynamicImage, RgbImage};

use crate::{RenderError, Result};

/// Grid shape of the bundled sheets: one cell per single-byte character code.
pub const DEFAULT_COLUMNS: u32 = 32;
pub const DEFAULT_ROWS: u32 = 8;

/// A bitmap font cut from a fixed-grid sheet image.
///
/// Cell `i` holds the glyph for character code `i`, enumerated row-major
/// (`index = row * columns + col`). Cell size is `sheet_size / grid` with
/// integer division; a sheet whose dimensions are not exact multiples of the
/// grid silently loses the truncated trailing pixels.
pub struct GlyphSheet {
    glyphs: Vec<RgbImage>,
    cell_width: u32,
    cell_height: u32,
    columns: u32,
    rows: u32,
}

impl GlyphSheet {
    /// Decode a sheet image from disk and slice it.
    pub fn open(path: impl AsRef<Path>, columns: u32, rows: u32) -> Result<Self> {
        let img = image::open(path.as_ref())?;
        Ok(Self::from_image(&img, columns, rows))
    }

    /// Decode a sheet from an in-memory encoded image (the bundled sheets).
    pub fn from_bytes(bytes: &[u8], columns: u32, rows: u32) -> Result<Self> {
        let img = image::load_from_memory(bytes)?;
        Ok(Self::from_image(&img, columns, rows))
    }

    /// Slice an already-decoded image into `columns * rows` glyph cells.
    pub fn from_image(img: &DynamicImage, columns: u32, rows: u32) -> Self {
        debug_assert!(columns > 0 && rows > 0);
        let rgb = img.to_rgb8();
        let cell_width = rgb.width() / columns;
        let cell_height = rgb.height() / rows;
        let mut glyphs = Vec::with_capacity((columns * rows) as usize);
        for i in 0..columns * rows {
            let x = (i % columns) * cell_width;
            let y = (i / columns) * cell_height;
            glyphs.push(imageops::crop_imm(&rgb, x, y, cell_width, cell_height).to_image());
        }
        log::debug!(
            "sliced sheet into {} glyphs of {}x{}",
            glyphs.len(),
            cell_width,
            cell_height
        );
        Self {
            glyphs,
            cell_width,
            cell_height,
            columns,
            rows,
        }
    }

    /// Look up the glyph for a character code.
    ///
    /// Codes at or beyond the sheet length are rejected instead of indexed;
    /// with the default 32x8 grid every byte value 0..=255 resolves.
    pub fn glyph(&self, code: u32) -> Result<&RgbImage> {
        self.glyphs
            .get(code as usize)
            .ok_or(RenderError::UnsupportedCharacter {
                code,
                glyphs: self.glyphs.len(),
            })
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    pub fn cell_width(&self) -> u32 {
        self.cell_width
    }

    pub fn cell_height(&self) -> u32 {
        self.cell_height
    }

    /// Grid shape as `(columns, rows)`.
    pub fn grid(&self) -> (u32, u32) {
        (self.columns, self.rows)
    }
}
