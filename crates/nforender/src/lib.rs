//! nforender: render NFO art files to raster images.
//! Slices a fixed-grid bitmap font sheet, composites glyphs per text cell,
//! then optionally recolors the two reference colors.

pub mod color;
mod error;
pub mod nfo;
pub mod render;
pub mod sheet;
pub mod style;

pub use color::ColorRemapper;
pub use error::{RenderError, Result};
pub use nfo::NfoDocument;
pub use render::Renderer;
pub use sheet::GlyphSheet;
pub use style::FontStyle;

// Test utilities
pub mod test_support;

use image::Rgb;

/// Foreground/background pair applied to a rendered canvas.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub foreground: Rgb<u8>,
    pub background: Rgb<u8>,
}

impl Palette {
    /// Light gray used by the bundled sheets for glyph pixels.
    pub const DEFAULT_FOREGROUND: Rgb<u8> = Rgb([168, 168, 168]);
    pub const DEFAULT_BACKGROUND: Rgb<u8> = Rgb([0, 0, 0]);

    pub fn new(foreground: Rgb<u8>, background: Rgb<u8>) -> Self {
        Self {
            foreground,
            background,
        }
    }

    /// True while both entries still match the sheet defaults; the recolor
    /// pass is skipped entirely in that case.
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            foreground: Self::DEFAULT_FOREGROUND,
            background: Self::DEFAULT_BACKGROUND,
        }
    }
}
