//! Color parsing and the exact-match recolor pass.

use std::collections::HashMap;

use image::{Rgb, RgbImage};
use once_cell::sync::Lazy;

use crate::{Palette, RenderError, Result};

/// Named colors accepted alongside hex notation: the sixteen basic CSS
/// names plus a few common aliases.
static NAMED_COLORS: Lazy<HashMap<&'static str, Rgb<u8>>> = Lazy::new(|| {
    HashMap::from([
        ("black", Rgb([0, 0, 0])),
        ("silver", Rgb([192, 192, 192])),
        ("gray", Rgb([128, 128, 128])),
        ("grey", Rgb([128, 128, 128])),
        ("white", Rgb([255, 255, 255])),
        ("maroon", Rgb([128, 0, 0])),
        ("red", Rgb([255, 0, 0])),
        ("purple", Rgb([128, 0, 128])),
        ("fuchsia", Rgb([255, 0, 255])),
        ("magenta", Rgb([255, 0, 255])),
        ("green", Rgb([0, 128, 0])),
        ("lime", Rgb([0, 255, 0])),
        ("olive", Rgb([128, 128, 0])),
        ("yellow", Rgb([255, 255, 0])),
        ("navy", Rgb([0, 0, 128])),
        ("blue", Rgb([0, 0, 255])),
        ("teal", Rgb([0, 128, 128])),
        ("aqua", Rgb([0, 255, 255])),
        ("cyan", Rgb([0, 255, 255])),
        ("orange", Rgb([255, 165, 0])),
    ])
});

/// Resolve a color given as `#rgb`, `#rrggbb` or a known name.
pub fn parse(input: &str) -> Result<Rgb<u8>> {
    let s = input.trim();
    if let Some(hex) = s.strip_prefix('#') {
        return parse_hex(hex).ok_or_else(|| RenderError::InvalidColor(input.to_string()));
    }
    NAMED_COLORS
        .get(s.to_ascii_lowercase().as_str())
        .copied()
        .ok_or_else(|| RenderError::InvalidColor(input.to_string()))
}

fn parse_hex(hex: &str) -> Option<Rgb<u8>> {
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    match hex.len() {
        3 => {
            let v = u32::from_str_radix(hex, 16).ok()?;
            let (r, g, b) = ((v >> 8) & 0xF, (v >> 4) & 0xF, v & 0xF);
            // expand each nibble: 0xA -> 0xAA
            Some(Rgb([(r * 17) as u8, (g * 17) as u8, (b * 17) as u8]))
        }
        6 => {
            let v = u32::from_str_radix(hex, 16).ok()?;
            Some(Rgb([(v >> 16) as u8, (v >> 8) as u8, v as u8]))
        }
        _ => None,
    }
}

/// Replaces the two reference colors of a rendered canvas in place.
///
/// Only pixels exactly matching the configured defaults change; a sheet with
/// anti-aliased edges keeps its intermediate shades. The bundled sheets are
/// strictly bicolor, so nothing is left behind for them.
pub struct ColorRemapper {
    defaults: Palette,
}

impl ColorRemapper {
    pub fn new(defaults: Palette) -> Self {
        Self { defaults }
    }

    /// Full-image scan; the dominant cost on large documents. Callers skip
    /// the pass when `target` equals the defaults.
    pub fn apply(&self, canvas: &mut RgbImage, target: Palette) {
        for pixel in canvas.pixels_mut() {
            if *pixel == self.defaults.background {
                *pixel = target.background;
            } else if *pixel == self.defaults.foreground {
                *pixel = target.foreground;
            }
        }
    }
}
