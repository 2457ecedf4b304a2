//! The fixed font style registry.

use crate::sheet::{DEFAULT_COLUMNS, DEFAULT_ROWS};
use crate::{GlyphSheet, RenderError, Result};

/// A bundled font sheet and its grid shape.
#[derive(Debug)]
pub struct FontStyle {
    pub name: &'static str,
    sheet: &'static [u8],
    pub columns: u32,
    pub rows: u32,
}

/// Every style the renderer ships with. The table is fixed; a new sheet
/// means a new entry here.
pub const STYLES: &[FontStyle] = &[
    FontStyle {
        name: "dos",
        sheet: include_bytes!("../fonts/dos.png"),
        columns: DEFAULT_COLUMNS,
        rows: DEFAULT_ROWS,
    },
    FontStyle {
        name: "courier",
        sheet: include_bytes!("../fonts/courier.png"),
        columns: DEFAULT_COLUMNS,
        rows: DEFAULT_ROWS,
    },
];

impl FontStyle {
    /// Decode the embedded sheet.
    pub fn load(&self) -> Result<GlyphSheet> {
        GlyphSheet::from_bytes(self.sheet, self.columns, self.rows)
    }
}

/// Find a style by name.
pub fn lookup(name: &str) -> Result<&'static FontStyle> {
    STYLES
        .iter()
        .find(|s| s.name == name)
        .ok_or_else(|| RenderError::UnknownStyle {
            name: name.to_string(),
            valid: names().join(", "),
        })
}

/// Registered style names, in table order.
pub fn names() -> Vec<&'static str> {
    STYLES.iter().map(|s| s.name).collect()
}
