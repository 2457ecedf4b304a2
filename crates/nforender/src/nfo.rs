//! NFO text loading and measurement.

use std::fs;
use std::path::Path;

use crate::Result;

// Trailing bytes that never render: spaces, tabs and stray control padding.
const TRAILING_WHITESPACE: &[u8] = b" \t\r\x0b\x0c";

/// An NFO document: raw byte lines in a single-byte code page plus the
/// bounding box derived from them.
///
/// `width` is the longest line after right-stripping trailing whitespace,
/// with a tab counting as one cell. `height` counts every line, blank ones
/// included. Interior whitespace is preserved as stored.
pub struct NfoDocument {
    lines: Vec<Vec<u8>>,
    width: usize,
    height: usize,
}

impl NfoDocument {
    /// Read a document from disk as raw bytes.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self::from_bytes(&fs::read(path.as_ref())?))
    }

    /// Split raw bytes into lines. Unix, Windows and mixed terminators are
    /// accepted; a final terminator closes the last line rather than opening
    /// an empty one.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let mut lines: Vec<Vec<u8>> = Vec::new();
        if !bytes.is_empty() {
            lines = bytes
                .split(|&b| b == b'\n')
                .map(|l| l.strip_suffix(b"\r").unwrap_or(l).to_vec())
                .collect();
            if bytes.ends_with(b"\n") {
                lines.pop();
            }
        }
        let width = lines
            .iter()
            .map(|l| trim_art_line(l).len())
            .max()
            .unwrap_or(0);
        let height = lines.len();
        log::debug!("document measured at {}x{} cells", width, height);
        Self {
            lines,
            width,
            height,
        }
    }

    /// Longest right-stripped line, in cells.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Line count, blank lines included.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Stored lines, terminators stripped and trailing whitespace intact.
    pub fn lines(&self) -> impl Iterator<Item = &[u8]> {
        self.lines.iter().map(|l| l.as_slice())
    }
}

/// Right-strip the whitespace that never reaches the canvas. Used both for
/// width measurement and ahead of rendering each line.
pub fn trim_art_line(line: &[u8]) -> &[u8] {
    let end = line
        .iter()
        .rposition(|b| !TRAILING_WHITESPACE.contains(b))
        .map_or(0, |i| i + 1);
    &line[..end]
}
