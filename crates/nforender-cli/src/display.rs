//! Inline terminal display via the Kitty graphics protocol.
//!
//! The canvas is transmitted as APC escape sequences (`ESC _ G ... ESC \`)
//! carrying chunked base64 raw RGB data (`f=24`). Supported by kitty,
//! Konsole and WezTerm; other terminals print nothing useful.

use std::io::{self, Write};

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use image::RgbImage;

const APC_START: &str = "\x1b_G";
const APC_END: &str = "\x1b\\";
// Protocol limit per escape payload
const CHUNK_SIZE: usize = 4096;

pub fn show_inline(canvas: &RgbImage) -> io::Result<()> {
    let (width, height) = canvas.dimensions();
    let data = STANDARD.encode(canvas.as_raw());
    let chunks: Vec<&[u8]> = data.as_bytes().chunks(CHUNK_SIZE).collect();

    let mut out = io::stdout().lock();
    for (i, chunk) in chunks.iter().enumerate() {
        let more = if i + 1 == chunks.len() { 0 } else { 1 };
        if i == 0 {
            write!(out, "{APC_START}a=T,f=24,s={width},v={height},m={more};")?;
        } else {
            // continuation chunks carry only the more flag
            write!(out, "{APC_START}m={more};")?;
        }
        out.write_all(chunk)?;
        write!(out, "{APC_END}")?;
    }
    writeln!(out)?;
    out.flush()
}
