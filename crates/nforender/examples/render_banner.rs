//! Render a small in-memory CP437 banner with the bundled DOS sheet.

use nforender::{style, NfoDocument, Renderer};

fn main() -> nforender::Result<()> {
    let art: &[u8] = b"\xc9\xcd\xcd\xcd\xbb\n\xbaNFO\xba\n\xc8\xcd\xcd\xcd\xbc\n";
    let doc = NfoDocument::from_bytes(art);
    let renderer = Renderer::new(style::lookup("dos")?.load()?);
    let canvas = renderer.render(&doc)?;
    canvas.save("banner.png").expect("write banner.png");
    println!("wrote banner.png ({}x{})", canvas.width(), canvas.height());
    Ok(())
}
