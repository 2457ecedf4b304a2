use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("{0}")]
    Io(#[from] std::io::Error),
    #[error("font sheet error: {0}")]
    FontLoad(#[from] image::ImageError),
    #[error("unsupported character code {code} (sheet holds {glyphs} glyphs)")]
    UnsupportedCharacter { code: u32, glyphs: usize },
    #[error("invalid color: {0}")]
    InvalidColor(String),
    #[error("unknown font style '{name}' (valid styles: {valid})")]
    UnknownStyle { name: String, valid: String },
}

pub type Result<T> = std::result::Result<T, RenderError>;
