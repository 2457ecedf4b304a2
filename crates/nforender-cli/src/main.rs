use std::fmt;
use std::io::{self, Cursor, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use image::{ImageFormat, RgbImage};
use nforender::{color, style, ColorRemapper, NfoDocument, Palette, RenderError, Renderer};

use crate::display::show_inline;
mod display;

#[derive(Parser)]
#[command(name = "nforender", about = "Render NFO art files to PNG", version)]
struct Cli {
    /// NFO file to render
    file: PathBuf,

    /// Output path; "-" writes PNG data to stdout [default: FILE.png]
    #[arg(short, long)]
    output: Option<String>,

    /// Background color, named or hex (e.g. "#ff0000", "red")
    #[arg(short, long)]
    background: Option<String>,

    /// Foreground color, named or hex (e.g. "#0000ff", "blue")
    #[arg(short, long)]
    foreground: Option<String>,

    /// Font style
    #[arg(short, long, default_value = "dos")]
    style: String,

    /// Draw the image in the terminal instead of saving it
    #[arg(short, long)]
    display: bool,
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            // --help and --version are not failures; everything else exits 1
            return match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => ExitCode::FAILURE,
            };
        }
    };
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            if wants_usage(&err) {
                eprintln!();
                eprintln!("{}", Cli::command().render_usage());
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let style = style::lookup(&cli.style)?;
    let mut palette = Palette::default();
    if let Some(bg) = &cli.background {
        palette.background = color::parse(bg)?;
    }
    if let Some(fg) = &cli.foreground {
        palette.foreground = color::parse(fg)?;
    }

    let output = cli
        .output
        .clone()
        .unwrap_or_else(|| format!("{}.png", cli.file.display()));
    if !cli.display && output != "-" && Path::new(&output) == cli.file {
        bail!(OutputConflict(cli.file.clone()));
    }

    let renderer = Renderer::new(style.load()?);
    let doc = NfoDocument::from_path(&cli.file)
        .with_context(|| format!("cannot read {}", cli.file.display()))?;
    let mut canvas = renderer.render(&doc)?;

    // Only touch the pixels when the colors actually change
    if !palette.is_default() {
        ColorRemapper::new(Palette::default()).apply(&mut canvas, palette);
    }

    if cli.display {
        show_inline(&canvas).context("terminal display failed")?;
    } else if output == "-" {
        write_png_stdout(&canvas)?;
    } else {
        canvas
            .save_with_format(&output, ImageFormat::Png)
            .with_context(|| format!("cannot write {output}"))?;
        log::debug!("wrote {output}");
    }
    Ok(())
}

fn write_png_stdout(canvas: &RgbImage) -> Result<()> {
    let mut encoded = Cursor::new(Vec::new());
    canvas.write_to(&mut encoded, ImageFormat::Png)?;
    io::stdout().write_all(encoded.get_ref())?;
    Ok(())
}

/// Argument-level mistakes warrant showing usage next to the message.
fn wants_usage(err: &anyhow::Error) -> bool {
    matches!(
        err.downcast_ref::<RenderError>(),
        Some(RenderError::InvalidColor(_) | RenderError::UnknownStyle { .. })
    ) || err.downcast_ref::<OutputConflict>().is_some()
}

#[derive(Debug)]
struct OutputConflict(PathBuf);

impl fmt::Display for OutputConflict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "output and input must not be the same file: {}",
            self.0.display()
        )
    }
}

impl std::error::Error for OutputConflict {}
