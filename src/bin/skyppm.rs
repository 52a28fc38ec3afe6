use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use skyppm::{HeaderOrder, Image, PixelLayout, Unstoppable};

#[derive(Debug, clap::Parser)]
#[command(name = "skyppm", about = "Render a sky gradient to an ASCII PPM file")]
struct Args {
    /// Pixel buffer layout: 24, 32 or 24ptr
    layout: String,
    width: usize,
    height: usize,
    /// Directory for the per-layout default file name
    #[arg(long, default_value = "image")]
    output_dir: PathBuf,
    /// Write to this path instead of the per-layout default
    #[arg(short, long)]
    output: Option<PathBuf>,
    /// Emit `width height` on the dimension line instead of `height width`
    #[arg(long)]
    width_first: bool,
    /// Fill with one color instead of the sky gradient, e.g. `--clear 10,20,30`
    #[arg(long, value_parser = parse_color)]
    clear: Option<Color>,
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, Debug)]
struct Color(u8, u8, u8);

fn parse_color(s: &str) -> Result<Color, String> {
    let channels = s
        .split(',')
        .map(|c| c.trim().parse::<u8>().map_err(|e| format!("{c:?}: {e}")))
        .collect::<Result<Vec<_>, _>>()?;
    match channels[..] {
        [r, g, b] => Ok(Color(r, g, b)),
        _ => Err(format!("expected R,G,B, got {} values", channels.len())),
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(if args.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .with_writer(std::io::stderr)
        .init();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> anyhow::Result<()> {
    // Reject the token before anything touches the filesystem.
    let layout: PixelLayout = args.layout.parse()?;

    let path = match &args.output {
        Some(path) => path.clone(),
        None => {
            fs::create_dir_all(&args.output_dir).with_context(|| {
                format!("creating output directory {}", args.output_dir.display())
            })?;
            args.output_dir.join(layout.file_name())
        }
    };

    tracing::info!("Using {layout} image {}x{}.", args.width, args.height);

    let order = if args.width_first {
        HeaderOrder::WidthFirst
    } else {
        HeaderOrder::HeightFirst
    };
    let mut image = Image::create(layout, args.width, args.height, &path)?.with_header_order(order);

    if let Err(err) = render(&mut image, args.clear) {
        drop(image);
        remove_partial(&path);
        return Err(err);
    }

    tracing::info!(path = %path.display(), "image written");
    Ok(())
}

fn render<W: std::io::Write>(image: &mut Image<W>, clear: Option<Color>) -> anyhow::Result<()> {
    match clear {
        Some(Color(r, g, b)) => image.clear(r, g, b, Unstoppable)?,
        None => image.fill_sky(Unstoppable)?,
    }
    image.write(Unstoppable)?;
    image.release()?;
    Ok(())
}

fn remove_partial(path: &Path) {
    if let Err(err) = fs::remove_file(path) {
        tracing::warn!(path = %path.display(), "could not remove partial image: {err}");
    }
}
