use anyhow::{Result, bail};
use clap::{Parser, ValueEnum};
use pdf_album::{BackgroundColor, ComposeOptions, Orientation, PagePolicy, PaperSize};
use pdf_album_runtime::{AlbumCommand, AlbumUpdate, worker::worker_task};
use std::path::PathBuf;
use tokio::sync::mpsc;

mod logger;

#[derive(Parser)]
#[command(name = "pdfalbum", about = "Combine images into a single PDF", version)]
struct Cli {
    /// Input image file(s), one page each, in the given order
    #[arg(required = true, num_args = 1..)]
    images: Vec<PathBuf>,

    /// Output PDF file
    #[arg(short, long, default_value = "album.pdf")]
    output: PathBuf,

    /// Page size ("image" sizes each page to its image) [default: a4]
    #[arg(long, value_enum)]
    page_size: Option<PageSizeArg>,

    /// Page orientation (ignored with --page-size image) [default: portrait]
    #[arg(long, value_enum)]
    orientation: Option<OrientationArg>,

    /// Page background color as "r,g,b" with components in 0.0-1.0
    #[arg(long, value_parser = parse_background)]
    background: Option<BackgroundColor>,

    /// Load options from a JSON config file (flags override it)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Silently drop inputs without a supported image extension
    #[arg(long)]
    skip_unsupported: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum PageSizeArg {
    A3,
    A4,
    A5,
    Letter,
    Legal,
    Tabloid,
    /// Match each page to its image's pixel size
    Image,
}

#[derive(Clone, Copy, ValueEnum)]
enum OrientationArg {
    Portrait,
    Landscape,
}

impl From<OrientationArg> for Orientation {
    fn from(arg: OrientationArg) -> Self {
        match arg {
            OrientationArg::Portrait => Self::Portrait,
            OrientationArg::Landscape => Self::Landscape,
        }
    }
}

/// Overlay the given flags onto `base`, leaving the other half of a
/// fixed policy untouched when only one flag is present.
fn merge_page_policy(
    base: PagePolicy,
    size: Option<PageSizeArg>,
    orientation: Option<OrientationArg>,
) -> PagePolicy {
    let (base_size, base_orientation) = match base {
        PagePolicy::Fixed { size, orientation } => (size, orientation),
        PagePolicy::MatchImage => (PaperSize::A4, Orientation::Portrait),
    };
    let size = match size {
        None => base_size,
        Some(PageSizeArg::Image) => return PagePolicy::MatchImage,
        Some(PageSizeArg::A3) => PaperSize::A3,
        Some(PageSizeArg::A4) => PaperSize::A4,
        Some(PageSizeArg::A5) => PaperSize::A5,
        Some(PageSizeArg::Letter) => PaperSize::Letter,
        Some(PageSizeArg::Legal) => PaperSize::Legal,
        Some(PageSizeArg::Tabloid) => PaperSize::Tabloid,
    };
    PagePolicy::Fixed {
        size,
        orientation: orientation.map(Orientation::from).unwrap_or(base_orientation),
    }
}

fn parse_background(s: &str) -> Result<BackgroundColor, String> {
    let parts: Vec<&str> = s.split(',').collect();
    if parts.len() != 3 {
        return Err(format!("expected \"r,g,b\", got \"{s}\""));
    }
    let mut rgb = [0.0f32; 3];
    for (slot, part) in rgb.iter_mut().zip(&parts) {
        *slot = part
            .trim()
            .parse()
            .map_err(|_| format!("\"{part}\" is not a number"))?;
    }
    let color = BackgroundColor::new(rgb[0], rgb[1], rgb[2]);
    if !color.in_range() {
        return Err("components must be in 0.0-1.0".to_string());
    }
    Ok(color)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logger::CliLogger::new(cli.verbose)
        .init()
        .map_err(|e| anyhow::anyhow!("Failed to set up logging: {e}"))?;

    let mut options = match &cli.config {
        Some(path) => ComposeOptions::load(path).await?,
        None => ComposeOptions::default(),
    };
    if cli.page_size.is_some() || cli.orientation.is_some() {
        options.page_policy =
            merge_page_policy(options.page_policy, cli.page_size, cli.orientation);
    }
    if let Some(background) = cli.background {
        options.background = background;
    }

    let mut images = cli.images;
    if cli.skip_unsupported {
        images.retain(|path| {
            let keep = pdf_album::is_supported_image(path);
            if !keep {
                log::info!("Skipping {} (unsupported extension)", path.display());
            }
            keep
        });
    } else if let Some(bad) = images.iter().find(|p| !pdf_album::is_supported_image(p)) {
        bail!(
            "{} does not look like a supported image (try --skip-unsupported)",
            bad.display()
        );
    }
    if images.is_empty() {
        bail!("No images to add");
    }
    let total = images.len();

    let (cmd_tx, cmd_rx) = mpsc::unbounded_channel();
    let (update_tx, mut update_rx) = mpsc::unbounded_channel();
    let worker = tokio::spawn(worker_task(cmd_rx, update_tx));

    cmd_tx.send(AlbumCommand::Compose {
        images,
        options,
        output_path: cli.output.clone(),
    })?;
    drop(cmd_tx);

    let mut outcome = None;
    while let Some(update) = update_rx.recv().await {
        match update {
            AlbumUpdate::Progress {
                index,
                total,
                percent,
            } => {
                eprintln!("[{percent:3}%] {index}/{total}");
            }
            AlbumUpdate::ComposeComplete {
                path,
                page_count,
                failures,
            } => {
                outcome = Some((path, page_count, failures));
            }
            AlbumUpdate::ConfigLoaded { .. } => {}
            AlbumUpdate::Error { message } => {
                worker.abort();
                bail!("{message}");
            }
        }
    }
    worker.await?;

    let Some((path, page_count, failures)) = outcome else {
        bail!("Worker exited without producing a result");
    };

    if failures.is_empty() {
        println!("Created {} ({} pages)", path.display(), page_count);
        Ok(())
    } else {
        for failure in &failures {
            eprintln!("Failed to add {}: {}", failure.source.display(), failure.reason);
        }
        println!(
            "Created {} with {} of {} images; {} failed",
            path.display(),
            page_count,
            total,
            failures.len()
        );
        std::process::exit(1);
    }
}
