use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pixmosaic::models::{AppConfig, ConfigOverrides, RenderMode};
use pixmosaic::services::{build_palette_from_dir, scan_images, BatchRunner, ConversionPipeline};

#[derive(Parser)]
#[command(name = "pixmosaic")]
#[command(about = "Convert images to pixel art or photo-mosaics learned from a corpus")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the palette (or tile library) and convert every input image
    Convert(RunArgs),
    /// Learn the palette and print it as #RRGGBB lines
    Palette(RunArgs),
}

#[derive(Args)]
struct RunArgs {
    /// YAML config file; flags below override its values
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory with images used to build the palette or tiles
    #[arg(long)]
    corpus_dir: Option<PathBuf>,

    /// Directory with images to convert
    #[arg(short, long)]
    input_dir: Option<PathBuf>,

    /// Output directory
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Number of colors in the palette (k)
    #[arg(short = 'k', long)]
    palette_size: Option<usize>,

    /// Color samples taken from each corpus image (0 = every pixel)
    #[arg(long)]
    samples_per_image: Option<usize>,

    /// Max number of corpus images read for the palette (0 = all)
    #[arg(long)]
    max_palette_images: Option<usize>,

    /// Max k-means iterations
    #[arg(long)]
    iterations: Option<usize>,

    /// Output width in cells (tiles in mosaic mode)
    #[arg(short = 'W', long)]
    width: Option<u32>,

    /// Output height in cells (0 = preserve aspect ratio)
    #[arg(short = 'H', long)]
    height: Option<u32>,

    /// Upscale factor to make pixels visible
    #[arg(short, long)]
    scale: Option<u32>,

    /// Mosaic tile edge in pixels
    #[arg(long)]
    tile_size: Option<u32>,

    /// Render photo-mosaics instead of pixel art
    #[arg(short, long)]
    mosaic: bool,

    /// Concurrent workers for processing images
    #[arg(short, long)]
    workers: Option<usize>,

    /// Seed for palette learning (random if unset)
    #[arg(long)]
    seed: Option<u64>,
}

impl RunArgs {
    /// Load the config file (if any), apply flag overrides and validate.
    fn resolve(self) -> anyhow::Result<AppConfig> {
        let mut config = AppConfig::load_or_default(self.config.as_deref())
            .context("Failed to load configuration")?;
        config.apply(ConfigOverrides {
            corpus_dir: self.corpus_dir,
            input_dir: self.input_dir,
            output_dir: self.output_dir,
            palette_size: self.palette_size,
            samples_per_image: self.samples_per_image,
            max_palette_images: self.max_palette_images,
            kmeans_iterations: self.iterations,
            cells_wide: self.width,
            cells_high: self.height,
            upscale: self.scale,
            tile_size: self.tile_size,
            mosaic: self.mosaic,
            workers: self.workers,
            seed: self.seed,
        });
        config.validate()?;
        Ok(config)
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pixmosaic=info,pixel_quant=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    match cli.command {
        Commands::Convert(args) => run_convert_command(args.resolve()?),
        Commands::Palette(args) => run_palette_command(args.resolve()?),
    }
}

fn seeded_rng(config: &AppConfig) -> StdRng {
    match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Build the shared palette or tile library, then batch-convert the input tree
fn run_convert_command(config: AppConfig) -> anyhow::Result<()> {
    let mode = config.mode();
    match mode {
        RenderMode::PixelArt => println!("Building palette from {}", config.corpus_dir.display()),
        RenderMode::Mosaic => println!("Loading mosaic tiles from {}", config.corpus_dir.display()),
    }

    let pipeline = ConversionPipeline::from_config(&config, &mut seeded_rng(&config))
        .with_context(|| format!("Failed to build {mode} corpus"))?;

    std::fs::create_dir_all(&config.output_dir)
        .with_context(|| format!("Failed to create {}", config.output_dir.display()))?;

    let inputs = scan_images(&config.input_dir);
    if inputs.is_empty() {
        tracing::warn!(input_dir = %config.input_dir.display(), "No input images found");
    }

    let runner = BatchRunner::new(config.workers).context("Failed to create thread pool")?;
    let report = runner.run(&pipeline, &inputs);

    if !report.is_clean() {
        eprintln!(
            "Completed with errors: ok={}, errors={}",
            report.succeeded(),
            report.failed.len()
        );
        for (input, e) in &report.failed {
            eprintln!("  - {}: {e}", input.display());
        }
    }
    println!(
        "Done. Converted {} of {} images. Output in {}",
        report.succeeded(),
        report.total(),
        config.output_dir.display()
    );

    Ok(())
}

/// Learn the palette and print it without converting anything
fn run_palette_command(config: AppConfig) -> anyhow::Result<()> {
    let palette = build_palette_from_dir(
        &config.corpus_dir,
        config.palette_size,
        config.samples_per_image,
        config.max_palette_images,
        config.kmeans_iterations,
        &mut seeded_rng(&config),
    )
    .context("Failed to build palette")?;

    for color in palette.colors() {
        println!("{}", color.to_hex());
    }

    Ok(())
}
