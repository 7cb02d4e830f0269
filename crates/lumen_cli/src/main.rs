use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use lumen_renderer::{render, scene_rng, RenderConfig, SceneKind, MAX_DEPTH};

/// Scene presets selectable from the command line.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum SceneArg {
    /// Random field of small spheres around three large ones
    Random,
    /// Four-sphere scene with fuzzy metals
    Metal,
    /// Five-sphere scene with a hollow glass bubble
    Glass,
}

impl From<SceneArg> for SceneKind {
    fn from(arg: SceneArg) -> Self {
        match arg {
            SceneArg::Random => SceneKind::Random,
            SceneArg::Metal => SceneKind::Metal,
            SceneArg::Glass => SceneKind::Glass,
        }
    }
}

#[derive(Debug, Parser)]
#[command(author, version, about = "Offline Monte Carlo path tracer for sphere scenes")]
struct Args {
    /// Render width (defaults to the scene preset)
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    width: Option<u32>,

    /// Render height (defaults to the scene preset)
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    height: Option<u32>,

    /// Number of samples per pixel (defaults to the scene preset)
    #[arg(long = "ns", value_parser = clap::value_parser!(u32).range(1..))]
    samples: Option<u32>,

    /// Scene to render
    #[arg(long, value_enum, default_value_t = SceneArg::Random)]
    scene: SceneArg,

    /// Seed for scene generation and sampling
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Worker threads, 0 uses every core
    #[arg(long, default_value_t = 0)]
    threads: usize,

    /// Output file; .ppm is written as plain-text P3, .png/.jpg via the image encoders
    #[arg(short, long, default_value = "rtow.ppm")]
    output: PathBuf,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let kind = SceneKind::from(args.scene);

    rayon::ThreadPoolBuilder::new()
        .num_threads(args.threads)
        .build_global()
        .context("Failed to configure the worker thread pool")?;

    let (default_width, default_height) = kind.default_resolution();
    let config = RenderConfig {
        width: args.width.unwrap_or(default_width),
        height: args.height.unwrap_or(default_height),
        samples_per_pixel: args.samples.unwrap_or(kind.default_samples()),
        max_depth: MAX_DEPTH,
        seed: args.seed,
    };

    log::info!("Scene: {:?}", kind);
    log::info!("Render width: {}", config.width);
    log::info!("Render height: {}", config.height);
    log::info!("Number of samples per pixel: {}", config.samples_per_pixel);

    let start = Instant::now();
    let world = kind
        .build(&mut scene_rng(config.seed))
        .context("Failed to build scene")?;
    log::info!("Scene with {} objects built in {:?}", world.len(), start.elapsed());

    let camera = kind
        .camera(config.aspect_ratio())
        .context("Invalid camera configuration")?;

    let image = render(&camera, &world, &config)?;

    image
        .save(&args.output)
        .with_context(|| format!("Failed to save {}", args.output.display()))?;

    Ok(())
}
