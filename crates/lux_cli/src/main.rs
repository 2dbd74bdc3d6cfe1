//! lux - render a JSON scene description to an image.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use lux_renderer::{load_scene, render_parallel, validate_config, Scene};

#[derive(Parser)]
#[command(name = "lux", version)]
#[command(about = "Recursive ray tracer for JSON scene files", long_about = None)]
struct Args {
    /// Scene description (JSON)
    scene: PathBuf,

    /// Output image; format determined by extension (.png, .ppm, ...)
    #[arg(short, long, default_value = "output.png")]
    output: PathBuf,

    /// Override the image width
    #[arg(long)]
    width: Option<u32>,

    /// Override the image height
    #[arg(long)]
    height: Option<u32>,

    /// Override the anti-aliasing multiplier (N×N samples per pixel)
    #[arg(long)]
    aa: Option<u32>,

    /// Override the maximum recursion depth
    #[arg(long)]
    max_depth: Option<u32>,

    /// Number of render threads (defaults to one per core)
    #[arg(long)]
    threads: Option<usize>,

    /// Render on the calling thread only
    #[arg(long, conflicts_with = "threads")]
    single_threaded: bool,
}

impl Args {
    fn apply_overrides(&self, scene: &mut Scene) {
        let config = scene.config_mut();
        if let Some(width) = self.width {
            config.width = width;
        }
        if let Some(height) = self.height {
            config.height = height;
        }
        if let Some(aa) = self.aa {
            config.aa_multiplier = aa;
        }
        if let Some(max_depth) = self.max_depth {
            config.max_depth = max_depth;
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    if let Some(threads) = args.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()
            .context("Failed to configure render thread pool")?;
    }

    let start = Instant::now();
    let mut scene = load_scene(&args.scene)
        .with_context(|| format!("Failed to load scene {}", args.scene.display()))?;
    args.apply_overrides(&mut scene);
    validate_config(scene.config()).context("Invalid render options")?;
    log::info!("Scene ready in {:?}", start.elapsed());

    let image = if args.single_threaded {
        scene.render()
    } else {
        render_parallel(&scene)
    };

    image
        .save(&args.output)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;

    Ok(())
}
