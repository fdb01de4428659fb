use std::{
    fs::File,
    io::{self, BufWriter},
    path::PathBuf,
};

use anyhow::{Context, Result};
use clap::Parser;
use rand::{rngs::StdRng, SeedableRng};
use tracing::info;

use spheretracer::{config::parse_aspect_ratio, render, Camera, RenderConfig, Scene};

#[derive(Parser, Debug)]
#[command(name = "spheretracer", version, about = "Render two spheres to a PPM image")]
struct Args {
    /// Image width in pixels; the height follows from the aspect ratio
    #[arg(short, long, default_value_t = 500)]
    width: usize,

    /// Aspect ratio as W:H or a decimal
    #[arg(short, long, default_value = "16:9", value_parser = parse_aspect)]
    aspect: f64,

    /// Samples averaged per pixel
    #[arg(short, long, default_value_t = 10)]
    samples: usize,

    /// Seed for the antialiasing jitter, for reproducible output
    #[arg(long)]
    seed: Option<u64>,

    /// Apply gamma 2 correction before quantizing
    #[arg(long)]
    gamma: bool,

    /// Output file, standard output when omitted
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Log filter used when RUST_LOG is unset (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Show the rendered image in a window
    #[cfg(feature = "preview")]
    #[arg(long)]
    preview: bool,
}

fn parse_aspect(s: &str) -> Result<f64, String> {
    parse_aspect_ratio(s).map_err(|e| e.to_string())
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&args.log_level)),
        )
        .with_writer(io::stderr)
        .init();

    let config = RenderConfig {
        aspect_ratio: args.aspect,
        image_width: args.width,
        samples_per_pixel: args.samples,
        gamma: args.gamma,
        seed: args.seed,
    };
    config.validate()?;

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let scene = Scene::two_spheres();
    let camera = Camera::new(config.aspect_ratio);

    let frame_buffer = render(&scene, &camera, &config, &mut rng);

    match &args.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            frame_buffer
                .write_ppm(&mut BufWriter::new(file))
                .with_context(|| format!("failed to write {}", path.display()))?;
            info!(path = %path.display(), "image written");
        }
        None => {
            frame_buffer
                .write_ppm(&mut BufWriter::new(io::stdout().lock()))
                .context("failed to write image to stdout")?;
        }
    }

    #[cfg(feature = "preview")]
    if args.preview {
        spheretracer::preview::show(&frame_buffer)?;
    }

    Ok(())
}
