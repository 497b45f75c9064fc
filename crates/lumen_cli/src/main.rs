//! Command line renderer: traces a built-in scene and writes a pixel map.

mod scenes;

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;

use lumen_core::{ppm, Image, Timer};
use lumen_renderer::{RenderConfig, Renderer};

#[derive(Parser, Debug)]
#[command(name = "lumen", about = "A recursive ray tracer", version)]
struct Args {
    /// Output pixel map path.
    #[arg(default_value = "render.ppm")]
    output: PathBuf,

    /// Built-in scene to render.
    #[arg(short, long, default_value = "showcase")]
    scene: String,

    /// Output width in pixels.
    #[arg(long, default_value_t = 512)]
    width: usize,

    /// Output height in pixels.
    #[arg(long, default_value_t = 384)]
    height: usize,

    /// Seed for every sampler in the render.
    #[arg(long, default_value_t = 0x7564231)]
    seed: u64,

    /// Rays per pixel sample for depth of field.
    #[arg(long, default_value_t = 8)]
    dof_samples: usize,

    /// Maximum reflection recursion depth.
    #[arg(long, default_value_t = 5)]
    max_ray_depth: usize,

    /// Paint supersampled pixels instead of rendering them.
    #[arg(long)]
    highlight_supersampled: bool,

    /// Paint recursively supersampled subregions instead of rendering
    /// them.
    #[arg(long)]
    highlight_recursive: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let args = Args::parse();

    let Some((scene, camera)) = scenes::build(&args.scene) else {
        bail!(
            "unknown scene `{}`, expected one of: {}",
            args.scene,
            scenes::names().join(", ")
        );
    };

    let mut config = RenderConfig::default()
        .with_seed(args.seed)
        .with_dof_samples(args.dof_samples)
        .with_max_ray_depth(args.max_ray_depth);
    config.highlight.supersampled_pixels = args.highlight_supersampled;
    config.highlight.recursive_supersampled_pixels = args.highlight_recursive;

    let renderer = Renderer::new(scene, camera, config);
    let mut image = Image::new(args.width, args.height);

    let timer = Timer::new();
    renderer.render(&mut image);
    let elapsed = timer.elapsed();

    let file = File::create(&args.output)
        .with_context(|| format!("failed to create {}", args.output.display()))?;
    let mut out = BufWriter::new(file);
    ppm::write(&image, &mut out)?;
    out.flush()?;

    let counters = renderer.counters();
    let seconds = elapsed.max(f64::EPSILON);
    log::info!(
        "rendered {} pixels in {:.3} s ({:.0} pixels/s)",
        image.size(),
        elapsed,
        image.size() as f64 / seconds
    );
    log::info!(
        "{} traces ({:.2} per pixel, {:.0} traces/s)",
        counters.traces(),
        counters.traces() as f64 / image.size().max(1) as f64,
        counters.traces() as f64 / seconds
    );
    log::info!(
        "{} shading rays ({:.0} rays/s)",
        counters.rays(),
        counters.rays() as f64 / seconds
    );
    log::info!("wrote {}", args.output.display());

    Ok(())
}
