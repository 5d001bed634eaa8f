use anyhow::{Context, Result};
use clap::Parser;
use folio_core::{load_scene, SceneDescription};
use folio_tracer::{ImageBuffer, RayTracingEngine};

mod cli;

use cli::Args;

/// Resolve the scene, applying any size overrides from the command line.
fn build_description(args: &Args) -> Result<SceneDescription> {
    let mut description = match &args.scene {
        Some(path) => load_scene(path)
            .with_context(|| format!("Failed to load scene {}", path.display()))?,
        None => SceneDescription::demo(),
    };

    if let Some(width) = args.width {
        description.camera.width = width;
    }
    if let Some(height) = args.height {
        description.camera.height = height;
    }

    description.validate().context("Invalid image size")?;
    Ok(description)
}

/// Log the middle-row sample pixels: quarter, center and three-quarter width.
fn report_samples(engine: &RayTracingEngine) {
    let camera = engine.camera();
    let y = camera.height() / 2;
    let samples = [
        ("Center", camera.width() / 2),
        ("Left", camera.width() / 4),
        ("Right", camera.width() * 3 / 4),
    ];

    for (label, x) in samples {
        let c = engine.render_pixel(x, y);
        log::info!("{} pixel ({}, {}) color: ({:.2}, {:.2}, {:.2})", label, x, y, c.x, c.y, c.z);
    }
}

fn save_png(image: ImageBuffer, path: &std::path::Path) -> Result<()> {
    let (width, height) = (image.width, image.height);
    let rgb = image::RgbImage::from_raw(width, height, image.into_raw())
        .context("Pixel buffer does not match image size")?;
    rgb.save(path)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    env_logger::Builder::from_default_env()
        .filter_level(args.log_level.into())
        .init();

    log::info!("Starting folio demo");

    let description = build_description(&args)?;
    let engine = RayTracingEngine::from_description(&description);

    log::info!("Scene created with {} objects", engine.scene().shape_count());
    log::info!(
        "Camera initialized: {}x{}",
        engine.camera().width(),
        engine.camera().height()
    );

    report_samples(&engine);

    if let Some(path) = &args.output {
        let image = engine.render();
        save_png(image, path)?;
        log::info!("Saved to {}", path.display());
    }

    Ok(())
}
