#![deny(warnings)]

use anyhow::{Context, Result};
use clap::Parser as _;
use relief::hillshading::{
    render_shaded_image, render_shaded_image_parallel, FrameRenderer, SharedParameters,
};
use relief::input::load_height_field;
use std::sync::Arc;
use std::time::Instant;
use tracing_subscriber::{layer::SubscriberExt as _, util::SubscriberInitExt as _, Layer as _};

mod config;

use config::{Commands, Render, Strategy};

fn main() -> Result<()> {
    // a missing .env file is fine
    dotenv::dotenv().ok();
    setup_logging()?;

    let config = config::Config::parse();
    tracing::debug!("Initialising with config: {config:?}");

    match &config.command {
        Commands::Render(render_config) => render(render_config)?,
    }

    Ok(())
}

/// Setup logging.
fn setup_logging() -> Result<()> {
    let filters = tracing_subscriber::EnvFilter::builder()
        .with_default_directive("relief=info".parse()?)
        .from_env_lossy();
    let filter_layer = tracing_subscriber::fmt::layer().with_filter(filters);
    tracing_subscriber::registry().with(filter_layer).init();

    Ok(())
}

fn render(config: &Render) -> Result<()> {
    let field = load_height_field(&config.input)
        .with_context(|| format!("Couldn't load {}", config.input.display()))?;
    let parameters = config.shading.to_parameters();
    tracing::info!("Shading with {parameters:?} using {:?}", config.strategy);

    let started = Instant::now();
    let bitmap = match config.strategy {
        Strategy::Sequential => render_shaded_image(&field, &parameters),
        Strategy::Parallel => render_shaded_image_parallel(&field, &parameters),
        Strategy::Frame => {
            let shared = SharedParameters::new(parameters);
            let mut renderer = FrameRenderer::new(Arc::new(field));
            renderer.run_frames(config.frames.max(1), &shared, |index, _| {
                tracing::debug!("Frame {index} done");
            });
            tracing::info!("Rendered {} frames", renderer.frame_count());
            renderer.into_frame()
        }
    };
    tracing::info!("Shading took {:?}", started.elapsed());

    let output = config
        .output
        .to_str()
        .context("Output path is not valid UTF-8")?;
    bitmap
        .write_to_png(output)
        .with_context(|| format!("Couldn't write {output}"))?;
    tracing::info!("Shaded image saved to: {output}");

    Ok(())
}
