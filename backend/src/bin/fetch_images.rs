use std::path::PathBuf;

use anyhow::Context;
use biobrim_backend::image_fetch::{self, OptimizeOptions, PLACEHOLDER_IMAGES};
use clap::Parser;

/// Downloads the placeholder photography into the frontend asset folder.
#[derive(Debug, Parser)]
#[command(name = "fetch-images")]
struct Args {
    /// Where the optimized JPEGs are written
    #[arg(long, default_value = "frontend/assets/images")]
    out_dir: PathBuf,
    /// Images are scaled to fit inside a SIZE x SIZE box
    #[arg(long, default_value_t = image_fetch::DEFAULT_SIZE)]
    size: u32,
    /// JPEG quality, 1-100
    #[arg(long, default_value_t = image_fetch::DEFAULT_QUALITY, value_parser = clap::value_parser!(u8).range(1..=100))]
    quality: u8,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_target(false).init();
    let args = Args::parse();

    let client = image_fetch::http_client().context("Failed to build HTTP client")?;
    let options = OptimizeOptions {
        size: args.size,
        quality: args.quality,
    };

    let report = image_fetch::fetch_all(&client, PLACEHOLDER_IMAGES, &args.out_dir, options)
        .await
        .with_context(|| format!("Failed to prepare {}", args.out_dir.display()))?;

    tracing::info!(
        "{} images saved, {} failed",
        report.saved.len(),
        report.failed.len()
    );
    Ok(())
}
