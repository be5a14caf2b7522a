//! wardrobe-cutout: CLI tool for removing garment photo backgrounds.

use anyhow::Context;
use clap::Parser;
use image::GenericImageView;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;
use wardrobe_cutout_client::{ClientConfig, CutoutClient};
use wardrobe_image::sniff_format;

/// Remove the background from a garment photo via the remove.bg service
#[derive(Parser)]
#[command(name = "wardrobe-cutout")]
#[command(author, version, about)]
struct Cli {
    /// Path to the source image (png, jpeg, or webp)
    input: PathBuf,

    /// Where to write the cutout PNG
    #[arg(short, long, default_value = "cutout.png")]
    output: PathBuf,

    /// Service API key (falls back to REMOVE_BG_API_KEY)
    #[arg(long, env = "REMOVE_BG_API_KEY", hide_env_values = true)]
    api_key: String,

    /// Endpoint override, mainly for testing against a local stub
    #[arg(long)]
    endpoint: Option<String>,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .compact()
        .init();

    let cli = Cli::parse();

    let data = std::fs::read(&cli.input)
        .with_context(|| format!("could not read {}", cli.input.display()))?;

    let format = sniff_format(&data)
        .with_context(|| format!("{} is not a supported image", cli.input.display()))?;
    info!(?format, bytes = data.len(), "Loaded source image");

    let source = image::load_from_memory(&data)
        .with_context(|| format!("could not decode {}", cli.input.display()))?;

    let mut config = ClientConfig::new(&cli.api_key);
    if let Some(endpoint) = cli.endpoint {
        config = config.with_endpoint(endpoint);
    }
    let client = CutoutClient::with_config(config)?;

    let cutout = client
        .remove_background(&source)
        .await
        .context("background removal failed")?;

    cutout
        .save(&cli.output)
        .with_context(|| format!("could not write {}", cli.output.display()))?;

    if cli.json {
        println!(
            "{}",
            serde_json::json!({
                "input": cli.input.to_string_lossy(),
                "input_format": format,
                "output": cli.output.to_string_lossy(),
                "width": cutout.width(),
                "height": cutout.height(),
            })
        );
    } else {
        println!(
            "Cutout written to {} ({}x{})",
            cli.output.display(),
            cutout.width(),
            cutout.height()
        );
    }

    Ok(())
}
