mod config;
mod error;
mod object_url;
mod response;
mod scanner;
mod storage;
mod uploader;

use crate::config::{Config, REQUIRED_VARS};
use crate::storage::S3Store;
use anyhow::Context;
use envconfig::Envconfig;
use std::{io, path::PathBuf};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let config = Config::init_from_env()
        .with_context(|| format!("{REQUIRED_VARS} must be set in environment"))?;
    config
        .validate()
        .with_context(|| format!("{REQUIRED_VARS} must be set in environment"))?;

    if let Some(origins) = &config.allowed_origins {
        debug!("ALLOWED_ORIGINS={origins} is not applied to the bucket");
    }

    let image_dir = PathBuf::from(&config.image_dir);
    let files = scanner::list_images(&image_dir).await?;

    info!(
        "Uploading {} image(s) from {image_dir:?} to {} (bucket {})",
        files.len(),
        config.endpoint_url,
        config.bucket
    );

    let store = S3Store::connect(&config).await;

    let mut stdout = io::stdout();
    let report = uploader::upload_all(&store, &config, &files, &mut stdout).await?;
    report.write_summary(&mut stdout)?;

    if report.failed > 0 {
        info!("{} upload(s) failed", report.failed);
    }

    Ok(())
}
