//! Stylesheet build command.

use std::path::{Path, PathBuf};

use anyhow::Result;
use tan_ui_static::StylesBuilder;

use crate::config::load_config;

/// Run the build command.
pub async fn run(config_path: &Path, output: Option<PathBuf>, minify: bool) -> Result<()> {
    tracing::info!("Building stylesheet...");

    let file_config = load_config(config_path)?;

    let mut config = file_config.styles_config();
    if let Some(output) = output {
        config.output_dir = output;
    }
    config.minify |= minify;

    let result = StylesBuilder::new(config, file_config.generator())
        .build()
        .await?;

    tracing::info!(
        "Rendered {} manifest entries, published {} bytes in {}ms",
        result.entries,
        result.bytes,
        result.duration_ms
    );

    tracing::info!("Output: {}", result.stylesheet.display());

    Ok(())
}
