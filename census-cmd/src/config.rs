//! Loading `ChartConfig` for the CLI.

use std::path::Path;

use anyhow::Context;
use census_scene::ChartConfig;
use log::info;

use crate::ChartArgs;

/// Read a JSON config file; missing fields keep their defaults.
pub fn load_config(path: &Path) -> anyhow::Result<ChartConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    let config = serde_json::from_str(&text)
        .with_context(|| format!("failed to parse config {}", path.display()))?;
    info!("Loaded chart config from {}", path.display());
    Ok(config)
}

/// Defaults, then the config file, then `--width`/`--height`.
pub fn resolve(args: &ChartArgs) -> anyhow::Result<ChartConfig> {
    let config = match &args.config {
        Some(path) => load_config(path)?,
        None => ChartConfig::default(),
    };
    let width = args.width.unwrap_or(config.width);
    let height = args.height.unwrap_or(config.height);
    if width <= 0.0 || height <= 0.0 {
        anyhow::bail!("surface size must be positive, got {}x{}", width, height);
    }
    Ok(config.with_surface(width, height))
}
