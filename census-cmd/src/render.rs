//! `render` and `scene` subcommands.

use std::path::Path;

use anyhow::Context;
use census_data::source::HttpSource;
use census_scene::svg::SvgDocument;
use census_scene::{ChartRenderer, Scene, SceneBackend};
use log::info;

use crate::{config, ChartArgs};

/// Keeps the scene without drawing it anywhere.
struct NullBackend;

impl SceneBackend for NullBackend {
    fn draw(&mut self, _scene: &Scene) {}
}

async fn fetch_and_build<B: SceneBackend>(args: &ChartArgs, backend: &mut B) -> anyhow::Result<Scene> {
    let config = config::resolve(args)?;
    let source = HttpSource::new(&args.base_url, &config.endpoint)?;
    let scene = ChartRenderer::new(config)
        .render(&source, backend)
        .await
        .with_context(|| format!("failed to load state records from {}", source.url()))?;
    Ok(scene)
}

/// Fetch once and write the chart to `output`. Nothing is written on failure.
pub async fn run_render(args: &ChartArgs, output: &Path) -> anyhow::Result<()> {
    let mut document = SvgDocument::new();
    let scene = fetch_and_build(args, &mut document).await?;

    tokio::fs::write(output, document.as_str())
        .await
        .with_context(|| format!("failed to write {}", output.display()))?;
    info!(
        "Wrote {} bars to {}",
        scene.bars.len(),
        output.display()
    );
    Ok(())
}

/// Fetch once and print the scene as pretty JSON on stdout.
pub async fn run_scene(args: &ChartArgs) -> anyhow::Result<()> {
    let scene = fetch_and_build(args, &mut NullBackend).await?;
    println!("{}", serde_json::to_string_pretty(&scene)?);
    Ok(())
}
