//! One-shot pipeline: fetch the records, lay out the scene, draw it.

use census_data::{FetchFailure, RecordSource};
use log::{error, info};
use serde::{Deserialize, Serialize};

use crate::config::ChartConfig;
use crate::scene::Scene;

/// Something that can put a finished scene on screen (or on disk).
pub trait SceneBackend {
    fn draw(&mut self, scene: &Scene);
}

/// Where a page load is in its single render.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub enum RenderPhase {
    #[default]
    Pending,
    Rendered,
    Failed(String),
}

impl RenderPhase {
    pub fn is_pending(&self) -> bool {
        matches!(self, RenderPhase::Pending)
    }
}

impl<T> From<&Result<T, FetchFailure>> for RenderPhase {
    fn from(result: &Result<T, FetchFailure>) -> Self {
        match result {
            Ok(_) => RenderPhase::Rendered,
            Err(e) => RenderPhase::Failed(e.to_string()),
        }
    }
}

/// Renders the chart exactly once; `render` consumes the renderer.
#[derive(Debug, Clone)]
pub struct ChartRenderer {
    config: ChartConfig,
}

impl ChartRenderer {
    pub fn new(config: ChartConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    /// Fetch once, then draw. On failure nothing reaches the backend.
    pub async fn render<S, B>(self, source: &S, backend: &mut B) -> Result<Scene, FetchFailure>
    where
        S: RecordSource,
        B: SceneBackend,
    {
        let records = source.fetch_records().await.map_err(|e| {
            error!("Failed to load {}: {}", self.config.endpoint, e);
            e
        })?;

        let scene = Scene::build(&records, &self.config);
        info!(
            "Drawing {} bars on a {}x{} plot",
            scene.bars.len(),
            scene.plot.width,
            scene.plot.height
        );
        backend.draw(&scene);
        Ok(scene)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::tests::sample;
    use census_data::StateRecord;

    struct FixedSource(Result<Vec<StateRecord>, FetchFailure>);

    impl RecordSource for FixedSource {
        async fn fetch_records(&self) -> Result<Vec<StateRecord>, FetchFailure> {
            self.0.clone()
        }
    }

    #[derive(Default)]
    struct RecordingBackend {
        drawn: Vec<Scene>,
    }

    impl SceneBackend for RecordingBackend {
        fn draw(&mut self, scene: &Scene) {
            self.drawn.push(scene.clone());
        }
    }

    #[tokio::test]
    async fn draws_scene_once_on_success() {
        let source = FixedSource(Ok(sample()));
        let mut backend = RecordingBackend::default();
        let result = ChartRenderer::new(ChartConfig::default())
            .render(&source, &mut backend)
            .await;

        assert_eq!(RenderPhase::from(&result), RenderPhase::Rendered);
        let scene = result.unwrap();
        assert_eq!(backend.drawn.len(), 1);
        assert_eq!(backend.drawn[0], scene);
        assert_eq!(scene.bars.len(), 4);
    }

    #[tokio::test]
    async fn failed_fetch_draws_nothing() {
        let source = FixedSource(Err(FetchFailure::Status(500)));
        let mut backend = RecordingBackend::default();
        let result = ChartRenderer::new(ChartConfig::default())
            .render(&source, &mut backend)
            .await;

        assert_eq!(result, Err(FetchFailure::Status(500)));
        assert!(backend.drawn.is_empty(), "no axes or bars after a failed fetch");
        assert_eq!(
            RenderPhase::from(&result),
            RenderPhase::Failed("unexpected HTTP status 500".to_string())
        );
    }

    #[test]
    fn starts_pending() {
        assert!(RenderPhase::default().is_pending());
    }

    #[test]
    fn settled_phases_clear_the_loading_state() {
        let ok: Result<(), FetchFailure> = Ok(());
        let failed: Result<(), FetchFailure> = Err(FetchFailure::Transport("offline".to_string()));
        assert!(!RenderPhase::from(&ok).is_pending());
        assert!(!RenderPhase::from(&failed).is_pending());
    }
}
