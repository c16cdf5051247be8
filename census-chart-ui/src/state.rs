//! Application state managed via Dioxus context.
//!
//! `AppState` bundles the reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.

use census_scene::{ChartConfig, RenderPhase, Scene};
use dioxus::prelude::*;

/// Shared application state for the census chart apps.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Chart settings; the surface size is replaced by the measured one
    pub config: Signal<ChartConfig>,
    /// Pending until the single render finishes or fails
    pub phase: Signal<RenderPhase>,
    /// The drawn scene, once rendered
    pub scene: Signal<Option<Scene>>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self::with_config(ChartConfig::default())
    }

    pub fn with_config(config: ChartConfig) -> Self {
        Self {
            config: Signal::new(config),
            phase: Signal::new(RenderPhase::Pending),
            scene: Signal::new(None),
        }
    }

    /// Message to show when the render failed.
    pub fn error_msg(&self) -> Option<String> {
        match &*self.phase.read() {
            RenderPhase::Failed(msg) => Some(msg.clone()),
            _ => None,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
