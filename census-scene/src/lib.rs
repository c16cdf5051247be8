//! Data-to-visual mapping for the state population bar chart.
//!
//! The chart is described as a [`scene::Scene`] value before anything is
//! drawn, so the whole mapping can be checked without a browser.
//!
//! - `config`: surface size, margins and the fixed endpoint/navigation paths
//! - `scale`: rounded band and linear scales
//! - `ticks`: "nice" tick values for the linear axis
//! - `format`: two-significant-digit SI tick labels
//! - `scene`: bars, axes, label and bar interactions
//! - `renderer`: the one-shot fetch → scene → backend pipeline
//! - `svg`: a static SVG backend

pub mod config;
pub mod format;
pub mod renderer;
pub mod scale;
pub mod scene;
pub mod svg;
pub mod ticks;

pub use config::{ChartConfig, Margin};
pub use renderer::{ChartRenderer, RenderPhase, SceneBackend};
pub use scene::{BarEvent, Effect, Scene};
