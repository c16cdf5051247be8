//! Population by State
//!
//! Bar chart of total population per state, one bar per record returned by
//! `GET /api/states/`, with a hover tooltip and a click-through to
//! `/counties/<STATE>/`.
//!
//! Data flow:
//! 1. On mount the `<svg>` surface exists, so its size is measured.
//! 2. One `fetch` of the records endpoint; no retry.
//! 3. `Scene::build` lays out scales, axes and bars in Rust.
//! 4. `D3Backend` draws the scene and routes bar events back to Rust.

use census_chart_ui::components::{ChartHeader, DrawingSurface, ErrorDisplay};
use census_chart_ui::fetch::BrowserSource;
use census_chart_ui::js_bridge::{self, D3Backend};
use census_chart_ui::state::AppState;
use census_scene::{ChartRenderer, RenderPhase};
use dioxus::prelude::*;

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("states-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);

    // ─── Render once, after the surface is mounted ───
    use_effect(move || {
        if !state.phase.peek().is_pending() {
            return;
        }
        js_bridge::init_chart_scripts();

        let mut config = state.config.peek().clone();
        if let Some((width, height)) = js_bridge::surface_size(&config.surface_id) {
            config = config.with_surface(width, height);
        }
        state.config.set(config.clone());

        spawn(async move {
            let source = BrowserSource::new(config.endpoint.clone());
            let mut backend = D3Backend::new(config.surface_id.clone());
            let result = ChartRenderer::new(config).render(&source, &mut backend).await;

            state.phase.set(RenderPhase::from(&result));
            match result {
                Ok(scene) => state.scene.set(Some(scene)),
                Err(e) => log::error!("States chart not rendered: {}", e),
            }
        });
    });

    let config = state.config.read().clone();
    let loading = state.phase.read().is_pending();

    rsx! {
        div {
            style: "max-width: 1000px; margin: 0 auto; padding: 8px; font-family: system-ui, -apple-system, sans-serif;",

            if let Some(err) = state.error_msg() {
                ErrorDisplay { message: err }
            }

            ChartHeader {
                title: config.title.clone(),
                subtitle: config.subtitle.clone(),
            }

            DrawingSurface {
                id: config.surface_id.clone(),
                width: config.width as u32,
                height: config.height as u32,
                loading: loading,
            }
        }
    }
}
