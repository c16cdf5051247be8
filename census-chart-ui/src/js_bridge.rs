//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! The D3.js drawing code lives in `assets/js/*.js` and is loaded at runtime.
//! It is evaluated as globals (no ES modules) and exposed via `window.*`.
//! Bar events come back into Rust through a closure installed on `window`,
//! so tooltip content and navigation are decided by `Scene::respond`.

use census_scene::{BarEvent, Effect, Scene, SceneBackend};
use log::{error, info, warn};
use wasm_bindgen::prelude::*;

// Embed all D3 chart JS files at compile time
static TOOLTIP_JS: &str = include_str!("../assets/js/tooltip.js");
static BAR_CHART_JS: &str = include_str!("../assets/js/bar-chart.js");

/// Name of the `window` function the chart script calls on bar events.
pub const EVENT_ROUTER: &str = "__statesChartEvent";

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('States chart JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Initialize chart scripts with a wait-for-D3 polling loop.
///
/// The scripts define functions like `renderStatesChart(...)` via
/// `function` declarations. They are evaluated at global scope with an
/// indirect `eval()` once D3 is ready, then promoted to `window.*`.
pub fn init_chart_scripts() {
    let all_js = [TOOLTIP_JS, BAR_CHART_JS].join("\n");

    // Store the scripts on window so the polling callback can eval them
    // at global scope (not block-scoped inside setInterval).
    let store_js = format!(
        "window.__statesChartScripts = {};",
        serde_json::to_string(&all_js).unwrap_or_default()
    );
    let _ = js_sys::eval(&store_js);

    let init_js = r#"
        (function() {
            var waitForD3 = setInterval(function() {
                if (typeof d3 !== 'undefined') {
                    clearInterval(waitForD3);
                    (0, eval)(window.__statesChartScripts);
                    delete window.__statesChartScripts;
                    if (typeof renderStatesChart !== 'undefined') window.renderStatesChart = renderStatesChart;
                    if (typeof initStatesTooltip !== 'undefined') window.initStatesTooltip = initStatesTooltip;
                    if (typeof showStatesTooltip !== 'undefined') window.showStatesTooltip = showStatesTooltip;
                    if (typeof hideStatesTooltip !== 'undefined') window.hideStatesTooltip = hideStatesTooltip;
                    window.__statesChartReady = true;
                    console.log('States chart initialized');
                }
            }, 100);
        })();
    "#;
    let _ = js_sys::eval(init_js);
}

/// Draw a serialized `Scene` into the `<svg>` with id `surface_id`.
///
/// Polls until D3.js is loaded, the chart scripts are initialized and the
/// surface exists in the DOM.
pub fn render_states_chart(surface_id: &str, scene_json: &str) {
    // Double-encode so the JSON travels as a JS string literal.
    let id_literal = serde_json::to_string(surface_id).unwrap_or_default();
    let scene_literal = serde_json::to_string(scene_json).unwrap_or_default();
    call_js(&format!(
        r#"
        (function() {{
            var poll = setInterval(function() {{
                if (window.__statesChartReady &&
                    typeof window.renderStatesChart !== 'undefined' &&
                    document.getElementById({id_literal})) {{
                    clearInterval(poll);
                    try {{
                        window.renderStatesChart({id_literal}, {scene_literal});
                    }} catch(e) {{ console.error('[States] renderStatesChart error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    ));
}

/// Size of the existing drawing surface, from its layout box or its
/// `width`/`height` attributes.
pub fn surface_size(surface_id: &str) -> Option<(f64, f64)> {
    let element = web_sys::window()?
        .document()?
        .get_element_by_id(surface_id)?;

    let attribute = |name: &str| -> Option<f64> {
        element
            .get_attribute(name)
            .and_then(|v| v.trim().trim_end_matches("px").parse::<f64>().ok())
    };

    let width = match element.client_width() {
        w if w > 0 => f64::from(w),
        _ => attribute("width")?,
    };
    let height = match element.client_height() {
        h if h > 0 => f64::from(h),
        _ => attribute("height")?,
    };
    Some((width, height))
}

/// Full-page navigation, replacing the current location.
pub fn navigate(href: &str) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    info!("Navigating to {}", href);
    window.location().assign(href)
}

/// Install `window.__statesChartEvent(json)`, answering each bar event with
/// a JSON-encoded `Effect`. Navigation is carried out here; tooltips are
/// left to the calling script, which knows the hovered element.
pub fn install_event_router(scene: Scene) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;

    let router = Closure::<dyn FnMut(JsValue) -> JsValue>::wrap(Box::new(move |val: JsValue| {
        let event = val
            .as_string()
            .and_then(|txt| serde_json::from_str::<BarEvent>(&txt).ok());
        let effect = match event {
            Some(event) => scene.respond(&event),
            None => {
                warn!("Unrecognized bar event: {:?}", val);
                Effect::Ignore
            }
        };
        if let Effect::Navigate { href } = &effect {
            if let Err(e) = navigate(href) {
                error!("Navigation to {} failed: {:?}", href, e);
            }
        }
        JsValue::from_str(&serde_json::to_string(&effect).unwrap_or_default())
    }));

    js_sys::Reflect::set(&window, &JsValue::from_str(EVENT_ROUTER), router.as_ref())?;
    router.forget();
    Ok(())
}

/// Draws scenes with D3.js into an existing `<svg>`.
#[derive(Debug, Clone)]
pub struct D3Backend {
    surface_id: String,
}

impl D3Backend {
    pub fn new(surface_id: impl Into<String>) -> Self {
        Self {
            surface_id: surface_id.into(),
        }
    }
}

impl SceneBackend for D3Backend {
    fn draw(&mut self, scene: &Scene) {
        if let Err(e) = install_event_router(scene.clone()) {
            error!("Failed to install bar event router: {:?}", e);
        }
        match serde_json::to_string(scene) {
            Ok(scene_json) => render_states_chart(&self.surface_id, &scene_json),
            Err(e) => error!("Failed to serialize scene: {}", e),
        }
    }
}
