//! `RecordSource` backed by the browser's `window.fetch`.

use census_data::error::Result;
use census_data::{FetchFailure, RecordSource, StateRecord, StatesResponse};
use log::info;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

/// Issues a single `GET` against a same-origin endpoint such as `/api/states/`.
#[derive(Debug, Clone)]
pub struct BrowserSource {
    url: String,
}

impl BrowserSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

fn transport(err: JsValue) -> FetchFailure {
    FetchFailure::Transport(
        err.as_string()
            .unwrap_or_else(|| format!("{:?}", err)),
    )
}

impl RecordSource for BrowserSource {
    async fn fetch_records(&self) -> Result<Vec<StateRecord>> {
        let window = web_sys::window()
            .ok_or_else(|| FetchFailure::Transport("no window available".to_string()))?;

        info!("Fetching state records from {}", self.url);
        let response: Response = JsFuture::from(window.fetch_with_str(&self.url))
            .await
            .map_err(transport)?
            .dyn_into()
            .map_err(transport)?;

        if !response.ok() {
            return Err(FetchFailure::Status(response.status()));
        }

        let body = JsFuture::from(response.text().map_err(transport)?)
            .await
            .map_err(transport)?
            .as_string()
            .ok_or_else(|| FetchFailure::Decode("response body is not text".to_string()))?;

        let records = StatesResponse::from_json(&body)?.records;
        info!("Fetched {} state records", records.len());
        Ok(records)
    }
}
