//! Where state records come from.
//!
//! The chart needs exactly one read of the dataset. Browser and native
//! builds fetch it differently, so the read sits behind `RecordSource`.

use crate::error::Result;
use crate::state_record::StateRecord;

#[cfg(feature = "api")]
use crate::{error::FetchFailure, state_record::StatesResponse};
#[cfg(feature = "api")]
use log::{info, warn};
#[cfg(feature = "api")]
use reqwest::{Client, Url};

/// A single-shot provider of the ordered state records.
#[allow(async_fn_in_trait)]
pub trait RecordSource {
    /// Fetch and decode the records. Called once per render, never retried.
    async fn fetch_records(&self) -> Result<Vec<StateRecord>>;
}

/// Fetches `/api/states/` (or any configured endpoint) over HTTP.
#[cfg(feature = "api")]
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: Client,
    url: Url,
}

#[cfg(feature = "api")]
impl HttpSource {
    /// Resolve `endpoint` against `base_url`, e.g. `http://localhost:8000` + `/api/states/`.
    pub fn new(base_url: &str, endpoint: &str) -> Result<Self> {
        let url = Url::parse(base_url)
            .and_then(|base| base.join(endpoint))
            .map_err(|e| FetchFailure::Transport(format!("invalid url {}{}: {}", base_url, endpoint, e)))?;

        // A local dev server is never reached through a proxy.
        let mut builder = Client::builder();
        if matches!(url.host_str(), Some("localhost" | "127.0.0.1" | "[::1]")) {
            builder = builder.no_proxy();
        }
        let client = builder
            .build()
            .map_err(|e| FetchFailure::Transport(e.to_string()))?;
        Ok(Self { client, url })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }
}

#[cfg(feature = "api")]
impl RecordSource for HttpSource {
    async fn fetch_records(&self) -> Result<Vec<StateRecord>> {
        info!("Fetching state records from {}", self.url);
        let response = self
            .client
            .get(self.url.clone())
            .send()
            .await
            .map_err(|e| FetchFailure::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            warn!("Bad response status from {}: {}", self.url, status);
            return Err(FetchFailure::Status(status.as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| FetchFailure::Transport(e.to_string()))?;
        let records = StatesResponse::from_json(&body)?.records;
        info!("Fetched {} state records", records.len());
        Ok(records)
    }
}
