//! State population records served by the census `/api/states/` endpoint.
//!
//! This crate provides:
//! - `state_record`: the `StateRecord` row and `StatesResponse` payload
//! - `error`: `FetchFailure`, the single way loading the dataset can fail
//! - `source`: the `RecordSource` seam, plus an HTTP client behind the `api` feature

pub mod error;
pub mod source;
pub mod state_record;

pub use error::FetchFailure;
pub use source::RecordSource;
pub use state_record::{StateRecord, StatesResponse};
