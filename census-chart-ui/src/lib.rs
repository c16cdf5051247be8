//! Shared Dioxus components and D3.js bridge for the census chart apps.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers for the D3.js scripts via `js_sys::eval()`,
//!   and the `D3Backend` that draws a `Scene` with them
//! - `fetch`: a `RecordSource` backed by the browser's `fetch`
//! - `state`: Reactive AppState with Dioxus Signals
//! - `components`: Reusable RSX components (surface, header, errors, spinner)

pub mod components;
pub mod fetch;
pub mod js_bridge;
pub mod state;
