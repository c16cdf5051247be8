//! Reusable Dioxus RSX components for the census chart apps.

mod chart_header;
mod drawing_surface;
mod error_display;

pub use chart_header::ChartHeader;
pub use drawing_surface::DrawingSurface;
pub use error_display::ErrorDisplay;
