//! Chart configuration.
//!
//! Every field has a default matching the states page, so an empty JSON
//! object (`{}`) is a valid configuration.

use serde::{Deserialize, Serialize};

/// Space reserved around the plot for axes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Margin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Default for Margin {
    fn default() -> Self {
        Self {
            top: 20.0,
            right: 20.0,
            bottom: 30.0,
            left: 40.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    /// Records endpoint, relative to the page origin
    pub endpoint: String,
    /// DOM id of the existing `<svg>` drawing surface
    pub surface_id: String,
    /// Outer surface width in pixels
    pub width: f64,
    /// Outer surface height in pixels
    pub height: f64,
    pub margin: Margin,
    /// Band padding, as a fraction of the step
    pub band_padding: f64,
    /// Approximate number of ticks on the population axis
    pub y_ticks: usize,
    /// Bars link to `{navigation_prefix}{STATE}/`
    pub navigation_prefix: String,
    pub axis_label: String,
    /// Page heading above the chart
    pub title: String,
    /// One line under the heading; empty hides it
    pub subtitle: String,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            endpoint: "/api/states/".to_string(),
            surface_id: "states-chart".to_string(),
            width: 960.0,
            height: 500.0,
            margin: Margin::default(),
            band_padding: 0.1,
            y_ticks: 10,
            navigation_prefix: "/counties/".to_string(),
            axis_label: "Population".to_string(),
            title: "Population by State".to_string(),
            subtitle: "Residents, 2015 estimates. Click a bar for county detail.".to_string(),
        }
    }
}

impl ChartConfig {
    /// Same config with the surface size replaced, e.g. by the size measured in the page.
    pub fn with_surface(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Usable plot width after margins; never negative.
    pub fn plot_width(&self) -> f64 {
        (self.width - self.margin.left - self.margin.right).max(0.0)
    }

    /// Usable plot height after margins; never negative.
    pub fn plot_height(&self) -> f64 {
        (self.height - self.margin.top - self.margin.bottom).max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_plot_area() {
        let config = ChartConfig::default();
        assert_eq!(config.plot_width(), 900.0);
        assert_eq!(config.plot_height(), 450.0);
    }

    #[test]
    fn tiny_surface_clamps_to_zero() {
        let config = ChartConfig::default().with_surface(30.0, 10.0);
        assert_eq!(config.plot_width(), 0.0);
        assert_eq!(config.plot_height(), 0.0);
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config: ChartConfig =
            serde_json::from_str(r#"{"width": 600, "margin": {"left": 60}}"#).unwrap();
        assert_eq!(config.width, 600.0);
        assert_eq!(config.height, 500.0);
        assert_eq!(config.margin.left, 60.0);
        assert_eq!(config.margin.top, 20.0);
        assert_eq!(config.endpoint, "/api/states/");
        assert_eq!(config.navigation_prefix, "/counties/");
    }

    #[test]
    fn header_copy_is_separate_from_axis_label() {
        let config = ChartConfig::default();
        assert_eq!(config.title, "Population by State");
        assert!(config.subtitle.starts_with("Residents"));
        assert_eq!(config.axis_label, "Population");

        let config: ChartConfig = serde_json::from_str(r#"{"subtitle": ""}"#).unwrap();
        assert!(config.subtitle.is_empty());
        assert_eq!(config.title, "Population by State");
    }
}
