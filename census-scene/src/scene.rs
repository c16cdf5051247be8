//! Declarative description of the chart.
//!
//! A `Scene` holds every pixel position, label and link the chart needs.
//! Backends only draw it; they never look at the records again.

use census_data::StateRecord;
use log::warn;
use serde::{Deserialize, Serialize};

use crate::config::{ChartConfig, Margin};
use crate::format::population_tick;
use crate::scale::{round_half_up, BandScale, LinearScale};
use crate::ticks::ticks;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotArea {
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AxisOrient {
    Bottom,
    Left,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tick {
    /// Offset along the axis, in plot coordinates
    pub position: f64,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisSpec {
    pub orient: AxisOrient,
    /// CSS classes of the axis group, e.g. `x axis`
    pub class: String,
    /// Translation of the axis group within the plot
    pub offset: (f64, f64),
    pub ticks: Vec<Tick>,
}

/// Hover content for one bar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tooltip {
    pub title: String,
    pub total: f64,
    pub male: f64,
    pub female: f64,
}

impl Tooltip {
    /// Markup shown by the tooltip helper. The title is HTML-escaped.
    pub fn html(&self) -> String {
        format!(
            "<div><span class=\"tooltip-title\">{}</span><br/>Population:&nbsp;{} (M: {}, F: {})</div>",
            escape(&self.title),
            self.total,
            self.male,
            self.female
        )
    }

    /// Plain-text form for backends without HTML tooltips.
    pub fn text(&self) -> String {
        format!(
            "{}\nPopulation: {} (M: {}, F: {})",
            self.title, self.total, self.male, self.female
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    pub abbreviation: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Full-page navigation target on click
    pub href: String,
    pub tooltip: Tooltip,
}

/// The rotated static label next to the population axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisLabel {
    pub text: String,
    pub rotate: f64,
    pub y: f64,
    pub dy: String,
    pub text_anchor: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub width: f64,
    pub height: f64,
    pub margin: Margin,
    pub plot: PlotArea,
    /// Upper end of the population scale's domain
    pub y_max: f64,
    pub x_axis: AxisSpec,
    pub y_axis: AxisSpec,
    pub bars: Vec<Bar>,
    pub label: AxisLabel,
}

/// Pointer input on a bar, as reported by the drawing backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BarEvent {
    PointerEnter { index: usize },
    PointerLeave { index: usize },
    Click { index: usize },
}

/// What the backend should do in response to a `BarEvent`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "effect", rename_all = "snake_case")]
pub enum Effect {
    ShowTooltip { index: usize, html: String },
    HideTooltip,
    Navigate { href: String },
    Ignore,
}

impl Scene {
    /// Lay out the chart for `records` in the order given.
    pub fn build(records: &[StateRecord], config: &ChartConfig) -> Scene {
        let plot = PlotArea {
            width: config.plot_width(),
            height: config.plot_height(),
        };

        let x = BandScale::new(
            records.iter().map(|r| r.abbreviation.as_str()),
            plot.width,
            config.band_padding,
        );
        let y_max = StateRecord::max_total_population(records);
        let y = LinearScale::new((0.0, y_max), (plot.height, 0.0));

        let bars = records
            .iter()
            .map(|record| {
                let top = y.scale(record.total_population);
                Bar {
                    abbreviation: record.abbreviation.clone(),
                    // Every abbreviation was inserted above.
                    x: x.position(&record.abbreviation).unwrap_or_default(),
                    y: top,
                    width: x.bandwidth(),
                    height: plot.height - top,
                    href: format!("{}{}/", config.navigation_prefix, record.state_code),
                    tooltip: Tooltip {
                        title: record.name.clone(),
                        total: record.total_population,
                        male: record.male_population,
                        female: record.female_population,
                    },
                }
            })
            .collect();

        let center = round_half_up((x.bandwidth() - 1.0).max(0.0) / 2.0);
        let x_axis = AxisSpec {
            orient: AxisOrient::Bottom,
            class: "x axis".to_string(),
            offset: (0.0, plot.height),
            ticks: x
                .domain()
                .iter()
                .filter_map(|key| {
                    x.position(key).map(|pos| Tick {
                        position: pos + center,
                        label: key.clone(),
                    })
                })
                .collect(),
        };

        let y_axis = AxisSpec {
            orient: AxisOrient::Left,
            class: "y axis".to_string(),
            offset: (0.0, 0.0),
            ticks: ticks(0.0, y_max, config.y_ticks)
                .into_iter()
                .map(|value| Tick {
                    position: y.scale(value),
                    label: population_tick(value),
                })
                .collect(),
        };

        Scene {
            width: config.width,
            height: config.height,
            margin: config.margin,
            plot,
            y_max,
            x_axis,
            y_axis,
            bars,
            label: AxisLabel {
                text: config.axis_label.clone(),
                rotate: -90.0,
                y: 6.0,
                dy: "0.75em".to_string(),
                text_anchor: "end".to_string(),
            },
        }
    }

    /// Resolve a pointer event on bar `index` into an effect.
    pub fn respond(&self, event: &BarEvent) -> Effect {
        let index = match event {
            BarEvent::PointerEnter { index }
            | BarEvent::PointerLeave { index }
            | BarEvent::Click { index } => *index,
        };
        let Some(bar) = self.bars.get(index) else {
            warn!("event {:?} for unknown bar (have {})", event, self.bars.len());
            return Effect::Ignore;
        };
        match event {
            BarEvent::PointerEnter { .. } => Effect::ShowTooltip {
                index,
                html: bar.tooltip.html(),
            },
            BarEvent::PointerLeave { .. } => Effect::HideTooltip,
            BarEvent::Click { .. } => Effect::Navigate {
                href: bar.href.clone(),
            },
        }
    }
}

/// Escape text for HTML and XML content or attribute values.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn record(name: &str, abbr: &str, code: &str, total: f64) -> StateRecord {
        StateRecord {
            name: name.to_string(),
            abbreviation: abbr.to_string(),
            state_code: code.to_string(),
            total_population: total,
            male_population: (total / 2.0).floor(),
            female_population: (total / 2.0).ceil(),
        }
    }

    pub(crate) fn sample() -> Vec<StateRecord> {
        vec![
            StateRecord {
                name: "California".to_string(),
                abbreviation: "CA".to_string(),
                state_code: "06".to_string(),
                total_population: 39_000_000.0,
                male_population: 19_000_000.0,
                female_population: 20_000_000.0,
            },
            record("Texas", "TX", "48", 27_000_000.0),
            record("Wyoming", "WY", "56", 586_107.0),
            record("Nowhere", "NW", "99", 0.0),
        ]
    }

    #[test]
    fn one_bar_per_record_in_input_order() {
        let scene = Scene::build(&sample(), &ChartConfig::default());
        let order: Vec<&str> = scene.bars.iter().map(|b| b.abbreviation.as_str()).collect();
        assert_eq!(order, vec!["CA", "TX", "WY", "NW"]);
        assert!(scene.bars.windows(2).all(|w| w[0].x < w[1].x));
    }

    #[test]
    fn tallest_bar_reaches_top_of_plot() {
        let scene = Scene::build(&sample(), &ChartConfig::default());
        assert_eq!(scene.y_max, 39_000_000.0);
        assert_eq!(scene.bars[0].y, 0.0);
        assert_eq!(scene.bars[0].height, scene.plot.height);
    }

    #[test]
    fn zero_population_has_zero_height() {
        let scene = Scene::build(&sample(), &ChartConfig::default());
        let empty = &scene.bars[3];
        assert_eq!(empty.height, 0.0);
        assert_eq!(empty.y, scene.plot.height);
    }

    #[test]
    fn bars_sit_on_the_baseline() {
        let scene = Scene::build(&sample(), &ChartConfig::default());
        for bar in &scene.bars {
            assert_eq!(bar.y + bar.height, scene.plot.height);
            assert_eq!(bar.width, 197.0);
        }
    }

    #[test]
    fn axes_layout() {
        let scene = Scene::build(&sample(), &ChartConfig::default());
        assert_eq!(scene.x_axis.class, "x axis");
        assert_eq!(scene.x_axis.offset, (0.0, 450.0));
        let labels: Vec<&str> = scene.x_axis.ticks.iter().map(|t| t.label.as_str()).collect();
        assert_eq!(labels, vec!["CA", "TX", "WY", "NW"]);
        assert_eq!(scene.x_axis.ticks[0].position, scene.bars[0].x + 98.0);

        assert_eq!(scene.y_axis.class, "y axis");
        let y_labels: Vec<&str> = scene.y_axis.ticks.iter().map(|t| t.label.as_str()).collect();
        assert_eq!(y_labels, vec!["0.0", "5.0M", "10M", "15M", "20M", "25M", "30M", "35M"]);
        assert_eq!(scene.y_axis.ticks[0].position, 450.0);
    }

    #[test]
    fn static_population_label() {
        let scene = Scene::build(&sample(), &ChartConfig::default());
        assert_eq!(scene.label.text, "Population");
        assert_eq!(scene.label.rotate, -90.0);
        assert_eq!(scene.label.y, 6.0);
        assert_eq!(scene.label.dy, "0.75em");
        assert_eq!(scene.label.text_anchor, "end");
    }

    #[test]
    fn click_navigates_to_counties() {
        let scene = Scene::build(&sample(), &ChartConfig::default());
        assert_eq!(
            scene.respond(&BarEvent::Click { index: 0 }),
            Effect::Navigate {
                href: "/counties/06/".to_string()
            }
        );
    }

    #[test]
    fn hover_shows_and_leave_hides_tooltip() {
        let scene = Scene::build(&sample(), &ChartConfig::default());
        match scene.respond(&BarEvent::PointerEnter { index: 0 }) {
            Effect::ShowTooltip { index, html } => {
                assert_eq!(index, 0);
                for expected in ["California", "39000000", "19000000", "20000000"] {
                    assert!(html.contains(expected), "{} missing from {}", expected, html);
                }
                assert!(html.contains("<span class=\"tooltip-title\">California</span>"));
            }
            other => panic!("expected tooltip, got {:?}", other),
        }
        assert_eq!(
            scene.respond(&BarEvent::PointerLeave { index: 0 }),
            Effect::HideTooltip
        );
    }

    #[test]
    fn unknown_bar_is_ignored() {
        let scene = Scene::build(&sample(), &ChartConfig::default());
        assert_eq!(scene.respond(&BarEvent::Click { index: 42 }), Effect::Ignore);
    }

    #[test]
    fn tooltip_title_is_escaped() {
        let tip = Tooltip {
            title: "<b>A&B</b>".to_string(),
            total: 3.0,
            male: 1.0,
            female: 2.0,
        };
        assert_eq!(
            tip.html(),
            "<div><span class=\"tooltip-title\">&lt;b&gt;A&amp;B&lt;/b&gt;</span><br/>Population:&nbsp;3 (M: 1, F: 2)</div>"
        );
    }

    #[test]
    fn events_decode_from_backend_json() {
        let event: BarEvent = serde_json::from_str(r#"{"kind":"pointer_enter","index":3}"#).unwrap();
        assert_eq!(event, BarEvent::PointerEnter { index: 3 });
        let effect = serde_json::to_string(&Effect::HideTooltip).unwrap();
        assert_eq!(effect, r#"{"effect":"hide_tooltip"}"#);
    }

    #[test]
    fn empty_dataset_has_no_bars() {
        let scene = Scene::build(&[], &ChartConfig::default());
        assert!(scene.bars.is_empty());
        assert!(scene.x_axis.ticks.is_empty());
        assert_eq!(scene.y_max, 0.0);
    }
}
