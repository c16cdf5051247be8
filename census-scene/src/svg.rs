//! Static SVG backend.
//!
//! Draws the precomputed scene through a plotters `SVGBackend`. Nothing is
//! re-scaled here: bars, ticks and the axis label are placed at the pixel
//! positions `Scene::build` already worked out, shifted by the margin.

use log::error;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use crate::renderer::SceneBackend;
use crate::scene::{AxisOrient, AxisSpec, Scene};

const TICK_SIZE: i32 = 6;
const TICK_PADDING: i32 = 3;
const FONT: (&str, f64) = ("sans-serif", 10.0);
const BAR_COLOR: RGBColor = RGBColor(70, 130, 180);

/// Collects the drawn scene as SVG markup.
#[derive(Debug, Default, Clone)]
pub struct SvgDocument {
    markup: String,
}

impl SvgDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// The document, or an empty string if nothing was drawn.
    pub fn as_str(&self) -> &str {
        &self.markup
    }

    pub fn into_string(self) -> String {
        self.markup
    }
}

impl SceneBackend for SvgDocument {
    fn draw(&mut self, scene: &Scene) {
        match to_svg(scene) {
            Ok(markup) => self.markup = markup,
            Err(e) => {
                error!("Failed to draw SVG: {}", e);
                self.markup.clear();
            }
        }
    }
}

/// Render `scene` as a standalone SVG document.
pub fn to_svg(scene: &Scene) -> Result<String, String> {
    let mut markup = String::new();
    {
        let size = (px(scene.width).max(0) as u32, px(scene.height).max(0) as u32);
        let root = SVGBackend::with_string(&mut markup, size).into_drawing_area();
        draw_scene(&root, scene).map_err(|e| e.to_string())?;
        root.present().map_err(|e| e.to_string())?;
    }
    Ok(markup)
}

fn px(v: f64) -> i32 {
    v.round() as i32
}

fn draw_scene<DB: DrawingBackend>(root: &DrawingArea<DB, Shift>, scene: &Scene) -> DrawResult<(), DB> {
    let origin = (px(scene.margin.left), px(scene.margin.top));

    draw_axis(root, origin, &scene.x_axis, px(scene.plot.width))?;
    draw_axis(root, origin, &scene.y_axis, px(scene.plot.height))?;

    for bar in &scene.bars {
        let x0 = origin.0 + px(bar.x);
        let y0 = origin.1 + px(bar.y);
        root.draw(&Rectangle::new(
            [(x0, y0), (x0 + px(bar.width), y0 + px(bar.height))],
            BAR_COLOR.filled(),
        ))?;
    }

    // rotate(-90) about the group origin puts the label's anchor at (y, 0).
    let label_style = TextStyle::from(FONT.into_font())
        .pos(Pos::new(HPos::Right, VPos::Top))
        .transform(FontTransform::Rotate270);
    root.draw(&Text::new(
        scene.label.text.as_str(),
        (origin.0 + px(scene.label.y), origin.1),
        label_style,
    ))?;
    Ok(())
}

fn draw_axis<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    origin: (i32, i32),
    axis: &AxisSpec,
    extent: i32,
) -> DrawResult<(), DB> {
    let (ox, oy) = (origin.0 + px(axis.offset.0), origin.1 + px(axis.offset.1));

    match axis.orient {
        AxisOrient::Bottom => {
            root.draw(&PathElement::new(
                vec![
                    (ox, oy + TICK_SIZE),
                    (ox, oy),
                    (ox + extent, oy),
                    (ox + extent, oy + TICK_SIZE),
                ],
                BLACK,
            ))?;
            let style = TextStyle::from(FONT.into_font()).pos(Pos::new(HPos::Center, VPos::Top));
            for tick in &axis.ticks {
                let x = ox + px(tick.position);
                root.draw(&PathElement::new(vec![(x, oy), (x, oy + TICK_SIZE)], BLACK))?;
                root.draw(&Text::new(
                    tick.label.as_str(),
                    (x, oy + TICK_SIZE + TICK_PADDING),
                    style.clone(),
                ))?;
            }
        }
        AxisOrient::Left => {
            root.draw(&PathElement::new(
                vec![
                    (ox - TICK_SIZE, oy + extent),
                    (ox, oy + extent),
                    (ox, oy),
                    (ox - TICK_SIZE, oy),
                ],
                BLACK,
            ))?;
            let style = TextStyle::from(FONT.into_font()).pos(Pos::new(HPos::Right, VPos::Center));
            for tick in &axis.ticks {
                let y = oy + px(tick.position);
                root.draw(&PathElement::new(vec![(ox - TICK_SIZE, y), (ox, y)], BLACK))?;
                root.draw(&Text::new(
                    tick.label.as_str(),
                    (ox - TICK_SIZE - TICK_PADDING, y),
                    style.clone(),
                ))?;
            }
        }
    }
    Ok(())
}
