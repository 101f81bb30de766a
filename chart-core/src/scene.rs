use serde::{Deserialize, Serialize};

use crate::layout::{Align, Baseline, ChartGeometry, Point};
use crate::style::ChartStyle;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineCap {
    Butt,
    Round,
    Square,
}

/// One drawing primitive, in canvas pixels.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "lowercase")]
pub enum DrawOp {
    Line {
        from: Point,
        to: Point,
    },
    Text {
        text: String,
        at: Point,
        align: Align,
        baseline: Baseline,
    },
}

/// Everything a 2-D backend needs to paint a chart.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub width: u32,
    pub height: u32,
    pub background: String,
    pub stroke_color: String,
    pub stroke_width: f64,
    pub line_cap: LineCap,
    pub text_color: String,
    pub font_family: String,
    pub font_size: f64,
    pub ops: Vec<DrawOp>,
}

impl Scene {
    pub fn lines(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Line { from, to } => Some((*from, *to)),
            _ => None,
        })
    }

    pub fn texts(&self) -> impl Iterator<Item = &DrawOp> + '_ {
        self.ops
            .iter()
            .filter(|op| matches!(op, DrawOp::Text { .. }))
    }
}

/// Turn geometry into draw calls: rays from the center (top, bottom, left,
/// right; zero-length rays are skipped), then text runs.
pub fn render(geometry: &ChartGeometry, style: &ChartStyle) -> Scene {
    let c = geometry.center;
    let r = geometry.rays;
    let mut ops = Vec::with_capacity(4 + geometry.texts.len());
    let arms = [
        (r.top, Point { x: c.x, y: c.y - r.top }),
        (r.bottom, Point { x: c.x, y: c.y + r.bottom }),
        (r.left, Point { x: c.x - r.left, y: c.y }),
        (r.right, Point { x: c.x + r.right, y: c.y }),
    ];
    for (len, end) in arms {
        if len > 0.0 {
            ops.push(DrawOp::Line { from: c, to: end });
        }
    }
    for t in &geometry.texts {
        ops.push(DrawOp::Text {
            text: t.text.clone(),
            at: t.at,
            align: t.align,
            baseline: t.baseline,
        });
    }
    Scene {
        width: style.width,
        height: style.height,
        background: style.background.clone(),
        stroke_color: style.line_color.clone(),
        stroke_width: style.stroke_width,
        line_cap: style.line_cap,
        text_color: style.text_color.clone(),
        font_family: style.font_family.clone(),
        font_size: style.font_size,
        ops,
    }
}
