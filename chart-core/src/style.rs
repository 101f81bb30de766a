use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::error::ChartError;
use crate::layout::Point;
use crate::scene::LineCap;

/// Every constant the layout and render steps use.
///
/// Missing keys in a TOML style file keep their defaults, so a file only
/// needs the values it changes:
///
/// ```toml
/// font_size = 48.0
/// line_color = "#1e40af"
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartStyle {
    pub width: u32,
    pub height: u32,
    pub font_size: f64,
    pub font_family: String,
    pub padding: f64,
    pub overhang: f64,
    pub default_len: f64,
    pub stroke_width: f64,
    pub line_cap: LineCap,
    pub baseline_nudge: f64,
    pub ascent: f64,
    pub descent: f64,
    pub background: String,
    pub line_color: String,
    pub text_color: String,
}

impl Default for ChartStyle {
    fn default() -> Self {
        ChartStyle {
            width: CANVAS_WIDTH,
            height: CANVAS_HEIGHT,
            font_size: FONT_SIZE,
            font_family: FONT_FAMILY.to_string(),
            padding: PADDING,
            overhang: LINE_OVERHANG,
            default_len: DEFAULT_RAY_LEN,
            stroke_width: STROKE_WIDTH,
            line_cap: LineCap::Square,
            baseline_nudge: BASELINE_NUDGE,
            ascent: ASCENT,
            descent: DESCENT,
            background: "#ffffff".to_string(),
            line_color: "#000000".to_string(),
            text_color: "#000000".to_string(),
        }
    }
}

impl ChartStyle {
    pub fn from_toml_str(text: &str) -> Result<Self, ChartError> {
        Ok(toml::from_str(text)?)
    }

    pub fn center(&self) -> Point {
        Point {
            x: self.width as f64 / 2.0,
            y: self.height as f64 / 2.0,
        }
    }

    /// Length of the vertical rays when their half has text.
    pub fn vertical_ray(&self) -> f64 {
        self.font_size + self.padding
    }

    /// CSS-style font shorthand, e.g. `64px serif`.
    pub fn css_font(&self) -> String {
        format!("{}px {}", self.font_size, self.font_family)
    }
}
