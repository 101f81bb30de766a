//! Chart defaults. Values are in canvas pixels unless noted otherwise.

pub const CANVAS_WIDTH: u32 = 600;
pub const CANVAS_HEIGHT: u32 = 400;
pub const FONT_SIZE: f64 = 64.0;
pub const FONT_FAMILY: &str = "serif";
/// Gap between an axis and the text next to it.
pub const PADDING: f64 = 15.0;
/// How far a horizontal ray extends past its text.
pub const LINE_OVERHANG: f64 = 15.0;
/// Ray length used for every arm when the chart is empty.
pub const DEFAULT_RAY_LEN: f64 = 100.0;
pub const STROKE_WIDTH: f64 = 4.0;
/// Pulls text back toward the horizontal axis after padding.
pub const BASELINE_NUDGE: f64 = 5.0;
/// Em-box ascent and descent as fractions of the font size.
pub const ASCENT: f64 = 0.88;
pub const DESCENT: f64 = 0.12;
