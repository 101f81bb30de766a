//! Palmer cross-chart layout and rendering.
//!
//! Four quadrant strings go through [`layout`] to a [`ChartGeometry`], then
//! [`render`] to a backend-neutral [`Scene`]. Scenes serialize to SVG and
//! rasterize to PNG with the embedded font.

pub mod constants;
pub mod error;
pub mod layout;
pub mod measure;
pub mod raster;
pub mod scene;
pub mod style;
pub mod svg;

use palmer_core::QuadrantInput;

pub use error::ChartError;
pub use layout::{Align, Baseline, ChartGeometry, Point, Rays, TextAnchor, layout, layout_raw};
pub use measure::{ApproxMeasurer, FontMeasurer, TextMeasurer};
pub use raster::{encode_png_deterministic, rasterize_svg, scene_to_png};
pub use scene::{DrawOp, LineCap, Scene, render};
pub use style::ChartStyle;
pub use svg::scene_to_svg;

/// Raw quadrant input to a scene: sort each quadrant, lay out, render.
pub fn build_scene<M>(raw: &QuadrantInput, measurer: &M, style: &ChartStyle) -> Scene
where
    M: TextMeasurer + ?Sized,
{
    render(&layout_raw(raw, measurer, style), style)
}

/// Raw quadrant input to an SVG document.
pub fn build_svg<M>(raw: &QuadrantInput, measurer: &M, style: &ChartStyle) -> String
where
    M: TextMeasurer + ?Sized,
{
    scene_to_svg(&build_scene(raw, measurer, style), style.ascent, style.descent)
}

/// Raw quadrant input to PNG bytes.
pub fn build_png<M>(
    raw: &QuadrantInput,
    measurer: &M,
    style: &ChartStyle,
) -> Result<Vec<u8>, ChartError>
where
    M: TextMeasurer + ?Sized,
{
    scene_to_png(&build_scene(raw, measurer, style), style)
}
