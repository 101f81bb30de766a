use chart_core::{Align, ApproxMeasurer, Baseline, DrawOp, LineCap, Scene, TextMeasurer};
use wasm_bindgen::prelude::*;
use web_sys::CanvasRenderingContext2d;

// Non-deprecated helpers to set canvas styles via property assignment.
pub fn set_fill_style(ctx: &CanvasRenderingContext2d, color: &str) {
    let _ = js_sys::Reflect::set(
        ctx.as_ref(),
        &JsValue::from_str("fillStyle"),
        &JsValue::from_str(color),
    );
}

pub fn set_stroke_style(ctx: &CanvasRenderingContext2d, color: &str) {
    let _ = js_sys::Reflect::set(
        ctx.as_ref(),
        &JsValue::from_str("strokeStyle"),
        &JsValue::from_str(color),
    );
}

/// Measures with the browser's own text metrics. The context font must
/// already be set to the chart font; `size` is ignored.
pub struct CanvasMeasurer<'a> {
    ctx: &'a CanvasRenderingContext2d,
}

impl<'a> CanvasMeasurer<'a> {
    pub fn new(ctx: &'a CanvasRenderingContext2d, css_font: &str) -> Self {
        ctx.set_font(css_font);
        CanvasMeasurer { ctx }
    }
}

impl TextMeasurer for CanvasMeasurer<'_> {
    fn text_width(&self, text: &str, size: f64) -> f64 {
        match self.ctx.measure_text(text) {
            Ok(m) => m.width(),
            Err(_) => ApproxMeasurer::default().text_width(text, size),
        }
    }
}

/// Paint a scene onto a 2D context sized to the scene's canvas.
pub fn paint_scene(ctx: &CanvasRenderingContext2d, scene: &Scene, css_font: &str) {
    let (w, h) = (scene.width as f64, scene.height as f64);
    ctx.clear_rect(0.0, 0.0, w, h);
    set_fill_style(ctx, &scene.background);
    ctx.fill_rect(0.0, 0.0, w, h);

    set_stroke_style(ctx, &scene.stroke_color);
    ctx.set_line_width(scene.stroke_width);
    ctx.set_line_cap(match scene.line_cap {
        LineCap::Butt => "butt",
        LineCap::Round => "round",
        LineCap::Square => "square",
    });
    ctx.begin_path();
    for (from, to) in scene.lines() {
        ctx.move_to(from.x, from.y);
        ctx.line_to(to.x, to.y);
    }
    ctx.stroke();

    ctx.set_font(css_font);
    set_fill_style(ctx, &scene.text_color);
    for op in scene.texts() {
        if let DrawOp::Text {
            text,
            at,
            align,
            baseline,
        } = op
        {
            ctx.set_text_align(match align {
                Align::Left => "left",
                Align::Right => "right",
            });
            ctx.set_text_baseline(match baseline {
                Baseline::Top => "top",
                Baseline::Bottom => "bottom",
            });
            let _ = ctx.fill_text(text, at.x, at.y);
        }
    }
}
