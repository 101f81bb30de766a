//! Browser bindings: draw Palmer charts on a canvas, compose descriptions,
//! and export charts and the correction history.

mod canvas;
mod utils;

use chart_core::{ChartStyle, build_scene};
use palmer_core::history::dataset_file_name;
use palmer_core::{
    AnalysisResult, Finding, HistoryLog, JawPlacement, Quadrant, QuadrantInput, compose,
    export_file_stem,
};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::canvas::{CanvasMeasurer, paint_scene};
use crate::utils::{document, js_err, log, save_data_url, save_text_as_file};

fn parse_input(json: &str) -> Result<QuadrantInput, JsValue> {
    serde_json::from_str(json).map_err(js_err)
}

type Canvas2d = (HtmlCanvasElement, CanvasRenderingContext2d);

fn canvas_and_context(id: &str) -> Result<Canvas2d, JsValue> {
    let canvas = document()?
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("no element #{id}")))?
        .dyn_into::<HtmlCanvasElement>()?;
    let ctx = canvas
        .get_context("2d")?
        .ok_or("no 2d context")?
        .dyn_into::<CanvasRenderingContext2d>()?;
    Ok((canvas, ctx))
}

/// Display order of one quadrant's raw symbols.
#[wasm_bindgen]
pub fn sort_quadrant(quadrant: &str, text: &str) -> Result<String, JsValue> {
    let q: Quadrant = quadrant.parse().map_err(js_err)?;
    Ok(palmer_core::sort_quadrant(text, q))
}

/// Clean a manual entry before storing it.
#[wasm_bindgen]
pub fn sanitize_entry(raw: &str) -> String {
    palmer_core::sanitize_entry(raw)
}

/// Combined description of a JSON array of findings.
#[wasm_bindgen]
pub fn compose_description(findings_json: &str) -> Result<String, JsValue> {
    let findings: Vec<Finding> = serde_json::from_str(findings_json).map_err(js_err)?;
    Ok(compose(&findings))
}

/// Description of a recognition result with the chosen jaw placement.
#[wasm_bindgen]
pub fn describe_result(result_json: &str, lower_jaw: bool) -> Result<String, JsValue> {
    let result: AnalysisResult = serde_json::from_str(result_json).map_err(js_err)?;
    let jaw = if lower_jaw {
        JawPlacement::Lower
    } else {
        JawPlacement::Upper
    };
    Ok(result.active_description(jaw))
}

/// Description of quadrant input JSON (`{"UR": "...", ...}`).
#[wasm_bindgen]
pub fn describe_chart(input_json: &str) -> Result<String, JsValue> {
    Ok(compose(&parse_input(input_json)?.findings()))
}

/// Lay out and paint a chart on the canvas with the given id. Text is
/// measured with the browser's metrics so the rays fit the rendered glyphs.
#[wasm_bindgen]
pub fn draw_chart(canvas_id: &str, input_json: &str) -> Result<(), JsValue> {
    let input = parse_input(input_json)?;
    let (canvas, ctx) = canvas_and_context(canvas_id)?;
    let style = ChartStyle::default();
    canvas.set_width(style.width);
    canvas.set_height(style.height);

    let font = style.css_font();
    let measurer = CanvasMeasurer::new(&ctx, &font);
    let scene = build_scene(&input, &measurer, &style);
    paint_scene(&ctx, &scene, &font);
    Ok(())
}

/// Download the canvas as PNG, named after the chart's description.
#[wasm_bindgen]
pub fn export_chart_png(canvas_id: &str, input_json: &str) -> Result<String, JsValue> {
    let input = parse_input(input_json)?;
    let (canvas, _) = canvas_and_context(canvas_id)?;
    let filename = format!("{}.png", export_file_stem(&input.sorted().findings()));
    let url = canvas.to_data_url_with_type("image/png")?;
    save_data_url(&document()?, &filename, &url)?;
    log(&format!("exported {filename}"));
    Ok(filename)
}

/// Download the correction history as a training data set.
#[wasm_bindgen]
pub fn export_history(history_json: &str, date: &str) -> Result<String, JsValue> {
    let history = HistoryLog::from_json(history_json).map_err(js_err)?;
    if history.is_empty() {
        return Err(JsValue::from_str("history is empty"));
    }
    let filename = dataset_file_name(date);
    save_text_as_file(&document()?, &filename, &history.to_json().map_err(js_err)?)?;
    Ok(filename)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn describes_parser_output() {
        let text = describe_chart(r#"{"UR":"45","LL":"a"}"#).unwrap();
        assert_eq!(text, "右上第一前磨牙、第二前磨牙，左下乳中切牙");
    }

    #[test]
    fn lower_jaw_applies_only_without_line() {
        let json = r#"{"findings":[{"toothNumber":"6","quadrant":"UR"}],"missingHorizontalLine":true}"#;
        assert_eq!(describe_result(json, true).unwrap(), "右下第一磨牙");
        assert_eq!(describe_result(json, false).unwrap(), "右上第一磨牙");
    }
}
