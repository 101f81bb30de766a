use crate::layout::{Align, Baseline};
use crate::scene::{DrawOp, LineCap, Scene};

fn svg_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

fn cap_name(cap: LineCap) -> &'static str {
    match cap {
        LineCap::Butt => "butt",
        LineCap::Round => "round",
        LineCap::Square => "square",
    }
}

/// Serialize a scene as a standalone SVG document.
///
/// Text anchors name an em-box edge; SVG positions text on its alphabetic
/// baseline, so `y` is shifted by the ascent or descent.
pub fn scene_to_svg(scene: &Scene, ascent: f64, descent: f64) -> String {
    let mut s = String::new();
    s.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    s.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{}\" height=\"{}\" viewBox=\"0 0 {} {}\">\n",
        scene.width, scene.height, scene.width, scene.height
    ));
    s.push_str(&format!(
        "<rect x=\"0\" y=\"0\" width=\"100%\" height=\"100%\" fill=\"{}\"/>\n",
        svg_escape(&scene.background)
    ));

    let mut d = String::new();
    for (from, to) in scene.lines() {
        if !d.is_empty() {
            d.push(' ');
        }
        d.push_str(&format!(
            "M {:.2} {:.2} L {:.2} {:.2}",
            from.x, from.y, to.x, to.y
        ));
    }
    if !d.is_empty() {
        s.push_str(&format!(
            "<path d=\"{}\" fill=\"none\" stroke=\"{}\" stroke-width=\"{}\" stroke-linecap=\"{}\"/>\n",
            d,
            svg_escape(&scene.stroke_color),
            scene.stroke_width,
            cap_name(scene.line_cap)
        ));
    }

    for op in &scene.ops {
        let DrawOp::Text {
            text,
            at,
            align,
            baseline,
        } = op
        else {
            continue;
        };
        let anchor = match align {
            Align::Left => "start",
            Align::Right => "end",
        };
        let y = match baseline {
            Baseline::Top => at.y + ascent * scene.font_size,
            Baseline::Bottom => at.y - descent * scene.font_size,
        };
        s.push_str(&format!(
            "<text x=\"{:.2}\" y=\"{:.2}\" text-anchor=\"{}\" font-family=\"{}\" font-size=\"{}\" fill=\"{}\">{}</text>\n",
            at.x,
            y,
            anchor,
            svg_escape(&scene.font_family),
            scene.font_size,
            svg_escape(&scene.text_color),
            svg_escape(text)
        ));
    }
    s.push_str("</svg>\n");
    s
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::layout;
    use crate::scene::render;
    use crate::style::ChartStyle;
    use palmer_core::QuadrantInput;

    fn svg_for(input: &QuadrantInput) -> String {
        let style = ChartStyle::default();
        let m = |t: &str, size: f64| t.chars().count() as f64 * size * 0.5;
        let scene = render(&layout(input, &m, &style), &style);
        scene_to_svg(&scene, style.ascent, style.descent)
    }

    #[test]
    fn empty_chart_has_cross_and_no_text() {
        let svg = svg_for(&QuadrantInput::default());
        assert!(svg.starts_with("<?xml"));
        assert!(svg.contains("width=\"600\" height=\"400\""));
        assert!(svg.contains("M 300.00 200.00 L 300.00 100.00"));
        assert!(svg.contains("stroke-linecap=\"square\""));
        assert!(!svg.contains("<text"));
    }

    #[test]
    fn text_runs_are_anchored_and_shifted() {
        let svg = svg_for(&QuadrantInput::new("654", "", "", "A"));
        // upper-right: bottom edge at 190, descent 0.12 * 64
        assert!(svg.contains("<text x=\"285.00\" y=\"182.32\" text-anchor=\"end\""));
        // lower-left: top edge at 210, ascent 0.88 * 64
        assert!(svg.contains("<text x=\"315.00\" y=\"266.32\" text-anchor=\"start\""));
        assert!(svg.contains(">654</text>"));
    }

    #[test]
    fn line_cap_follows_style() {
        let mut style = ChartStyle::default();
        style.line_cap = crate::scene::LineCap::Butt;
        let m = |t: &str, size: f64| t.chars().count() as f64 * size * 0.5;
        let scene = render(&layout(&QuadrantInput::default(), &m, &style), &style);
        let svg = scene_to_svg(&scene, style.ascent, style.descent);
        assert!(svg.contains("stroke-linecap=\"butt\""));
    }

    #[test]
    fn output_is_byte_identical_across_runs() {
        let input = QuadrantInput::new("87", "12", "Ⅴ", "");
        assert_eq!(svg_for(&input), svg_for(&input));
    }

    #[test]
    fn escapes_markup() {
        assert_eq!(svg_escape("a<b>&\""), "a&lt;b&gt;&amp;&quot;");
    }
}
