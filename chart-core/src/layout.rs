//! Cross-chart layout.
//!
//! A Palmer chart is a cross centered on the canvas: the vertical axis splits
//! the patient's right (drawn on the viewer's left) from the left, the
//! horizontal axis splits upper from lower jaw. Each quadrant's text hugs the
//! intersection. Ray lengths follow the text so the cross is only as large as
//! its content.

use log::debug;
use palmer_core::{Level, Quadrant, QuadrantInput, Side};
use serde::{Deserialize, Serialize};

use crate::measure::TextMeasurer;
use crate::style::ChartStyle;

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Horizontal alignment of a text run relative to its anchor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    Left,
    Right,
}

/// Which edge of the em box sits on the anchor's y.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Baseline {
    Top,
    Bottom,
}

/// Lengths of the four arms of the cross, measured from the center.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rays {
    pub top: f64,
    pub bottom: f64,
    pub left: f64,
    pub right: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TextAnchor {
    pub quadrant: Quadrant,
    pub text: String,
    pub align: Align,
    pub baseline: Baseline,
    pub at: Point,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChartGeometry {
    pub center: Point,
    pub rays: Rays,
    pub texts: Vec<TextAnchor>,
}

/// Lay out four quadrant strings that are already in display order.
///
/// Horizontal rays reach past the widest text on their side by padding plus
/// overhang; vertical rays are one line tall. A ray with no text on its side
/// has zero length, except that a completely empty chart draws every ray at
/// the default length so the cross stays visible.
pub fn layout<M>(texts: &QuadrantInput, measurer: &M, style: &ChartStyle) -> ChartGeometry
where
    M: TextMeasurer + ?Sized,
{
    let center = style.center();
    let width = |q: Quadrant| {
        let t = texts.get(q);
        if t.is_empty() {
            0.0
        } else {
            measurer.text_width(t, style.font_size)
        }
    };
    let has = |q: Quadrant| !texts.get(q).is_empty();
    let fallback = if texts.is_empty() { style.default_len } else { 0.0 };

    let horizontal = |a: Quadrant, b: Quadrant| {
        if has(a) || has(b) {
            width(a).max(width(b)) + style.padding + style.overhang
        } else {
            fallback
        }
    };
    let vertical = |a: Quadrant, b: Quadrant| {
        if has(a) || has(b) {
            style.vertical_ray()
        } else {
            fallback
        }
    };
    let rays = Rays {
        top: vertical(Quadrant::UpperRight, Quadrant::UpperLeft),
        bottom: vertical(Quadrant::LowerRight, Quadrant::LowerLeft),
        left: horizontal(Quadrant::UpperRight, Quadrant::LowerRight),
        right: horizontal(Quadrant::UpperLeft, Quadrant::LowerLeft),
    };

    let texts: Vec<TextAnchor> = Quadrant::CANONICAL
        .into_iter()
        .filter(|q| has(*q))
        .map(|q| anchor_for(q, texts.get(q), center, style))
        .collect();

    debug!(
        "layout: rays t={:.1} b={:.1} l={:.1} r={:.1}, {} text runs",
        rays.top,
        rays.bottom,
        rays.left,
        rays.right,
        texts.len()
    );
    ChartGeometry {
        center,
        rays,
        texts,
    }
}

fn anchor_for(q: Quadrant, text: &str, center: Point, style: &ChartStyle) -> TextAnchor {
    let (align, x) = match q.side() {
        Some(Side::Left) => (Align::Left, center.x + style.padding),
        _ => (Align::Right, center.x - style.padding),
    };
    let (baseline, y) = match q.level() {
        Some(Level::Lower) => (
            Baseline::Top,
            center.y + style.padding - style.baseline_nudge,
        ),
        _ => (
            Baseline::Bottom,
            center.y - style.padding + style.baseline_nudge,
        ),
    };
    TextAnchor {
        quadrant: q,
        text: text.to_string(),
        align,
        baseline,
        at: Point { x, y },
    }
}

/// Sort raw quadrant input for display, then lay it out.
pub fn layout_raw<M>(raw: &QuadrantInput, measurer: &M, style: &ChartStyle) -> ChartGeometry
where
    M: TextMeasurer + ?Sized,
{
    layout(&raw.sorted(), measurer, style)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn half_em(t: &str, size: f64) -> f64 {
        t.chars().count() as f64 * size * 0.5
    }

    #[test]
    fn empty_chart_draws_default_cross() {
        let style = ChartStyle::default();
        let g = layout(&QuadrantInput::default(), &half_em, &style);
        let d = style.default_len;
        assert_eq!(
            g.rays,
            Rays {
                top: d,
                bottom: d,
                left: d,
                right: d
            }
        );
        assert!(g.texts.is_empty());
    }

    #[test]
    fn right_side_only_extends_left_ray() {
        let style = ChartStyle::default();
        let input = QuadrantInput::new("6", "", "6", "");
        let g = layout(&input, &half_em, &style);
        assert_eq!(g.rays.right, 0.0);
        assert_eq!(g.rays.left, 32.0 + 15.0 + 15.0);
        assert!(g.rays.left > g.rays.right);
        assert_eq!(g.rays.top, style.vertical_ray());
        assert_eq!(g.rays.bottom, style.vertical_ray());
        assert_eq!(g.texts.len(), 2);
    }

    #[test]
    fn upper_only_has_no_bottom_ray() {
        let style = ChartStyle::default();
        let g = layout(&QuadrantInput::new("", "45", "", ""), &half_em, &style);
        assert_eq!(g.rays.top, 79.0);
        assert_eq!(g.rays.bottom, 0.0);
        assert_eq!(g.rays.left, 0.0);
        assert_eq!(g.rays.right, 64.0 + 30.0);
    }

    #[test]
    fn horizontal_rays_follow_widest_text() {
        let style = ChartStyle::default();
        let g = layout(&QuadrantInput::new("1", "", "87654321", ""), &half_em, &style);
        assert_eq!(g.rays.left, 8.0 * 32.0 + 30.0);
    }

    #[test]
    fn anchors_hug_the_center() {
        let style = ChartStyle::default();
        let g = layout(&QuadrantInput::new("1", "2", "3", "4"), &half_em, &style);
        let by_q = |q: Quadrant| g.texts.iter().find(|t| t.quadrant == q).unwrap();

        let ur = by_q(Quadrant::UpperRight);
        assert_eq!((ur.align, ur.baseline), (Align::Right, Baseline::Bottom));
        assert_eq!(ur.at, Point { x: 285.0, y: 190.0 });

        let ul = by_q(Quadrant::UpperLeft);
        assert_eq!((ul.align, ul.baseline), (Align::Left, Baseline::Bottom));
        assert_eq!(ul.at, Point { x: 315.0, y: 190.0 });

        let lr = by_q(Quadrant::LowerRight);
        assert_eq!((lr.align, lr.baseline), (Align::Right, Baseline::Top));
        assert_eq!(lr.at, Point { x: 285.0, y: 210.0 });

        let ll = by_q(Quadrant::LowerLeft);
        assert_eq!((ll.align, ll.baseline), (Align::Left, Baseline::Top));
        assert_eq!(ll.at, Point { x: 315.0, y: 210.0 });
    }

    #[test]
    fn layout_does_not_resort_but_layout_raw_does() {
        let style = ChartStyle::default();
        let raw = QuadrantInput::new("456", "", "", "");
        assert_eq!(layout(&raw, &half_em, &style).texts[0].text, "456");
        assert_eq!(layout_raw(&raw, &half_em, &style).texts[0].text, "654");
    }

    #[test]
    fn layout_is_repeatable() {
        let style = ChartStyle::default();
        let input = QuadrantInput::new("ⅤⅣ", "67", "", "A");
        assert_eq!(
            layout(&input, &half_em, &style),
            layout(&input, &half_em, &style)
        );
    }
}
