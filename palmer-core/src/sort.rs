use crate::quadrant::{Quadrant, Side};
use crate::symbol::rank_of_char;

/// Order the symbols of one quadrant for display next to the chart axes.
///
/// Right-side quadrants are drawn right-aligned against the vertical axis, so
/// they read distal to mesial (descending rank). Left-side quadrants read
/// mesial to distal. `Unknown` has no axis and uses ascending order.
///
/// Each `char` is one unit. Equal ranks keep their input order.
pub fn sort_quadrant(raw: &str, quadrant: Quadrant) -> String {
    if raw.is_empty() {
        return String::new();
    }
    let mut units: Vec<char> = raw.chars().collect();
    match quadrant.side() {
        Some(Side::Right) => units.sort_by_key(|c| std::cmp::Reverse(rank_of_char(*c))),
        Some(Side::Left) | None => units.sort_by_key(|c| rank_of_char(*c)),
    }
    units.into_iter().collect()
}
