use std::collections::BTreeMap;

use crate::finding::Finding;
use crate::quadrant::Quadrant;

/// Joins tooth names within one quadrant.
pub const ENUMERATION_SEPARATOR: &str = "、";
/// Joins quadrant clauses.
pub const CLAUSE_SEPARATOR: &str = "，";
/// Prefix for findings whose quadrant is unknown.
pub const UNKNOWN_REGION_LABEL: &str = "未知区域";

/// Merge findings into one sentence, e.g. `左上第一磨牙、第二磨牙，右下中切牙`.
///
/// Quadrants appear as UR, UL, LR, LL, then unknown. Teeth within a quadrant
/// run mesial to distal whatever the side; ties break on the symbol text.
/// The quadrant label is written once per clause.
pub fn compose(findings: &[Finding]) -> String {
    let mut groups: BTreeMap<usize, (Quadrant, Vec<&Finding>)> = BTreeMap::new();
    for f in findings {
        groups
            .entry(f.quadrant().canonical_index())
            .or_insert_with(|| (f.quadrant(), Vec::new()))
            .1
            .push(f);
    }

    let clauses: Vec<String> = groups
        .into_values()
        .map(|(quadrant, mut teeth)| {
            teeth.sort_by(|a, b| {
                a.rank()
                    .cmp(&b.rank())
                    .then_with(|| a.symbol().cmp(b.symbol()))
            });
            let label = match quadrant {
                Quadrant::Unknown => UNKNOWN_REGION_LABEL,
                q => q.label(),
            };
            let names: Vec<&str> = teeth.iter().map(|f| f.tooth_name()).collect();
            format!("{}{}", label, names.join(ENUMERATION_SEPARATOR))
        })
        .collect();
    clauses.join(CLAUSE_SEPARATOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn f(s: &str, q: Quadrant) -> Finding {
        Finding::new(s, q)
    }

    #[test]
    fn empty_is_empty() {
        assert_eq!(compose(&[]), "");
    }

    #[test]
    fn groups_in_canonical_order() {
        let text = compose(&[
            f("1", Quadrant::LowerRight),
            f("7", Quadrant::UpperLeft),
            f("6", Quadrant::UpperLeft),
        ]);
        assert_eq!(text, "左上第一磨牙、第二磨牙，右下中切牙");
    }

    #[test]
    fn right_side_still_reads_mesial_first() {
        let text = compose(&[f("5", Quadrant::UpperRight), f("4", Quadrant::UpperRight)]);
        assert_eq!(text, "右上第一前磨牙、第二前磨牙");
    }

    #[test]
    fn unknown_quadrant_goes_last() {
        let text = compose(&[f("2", Quadrant::Unknown), f("8", Quadrant::LowerLeft)]);
        assert_eq!(text, "左下第三磨牙，未知区域侧切牙");
    }

    #[test]
    fn same_rank_breaks_on_symbol() {
        let text = compose(&[f("I", Quadrant::UpperLeft), f("A", Quadrant::UpperLeft)]);
        assert_eq!(text, "左上乳中切牙、乳中切牙");
        let ul = |s: &str| f(s, Quadrant::UpperLeft);
        let a = compose(&[ul("Ⅰ"), ul("A"), ul("B")]);
        let b = compose(&[ul("B"), ul("A"), ul("Ⅰ")]);
        assert_eq!(a, b);
    }

    #[test]
    fn unmapped_symbol_names_itself() {
        let text = compose(&[f("X", Quadrant::UpperRight), f("1", Quadrant::UpperRight)]);
        assert_eq!(text, "右上中切牙、X");
    }
}
