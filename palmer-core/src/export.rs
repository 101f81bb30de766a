use crate::compose::compose;
use crate::finding::Finding;

/// Stem used when a chart has no teeth.
pub const EMPTY_CHART_STEM: &str = "空牙位图";
/// Longest stem, in characters.
pub const MAX_STEM_CHARS: usize = 50;

/// File name stem for an exported chart, derived from its description:
/// whitespace is dropped, every other non-alphanumeric character (the
/// description's separators, and anything path-like an unknown symbol
/// carries) becomes `_`, and the result is cut to [`MAX_STEM_CHARS`]
/// characters.
pub fn export_file_stem(findings: &[Finding]) -> String {
    if findings.is_empty() {
        return EMPTY_CHART_STEM.to_string();
    }
    compose(findings)
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| if c.is_alphanumeric() { c } else { '_' })
        .take(MAX_STEM_CHARS)
        .collect()
}
