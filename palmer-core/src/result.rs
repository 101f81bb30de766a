use log::debug;
use serde::{Deserialize, Serialize};

use crate::compose::compose;
use crate::error::NotationError;
use crate::finding::Finding;
use crate::quadrant::Quadrant;

/// What the recognition service returns for one image.
///
/// `combined_description` is kept as received; callers display
/// [`AnalysisResult::active_description`], which is always recomposed.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    #[serde(default)]
    pub findings: Vec<Finding>,
    #[serde(default)]
    pub combined_description: String,
    /// The image showed only the vertical line, so upper and lower jaw could
    /// not be told apart.
    #[serde(default)]
    pub missing_horizontal_line: bool,
    #[serde(default)]
    pub confidence: String,
    #[serde(default)]
    pub reasoning: String,
}

/// Jaw chosen by the user for a result without a horizontal line.
///
/// Findings are read as upper jaw unless the user switches to `Lower`; the
/// switch moves every finding to the opposite jaw on the same side.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum JawPlacement {
    #[default]
    Upper,
    Lower,
}

impl AnalysisResult {
    /// Findings with the jaw placement applied. Placement only matters when
    /// the horizontal line is missing.
    pub fn active_findings(&self, jaw: JawPlacement) -> Vec<Finding> {
        if self.missing_horizontal_line && jaw == JawPlacement::Lower {
            self.findings.iter().map(Finding::with_opposite_jaw).collect()
        } else {
            self.findings.clone()
        }
    }

    pub fn active_description(&self, jaw: JawPlacement) -> String {
        compose(&self.active_findings(jaw))
    }
}

/// Edits applied to a copy of a result's findings until saved or cancelled.
#[derive(Clone, Debug)]
pub struct CorrectionSession {
    original: AnalysisResult,
    findings: Vec<Finding>,
}

impl CorrectionSession {
    pub fn begin(result: &AnalysisResult) -> Self {
        CorrectionSession {
            original: result.clone(),
            findings: result.findings.clone(),
        }
    }

    pub fn findings(&self) -> &[Finding] {
        &self.findings
    }

    /// Description of the findings as currently edited.
    pub fn description(&self) -> String {
        compose(&self.findings)
    }

    fn get_mut(&mut self, index: usize) -> Result<&mut Finding, NotationError> {
        let len = self.findings.len();
        self.findings
            .get_mut(index)
            .ok_or(NotationError::IndexOutOfRange { index, len })
    }

    pub fn set_symbol(&mut self, index: usize, symbol: &str) -> Result<(), NotationError> {
        self.get_mut(index)?.set_symbol(symbol);
        Ok(())
    }

    pub fn set_quadrant(&mut self, index: usize, quadrant: Quadrant) -> Result<(), NotationError> {
        self.get_mut(index)?.set_quadrant(quadrant);
        Ok(())
    }

    pub fn remove(&mut self, index: usize) -> Result<Finding, NotationError> {
        if index >= self.findings.len() {
            return Err(NotationError::IndexOutOfRange {
                index,
                len: self.findings.len(),
            });
        }
        Ok(self.findings.remove(index))
    }

    /// Append a placeholder finding (upper-right central incisor) for the
    /// user to edit.
    pub fn add(&mut self) -> &mut Finding {
        self.findings.push(Finding::new("1", Quadrant::UpperRight));
        let last = self.findings.len() - 1;
        &mut self.findings[last]
    }

    /// Finish editing. The description is recomposed and the missing-line
    /// flag cleared, since the user has placed every tooth explicitly.
    pub fn save(self) -> AnalysisResult {
        let combined_description = compose(&self.findings);
        debug!(
            "correction saved: {} findings, {:?}",
            self.findings.len(),
            combined_description
        );
        AnalysisResult {
            findings: self.findings,
            combined_description,
            missing_horizontal_line: false,
            ..self.original
        }
    }

    /// Drop the edits and hand back the result as it was.
    pub fn cancel(self) -> AnalysisResult {
        self.original
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> AnalysisResult {
        AnalysisResult {
            findings: vec![
                Finding::new("7", Quadrant::UpperLeft),
                Finding::new("6", Quadrant::UpperLeft),
            ],
            combined_description: "左上第七磨牙、第六磨牙".to_string(),
            missing_horizontal_line: true,
            confidence: "中".to_string(),
            reasoning: String::new(),
        }
    }

    #[test]
    fn upper_jaw_is_the_default() {
        let r = sample();
        assert_eq!(JawPlacement::default(), JawPlacement::Upper);
        assert_eq!(
            r.active_description(JawPlacement::default()),
            "左上第一磨牙、第二磨牙"
        );
    }

    #[test]
    fn lower_jaw_swaps_quadrants() {
        let r = sample();
        assert_eq!(r.active_description(JawPlacement::Lower), "左下第一磨牙、第二磨牙");
        let swapped = r.active_findings(JawPlacement::Lower);
        assert_eq!(swapped[0].description(), "左下第二磨牙");
    }

    #[test]
    fn placement_ignored_when_line_present() {
        let mut r = sample();
        r.missing_horizontal_line = false;
        assert_eq!(r.active_findings(JawPlacement::Lower), r.findings);
    }

    #[test]
    fn correction_session_edits_and_saves() {
        let r = sample();
        let mut s = CorrectionSession::begin(&r);
        s.set_quadrant(0, Quadrant::LowerRight).unwrap();
        s.set_symbol(1, "e").unwrap();
        s.add();
        assert_eq!(s.findings().len(), 3);
        assert_eq!(s.description(), "右上中切牙，左上第二乳磨牙，右下第二磨牙");
        assert!(s.set_symbol(5, "1").is_err());
        let saved = s.save();
        assert!(!saved.missing_horizontal_line);
        assert_eq!(saved.confidence, "中");
        assert_eq!(saved.combined_description, compose(&saved.findings));
    }

    #[test]
    fn correction_session_cancel_restores() {
        let r = sample();
        let mut s = CorrectionSession::begin(&r);
        s.remove(0).unwrap();
        assert!(s.remove(3).is_err());
        assert_eq!(s.cancel(), r);
    }

    #[test]
    fn deserializes_service_json() {
        let json = r#"{
            "findings": [{"toothNumber": "6", "quadrant": "左下区 (D区 - LL)", "description": "左下第一磨牙"}],
            "combinedDescription": "左下第一磨牙",
            "missingHorizontalLine": false,
            "confidence": "高",
            "reasoning": "L-shaped line"
        }"#;
        let r: AnalysisResult = serde_json::from_str(json).unwrap();
        assert_eq!(r.findings[0].quadrant(), Quadrant::LowerLeft);
        assert_eq!(r.active_description(JawPlacement::Upper), "左下第一磨牙");
    }
}
