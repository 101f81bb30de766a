use serde::{Deserialize, Serialize};

use crate::error::NotationError;
use crate::quadrant::Quadrant;
use crate::sort::sort_quadrant;
use crate::symbol::{Dentition, name_of, rank_of};

/// Full description of one tooth, e.g. `左上第一磨牙`.
pub fn describe_tooth(symbol: &str, quadrant: Quadrant) -> String {
    format!("{}{}", quadrant.label(), name_of(symbol))
}

/// One recognized or manually entered tooth.
///
/// Field names follow the recognition service's JSON. Changing the symbol or
/// quadrant re-resolves the description.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Finding {
    tooth_number: String,
    quadrant: Quadrant,
    #[serde(default)]
    description: String,
}

impl Finding {
    pub fn new(symbol: impl Into<String>, quadrant: Quadrant) -> Self {
        let tooth_number = symbol.into();
        let description = describe_tooth(&tooth_number, quadrant);
        Finding {
            tooth_number,
            quadrant,
            description,
        }
    }

    pub fn symbol(&self) -> &str {
        &self.tooth_number
    }

    pub fn quadrant(&self) -> Quadrant {
        self.quadrant
    }

    /// Description as resolved locally, or as supplied by the recognition
    /// service until the finding is corrected.
    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn rank(&self) -> u8 {
        rank_of(&self.tooth_number)
    }

    /// Tooth display name without the quadrant prefix.
    pub fn tooth_name(&self) -> &str {
        name_of(&self.tooth_number)
    }

    /// Replace the symbol (uppercased) and re-resolve the description.
    pub fn set_symbol(&mut self, symbol: &str) {
        self.tooth_number = symbol.to_uppercase();
        self.description = describe_tooth(&self.tooth_number, self.quadrant);
    }

    pub fn set_quadrant(&mut self, quadrant: Quadrant) {
        self.quadrant = quadrant;
        self.description = describe_tooth(&self.tooth_number, quadrant);
    }

    /// Copy moved to the opposite jaw, description re-resolved.
    pub fn with_opposite_jaw(&self) -> Finding {
        Finding::new(self.tooth_number.clone(), self.quadrant.opposite_jaw())
    }

    /// Parse `<quadrant>:<symbols>` (e.g. `UL:67`) into one finding per symbol.
    pub fn parse_group(group: &str) -> Result<Vec<Finding>, NotationError> {
        let (q, symbols) = group
            .split_once(':')
            .ok_or_else(|| NotationError::MalformedFinding(group.to_string()))?;
        let quadrant: Quadrant = q.parse()?;
        Ok(sanitize_entry(symbols)
            .chars()
            .map(|c| Finding::new(c.to_string(), quadrant))
            .collect())
    }
}

/// Clean manual input: keep ASCII alphanumerics and the Number Forms block
/// (Roman numerals), uppercased.
pub fn sanitize_entry(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_alphanumeric() || ('\u{2160}'..='\u{217F}').contains(c))
        .flat_map(char::to_uppercase)
        .collect()
}

/// Four raw per-quadrant strings, as typed by the user or returned by the
/// free-text parser (`{"UR": "...", "UL": "...", "LR": "...", "LL": "..."}`).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuadrantInput {
    #[serde(rename = "UR", default)]
    pub ur: String,
    #[serde(rename = "UL", default)]
    pub ul: String,
    #[serde(rename = "LR", default)]
    pub lr: String,
    #[serde(rename = "LL", default)]
    pub ll: String,
}

impl QuadrantInput {
    pub fn new(
        ur: impl Into<String>,
        ul: impl Into<String>,
        lr: impl Into<String>,
        ll: impl Into<String>,
    ) -> Self {
        QuadrantInput {
            ur: ur.into(),
            ul: ul.into(),
            lr: lr.into(),
            ll: ll.into(),
        }
    }

    /// The same full-quadrant string in all four quadrants.
    pub fn preset(dentition: Dentition) -> Self {
        let s = dentition.full_quadrant();
        QuadrantInput::new(s, s, s, s)
    }

    pub fn get(&self, quadrant: Quadrant) -> &str {
        match quadrant {
            Quadrant::UpperRight => &self.ur,
            Quadrant::UpperLeft => &self.ul,
            Quadrant::LowerRight => &self.lr,
            Quadrant::LowerLeft => &self.ll,
            Quadrant::Unknown => "",
        }
    }

    /// Store manual entry for a quadrant after sanitising it. Entry for
    /// `Unknown` is dropped.
    pub fn set_entry(&mut self, quadrant: Quadrant, raw: &str) {
        let cleaned = sanitize_entry(raw);
        match quadrant {
            Quadrant::UpperRight => self.ur = cleaned,
            Quadrant::UpperLeft => self.ul = cleaned,
            Quadrant::LowerRight => self.lr = cleaned,
            Quadrant::LowerLeft => self.ll = cleaned,
            Quadrant::Unknown => {}
        }
    }

    pub fn clear(&mut self) {
        *self = QuadrantInput::default();
    }

    pub fn is_empty(&self) -> bool {
        Quadrant::CANONICAL.iter().all(|q| self.get(*q).is_empty())
    }

    /// Every quadrant put in display order.
    pub fn sorted(&self) -> QuadrantInput {
        QuadrantInput {
            ur: sort_quadrant(&self.ur, Quadrant::UpperRight),
            ul: sort_quadrant(&self.ul, Quadrant::UpperLeft),
            lr: sort_quadrant(&self.lr, Quadrant::LowerRight),
            ll: sort_quadrant(&self.ll, Quadrant::LowerLeft),
        }
    }

    /// One finding per character, quadrants in canonical order.
    pub fn findings(&self) -> Vec<Finding> {
        Quadrant::CANONICAL
            .iter()
            .flat_map(|q| self.get(*q).chars().map(|c| Finding::new(c.to_string(), *q)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finding_resolves_description() {
        let f = Finding::new("6", Quadrant::UpperLeft);
        assert_eq!(f.description(), "左上第一磨牙");
        assert_eq!(f.tooth_name(), "第一磨牙");
        assert_eq!(f.rank(), 6);
    }

    #[test]
    fn corrections_re_resolve() {
        let mut f = Finding::new("6", Quadrant::UpperLeft);
        f.set_symbol("c");
        assert_eq!(f.symbol(), "C");
        assert_eq!(f.description(), "左上乳尖牙");
        f.set_quadrant(Quadrant::LowerRight);
        assert_eq!(f.description(), "右下乳尖牙");
        assert_eq!(f.with_opposite_jaw().description(), "右上乳尖牙");
    }

    #[test]
    fn sanitize_keeps_alphabet() {
        assert_eq!(sanitize_entry("6, 5 and 4!"), "65AND4");
        assert_eq!(sanitize_entry("ⅱ-Ⅲ"), "ⅡⅢ");
        assert_eq!(sanitize_entry("右上"), "");
    }

    #[test]
    fn parse_group_splits_symbols() {
        let fs = Finding::parse_group("UL:67").unwrap();
        assert_eq!(fs.len(), 2);
        assert!(fs.iter().all(|f| f.quadrant() == Quadrant::UpperLeft));
        assert!(Finding::parse_group("67").is_err());
        assert!(Finding::parse_group("XX:6").is_err());
    }

    #[test]
    fn quadrant_input_from_parser_json() {
        let input: QuadrantInput =
            serde_json::from_str(r#"{"UR":"456","UL":"","LR":"1"}"#).unwrap();
        assert_eq!(input.ll, "");
        let sorted = input.sorted();
        assert_eq!(sorted.ur, "654");
        assert_eq!(sorted.lr, "1");
        assert_eq!(input.findings().len(), 4);
    }

    #[test]
    fn presets_and_clear() {
        let mut input = QuadrantInput::preset(Dentition::Primary);
        assert_eq!(input.sorted().ur, "EDCBA");
        assert_eq!(input.sorted().ll, "ABCDE");
        input.set_entry(Quadrant::UpperRight, "a b");
        assert_eq!(input.ur, "AB");
        input.clear();
        assert!(input.is_empty());
    }
}
