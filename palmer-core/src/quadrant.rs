use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::NotationError;

/// Which side of the patient's midline a quadrant sits on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Right,
    Left,
}

/// Upper or lower jaw.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    Upper,
    Lower,
}

/// One of the four Palmer quadrants, or a finding whose quadrant could not be
/// determined.
///
/// The serialized form is the label exchanged with the recognition service;
/// the short Chinese label and the two-letter code are accepted on input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Quadrant {
    #[serde(rename = "右上区 (A区 - UR)", alias = "UR", alias = "右上")]
    UpperRight,
    #[serde(rename = "左上区 (B区 - UL)", alias = "UL", alias = "左上")]
    UpperLeft,
    #[serde(rename = "右下区 (C区 - LR)", alias = "LR", alias = "右下")]
    LowerRight,
    #[serde(rename = "左下区 (D区 - LL)", alias = "LL", alias = "左下")]
    LowerLeft,
    #[serde(rename = "未知", alias = "未知区域")]
    Unknown,
}

impl Quadrant {
    /// Quadrants in the order descriptions list them.
    pub const CANONICAL: [Quadrant; 4] = [
        Quadrant::UpperRight,
        Quadrant::UpperLeft,
        Quadrant::LowerRight,
        Quadrant::LowerLeft,
    ];

    /// Short label used as a prefix in descriptions.
    pub fn label(self) -> &'static str {
        match self {
            Quadrant::UpperRight => "右上",
            Quadrant::UpperLeft => "左上",
            Quadrant::LowerRight => "右下",
            Quadrant::LowerLeft => "左下",
            Quadrant::Unknown => "未知",
        }
    }

    /// Label exchanged with the recognition service.
    pub fn wire_label(self) -> &'static str {
        match self {
            Quadrant::UpperRight => "右上区 (A区 - UR)",
            Quadrant::UpperLeft => "左上区 (B区 - UL)",
            Quadrant::LowerRight => "右下区 (C区 - LR)",
            Quadrant::LowerLeft => "左下区 (D区 - LL)",
            Quadrant::Unknown => "未知",
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Quadrant::UpperRight => "UR",
            Quadrant::UpperLeft => "UL",
            Quadrant::LowerRight => "LR",
            Quadrant::LowerLeft => "LL",
            Quadrant::Unknown => "??",
        }
    }

    pub fn side(self) -> Option<Side> {
        match self {
            Quadrant::UpperRight | Quadrant::LowerRight => Some(Side::Right),
            Quadrant::UpperLeft | Quadrant::LowerLeft => Some(Side::Left),
            Quadrant::Unknown => None,
        }
    }

    pub fn level(self) -> Option<Level> {
        match self {
            Quadrant::UpperRight | Quadrant::UpperLeft => Some(Level::Upper),
            Quadrant::LowerRight | Quadrant::LowerLeft => Some(Level::Lower),
            Quadrant::Unknown => None,
        }
    }

    /// Same side, opposite jaw. `Unknown` maps to itself.
    pub fn opposite_jaw(self) -> Quadrant {
        match self {
            Quadrant::UpperRight => Quadrant::LowerRight,
            Quadrant::UpperLeft => Quadrant::LowerLeft,
            Quadrant::LowerRight => Quadrant::UpperRight,
            Quadrant::LowerLeft => Quadrant::UpperLeft,
            Quadrant::Unknown => Quadrant::Unknown,
        }
    }

    /// Position in [`Quadrant::CANONICAL`]; `Unknown` sorts after all four.
    pub fn canonical_index(self) -> usize {
        Self::CANONICAL
            .iter()
            .position(|q| *q == self)
            .unwrap_or(Self::CANONICAL.len())
    }
}

impl fmt::Display for Quadrant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Quadrant {
    type Err = NotationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        for q in Self::CANONICAL.into_iter().chain([Quadrant::Unknown]) {
            if t.eq_ignore_ascii_case(q.code()) || t == q.label() || t == q.wire_label() {
                return Ok(q);
            }
        }
        Err(NotationError::UnknownQuadrant(t.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sides_and_levels() {
        assert_eq!(Quadrant::UpperRight.side(), Some(Side::Right));
        assert_eq!(Quadrant::LowerLeft.side(), Some(Side::Left));
        assert_eq!(Quadrant::LowerRight.level(), Some(Level::Lower));
        assert_eq!(Quadrant::Unknown.side(), None);
        assert_eq!(Quadrant::Unknown.level(), None);
    }

    #[test]
    fn opposite_jaw_is_an_involution() {
        for q in Quadrant::CANONICAL {
            assert_ne!(q.opposite_jaw(), q);
            assert_eq!(q.opposite_jaw().opposite_jaw(), q);
            assert_eq!(q.opposite_jaw().side(), q.side());
        }
        assert_eq!(Quadrant::Unknown.opposite_jaw(), Quadrant::Unknown);
    }

    #[test]
    fn parses_codes_and_labels() {
        assert_eq!("ul".parse::<Quadrant>().unwrap(), Quadrant::UpperLeft);
        assert_eq!("右下".parse::<Quadrant>().unwrap(), Quadrant::LowerRight);
        assert_eq!(
            "左下区 (D区 - LL)".parse::<Quadrant>().unwrap(),
            Quadrant::LowerLeft
        );
        assert!("north".parse::<Quadrant>().is_err());
    }

    #[test]
    fn serde_uses_wire_labels() {
        let json = serde_json::to_string(&Quadrant::UpperRight).unwrap();
        assert_eq!(json, "\"右上区 (A区 - UR)\"");
        let q: Quadrant = serde_json::from_str("\"LL\"").unwrap();
        assert_eq!(q, Quadrant::LowerLeft);
        assert!(serde_json::from_str::<Quadrant>("\"north\"").is_err());
    }
}
