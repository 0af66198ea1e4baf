//! The three-valued symptom domain.
//!
//! Every observation in a symptom vector is one of PRESENT, ABSENT or UNKNOWN.
//! The textual encoding (`T`, `F`, `U`) belongs to the input/output layers;
//! inside the engine only the enum is used.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single symptom observation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Symptom {
    /// The finding was observed.
    Present,
    /// The finding was tested and not observed.
    Absent,
    /// The finding has not been tested.
    Unknown,
}

/// Raised when text outside `{T, F, U}` is offered as a symptom.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid symptom value {value:?}: expected one of T, F, U")]
pub struct SymptomParseError {
    pub value: String,
}

impl Symptom {
    /// The two outcomes an unknown finding can resolve to, in evaluation order.
    pub const OUTCOMES: [Symptom; 2] = [Symptom::Present, Symptom::Absent];

    /// Single-letter code used by the text formats.
    pub fn code(self) -> char {
        match self {
            Symptom::Present => 'T',
            Symptom::Absent => 'F',
            Symptom::Unknown => 'U',
        }
    }

    /// Decode a single-letter code.
    pub fn from_code(code: char) -> Result<Self, SymptomParseError> {
        match code {
            'T' => Ok(Symptom::Present),
            'F' => Ok(Symptom::Absent),
            'U' => Ok(Symptom::Unknown),
            other => Err(SymptomParseError {
                value: other.to_string(),
            }),
        }
    }

    /// True for PRESENT and ABSENT.
    pub fn is_known(self) -> bool {
        !matches!(self, Symptom::Unknown)
    }
}

impl std::str::FromStr for Symptom {
    type Err = SymptomParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(code), None) => Symptom::from_code(code),
            _ => Err(SymptomParseError {
                value: s.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for Symptom {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_round_trip() {
        for symptom in [Symptom::Present, Symptom::Absent, Symptom::Unknown] {
            assert_eq!(Symptom::from_code(symptom.code()).unwrap(), symptom);
            assert_eq!(symptom.to_string().parse::<Symptom>().unwrap(), symptom);
        }
    }

    #[test]
    fn rejects_values_outside_domain() {
        assert!(Symptom::from_code('X').is_err());
        assert!("t".parse::<Symptom>().is_err());
        assert!("TT".parse::<Symptom>().is_err());
        let err = "".parse::<Symptom>().unwrap_err();
        assert_eq!(err.value, "");
    }

    #[test]
    fn only_unknown_is_unresolved() {
        assert!(Symptom::Present.is_known());
        assert!(Symptom::Absent.is_known());
        assert!(!Symptom::Unknown.is_known());
        assert!(Symptom::OUTCOMES.iter().all(|s| s.is_known()));
    }

    #[test]
    fn serializes_lowercase() {
        let json = serde_json::to_string(&Symptom::Unknown).unwrap();
        assert_eq!(json, "\"unknown\"");
    }
}
