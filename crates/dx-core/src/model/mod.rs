//! Data entities: diseases, patients and their symptom vectors.

pub mod disease;
pub mod patient;

pub use disease::{Disease, DiseaseBuilder};
pub use patient::{Observation, Patient};

use thiserror::Error;

/// One observation per finding, aligned with [`Disease::findings`].
pub type SymptomVector = Vec<dx_common::Symptom>;

/// Construction contract violations for diseases and patients.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ModelError {
    #[error("disease name must not be empty")]
    EmptyName,

    #[error("{field} for disease {disease:?} must be in [0, 1] (got {value})")]
    ProbabilityRange {
        disease: String,
        field: String,
        value: f64,
    },

    #[error("disease {disease:?} has {findings} findings but {list} has {len} entries")]
    LikelihoodLength {
        disease: String,
        list: &'static str,
        findings: usize,
        len: usize,
    },

    #[error("disease {disease:?} has an empty finding name at position {index}")]
    EmptyFinding { disease: String, index: usize },

    #[error("disease {disease:?} lists finding {finding:?} more than once")]
    DuplicateFinding { disease: String, finding: String },

    #[error("symptom vector for disease {disease:?} has {actual} entries, expected {expected}")]
    VectorLength {
        disease: String,
        expected: usize,
        actual: usize,
    },

    #[error("patient {patient} has more than one symptom vector for disease {disease:?}")]
    DuplicateObservation { patient: String, disease: String },
}

impl From<ModelError> for dx_common::Error {
    fn from(err: ModelError) -> Self {
        dx_common::Error::Model(err.to_string())
    }
}
