//! Inference engine modules.

pub mod bounds;
pub mod completions;
pub mod posterior;

pub use best_test::{best_tests, compare_finding_names, BestTests, TestCandidate};
pub use bounds::{posterior_bounds, PosteriorBounds};
pub use completions::{completion_count, enumerate_completions, for_each_completion, unknown_positions};
pub use posterior::posterior;

use crate::model::ModelError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum InferenceError {
    #[error(transparent)]
    Model(#[from] ModelError),

    #[error("evidence for disease {disease:?} has zero probability under both hypotheses")]
    DegenerateEvidence { disease: String },
}

impl From<InferenceError> for dx_common::Error {
    fn from(err: InferenceError) -> Self {
        match err {
            InferenceError::Model(inner) => inner.into(),
            other => dx_common::Error::Inference(other.to_string()),
        }
    }
}
