//! Posterior P(D | evidence) under conditional independence.
//!
//! UNKNOWN entries contribute no factor on either side; they are excluded from
//! the product rather than marginalised. The result is rounded to four decimal
//! digits and that rounded value is what every caller compares.

use super::InferenceError;
use crate::model::Disease;
use dx_common::Symptom;
use dx_math::{round_probability, BinaryEvidence};

/// Rounded posterior of `disease` given `symptoms`.
pub fn posterior(disease: &Disease, symptoms: &[Symptom]) -> Result<f64, InferenceError> {
    disease.check_vector(symptoms)?;
    let evidence = accumulate(disease, symptoms);
    evidence
        .posterior()
        .map(round_probability)
        .ok_or_else(|| InferenceError::DegenerateEvidence {
            disease: disease.name().to_string(),
        })
}

/// Unnormalised weights for `disease` and its complement.
///
/// The vector must already be aligned with the disease.
pub(crate) fn accumulate(disease: &Disease, symptoms: &[Symptom]) -> BinaryEvidence {
    let mut evidence = BinaryEvidence::from_prior(disease.prior());
    let likelihoods = disease
        .present_given_disease()
        .iter()
        .zip(disease.present_given_not_disease());
    for (symptom, (&p_d, &p_not_d)) in symptoms.iter().zip(likelihoods) {
        match symptom {
            Symptom::Present => evidence.observe(p_d, p_not_d, true),
            Symptom::Absent => evidence.observe(p_d, p_not_d, false),
            Symptom::Unknown => {}
        }
    }
    evidence
}
