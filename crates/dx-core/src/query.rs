//! Per-patient query entry points.
//!
//! Each query applies one inference operation to every observation of a
//! patient and keys the results by disease name.

use crate::inference::{self, BestTests, InferenceError, PosteriorBounds};
use crate::model::Patient;
use std::collections::BTreeMap;

/// As-is posterior per disease.
pub fn posteriors(patient: &Patient) -> Result<BTreeMap<String, f64>, InferenceError> {
    patient
        .observations()
        .iter()
        .map(|o| {
            let p = inference::posterior(o.disease(), o.symptoms())?;
            Ok((o.disease().name().to_string(), p))
        })
        .collect()
}

/// Posterior bounds per disease.
///
/// Overwrites the patient's min/max caches for every disease it evaluates.
pub fn bounds(patient: &mut Patient) -> Result<BTreeMap<String, PosteriorBounds>, InferenceError> {
    let mut out = BTreeMap::new();
    for observation in patient.observations() {
        let b = inference::posterior_bounds(observation.disease(), observation.symptoms())?;
        out.insert(observation.disease().name().to_string(), b);
    }
    for (disease, b) in &out {
        patient.record_bounds(disease, b.min, b.max);
    }
    Ok(out)
}

/// Highest- and lowest-posterior single test per disease.
pub fn best_tests(patient: &Patient) -> Result<BTreeMap<String, BestTests>, InferenceError> {
    patient
        .observations()
        .iter()
        .map(|o| {
            let tests = inference::best_tests(o.disease(), o.symptoms())?;
            Ok((o.disease().name().to_string(), tests))
        })
        .collect()
}
