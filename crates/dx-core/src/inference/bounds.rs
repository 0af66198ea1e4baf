//! Range of the posterior over every resolution of the unknown findings.

use super::completions::for_each_completion;
use super::posterior::posterior;
use super::InferenceError;
use crate::model::Disease;
use dx_common::Symptom;
use serde::{Deserialize, Serialize};

/// Smallest and largest posterior across all completions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PosteriorBounds {
    pub min: f64,
    pub max: f64,
}

impl PosteriorBounds {
    /// Bounds of a single value.
    pub fn point(value: f64) -> Self {
        Self {
            min: value,
            max: value,
        }
    }

    /// Widen the bounds to include `value`.
    pub fn include(&mut self, value: f64) {
        self.min = self.min.min(value);
        self.max = self.max.max(value);
    }

    pub fn contains(&self, value: f64) -> bool {
        self.min <= value && value <= self.max
    }

    /// `max - min`.
    pub fn width(&self) -> f64 {
        self.max - self.min
    }
}

/// Min and max posterior of `disease` over all completions of `symptoms`.
///
/// Completions are streamed, so memory stays proportional to the vector
/// length while time grows as `2^unknowns`.
pub fn posterior_bounds(
    disease: &Disease,
    symptoms: &[Symptom],
) -> Result<PosteriorBounds, InferenceError> {
    disease.check_vector(symptoms)?;
    let mut bounds: Option<PosteriorBounds> = None;
    for_each_completion(symptoms, |completion| {
        let p = posterior(disease, completion)?;
        bounds = Some(match bounds {
            Some(mut b) => {
                b.include(p);
                b
            }
            None => PosteriorBounds::point(p),
        });
        Ok::<(), InferenceError>(())
    })?;
    // Every vector has at least one completion, so `bounds` is set here.
    Ok(bounds.unwrap_or_else(|| PosteriorBounds::point(disease.prior())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use Symptom::{Absent, Present, Unknown};

    fn flu() -> Disease {
        Disease::builder("Flu", 0.2)
            .finding("fever", 0.9, 0.1)
            .finding("cough", 0.7, 0.2)
            .build()
            .unwrap()
    }

    #[test]
    fn one_unknown_spans_its_two_completions() {
        let d = flu();
        let bounds = posterior_bounds(&d, &[Unknown, Absent]).unwrap();
        assert_eq!(bounds.min, posterior(&d, &[Absent, Absent]).unwrap());
        assert_eq!(bounds.max, posterior(&d, &[Present, Absent]).unwrap());
        assert_eq!(bounds, PosteriorBounds { min: 0.0103, max: 0.4576 });
    }

    #[test]
    fn fully_specified_is_a_point() {
        let d = flu();
        let bounds = posterior_bounds(&d, &[Present, Absent]).unwrap();
        assert_eq!(bounds, PosteriorBounds::point(0.4576));
        assert_eq!(bounds.width(), 0.0);
    }

    #[test]
    fn all_unknown_contains_as_is_posterior() {
        let d = flu();
        let v = [Unknown, Unknown];
        let bounds = posterior_bounds(&d, &v).unwrap();
        assert!(bounds.contains(posterior(&d, &v).unwrap()));
        // fever & cough present: 0.126 / (0.126 + 0.016)
        assert_eq!(bounds.max, 0.8873);
        assert_eq!(bounds.min, 0.0103);
    }

    #[test]
    fn length_mismatch_fails_before_enumeration() {
        let err = posterior_bounds(&flu(), &[Unknown]).unwrap_err();
        assert!(matches!(err, InferenceError::Model(_)));
    }

    #[test]
    fn degenerate_completion_propagates() {
        let d = Disease::builder("Certain", 1.0)
            .finding("never", 0.0, 0.5)
            .build()
            .unwrap();
        let err = posterior_bounds(&d, &[Unknown]).unwrap_err();
        assert!(matches!(err, InferenceError::DegenerateEvidence { .. }));
    }
}
