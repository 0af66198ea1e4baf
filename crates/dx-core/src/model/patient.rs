//! One patient's evidence and cached bound results.

use super::{Disease, ModelError, SymptomVector};
use dx_common::Symptom;
use std::collections::HashMap;
use std::sync::Arc;

/// A symptom vector paired with the disease it is evaluated against.
#[derive(Debug, Clone)]
pub struct Observation {
    disease: Arc<Disease>,
    symptoms: SymptomVector,
}

impl Observation {
    pub fn disease(&self) -> &Disease {
        &self.disease
    }

    pub fn symptoms(&self) -> &[Symptom] {
        &self.symptoms
    }

    /// Number of UNKNOWN entries.
    pub fn unknown_count(&self) -> usize {
        self.symptoms.iter().filter(|s| !s.is_known()).count()
    }
}

/// A patient with one symptom vector per disease.
///
/// Diseases are shared (`Arc`) across patients; observations keep the order in
/// which they were added. The min/max posterior caches are overwritten every
/// time bounds are computed for a disease.
#[derive(Debug, Clone)]
pub struct Patient {
    id: String,
    observations: Vec<Observation>,
    max_posterior: HashMap<String, f64>,
    min_posterior: HashMap<String, f64>,
}

impl Patient {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            observations: Vec::new(),
            max_posterior: HashMap::new(),
            min_posterior: HashMap::new(),
        }
    }

    /// Build a patient from `(disease, vector)` pairs, checking every vector.
    pub fn with_observations<I>(id: impl Into<String>, observations: I) -> Result<Self, ModelError>
    where
        I: IntoIterator<Item = (Arc<Disease>, SymptomVector)>,
    {
        let mut patient = Self::new(id);
        for (disease, symptoms) in observations {
            patient.observe(disease, symptoms)?;
        }
        Ok(patient)
    }

    /// Attach the symptom vector for one disease.
    pub fn observe(&mut self, disease: Arc<Disease>, symptoms: SymptomVector) -> Result<(), ModelError> {
        disease.check_vector(&symptoms)?;
        if self.observation(disease.name()).is_some() {
            return Err(ModelError::DuplicateObservation {
                patient: self.id.clone(),
                disease: disease.name().to_string(),
            });
        }
        self.observations.push(Observation { disease, symptoms });
        Ok(())
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Observations in insertion order.
    pub fn observations(&self) -> &[Observation] {
        &self.observations
    }

    pub fn observation(&self, disease: &str) -> Option<&Observation> {
        self.observations.iter().find(|o| o.disease.name() == disease)
    }

    /// Largest posterior seen the last time bounds ran for `disease`.
    pub fn max_posterior(&self, disease: &str) -> Option<f64> {
        self.max_posterior.get(disease).copied()
    }

    /// Smallest posterior seen the last time bounds ran for `disease`.
    pub fn min_posterior(&self, disease: &str) -> Option<f64> {
        self.min_posterior.get(disease).copied()
    }

    pub(crate) fn record_bounds(&mut self, disease: &str, min: f64, max: f64) {
        self.min_posterior.insert(disease.to_string(), min);
        self.max_posterior.insert(disease.to_string(), max);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flu() -> Arc<Disease> {
        Arc::new(
            Disease::builder("Flu", 0.2)
                .finding("fever", 0.9, 0.1)
                .finding("cough", 0.7, 0.2)
                .build()
                .unwrap(),
        )
    }

    #[test]
    fn observations_keep_order_and_share_diseases() {
        let flu = flu();
        let cold = Arc::new(
            Disease::builder("Cold", 0.3)
                .finding("sneeze", 0.8, 0.1)
                .build()
                .unwrap(),
        );
        let patient = Patient::with_observations(
            "1",
            vec![
                (Arc::clone(&cold), vec![Symptom::Unknown]),
                (Arc::clone(&flu), vec![Symptom::Present, Symptom::Unknown]),
            ],
        )
        .unwrap();

        let names: Vec<&str> = patient
            .observations()
            .iter()
            .map(|o| o.disease().name())
            .collect();
        assert_eq!(names, ["Cold", "Flu"]);
        assert_eq!(patient.observation("Flu").unwrap().unknown_count(), 1);
        assert_eq!(Arc::strong_count(&flu), 2);
    }

    #[test]
    fn rejects_misaligned_vector() {
        let mut patient = Patient::new("1");
        let err = patient.observe(flu(), vec![Symptom::Present]).unwrap_err();
        assert!(matches!(
            err,
            ModelError::VectorLength {
                expected: 2,
                actual: 1,
                ..
            }
        ));
        assert!(patient.observations().is_empty());
    }

    #[test]
    fn rejects_second_vector_for_same_disease() {
        let flu = flu();
        let mut patient = Patient::new("7");
        patient
            .observe(Arc::clone(&flu), vec![Symptom::Present, Symptom::Absent])
            .unwrap();
        let err = patient
            .observe(flu, vec![Symptom::Absent, Symptom::Absent])
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "patient 7 has more than one symptom vector for disease \"Flu\""
        );
    }

    #[test]
    fn bound_caches_are_overwritten() {
        let mut patient = Patient::new("1");
        assert_eq!(patient.max_posterior("Flu"), None);
        patient.record_bounds("Flu", 0.1, 0.9);
        patient.record_bounds("Flu", 0.2, 0.8);
        assert_eq!(patient.min_posterior("Flu"), Some(0.2));
        assert_eq!(patient.max_posterior("Flu"), Some(0.8));
    }
}
