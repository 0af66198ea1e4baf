//! Batch driver: runs all three queries for every patient of a dataset and
//! collects the results into a serializable report.

use crate::inference::{BestTests, InferenceError, PosteriorBounds};
use crate::input::Dataset;
use crate::log_event;
use crate::logging::{event_names, LogContext, Stage};
use crate::query;
use chrono::{DateTime, Utc};
use dx_config::LimitSettings;
use serde::Serialize;
use std::path::Path;
use uuid::Uuid;

/// Results for one (patient, disease) pair.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiseaseReport {
    pub name: String,
    pub posterior: f64,
    pub bounds: PosteriorBounds,
    pub best_tests: BestTests,
    /// Number of UNKNOWN entries in the patient's vector for this disease.
    pub unknowns: usize,
}

/// Results for one patient, diseases in input order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PatientReport {
    pub id: String,
    pub diseases: Vec<DiseaseReport>,
}

/// Whole-run report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchReport {
    pub run_id: Uuid,
    pub generated_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input: Option<String>,
    pub disease_count: usize,
    pub patient_count: usize,
    pub patients: Vec<PatientReport>,
}

/// Evaluate every patient of `dataset`.
///
/// Bound caches on each patient are refreshed as a side effect.
pub fn run_batch(
    dataset: &mut Dataset,
    limits: &LimitSettings,
    run_id: Uuid,
    input: Option<&Path>,
) -> Result<BatchReport, InferenceError> {
    let ctx = LogContext::new(run_id.to_string());
    let threshold = usize::try_from(limits.warn_unknowns_above).unwrap_or(usize::MAX);

    let mut patients = Vec::with_capacity(dataset.patients.len());
    for patient in &mut dataset.patients {
        for observation in patient.observations() {
            let unknowns = observation.unknown_count();
            if unknowns > threshold {
                log_event!(
                    ctx,
                    WARN,
                    event_names::INFER_MANY_UNKNOWNS,
                    Stage::Infer,
                    "bounds will enumerate 2^unknowns completions",
                    patient = patient.id(),
                    disease = observation.disease().name(),
                    unknowns = unknowns,
                    threshold = threshold
                );
            }
        }

        let mut posteriors = query::posteriors(patient)?;
        let mut bounds = query::bounds(patient)?;
        let mut tests = query::best_tests(patient)?;

        let diseases: Vec<DiseaseReport> = patient
            .observations()
            .iter()
            .filter_map(|o| {
                let name = o.disease().name();
                Some(DiseaseReport {
                    name: name.to_string(),
                    posterior: posteriors.remove(name)?,
                    bounds: bounds.remove(name)?,
                    best_tests: tests.remove(name)?,
                    unknowns: o.unknown_count(),
                })
            })
            .collect();

        log_event!(
            ctx,
            DEBUG,
            event_names::INFER_PATIENT_DONE,
            Stage::Infer,
            "patient evaluated",
            patient = patient.id(),
            diseases = diseases.len()
        );
        patients.push(PatientReport {
            id: patient.id().to_string(),
            diseases,
        });
    }

    Ok(BatchReport {
        run_id,
        generated_at: Utc::now(),
        input: input.map(|p| p.display().to_string()),
        disease_count: dataset.diseases.len(),
        patient_count: patients.len(),
        patients,
    })
}
