//! Static probabilistic profile of one disease.

use super::ModelError;
use dx_common::Symptom;
use dx_math::is_probability;
use serde::Serialize;

/// A disease with its prior and per-finding likelihoods.
///
/// `findings[i]`, `present_given_disease[i]` and `present_given_not_disease[i]`
/// describe the same finding; every symptom vector evaluated against this
/// disease is aligned to that index.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Disease {
    name: String,
    prior: f64,
    findings: Vec<String>,
    present_given_disease: Vec<f64>,
    present_given_not_disease: Vec<f64>,
}

impl Disease {
    /// Construct and validate a disease.
    ///
    /// Fails when a probability is outside `[0, 1]`, the likelihood lists do
    /// not match the findings list, or two findings share a name
    /// (case-insensitively).
    pub fn new(
        name: impl Into<String>,
        prior: f64,
        findings: Vec<String>,
        present_given_disease: Vec<f64>,
        present_given_not_disease: Vec<f64>,
    ) -> Result<Self, ModelError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ModelError::EmptyName);
        }
        if !is_probability(prior) {
            return Err(ModelError::ProbabilityRange {
                disease: name,
                field: "prior".to_string(),
                value: prior,
            });
        }

        for (list, values) in [
            ("present_given_disease", &present_given_disease),
            ("present_given_not_disease", &present_given_not_disease),
        ] {
            if values.len() != findings.len() {
                return Err(ModelError::LikelihoodLength {
                    disease: name,
                    list,
                    findings: findings.len(),
                    len: values.len(),
                });
            }
            if let Some((i, &value)) = values.iter().enumerate().find(|(_, v)| !is_probability(**v)) {
                return Err(ModelError::ProbabilityRange {
                    disease: name,
                    field: format!("{}[{}] ({})", list, i, findings[i]),
                    value,
                });
            }
        }

        for (i, finding) in findings.iter().enumerate() {
            if finding.trim().is_empty() {
                return Err(ModelError::EmptyFinding { disease: name, index: i });
            }
            let lowered = finding.to_lowercase();
            if findings[..i].iter().any(|f| f.to_lowercase() == lowered) {
                return Err(ModelError::DuplicateFinding {
                    disease: name,
                    finding: finding.clone(),
                });
            }
        }

        Ok(Self {
            name,
            prior,
            findings,
            present_given_disease,
            present_given_not_disease,
        })
    }

    /// Start building a disease finding by finding.
    pub fn builder(name: impl Into<String>, prior: f64) -> DiseaseBuilder {
        DiseaseBuilder {
            name: name.into(),
            prior,
            findings: Vec::new(),
            present_given_disease: Vec::new(),
            present_given_not_disease: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// P(D).
    pub fn prior(&self) -> f64 {
        self.prior
    }

    pub fn findings(&self) -> &[String] {
        &self.findings
    }

    /// Number of findings (F).
    pub fn finding_count(&self) -> usize {
        self.findings.len()
    }

    /// Display name of finding `index`.
    pub fn finding(&self, index: usize) -> Option<&str> {
        self.findings.get(index).map(String::as_str)
    }

    /// P(finding i present | D).
    pub fn present_given_disease(&self) -> &[f64] {
        &self.present_given_disease
    }

    /// P(finding i present | not D).
    pub fn present_given_not_disease(&self) -> &[f64] {
        &self.present_given_not_disease
    }

    /// Check that a symptom vector is aligned with this disease.
    pub fn check_vector(&self, symptoms: &[Symptom]) -> Result<(), ModelError> {
        if symptoms.len() != self.findings.len() {
            return Err(ModelError::VectorLength {
                disease: self.name.clone(),
                expected: self.findings.len(),
                actual: symptoms.len(),
            });
        }
        Ok(())
    }
}

/// Incremental [`Disease`] construction; validation happens in [`build`](Self::build).
#[derive(Debug, Clone)]
pub struct DiseaseBuilder {
    name: String,
    prior: f64,
    findings: Vec<String>,
    present_given_disease: Vec<f64>,
    present_given_not_disease: Vec<f64>,
}

impl DiseaseBuilder {
    /// Append a finding with its two likelihoods.
    pub fn finding(
        mut self,
        name: impl Into<String>,
        present_given_disease: f64,
        present_given_not_disease: f64,
    ) -> Self {
        self.findings.push(name.into());
        self.present_given_disease.push(present_given_disease);
        self.present_given_not_disease.push(present_given_not_disease);
        self
    }

    pub fn build(self) -> Result<Disease, ModelError> {
        Disease::new(
            self.name,
            self.prior,
            self.findings,
            self.present_given_disease,
            self.present_given_not_disease,
        )
    }
}
