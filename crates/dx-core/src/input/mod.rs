//! Parser for the line-oriented disease/patient record format.
//!
//! ```text
//! 2 1
//! Flu 2 0.2
//! ['fever', 'cough']
//! [0.9, 0.7]
//! [0.1, 0.2]
//! Cold 1 0.3
//! ['sneeze']
//! [0.8]
//! [0.1]
//! ['T', 'F']
//! ['U']
//! ```
//!
//! The first line holds the disease and patient counts. Each disease block is
//! a `name [finding_count] prior` header followed by the findings list and the
//! two likelihood lists. Each patient then contributes one symptom list per
//! disease, in disease order. Blank lines are ignored; line numbers in errors
//! are 1-based positions in the input text.

pub mod literal;

use crate::model::{Disease, ModelError, Patient};
use dx_common::{Symptom, SymptomParseError};
use literal::{into_numbers, into_strings, parse_list, Item, LiteralError};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;

/// Every disease and patient of one input file.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub diseases: Vec<Arc<Disease>>,
    pub patients: Vec<Patient>,
}

impl Dataset {
    /// Total number of UNKNOWN entries across all patients.
    pub fn unknown_count(&self) -> usize {
        self.patients
            .iter()
            .flat_map(|p| p.observations())
            .map(|o| o.unknown_count())
            .sum()
    }
}

#[derive(Debug, Error)]
pub enum InputError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("line {line}: {message}")]
    Syntax { line: usize, message: String },

    #[error("line {line}: {source}")]
    Symptom {
        line: usize,
        #[source]
        source: SymptomParseError,
    },

    #[error("line {line}: {source}")]
    Model {
        line: usize,
        #[source]
        source: ModelError,
    },
}

impl InputError {
    fn syntax(line: usize, message: impl Into<String>) -> Self {
        InputError::Syntax {
            line,
            message: message.into(),
        }
    }

    fn literal(line: usize, what: &str, err: LiteralError) -> Self {
        InputError::syntax(line, format!("{what}: {err}"))
    }

    /// 1-based line the error points at, if any.
    pub fn line(&self) -> Option<usize> {
        match self {
            InputError::Io { .. } => None,
            InputError::Syntax { line, .. }
            | InputError::Symptom { line, .. }
            | InputError::Model { line, .. } => Some(*line),
        }
    }
}

impl From<InputError> for dx_common::Error {
    fn from(err: InputError) -> Self {
        match err {
            InputError::Io { path, source } => dx_common::Error::Io(std::io::Error::new(
                source.kind(),
                format!("{}: {}", path.display(), source),
            )),
            InputError::Syntax { line, message } => dx_common::Error::Input { line, message },
            InputError::Symptom { line, source } => dx_common::Error::DomainValue { line, source },
            InputError::Model { line, source } => {
                dx_common::Error::Model(format!("line {line}: {source}"))
            }
        }
    }
}

/// Read and parse an input file.
pub fn parse_file(path: &Path) -> Result<Dataset, InputError> {
    let content = fs::read_to_string(path).map_err(|source| InputError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_str(&content)
}

/// Parse input text.
pub fn parse_str(content: &str) -> Result<Dataset, InputError> {
    let mut records = Records::new(content);

    let (line, header) = records.next_record("the disease and patient counts")?;
    let counts: Vec<&str> = header.split_whitespace().collect();
    let [diseases, patients] = counts.as_slice() else {
        return Err(InputError::syntax(
            line,
            format!("expected '<diseases> <patients>', found {header:?}"),
        ));
    };
    let disease_count = parse_count(line, diseases, "disease count")?;
    let patient_count = parse_count(line, patients, "patient count")?;

    let mut diseases = Vec::with_capacity(disease_count);
    let mut names = HashSet::new();
    for _ in 0..disease_count {
        let (line, disease) = parse_disease(&mut records)?;
        if !names.insert(disease.name().to_string()) {
            return Err(InputError::syntax(
                line,
                format!("disease {:?} is defined more than once", disease.name()),
            ));
        }
        diseases.push(Arc::new(disease));
    }

    let mut patients = Vec::with_capacity(patient_count);
    for number in 1..=patient_count {
        let mut patient = Patient::new(number.to_string());
        for disease in &diseases {
            let what = format!("patient {number} symptoms for {}", disease.name());
            let (line, text) = records.next_record(&what)?;
            let symptoms = parse_symptoms(line, text, &what)?;
            patient
                .observe(Arc::clone(disease), symptoms)
                .map_err(|source| InputError::Model { line, source })?;
        }
        patients.push(patient);
    }

    if let Some((line, _)) = records.peek_record() {
        return Err(InputError::syntax(
            line,
            format!("unexpected content after {patient_count} patient record(s)"),
        ));
    }

    Ok(Dataset { diseases, patients })
}

fn parse_disease(records: &mut Records<'_>) -> Result<(usize, Disease), InputError> {
    let (header_line, header) = records.next_record("a disease header")?;
    let fields: Vec<&str> = header.split_whitespace().collect();
    let (name, declared, prior) = match fields.as_slice() {
        [name, prior] => (*name, None, *prior),
        [name, count, prior] => (*name, Some(parse_count(header_line, count, "finding count")?), *prior),
        _ => {
            return Err(InputError::syntax(
                header_line,
                format!("expected '<name> <finding_count> <prior>', found {header:?}"),
            ))
        }
    };
    let prior: f64 = prior.parse().map_err(|_| {
        InputError::syntax(header_line, format!("invalid prior {prior:?} for disease {name:?}"))
    })?;

    let what = format!("findings of {name}");
    let (line, text) = records.next_record(&what)?;
    let findings = parse_list(text)
        .and_then(into_strings)
        .map_err(|e| InputError::literal(line, &what, e))?;
    if let Some(declared) = declared {
        if declared != findings.len() {
            return Err(InputError::syntax(
                line,
                format!(
                    "disease {name:?} declares {declared} findings but lists {}",
                    findings.len()
                ),
            ));
        }
    }

    let present_given_disease = read_numbers(records, &format!("P(finding | {name})"))?;
    let present_given_not_disease = read_numbers(records, &format!("P(finding | not {name})"))?;

    let disease = Disease::new(
        name,
        prior,
        findings,
        present_given_disease,
        present_given_not_disease,
    )
    .map_err(|source| InputError::Model {
        line: header_line,
        source,
    })?;
    Ok((header_line, disease))
}

fn read_numbers(records: &mut Records<'_>, what: &str) -> Result<Vec<f64>, InputError> {
    let (line, text) = records.next_record(what)?;
    parse_list(text)
        .and_then(into_numbers)
        .map_err(|e| InputError::literal(line, what, e))
}

fn parse_symptoms(line: usize, text: &str, what: &str) -> Result<Vec<Symptom>, InputError> {
    let items = parse_list(text).map_err(|e| InputError::literal(line, what, e))?;
    items
        .into_iter()
        .map(|item| match item {
            Item::Text(code) => code
                .parse::<Symptom>()
                .map_err(|source| InputError::Symptom { line, source }),
            Item::Number(n) => Err(InputError::Symptom {
                line,
                source: SymptomParseError {
                    value: n.to_string(),
                },
            }),
        })
        .collect()
}

fn parse_count(line: usize, token: &str, what: &str) -> Result<usize, InputError> {
    token
        .parse()
        .map_err(|_| InputError::syntax(line, format!("invalid {what} {token:?}")))
}

/// Non-blank lines with their 1-based line numbers.
struct Records<'a> {
    lines: std::iter::Peekable<std::iter::Enumerate<std::str::Lines<'a>>>,
    last_line: usize,
}

impl<'a> Records<'a> {
    fn new(content: &'a str) -> Self {
        Self {
            lines: content.lines().enumerate().peekable(),
            last_line: 0,
        }
    }

    fn skip_blank(&mut self) {
        while let Some((index, text)) = self.lines.peek() {
            if !text.trim().is_empty() {
                break;
            }
            self.last_line = index + 1;
            self.lines.next();
        }
    }

    fn peek_record(&mut self) -> Option<(usize, &'a str)> {
        self.skip_blank();
        self.lines.peek().map(|&(index, text)| (index + 1, text.trim()))
    }

    fn next_record(&mut self, what: &str) -> Result<(usize, &'a str), InputError> {
        self.skip_blank();
        match self.lines.next() {
            Some((index, text)) => {
                self.last_line = index + 1;
                Ok((index + 1, text.trim()))
            }
            None => Err(InputError::syntax(
                self.last_line + 1,
                format!("unexpected end of input: expected {what}"),
            )),
        }
    }
}
