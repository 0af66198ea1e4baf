//! Classic batch report: a `Patient-<n>:` header and three dict-literal lines.
//!
//! ```text
//! Patient-1:
//! {'Flu': '0.4576'}
//! {'Flu': ['0.0103', '0.4576']}
//! {'Flu': ['fever', 'T', 'none', 'N']}
//! ```

use crate::inference::TestCandidate;
use crate::runner::{BatchReport, DiseaseReport};
use dx_math::format_probability;
use std::io::{self, Write};

/// Finding name reported when no single test exists.
const NO_TEST: &str = "none";
/// Outcome code reported when no single test exists.
const NO_OUTCOME: &str = "N";

pub fn write_legacy<W: Write>(report: &BatchReport, out: &mut W) -> io::Result<()> {
    for (number, patient) in report.patients.iter().enumerate() {
        writeln!(out, "Patient-{}:", number + 1)?;
        writeln!(out, "{}", dict(&patient.diseases, posterior_value))?;
        writeln!(out, "{}", dict(&patient.diseases, bounds_value))?;
        writeln!(out, "{}", dict(&patient.diseases, tests_value))?;
    }
    Ok(())
}

fn dict(diseases: &[DiseaseReport], value: fn(&DiseaseReport) -> String) -> String {
    let entries: Vec<String> = diseases
        .iter()
        .map(|d| format!("{}: {}", quote(&d.name), value(d)))
        .collect();
    format!("{{{}}}", entries.join(", "))
}

fn list(items: &[&str]) -> String {
    let quoted: Vec<String> = items.iter().map(|s| quote(s)).collect();
    format!("[{}]", quoted.join(", "))
}

fn posterior_value(d: &DiseaseReport) -> String {
    quote(&format_probability(d.posterior))
}

fn bounds_value(d: &DiseaseReport) -> String {
    list(&[
        &format_probability(d.bounds.min),
        &format_probability(d.bounds.max),
    ])
}

fn tests_value(d: &DiseaseReport) -> String {
    let (max_name, max_outcome) = test_fields(d.best_tests.max.as_ref());
    let (min_name, min_outcome) = test_fields(d.best_tests.min.as_ref());
    list(&[&max_name, &max_outcome, &min_name, &min_outcome])
}

fn test_fields(candidate: Option<&TestCandidate>) -> (String, String) {
    match candidate {
        Some(c) => (c.finding.clone(), c.outcome.to_string()),
        None => (NO_TEST.to_string(), NO_OUTCOME.to_string()),
    }
}

/// Quote a string the way a Python `repr` does: single quotes unless the text
/// contains a single quote and no double quote.
fn quote(s: &str) -> String {
    let delimiter = if s.contains('\'') && !s.contains('"') {
        '"'
    } else {
        '\''
    };
    let mut out = String::with_capacity(s.len() + 2);
    out.push(delimiter);
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\r' => out.push_str("\\r"),
            c if c == delimiter => {
                out.push('\\');
                out.push(c);
            }
            c => out.push(c),
        }
    }
    out.push(delimiter);
    out
}
